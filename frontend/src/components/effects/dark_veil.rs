//! Full-screen animated background.
//!
//! Layers, back to front: a drifting colour field tinted by `hue_shift`, a
//! grain layer whose opacity is `noise_intensity`, and horizontal scanlines.
//! `speed` scales every animation; zero freezes the background.

use yew::{html, Component, Context, Html, Properties};

/// Seconds one drift cycle takes at `speed == 1.0`.
const BASE_CYCLE_SECS: f64 = 20.0;

#[derive(Properties, PartialEq)]
pub struct DarkVeilProps {
    /// Degrees.
    #[prop_or(0.0)]
    pub hue_shift: f64,
    #[prop_or(0.0)]
    pub noise_intensity: f64,
    #[prop_or(0.0)]
    pub scanline_intensity: f64,
    #[prop_or(0.5)]
    pub speed: f64,
    /// Scanlines per 4px.
    #[prop_or(0.0)]
    pub scanline_frequency: f64,
    #[prop_or(0.0)]
    pub warp_amount: f64,
}

pub struct DarkVeil;

impl Component for DarkVeil {
    type Message = ();
    type Properties = DarkVeilProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DarkVeil
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="dark-veil" style={format!("filter: hue-rotate({}deg);", props.hue_shift)}>
                <div class="dark-veil-field" style={field_style(props.speed, props.warp_amount)} />
                <div class="dark-veil-noise" style={format!("opacity: {};", unit(props.noise_intensity))} />
                <div class="dark-veil-scanlines"
                     style={scanline_style(props.scanline_intensity, props.scanline_frequency)} />
            </div>
        }
    }
}

fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

pub fn cycle_secs(speed: f64) -> Option<f64> {
    if speed > 0.0 {
        Some(BASE_CYCLE_SECS / speed)
    } else {
        None
    }
}

/// The drift animation scales the field by up to `1 + warp_amount`.
pub fn field_style(speed: f64, warp_amount: f64) -> String {
    let warp = format!("--veil-warp: {};", 1.0 + unit(warp_amount));
    match cycle_secs(speed) {
        Some(secs) => format!("{} animation-duration: {}s;", warp, secs),
        None => format!("{} animation: none;", warp),
    }
}

/// Scanline spacing in px; frequencies at or below zero hide the lines.
pub fn scanline_period_px(frequency: f64) -> Option<u32> {
    if frequency > 0.0 {
        Some((4.0 / frequency).round().max(2.0) as u32)
    } else {
        None
    }
}

pub fn scanline_style(intensity: f64, frequency: f64) -> String {
    match scanline_period_px(frequency) {
        Some(period) => format!(
            "opacity: {}; background-size: 100% {}px;",
            unit(intensity),
            period
        ),
        None => "display: none;".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_speed_freezes_the_field() {
        assert_eq!(cycle_secs(0.0), None);
        assert_eq!(field_style(0.0, 0.15), "--veil-warp: 1.15; animation: none;");
    }

    #[test]
    fn speed_scales_the_cycle() {
        assert_eq!(cycle_secs(0.5), Some(40.0));
        assert_eq!(field_style(2.0, 0.0), "--veil-warp: 1; animation-duration: 10s;");
    }

    #[test]
    fn scanline_spacing_follows_frequency() {
        assert_eq!(scanline_period_px(0.8), Some(5));
        assert_eq!(scanline_period_px(4.0), Some(2));
        assert_eq!(scanline_period_px(0.0), None);
        assert_eq!(scanline_style(0.08, 0.8), "opacity: 0.08; background-size: 100% 5px;");
        assert_eq!(scanline_style(0.5, 0.0), "display: none;");
    }
}
