use common::catalog::{Resolution, RESOLUTIONS};
use yew::prelude::*;

use crate::helpers::format_pixels;
use crate::layout::Panel;

#[derive(Properties, PartialEq)]
pub struct ResolutionSelectorProps {
    pub value: AttrValue,
    /// Selected aspect ratio id, used to orient the pixel sizes shown.
    pub aspect_ratio: AttrValue,
    pub on_change: Callback<String>,
}

pub struct ResolutionSelector;

impl Component for ResolutionSelector {
    type Message = ();
    type Properties = ResolutionSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResolutionSelector
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <Panel>
                <h3 class="heading-md">{"Resolution"}</h3>
                <div class="option-grid">
                    {
                        for RESOLUTIONS.iter().map(|resolution| {
                            let id = resolution.id;
                            let on_change = props.on_change.clone();
                            html! {
                                <button
                                    key={id}
                                    type="button"
                                    class={classes!("resolution-option", (props.value.as_str() == id).then_some("selected"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_change.emit(id.to_string()))}
                                >
                                    <span class="option-name">{ resolution.name }</span>
                                    <span class="option-description">{ size_label(resolution, props.aspect_ratio.as_str()) }</span>
                                </button>
                            }
                        })
                    }
                </div>
            </Panel>
        }
    }
}

/// `"1,080 × 1,920"` for Full HD in portrait.
pub fn size_label(resolution: &Resolution, aspect_ratio: &str) -> String {
    let (width, height) = resolution.dimensions(aspect_ratio);
    format!("{} × {}", format_pixels(width), format_pixels(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog::find_resolution;

    #[test]
    fn label_follows_orientation() {
        let full_hd = find_resolution("fullhd").unwrap();
        assert_eq!(size_label(full_hd, "portrait"), "1,080 × 1,920");
        assert_eq!(size_label(full_hd, "landscape"), "1,920 × 1,080");
    }
}
