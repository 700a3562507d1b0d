use yew::{classes, html, Classes, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    #[prop_or(&["#40ffaa", "#4079ff", "#40ffaa"])]
    pub colors: &'static [&'static str],
    /// Seconds per sweep of the gradient.
    #[prop_or(8.0)]
    pub animation_speed: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Text filled with a slowly sweeping multi-stop gradient.
pub struct GradientText;

impl Component for GradientText {
    type Message = ();
    type Properties = GradientTextProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GradientText
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class={classes!("gradient-text", props.class.clone())}
                 style={gradient_style(props.colors, props.animation_speed)}>
                { props.children.clone() }
            </div>
        }
    }
}

pub fn gradient_style(colors: &[&str], animation_speed: f64) -> String {
    format!(
        "background-image: linear-gradient(to right, {}); animation-duration: {}s;",
        colors.join(", "),
        animation_speed.max(0.1)
    )
}
