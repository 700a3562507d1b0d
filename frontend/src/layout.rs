use yew::{classes, html, Children, Classes, Component, Context, Html, Properties};

/// Accent colour of the glow a panel shows on hover.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum PanelGlow {
    #[default]
    None,
    Green,
    Blue,
}

impl PanelGlow {
    fn class(self) -> Option<&'static str> {
        match self {
            PanelGlow::None => None,
            PanelGlow::Green => Some("glow-green"),
            PanelGlow::Blue => Some("glow-blue"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    #[prop_or_default]
    pub glow: PanelGlow,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Frosted card that every form section is rendered in.
pub struct Panel;

impl Component for Panel {
    type Message = ();
    type Properties = PanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Panel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class={classes!("panel", props.glow.class(), props.class.clone())}>
                { for props.children.iter() }
            </div>
        }
    }
}
