use common::catalog::{find_style, visible_styles, ImageStyle, IMAGE_STYLES};
use yew::html::Scope;
use yew::prelude::*;

use super::SelectorProps;
use crate::layout::{Panel, PanelGlow};

pub enum Msg {
    Select(&'static str),
    ToggleShowAll,
}

/// Style list collapsed to the first few entries until expanded.
pub struct StyleSelector {
    show_all: bool,
}

impl Component for StyleSelector {
    type Message = Msg;
    type Properties = SelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { show_all: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(id) => {
                ctx.props().on_change.emit(id.to_string());
                false
            }
            Msg::ToggleShowAll => {
                self.show_all = !self.show_all;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected = ctx.props().value.as_str();

        html! {
            <Panel glow={PanelGlow::Blue}>
                <div class="panel-header">
                    <h3 class="heading-md">{"Image Style"}</h3>
                    <span class="count-pill">{ format!("{} Styles", IMAGE_STYLES.len()) }</span>
                </div>

                <div class="style-list">
                    { for visible_styles(self.show_all).iter().map(|style| style_button(link, style, selected)) }
                </div>

                <button type="button" class="toggle-button" onclick={link.callback(|_| Msg::ToggleShowAll)}>
                    { toggle_label(self.show_all) }
                </button>

                { current_selection(selected) }
            </Panel>
        }
    }
}

fn style_button(link: &Scope<StyleSelector>, style: &'static ImageStyle, selected: &str) -> Html {
    let is_selected = style.id == selected;
    let id = style.id;

    html! {
        <button
            key={id}
            type="button"
            class={classes!("style-option", is_selected.then_some("selected"))}
            onclick={link.callback(move |_| Msg::Select(id))}
        >
            <span class="option-emoji">{ style.emoji }</span>
            <span class="option-text">
                <span class="option-name">{ style.name }</span>
                <span class="option-description">{ style.description }</span>
            </span>
            if is_selected {
                <span class="option-check">{"✓"}</span>
            }
        </button>
    }
}

fn current_selection(selected: &str) -> Html {
    match find_style(selected) {
        Some(style) => html! {
            <div class="current-selection">
                <div class="current-selection-head">
                    <span class="option-emoji">{ style.emoji }</span>
                    <div>
                        <div class="message-muted">{"Current Style:"}</div>
                        <div class="current-style-name">{ style.name }</div>
                    </div>
                </div>
                <p class="message-muted">{ style.tip }</p>
            </div>
        },
        None => html! {},
    }
}

pub fn toggle_label(show_all: bool) -> String {
    if show_all {
        "▲ Show Less".to_string()
    } else {
        format!("▼ Show All {} Styles", IMAGE_STYLES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_reflects_state() {
        assert_eq!(toggle_label(false), "▼ Show All 8 Styles");
        assert_eq!(toggle_label(true), "▲ Show Less");
    }
}
