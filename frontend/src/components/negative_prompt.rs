use common::negative::{append_term, has_term, COMMON_NEGATIVE_TERMS};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::layout::Panel;

#[derive(Properties, PartialEq)]
pub struct NegativePromptProps {
    pub value: String,
    pub on_change: Callback<String>,
}

pub enum Msg {
    Input(String),
    AddTerm(&'static str),
}

/// Free-text list of things to keep out of the image, with one-click chips
/// for the usual suspects.
pub struct NegativePromptInput;

impl Component for NegativePromptInput {
    type Message = Msg;
    type Properties = NegativePromptProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NegativePromptInput
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Input(value) => props.on_change.emit(value),
            Msg::AddTerm(term) => {
                let next = append_term(&props.value, term);
                if next != props.value {
                    props.on_change.emit(next);
                }
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <Panel>
                <div class="panel-header">
                    <h3 class="heading-md">
                        {"Negative Prompt "}
                        <span class="muted-note">{"(Optional)"}</span>
                    </h3>
                </div>
                <textarea
                    class="negative-textarea"
                    value={props.value.clone()}
                    placeholder="Things to avoid... (e.g., 'blurry, low quality, distorted')"
                    oninput={link.callback(|e: InputEvent| {
                        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::Input(textarea.value())
                    })}
                />
                <div class="term-chips">
                    {
                        for COMMON_NEGATIVE_TERMS.iter().map(|&term| {
                            let present = has_term(&props.value, term);
                            html! {
                                <button
                                    key={term}
                                    type="button"
                                    class={classes!("term-chip", present.then_some("term-chip-active"))}
                                    disabled={present}
                                    onclick={link.callback(move |_| Msg::AddTerm(term))}
                                >
                                    { format!("+ {}", term) }
                                </button>
                            }
                        })
                    }
                </div>
            </Panel>
        }
    }
}
