//! View rendering for the prompt input.
//!
//! Everything derived from the prompt (validity, warning, tip, examples) is
//! computed from the parent's `value` on each render. Only the counter reads
//! the cached character count.

use common::prompt::{self, counter_band, counter_label, EXAMPLE_PROMPTS, MIN_PROMPT_CHARS};
use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::textarea_state_class;
use super::messages::Msg;
use super::state::PromptInputComponent;
use crate::components::effects::gradient_text::GradientText;
use crate::layout::{Panel, PanelGlow};

const HEADING_GRADIENT: &[&str] = &["#40ffaa", "#4079ff", "#40ffaa"];

pub fn view(component: &PromptInputComponent, ctx: &Context<PromptInputComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let value = props.value.as_str();

    html! {
        <Panel glow={PanelGlow::Green}>
            <div class="panel-header">
                <GradientText colors={HEADING_GRADIENT} animation_speed={3.0} class={classes!("heading-lg")}>
                    {"Your Prompt"}
                </GradientText>
                if props.required {
                    <span class="required-badge">{"* Required"}</span>
                }
            </div>

            { build_editor(component, link, props.placeholder.clone(), props.required, value) }
            { build_messages(value) }
            { build_examples(link, value) }
        </Panel>
    }
}

/// Textarea plus the counter overlay in its bottom-right corner.
fn build_editor(
    component: &PromptInputComponent,
    link: &Scope<PromptInputComponent>,
    placeholder: AttrValue,
    required: bool,
    value: &str,
) -> Html {
    let count = component.field.char_count();

    html! {
        <div class="prompt-editor">
            <textarea
                ref={component.textarea_ref.clone()}
                class={classes!("prompt-textarea", textarea_state_class(component.is_focused, value))}
                value={value.to_string()}
                placeholder={placeholder}
                required={required}
                oninput={link.callback(|e: InputEvent| {
                    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Input(textarea.value())
                })}
                onfocus={link.callback(|_: FocusEvent| Msg::Focus)}
                onblur={link.callback(|_: FocusEvent| Msg::Blur)}
            />
            <div class="prompt-counter">
                if prompt::is_valid(value) {
                    <span class="ok-mark">{"✓"}</span>
                }
                <span class={counter_band(count).css_class()}>{ counter_label(count) }</span>
            </div>
        </div>
    }
}

fn build_messages(value: &str) -> Html {
    html! {
        <div class="prompt-messages">
            if prompt::show_warning(value) {
                <p class="message-warning">
                    <span>{"⚠️"}</span>
                    <span>{ format!("Please enter at least {} characters for better results", MIN_PROMPT_CHARS) }</span>
                </p>
            }
            if prompt::is_valid(value) {
                <p class="message-ok">
                    <span>{"✓"}</span>
                    <span>{"Great! Your prompt is ready"}</span>
                </p>
            }
            if prompt::is_blank(value) {
                <p class="message-muted">
                    {"💡 Tip: Be specific and descriptive for best results. Include details about style, mood, lighting, and composition."}
                </p>
            }
        </div>
    }
}

/// Example shortcuts, only offered while the prompt is blank.
fn build_examples(link: &Scope<PromptInputComponent>, value: &str) -> Html {
    if !prompt::is_blank(value) {
        return html! {};
    }

    html! {
        <div class="prompt-examples">
            <p class="message-muted examples-title">{"Example prompts:"}</p>
            {
                for EXAMPLE_PROMPTS.iter().enumerate().map(|(index, example)| html! {
                    <button
                        key={index}
                        type="button"
                        class="example-button"
                        onclick={link.callback(move |_| Msg::PickExample(index))}
                    >
                        { format!("\"{}\"", example) }
                    </button>
                })
            }
        </div>
    }
}
