//! Update function for the prompt input, Elm style: mutate state for `msg`
//! and return whether the view should re-render.

use common::prompt::{char_len, MAX_PROMPT_CHARS};
use gloo_console::debug;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PromptInputComponent;

pub fn update(
    component: &mut PromptInputComponent,
    ctx: &Context<PromptInputComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Input(candidate) => {
            if component.field.handle_change(&candidate) {
                ctx.props().on_change.emit(candidate);
            } else {
                debug!(format!(
                    "prompt edit dropped: {} characters exceeds {}",
                    char_len(&candidate),
                    MAX_PROMPT_CHARS
                ));
                component.restore_textarea();
            }
            true
        }
        Msg::Focus => {
            component.is_focused = true;
            true
        }
        Msg::Blur => {
            component.is_focused = false;
            true
        }
        Msg::PickExample(index) => {
            if component.field.pick_example(index) {
                ctx.props()
                    .on_change
                    .emit(component.field.value().to_string());
                true
            } else {
                false
            }
        }
    }
}
