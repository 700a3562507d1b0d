//! Prompt input: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic and view rendering.
//!
//! The parent owns the prompt text and passes it down as `value`; this
//! component only keeps display caches (character count, focus) and reports
//! accepted edits through `on_change`. Edits longer than
//! [`MAX_PROMPT_CHARS`](common::prompt::MAX_PROMPT_CHARS) are dropped.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PromptInputProps;
pub use state::PromptInputComponent;

impl Component for PromptInputComponent {
    type Message = Msg;
    type Properties = PromptInputProps;

    fn create(ctx: &Context<Self>) -> Self {
        PromptInputComponent::new(&ctx.props().value)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().value != old_props.value {
            self.sync_value(&ctx.props().value);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
