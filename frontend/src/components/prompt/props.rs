//! Properties for the `PromptInputComponent`.

use common::prompt::DEFAULT_PLACEHOLDER;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PromptInputProps {
    /// Current prompt, owned by the parent.
    pub value: String,

    /// Called with every accepted edit and with a picked example prompt.
    pub on_change: Callback<String>,

    #[prop_or(AttrValue::Static(DEFAULT_PLACEHOLDER))]
    pub placeholder: AttrValue,

    /// Shows the "* Required" badge and sets the textarea `required` attribute.
    #[prop_or(true)]
    pub required: bool,
}
