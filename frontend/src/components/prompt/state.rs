//! Component state for the prompt input.
//!
//! `field` mirrors the parent's value and caches its character count; it is
//! resynchronised whenever the parent passes a different value.

use common::prompt::PromptField;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

pub struct PromptInputComponent {
    /// Last committed prompt and its character count.
    pub field: PromptField,

    /// Drives the focused border style.
    pub is_focused: bool,

    /// Reference to the `<textarea>` DOM node.
    pub textarea_ref: NodeRef,
}

impl PromptInputComponent {
    pub fn new(value: &str) -> Self {
        Self {
            field: PromptField::new(value),
            is_focused: false,
            textarea_ref: Default::default(),
        }
    }

    pub fn sync_value(&mut self, value: &str) {
        if self.field.value() != value {
            self.field = PromptField::new(value);
        }
    }

    /// Puts the committed value back into the textarea after a rejected edit.
    ///
    /// The DOM node already holds the oversized text at this point and the
    /// virtual DOM value has not changed, so a re-render alone would leave it
    /// there.
    pub fn restore_textarea(&self) {
        if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
            textarea.set_value(self.field.value());
        }
    }
}
