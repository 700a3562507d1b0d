use common::prompt;

/// Border style of the textarea. Focus wins over the warning, which wins over
/// the filled state.
pub fn textarea_state_class(is_focused: bool, value: &str) -> &'static str {
    if is_focused {
        "prompt-focused"
    } else if prompt::show_warning(value) {
        "prompt-warning"
    } else if !prompt::is_blank(value) {
        "prompt-filled"
    } else {
        "prompt-empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_overrides_everything() {
        assert_eq!(textarea_state_class(true, ""), "prompt-focused");
        assert_eq!(textarea_state_class(true, "cat"), "prompt-focused");
    }

    #[test]
    fn blurred_states_follow_the_value() {
        assert_eq!(textarea_state_class(false, "  "), "prompt-empty");
        assert_eq!(textarea_state_class(false, "cat"), "prompt-warning");
        assert_eq!(textarea_state_class(false, "a cat sitting on a mat"), "prompt-filled");
    }
}
