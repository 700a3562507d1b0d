//! Prompt bounding and validity rules.
//!
//! Lengths are measured in UTF-16 code units, the unit the browser uses for
//! `HTMLTextAreaElement.value.length`, so the limit enforced here agrees with
//! what the user sees in the textarea.
//!
//! Everything in this module is a pure function of the prompt text except
//! [`PromptField`], which models the controlled-input contract: the owner
//! keeps the canonical value and a change is either committed whole or
//! rejected whole.

/// Upper bound for a committed prompt.
pub const MAX_PROMPT_CHARS: usize = 2000;

/// Trimmed length at which a prompt is considered descriptive enough.
pub const MIN_PROMPT_CHARS: usize = 10;

pub const DEFAULT_PLACEHOLDER: &str = "Describe your image in detail... (e.g., 'A serene mountain landscape at sunset with pine trees')";

/// Shortcuts offered while the prompt is empty.
pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "A majestic dragon flying over a medieval castle at sunset, detailed scales, dramatic lighting",
    "Cyberpunk city street at night, neon signs, rain-soaked pavement, flying cars",
    "Peaceful zen garden with cherry blossoms, koi pond, traditional Japanese architecture",
];

/// Length of `text` as the browser reports it.
pub fn char_len(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn trimmed_len(text: &str) -> usize {
    char_len(text.trim())
}

/// Whether `candidate` may be committed as the new prompt value.
pub fn within_limit(candidate: &str) -> bool {
    char_len(candidate) <= MAX_PROMPT_CHARS
}

pub fn is_valid(value: &str) -> bool {
    trimmed_len(value) >= MIN_PROMPT_CHARS
}

/// True while the user has typed something, but not enough yet.
pub fn show_warning(value: &str) -> bool {
    let len = trimmed_len(value);
    len > 0 && len < MIN_PROMPT_CHARS
}

/// Blank prompts get the tip text and the example shortcuts.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Severity bucket for the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterBand {
    Normal,
    Caution,
    Danger,
}

impl CounterBand {
    pub fn css_class(self) -> &'static str {
        match self {
            CounterBand::Normal => "counter-normal",
            CounterBand::Caution => "counter-caution",
            CounterBand::Danger => "counter-danger",
        }
    }
}

/// Caution above 70% of the maximum, danger above 90%.
pub fn counter_band(count: usize) -> CounterBand {
    // Integer form of `count > max * 0.9` / `count > max * 0.7`.
    if count * 10 > MAX_PROMPT_CHARS * 9 {
        CounterBand::Danger
    } else if count * 10 > MAX_PROMPT_CHARS * 7 {
        CounterBand::Caution
    } else {
        CounterBand::Normal
    }
}

pub fn counter_label(count: usize) -> String {
    format!("{}/{}", count, MAX_PROMPT_CHARS)
}

/// A bounded prompt value together with its character-count cache.
///
/// `char_count` always equals `char_len(&value)`: both only change through
/// [`PromptField::handle_change`] and [`PromptField::pick_example`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptField {
    value: String,
    char_count: usize,
}

impl PromptField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let char_count = char_len(&value);
        Self { value, char_count }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Commits `candidate` if it fits within [`MAX_PROMPT_CHARS`].
    ///
    /// Returns `false` and leaves the field untouched otherwise; the input is
    /// never truncated.
    pub fn handle_change(&mut self, candidate: &str) -> bool {
        let len = char_len(candidate);
        if len > MAX_PROMPT_CHARS {
            return false;
        }
        self.value.clear();
        self.value.push_str(candidate);
        self.char_count = len;
        true
    }

    /// Replaces the value with example `index` (zero based). Out-of-range
    /// indices are ignored.
    pub fn pick_example(&mut self, index: usize) -> bool {
        match EXAMPLE_PROMPTS.get(index) {
            Some(example) => self.handle_change(example),
            None => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.value)
    }

    pub fn show_warning(&self) -> bool {
        show_warning(&self.value)
    }

    pub fn counter_band(&self) -> CounterBand {
        counter_band(self.char_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_value_at_the_limit() {
        let mut field = PromptField::default();
        let candidate = "x".repeat(MAX_PROMPT_CHARS);
        assert!(field.handle_change(&candidate));
        assert_eq!(field.value(), candidate);
        assert_eq!(field.char_count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn rejects_value_over_the_limit_without_truncating() {
        let mut field = PromptField::new("keep me");
        assert!(!field.handle_change(&"x".repeat(MAX_PROMPT_CHARS + 1)));
        assert_eq!(field.value(), "keep me");
        assert_eq!(field.char_count(), 7);
    }

    #[test]
    fn length_counts_utf16_units() {
        // U+1F3A8 is a surrogate pair in UTF-16.
        assert_eq!(char_len("🎨"), 2);
        assert_eq!(char_len("é"), 1);

        let mut field = PromptField::default();
        let pairs = "🎨".repeat(MAX_PROMPT_CHARS / 2);
        assert!(field.handle_change(&pairs));
        assert!(!field.handle_change(&format!("{pairs}a")));
        assert_eq!(field.char_count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn validity_uses_trimmed_length() {
        assert!(!is_valid(""));
        assert!(!is_valid("   short   "));
        assert!(!is_valid("         x          "));
        assert!(is_valid("0123456789"));
        assert!(is_valid("  0123456789  "));
    }

    #[test]
    fn warning_only_for_short_non_blank_prompts() {
        assert!(!show_warning(""));
        assert!(!show_warning("    \n\t"));
        assert!(show_warning("cat"));
        assert!(show_warning(" 123456789 "));
        assert!(!show_warning("0123456789"));
    }

    #[test]
    fn warning_and_validity_are_exclusive() {
        for len in 0..=20 {
            let value = "a".repeat(len);
            assert!(!(is_valid(&value) && show_warning(&value)), "len {len}");
        }
    }

    #[test]
    fn counter_bands_switch_above_seventy_and_ninety_percent() {
        assert_eq!(counter_band(0), CounterBand::Normal);
        assert_eq!(counter_band(1400), CounterBand::Normal);
        assert_eq!(counter_band(1401), CounterBand::Caution);
        assert_eq!(counter_band(1800), CounterBand::Caution);
        assert_eq!(counter_band(1801), CounterBand::Danger);
        assert_eq!(counter_band(MAX_PROMPT_CHARS), CounterBand::Danger);
    }

    #[test]
    fn counter_label_shows_count_and_max() {
        assert_eq!(counter_label(22), "22/2000");
    }

    #[test]
    fn pick_example_replaces_value() {
        let mut field = PromptField::new("something else entirely");
        for (index, example) in EXAMPLE_PROMPTS.iter().enumerate() {
            assert!(field.pick_example(index));
            assert_eq!(field.value(), *example);
        }
        assert!(!field.pick_example(EXAMPLE_PROMPTS.len()));
        assert_eq!(field.value(), EXAMPLE_PROMPTS[2]);
    }
}
