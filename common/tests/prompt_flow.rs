use common::model::settings::GenerationSettings;
use common::prompt::{self, PromptField, EXAMPLE_PROMPTS, MAX_PROMPT_CHARS};

/// Mirrors the parent/child wiring: the child commits into its field and the
/// parent replaces its settings record with the committed value.
fn type_into(settings: &GenerationSettings, field: &mut PromptField, text: &str) -> GenerationSettings {
    if field.handle_change(text) {
        settings.with_prompt(field.value())
    } else {
        settings.clone()
    }
}

#[test]
fn typing_then_pasting_an_oversized_prompt() {
    let mut field = PromptField::default();
    let mut settings = GenerationSettings::default();
    assert!(!prompt::show_warning(&settings.prompt));
    assert!(!prompt::is_valid(&settings.prompt));

    settings = type_into(&settings, &mut field, "cat");
    assert_eq!(settings.prompt, "cat");
    assert!(prompt::show_warning(&settings.prompt));
    assert!(!prompt::is_valid(&settings.prompt));

    settings = type_into(&settings, &mut field, "a cat sitting on a mat");
    assert_eq!(prompt::char_len(&settings.prompt), 22);
    assert!(!prompt::show_warning(&settings.prompt));
    assert!(prompt::is_valid(&settings.prompt));

    let paste = "z".repeat(2500);
    settings = type_into(&settings, &mut field, &paste);
    assert_eq!(settings.prompt, "a cat sitting on a mat");
    assert_eq!(field.char_count(), 22);
    assert!(settings.validate().is_ok());
}

#[test]
fn every_accepted_value_is_observed_verbatim() {
    let mut field = PromptField::default();
    for len in [0, 1, 9, 10, 11, 1400, 1999, MAX_PROMPT_CHARS] {
        let candidate = "ab ".repeat(len / 3) + &"c".repeat(len % 3);
        assert!(field.handle_change(&candidate));
        assert_eq!(field.value(), candidate);
        assert_eq!(field.is_valid(), candidate.trim().len() >= 10);
    }
}

#[test]
fn examples_fit_and_are_valid() {
    let mut field = PromptField::default();
    for (index, example) in EXAMPLE_PROMPTS.iter().enumerate() {
        assert!(field.pick_example(index));
        assert_eq!(field.value(), *example);
        assert!(field.is_valid());
        assert!(!field.show_warning());
    }
}
