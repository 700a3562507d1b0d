#[derive(Clone)]
pub enum Msg {
    /// Raw textarea content after an input event.
    Input(String),
    Focus,
    Blur,
    /// Zero-based index into `EXAMPLE_PROMPTS`.
    PickExample(usize),
}
