use thiserror::Error;

/// Reasons a [`GenerationSettings`](crate::model::settings::GenerationSettings)
/// record cannot be submitted as a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("prompt is {len} characters long, the maximum is {max}")]
    PromptTooLong { len: usize, max: usize },

    #[error("unknown style: {0}")]
    UnknownStyle(String),

    #[error("unknown aspect ratio: {0}")]
    UnknownAspectRatio(String),

    #[error("unknown resolution: {0}")]
    UnknownResolution(String),
}
