//! Shared domain model for the image generation studio: the settings record,
//! the static option catalogs and the prompt rules used by the frontend.

pub mod catalog;
pub mod error;
pub mod model;
pub mod negative;
pub mod prompt;

pub use error::SettingsError;
