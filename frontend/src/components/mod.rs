pub mod effects;
pub mod gallery;
pub mod negative_prompt;
pub mod prompt;
pub mod selectors;
