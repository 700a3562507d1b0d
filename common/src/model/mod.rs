pub mod gallery;
pub mod settings;
