//! Decorative components. They take cosmetic parameters only and carry no
//! state the form depends on.

pub mod click_spark;
pub mod dark_veil;
pub mod gradient_text;
