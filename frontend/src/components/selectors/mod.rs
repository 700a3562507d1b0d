//! Option pickers over the static catalogs. Each receives the selected id
//! and reports a new selection through `on_change`.

pub mod aspect_ratio;
pub mod resolution;
pub mod style;

use yew::{AttrValue, Callback, Properties};

#[derive(Properties, PartialEq)]
pub struct SelectorProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}
