use serde::{Deserialize, Serialize};

use crate::model::settings::GenerationSettings;

/// A finished generation as shown in the gallery.
///
/// Nothing produces these yet; the gallery renders its empty state until a
/// generation backend exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub settings: GenerationSettings,
}
