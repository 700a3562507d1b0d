use serde::{Deserialize, Serialize};

use crate::catalog::{
    find_aspect_ratio, find_resolution, find_style, DEFAULT_ASPECT_RATIO, DEFAULT_RESOLUTION,
    DEFAULT_STYLE,
};
use crate::error::SettingsError;
use crate::prompt::{char_len, MAX_PROMPT_CHARS};

/// Every user-chosen generation parameter, owned by the top-level view.
///
/// The record is treated as a value: the `with_*` methods return an updated
/// copy so the owner can replace it wholesale on each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub prompt: String,
    pub negative_prompt: String,
    pub style: String,
    pub aspect_ratio: String,
    pub resolution: String,
    /// Source image for image-to-image requests.
    #[serde(default)]
    pub image: Option<Vec<u8>>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            negative_prompt: String::new(),
            style: DEFAULT_STYLE.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            resolution: DEFAULT_RESOLUTION.to_string(),
            image: None,
        }
    }
}

impl GenerationSettings {
    pub fn with_prompt(&self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self.clone()
        }
    }

    pub fn with_negative_prompt(&self, negative_prompt: impl Into<String>) -> Self {
        Self {
            negative_prompt: negative_prompt.into(),
            ..self.clone()
        }
    }

    pub fn with_style(&self, style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            ..self.clone()
        }
    }

    pub fn with_aspect_ratio(&self, aspect_ratio: impl Into<String>) -> Self {
        Self {
            aspect_ratio: aspect_ratio.into(),
            ..self.clone()
        }
    }

    pub fn with_resolution(&self, resolution: impl Into<String>) -> Self {
        Self {
            resolution: resolution.into(),
            ..self.clone()
        }
    }

    /// The generate action is offered as soon as the prompt has any
    /// non-whitespace content.
    pub fn can_generate(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    /// Checks the record against the prompt bound and the option catalogs.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.can_generate() {
            return Err(SettingsError::EmptyPrompt);
        }
        let len = char_len(&self.prompt);
        if len > MAX_PROMPT_CHARS {
            return Err(SettingsError::PromptTooLong {
                len,
                max: MAX_PROMPT_CHARS,
            });
        }
        if find_style(&self.style).is_none() {
            return Err(SettingsError::UnknownStyle(self.style.clone()));
        }
        if find_aspect_ratio(&self.aspect_ratio).is_none() {
            return Err(SettingsError::UnknownAspectRatio(self.aspect_ratio.clone()));
        }
        if find_resolution(&self.resolution).is_none() {
            return Err(SettingsError::UnknownResolution(self.resolution.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_catalog_defaults() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.prompt, "");
        assert_eq!(settings.negative_prompt, "");
        assert_eq!(settings.style, "realistic");
        assert_eq!(settings.aspect_ratio, "portrait");
        assert_eq!(settings.resolution, "fullhd");
        assert!(settings.image.is_none());
    }

    #[test]
    fn with_methods_replace_one_field() {
        let base = GenerationSettings::default();
        let next = base.with_style("anime").with_resolution("8k");
        assert_eq!(next.style, "anime");
        assert_eq!(next.resolution, "8k");
        assert_eq!(next.aspect_ratio, base.aspect_ratio);
        assert_eq!(base.style, "realistic");
    }

    #[test]
    fn generate_needs_non_blank_prompt() {
        let settings = GenerationSettings::default();
        assert!(!settings.can_generate());
        assert!(!settings.with_prompt("  \n ").can_generate());
        assert!(settings.with_prompt("cat").can_generate());
    }

    #[test]
    fn validate_reports_first_problem() {
        let base = GenerationSettings::default();
        assert_eq!(base.validate(), Err(SettingsError::EmptyPrompt));

        let long = base.with_prompt("x".repeat(MAX_PROMPT_CHARS + 5));
        assert_eq!(
            long.validate(),
            Err(SettingsError::PromptTooLong {
                len: MAX_PROMPT_CHARS + 5,
                max: MAX_PROMPT_CHARS
            })
        );

        let ok = base.with_prompt("a cat sitting on a mat");
        assert_eq!(ok.validate(), Ok(()));
        assert_eq!(
            ok.with_style("vaporwave").validate(),
            Err(SettingsError::UnknownStyle("vaporwave".into()))
        );
        assert_eq!(
            ok.with_aspect_ratio("square").validate(),
            Err(SettingsError::UnknownAspectRatio("square".into()))
        );
        assert_eq!(
            ok.with_resolution("16k").validate(),
            Err(SettingsError::UnknownResolution("16k".into()))
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(GenerationSettings::default()).unwrap();
        assert_eq!(json["negativePrompt"], "");
        assert_eq!(json["aspectRatio"], "portrait");
        assert!(json["image"].is_null());
    }
}
