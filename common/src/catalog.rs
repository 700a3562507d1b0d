//! Static option catalogs for the generation form.
//!
//! Each catalog is an ordered, immutable slice; the UI renders entries in
//! catalog order and stores only the selected `id` in the settings record.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    /// Shown under the current selection.
    pub tip: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub id: &'static str,
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatio {
    pub id: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_STYLE: &str = "realistic";
pub const DEFAULT_ASPECT_RATIO: &str = "portrait";
pub const DEFAULT_RESOLUTION: &str = "fullhd";

/// Number of styles listed before the "show all" toggle is used.
pub const COLLAPSED_STYLE_COUNT: usize = 4;

pub static IMAGE_STYLES: [ImageStyle; 8] = [
    ImageStyle {
        id: "realistic",
        name: "Realistic",
        description: "Photorealistic imagery with detailed textures",
        emoji: "📸",
        tip: "✨ Default - Perfect for photorealistic results",
    },
    ImageStyle {
        id: "cartoon",
        name: "Cartoon",
        description: "Vibrant, animated style with bold colors",
        emoji: "🎨",
        tip: "🎨 Great for fun and vibrant images",
    },
    ImageStyle {
        id: "anime",
        name: "Anime",
        description: "Japanese animation aesthetic",
        emoji: "🎌",
        tip: "🎌 Popular for character illustrations",
    },
    ImageStyle {
        id: "oil-painting",
        name: "Oil Painting",
        description: "Classic painted look with brush strokes",
        emoji: "🖼️",
        tip: "🖼️ Classic artistic style",
    },
    ImageStyle {
        id: "watercolor",
        name: "Watercolor",
        description: "Soft, artistic watercolor effect",
        emoji: "💧",
        tip: "💧 Soft and dreamy aesthetic",
    },
    ImageStyle {
        id: "sketch",
        name: "Sketch",
        description: "Hand-drawn pencil sketch style",
        emoji: "✏️",
        tip: "✏️ Hand-drawn pencil look",
    },
    ImageStyle {
        id: "3d-render",
        name: "3D Render",
        description: "Modern 3D CGI style",
        emoji: "🎮",
        tip: "🎮 Modern CGI appearance",
    },
    ImageStyle {
        id: "cyberpunk",
        name: "Cyberpunk",
        description: "Futuristic neon aesthetic",
        emoji: "🌃",
        tip: "🌃 Futuristic neon vibes",
    },
];

pub static RESOLUTIONS: [Resolution; 4] = [
    Resolution {
        id: "hd",
        name: "HD",
        width: 1280,
        height: 720,
    },
    Resolution {
        id: "fullhd",
        name: "Full HD",
        width: 1920,
        height: 1080,
    },
    Resolution {
        id: "4k",
        name: "4K",
        width: 3840,
        height: 2160,
    },
    Resolution {
        id: "8k",
        name: "8K",
        width: 7680,
        height: 4320,
    },
];

pub static ASPECT_RATIOS: [AspectRatio; 2] = [
    AspectRatio {
        id: "portrait",
        name: "Portrait",
    },
    AspectRatio {
        id: "landscape",
        name: "Landscape",
    },
];

pub fn find_style(id: &str) -> Option<&'static ImageStyle> {
    IMAGE_STYLES.iter().find(|s| s.id == id)
}

pub fn find_resolution(id: &str) -> Option<&'static Resolution> {
    RESOLUTIONS.iter().find(|r| r.id == id)
}

pub fn find_aspect_ratio(id: &str) -> Option<&'static AspectRatio> {
    ASPECT_RATIOS.iter().find(|a| a.id == id)
}

/// Emoji for a style id, with a generic palette for unknown ids.
pub fn style_emoji(id: &str) -> &'static str {
    find_style(id).map_or("🎨", |s| s.emoji)
}

/// Styles to list, either the collapsed head of the catalog or all of it.
pub fn visible_styles(show_all: bool) -> &'static [ImageStyle] {
    if show_all {
        &IMAGE_STYLES
    } else {
        &IMAGE_STYLES[..COLLAPSED_STYLE_COUNT]
    }
}

impl Resolution {
    /// Output size in pixels for the given aspect ratio id. Catalog sizes are
    /// landscape; anything other than `landscape` flips them.
    pub fn dimensions(&self, aspect_ratio: &str) -> (u32, u32) {
        if aspect_ratio == "landscape" {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let styles: HashSet<_> = IMAGE_STYLES.iter().map(|s| s.id).collect();
        let resolutions: HashSet<_> = RESOLUTIONS.iter().map(|r| r.id).collect();
        let ratios: HashSet<_> = ASPECT_RATIOS.iter().map(|a| a.id).collect();
        assert_eq!(styles.len(), 8);
        assert_eq!(resolutions.len(), 4);
        assert_eq!(ratios.len(), 2);
    }

    #[test]
    fn defaults_exist_in_catalogs() {
        assert!(find_style(DEFAULT_STYLE).is_some());
        assert!(find_aspect_ratio(DEFAULT_ASPECT_RATIO).is_some());
        assert!(find_resolution(DEFAULT_RESOLUTION).is_some());
    }

    #[test]
    fn lookups_by_id() {
        assert_eq!(find_style("3d-render").map(|s| s.name), Some("3D Render"));
        assert_eq!(find_resolution("4k").map(|r| r.width), Some(3840));
        assert!(find_style("vaporwave").is_none());
        assert_eq!(style_emoji("cyberpunk"), "🌃");
        assert_eq!(style_emoji("vaporwave"), "🎨");
    }

    #[test]
    fn collapsed_list_keeps_catalog_order() {
        let ids: Vec<_> = visible_styles(false).iter().map(|s| s.id).collect();
        assert_eq!(ids, ["realistic", "cartoon", "anime", "oil-painting"]);
        assert_eq!(visible_styles(true).len(), IMAGE_STYLES.len());
    }

    #[test]
    fn portrait_flips_dimensions() {
        let full_hd = find_resolution("fullhd").unwrap();
        assert_eq!(full_hd.dimensions("landscape"), (1920, 1080));
        assert_eq!(full_hd.dimensions("portrait"), (1080, 1920));
    }
}
