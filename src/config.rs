//! Menu Layout Configuration
//!
//! The menu screen's placement and styling constants. Everything has a
//! built-in default, so the JSON file only needs the fields it overrides:
//!
//! ```json
//! { "title_y": 120, "button_color": [200, 80, 60] }
//! ```

use crate::error::ConfigError;
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the optional layout override file
pub const LAYOUT_CONFIG_PATH: &str = "assets/config/menu_layout.json";

/// Layout and styling for the menu screen
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuLayout {
    /// Image stretched over the whole surface
    pub background_path: PathBuf,

    pub title_text: String,
    pub button_text: String,

    /// Vertical center of the title, in pixels from the top
    pub title_y: i32,

    pub button_width: u32,
    pub button_height: u32,

    /// How far below the surface center the button sits
    pub button_offset_y: i32,

    /// Bitmap font scale for the title (1 = 5x7 pixel glyphs)
    pub title_scale: u32,

    /// Bitmap font scale for the button label
    pub button_scale: u32,

    pub button_color: [u8; 3],
    pub text_color: [u8; 3],
}

impl Default for MenuLayout {
    fn default() -> Self {
        MenuLayout {
            background_path: PathBuf::from("assets/logo.png"),
            title_text: "MOVEmentum".to_string(),
            button_text: "PLAY".to_string(),
            title_y: 150,
            button_width: 200,
            button_height: 80,
            button_offset_y: 200,
            title_scale: 7,
            button_scale: 5,
            button_color: [70, 130, 180], // Steel blue
            text_color: [255, 255, 255],
        }
    }
}

impl MenuLayout {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let layout: MenuLayout = serde_json::from_str(json)?;
        Ok(layout)
    }

    /// Loads the layout file if it exists, otherwise falls back to defaults
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("No layout file at {}, using default menu layout", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = MenuLayout::default();
        assert_eq!(layout.background_path, PathBuf::from("assets/logo.png"));
        assert_eq!(layout.title_text, "MOVEmentum");
        assert_eq!(layout.button_text, "PLAY");
        assert_eq!((layout.button_width, layout.button_height), (200, 80));
        assert_eq!(layout.button_offset_y, 200);
        assert_eq!(layout.button_color, [70, 130, 180]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let layout = MenuLayout::from_json(r#"{ "title_y": 120, "button_text": "GO" }"#).unwrap();
        assert_eq!(layout.title_y, 120);
        assert_eq!(layout.button_text, "GO");
        assert_eq!(layout.title_text, "MOVEmentum");
        assert_eq!(layout.button_offset_y, 200);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let result = MenuLayout::from_json(r#"{ "title_y": "high" }"#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_uses_default() {
        let layout = MenuLayout::load_or_default("does/not/exist/menu_layout.json").unwrap();
        assert_eq!(layout, MenuLayout::default());
    }
}
