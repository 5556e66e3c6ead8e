use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an element. Unique across a document, including group children.
pub type ElementId = String;

pub const DEFAULT_TEXT_COLOR: &str = "#333333";
pub const DEFAULT_TITLE_COLOR: &str = "#222222";
pub const DEFAULT_DIVIDER_COLOR: &str = "#cccccc";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200.png";
pub const PLACEHOLDER_BOOK_COVER: &str = "https://via.placeholder.com/120x160.png";

pub const SAMPLE_MARKDOWN: &str = "# Title\n\nThis paragraph has **bold** and *italic* text.\n\n- List item 1\n- List item 2\n- List item 3\n\n> A quoted line";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Parse a `#rrggbb` color into an egui color, falling back to black.
///
/// Field values are never validated, so a malformed color simply renders black.
pub(crate) fn parse_color(hex: &str) -> egui::Color32 {
    egui::Color32::from_hex(hex).unwrap_or(egui::Color32::BLACK)
}
