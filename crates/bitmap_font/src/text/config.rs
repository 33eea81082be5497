//! Text renderer configuration

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Horizontal alignment inside the layout box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Flush against the left margin
    #[default]
    Left,
    /// Flush against the right margin
    Right,
    /// Centered between the margins
    Center,
}

/// Vertical alignment inside the layout box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    /// First line at the top of the box
    #[default]
    Top,
    /// Last line at the bottom of the box
    Bottom,
    /// Centered vertically
    Middle,
}

/// Construction parameters for a text renderer
///
/// Spacing and margins are in ems and are scaled by `size`. A `width` or
/// `height` of 0 leaves that dimension unconstrained, which also disables
/// wrapping (width) or vertical alignment (height).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Font asset name, passed to the data loader
    pub font: String,
    /// Target font size
    pub size: f32,
    /// Layout box width (0 = unconstrained)
    pub width: f32,
    /// Layout box height (0 = unconstrained)
    pub height: f32,
    /// Horizontal alignment
    pub align: Align,
    /// Vertical alignment
    pub vertical_align: VerticalAlign,
    /// Width of a space as a fraction of the em advance
    pub space_advance: f32,
    /// Distance between baselines, in ems
    pub line_spacing: f32,
    /// Extra advance after every glyph, in ems
    pub letter_spacing: f32,
    /// Width of a tab, in spaces
    pub tab_spacing: f32,
    /// Left margin, in ems
    pub left_margin: f32,
    /// Right margin, in ems
    pub right_margin: f32,
}

impl TextConfig {
    /// Default configuration for a font asset
    pub fn new(font: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            ..Self::default()
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: String::new(),
            size: 0.0,
            width: 0.0,
            height: 0.0,
            align: Align::Left,
            vertical_align: VerticalAlign::Top,
            space_advance: 0.25,
            line_spacing: 1.0,
            letter_spacing: 0.0,
            tab_spacing: 4.0,
            left_margin: 0.0,
            right_margin: 0.0,
        }
    }
}

impl Config for TextConfig {}
