//! Typography system for Cobalt Shell
//!
//! Font scales and the text variants used by [`crate::components::ThemedText`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Font Scales
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Extra small (12px)
    pub const XS: f32 = 12.0;
    /// Small (14px)
    pub const SM: f32 = 14.0;
    /// Medium (16px)
    pub const MD: f32 = 16.0;
    /// Large (18px)
    pub const LG: f32 = 18.0;
    /// Extra large (20px)
    pub const XL: f32 = 20.0;
    /// 2x large (24px)
    pub const XXL: f32 = 24.0;
    /// 3x large (30px)
    pub const XXXL: f32 = 30.0;
    /// Display (36px)
    pub const DISPLAY: f32 = 36.0;
}

/// Font weight scale
pub mod font_weight {
    /// Regular weight
    pub const REGULAR: u16 = 400;
    /// Medium weight
    pub const MEDIUM: u16 = 500;
    /// Semibold weight
    pub const SEMIBOLD: u16 = 600;
    /// Bold weight
    pub const BOLD: u16 = 700;
}

/// Line height multipliers
pub mod line_height {
    /// Tight line height
    pub const TIGHT: f32 = 1.2;
    /// Normal line height
    pub const NORMAL: f32 = 1.5;
    /// Relaxed line height
    pub const RELAXED: f32 = 1.75;
}

/// Letter spacing in points
pub mod letter_spacing {
    /// Tight tracking
    pub const TIGHT: f32 = -0.5;
    /// Default tracking
    pub const NORMAL: f32 = 0.0;
    /// Wide tracking
    pub const WIDE: f32 = 0.5;
}

// =============================================================================
// Text Style
// =============================================================================

/// A text style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16, line_height: f32) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
        }
    }

    /// Scale the font size and line height by a multiplier
    pub fn scale(&self, multiplier: f32) -> Self {
        Self {
            font_size: self.font_size * multiplier,
            font_weight: self.font_weight,
            line_height: self.line_height * multiplier,
        }
    }
}

// =============================================================================
// Text Variants
// =============================================================================

/// Semantic text variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextVariant {
    /// Body text
    #[default]
    Default,
    /// Emphasized body text
    DefaultSemiBold,
    /// Screen title
    Title,
    /// Section subtitle
    Subtitle,
    /// Inline link (rendered in the palette link color)
    Link,
}

/// Typography variant lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Typography;

impl Typography {
    /// Resolve the style for a variant
    pub fn get(&self, variant: TextVariant) -> TextStyle {
        match variant {
            TextVariant::Default => TextStyle::new(font_size::MD, font_weight::REGULAR, 24.0),
            TextVariant::DefaultSemiBold => {
                TextStyle::new(font_size::MD, font_weight::SEMIBOLD, 24.0)
            }
            TextVariant::Title => TextStyle::new(32.0, font_weight::BOLD, 32.0),
            TextVariant::Subtitle => TextStyle::new(font_size::XL, font_weight::BOLD, 24.0),
            TextVariant::Link => TextStyle::new(font_size::MD, font_weight::REGULAR, 30.0),
        }
    }
}
