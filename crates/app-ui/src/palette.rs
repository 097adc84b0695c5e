//! Color palette for Cobalt Shell
//!
//! The base palette holds raw color values; [`SemanticColors`] maps them
//! to UI purposes per appearance. Components reference semantic colors
//! only, never raw hex values.

use app_state::EffectiveAppearance;
use serde::{Deserialize, Serialize};

/// A color represented as an RGB hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Base Palette
// =============================================================================

/// Raw palette values shared by both appearances
pub mod base {
    /// Primary brand blue
    pub const PRIMARY: &str = "#4A6FFF";
    /// Lighter teal-blue used for tints and links
    pub const PRIMARY_LIGHT: &str = "#0a7ea4";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Pure black
    pub const BLACK: &str = "#000000";

    /// Lightest gray
    pub const GRAY_50: &str = "#F5F5F5";
    /// Very light gray
    pub const GRAY_100: &str = "#EEEEEE";
    /// Light gray
    pub const GRAY_200: &str = "#DDDDDD";
    /// Medium-light gray
    pub const GRAY_300: &str = "#BBBBBB";
    /// Medium gray
    pub const GRAY_400: &str = "#8E8E93";
    /// Base gray
    pub const GRAY_500: &str = "#6B6B6B";
    /// Medium-dark gray
    pub const GRAY_600: &str = "#666666";
    /// Dark gray
    pub const GRAY_700: &str = "#333333";
    /// Very dark gray
    pub const GRAY_800: &str = "#1E1E1E";
    /// Near-black gray
    pub const GRAY_900: &str = "#121212";

    /// Text on light backgrounds
    pub const TEXT_DARK: &str = "#11181C";
    /// Text on dark backgrounds
    pub const TEXT_LIGHT: &str = "#ECEDEE";

    /// Icons on light backgrounds
    pub const ICON_DARK: &str = "#687076";
    /// Icons on dark backgrounds
    pub const ICON_LIGHT: &str = "#9BA1A6";

    /// Warning accent
    pub const YELLOW: &str = "#FFB900";

    /// Light appearance background
    pub const BACKGROUND_LIGHT: &str = "#FFFFFF";
    /// Dark appearance background
    pub const BACKGROUND_DARK: &str = "#151718";
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic colors for one appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Primary text color
    pub text: Color,
    /// Secondary/muted text color
    pub text_secondary: Color,
    /// Link color
    pub link: Color,
    /// Main background color
    pub background: Color,
    /// Card/elevated surface background
    pub card: Color,
    /// Tint for interactive accents
    pub tint: Color,
    /// Primary brand color
    pub primary: Color,
    /// Icon color
    pub icon: Color,
    /// Unselected tab icon color
    pub tab_icon_default: Color,
    /// Selected tab icon color
    pub tab_icon_selected: Color,
    /// List separator color
    pub separator: Color,
    /// Success status color
    pub success: Color,
    /// Warning status color
    pub warning: Color,
    /// Neutral status color
    pub neutral: Color,
    /// Border color
    pub border: Color,
    /// Shadow color
    pub shadow: Color,
}

/// Semantic colors for the light appearance
pub fn light_colors() -> SemanticColors {
    SemanticColors {
        text: base::TEXT_DARK.to_string(),
        text_secondary: base::GRAY_400.to_string(),
        link: base::PRIMARY_LIGHT.to_string(),
        background: base::BACKGROUND_LIGHT.to_string(),
        card: base::WHITE.to_string(),
        tint: base::PRIMARY_LIGHT.to_string(),
        primary: base::PRIMARY.to_string(),
        icon: base::ICON_DARK.to_string(),
        tab_icon_default: base::ICON_DARK.to_string(),
        tab_icon_selected: base::PRIMARY_LIGHT.to_string(),
        separator: base::GRAY_100.to_string(),
        success: base::PRIMARY.to_string(),
        warning: base::YELLOW.to_string(),
        neutral: base::GRAY_500.to_string(),
        border: base::GRAY_200.to_string(),
        shadow: base::BLACK.to_string(),
    }
}

/// Semantic colors for the dark appearance
pub fn dark_colors() -> SemanticColors {
    SemanticColors {
        text: base::TEXT_LIGHT.to_string(),
        text_secondary: base::GRAY_400.to_string(),
        link: base::PRIMARY_LIGHT.to_string(),
        background: base::BACKGROUND_DARK.to_string(),
        card: base::GRAY_800.to_string(),
        tint: base::WHITE.to_string(),
        primary: base::PRIMARY.to_string(),
        icon: base::ICON_LIGHT.to_string(),
        tab_icon_default: base::ICON_LIGHT.to_string(),
        tab_icon_selected: base::WHITE.to_string(),
        separator: base::GRAY_700.to_string(),
        success: base::PRIMARY.to_string(),
        warning: base::YELLOW.to_string(),
        neutral: base::GRAY_500.to_string(),
        border: base::GRAY_700.to_string(),
        shadow: base::BLACK.to_string(),
    }
}

/// Resolve the semantic palette for an appearance
pub fn colors_for(appearance: EffectiveAppearance) -> SemanticColors {
    match appearance {
        EffectiveAppearance::Light => light_colors(),
        EffectiveAppearance::Dark => dark_colors(),
    }
}
