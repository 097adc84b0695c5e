//! Design tokens for Cobalt Shell
//!
//! Spacing, radii, shadows, and responsive scaling primitives. All
//! spacing derives from a 4px base unit.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in density-independent pixels
pub mod spacing {
    /// Base unit all spacing derives from
    pub const BASE_UNIT: f32 = 4.0;

    /// 4px - Extra extra small
    pub const XXS: f32 = BASE_UNIT;
    /// 8px - Extra small
    pub const XS: f32 = BASE_UNIT * 2.0;
    /// 12px - Small
    pub const SM: f32 = BASE_UNIT * 3.0;
    /// 16px - Medium
    pub const MD: f32 = BASE_UNIT * 4.0;
    /// 24px - Large
    pub const LG: f32 = BASE_UNIT * 6.0;
    /// 32px - Extra large
    pub const XL: f32 = BASE_UNIT * 8.0;
    /// 48px - 2x large
    pub const XXL: f32 = BASE_UNIT * 12.0;

    /// Standard padding for screen edges (16px)
    pub const GUTTER: f32 = BASE_UNIT * 4.0;
    /// Space between related items (12px)
    pub const ITEM_SPACING: f32 = BASE_UNIT * 3.0;
    /// Space between sections (24px)
    pub const SECTION_SPACING: f32 = BASE_UNIT * 6.0;
    /// Space between stacked elements (8px)
    pub const STACK_SPACING: f32 = BASE_UNIT * 2.0;
    /// Space between inline elements (8px)
    pub const INLINE_SPACING: f32 = BASE_UNIT * 2.0;
    /// Card interior padding (16px)
    pub const CARD_PADDING: f32 = BASE_UNIT * 4.0;
    /// Button padding, vertical (8px)
    pub const BUTTON_PADDING_VERTICAL: f32 = BASE_UNIT * 2.0;
    /// Button padding, horizontal (16px)
    pub const BUTTON_PADDING_HORIZONTAL: f32 = BASE_UNIT * 4.0;
    /// Input padding, both axes (12px)
    pub const INPUT_PADDING: f32 = BASE_UNIT * 3.0;
    /// Margin next to an icon (8px)
    pub const ICON_MARGIN: f32 = BASE_UNIT * 2.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xxs" => Some(XXS),
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            _ => None,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Extra large radius (16px)
    pub const XL: f32 = 16.0;
    /// Pill shape
    pub const PILL: f32 = 9999.0;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Blur radius
    pub blur: f32,
    /// Android elevation equivalent
    pub elevation: f32,
}

/// Shadow presets derived from an elevation value
pub mod shadows {
    use super::Shadow;

    /// Build a shadow for an elevation
    pub fn create(elevation: f32) -> Shadow {
        Shadow {
            offset_x: 0.0,
            offset_y: elevation,
            opacity: 0.1,
            blur: elevation * 0.5,
            elevation,
        }
    }

    /// Small shadow (cards)
    pub fn small() -> Shadow {
        create(2.0)
    }

    /// Medium shadow (floating elements)
    pub fn medium() -> Shadow {
        create(4.0)
    }

    /// Large shadow (modals)
    pub fn large() -> Shadow {
        create(8.0)
    }
}

// =============================================================================
// Hit Target Tokens
// =============================================================================

/// Minimum touch target sizes
pub mod hit_target {
    /// Minimum touch target on iOS (44px)
    pub const MIN: f32 = 44.0;
    /// Minimum touch target on Android (48px)
    pub const ANDROID_MIN: f32 = 48.0;
}

// =============================================================================
// Responsive Scaling
// =============================================================================

/// Responsive scaling helpers
///
/// Sizes are authored against a 375x812 reference screen and scaled to
/// the actual screen dimensions.
pub mod responsive {
    /// Reference screen width
    pub const BASE_WIDTH: f32 = 375.0;
    /// Reference screen height
    pub const BASE_HEIGHT: f32 = 812.0;

    /// Scale a value by the screen width
    pub fn horizontal_scale(size: f32, screen_width: f32) -> f32 {
        (screen_width / BASE_WIDTH) * size
    }

    /// Scale a value by the screen height
    pub fn vertical_scale(size: f32, screen_height: f32) -> f32 {
        (screen_height / BASE_HEIGHT) * size
    }

    /// Scale a value by the screen width with a damping factor
    ///
    /// Used for text sizes so they do not grow linearly with the screen.
    pub fn moderate_scale(size: f32, screen_width: f32, factor: f32) -> f32 {
        size + (horizontal_scale(size, screen_width) - size) * factor
    }
}
