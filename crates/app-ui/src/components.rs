//! Themed UI components for Cobalt Shell
//!
//! Components are serializable prop structs rendered by the frontend.
//! Each resolves its colors through the semantic palette so that views
//! redraw correctly when the effective appearance changes.
//!
//! # Available Components
//!
//! - [`ThemedText`] - Text with semantic variants and per-appearance overrides
//! - [`ThemedView`] - Container that tracks the appearance background
//! - [`SafeAreaScrollView`] - Scrollable screen container with gutter padding
//! - [`SettingsRow`] - One row in a settings list
//! - [`ThemeCard`] - Selectable card on the theme picker screen

use app_state::EffectiveAppearance;
use serde::{Deserialize, Serialize};

use crate::palette::{Color, SemanticColors};
use crate::typography::{TextStyle, TextVariant, Typography};

// =============================================================================
// ThemedText
// =============================================================================

/// Text that adapts to the current appearance
///
/// Renders in the palette text color unless an explicit per-appearance
/// override is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemedText {
    /// Text content
    pub content: String,
    /// Text variant
    #[serde(default)]
    pub variant: TextVariant,
    /// Color override for the light appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_color: Option<Color>,
    /// Color override for the dark appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_color: Option<Color>,
}

impl ThemedText {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::Default,
            light_color: None,
            dark_color: None,
        }
    }

    /// Set the text variant
    pub fn with_variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set a color override for the light appearance
    pub fn with_light_color(mut self, color: impl Into<Color>) -> Self {
        self.light_color = Some(color.into());
        self
    }

    /// Set a color override for the dark appearance
    pub fn with_dark_color(mut self, color: impl Into<Color>) -> Self {
        self.dark_color = Some(color.into());
        self
    }

    /// Resolve the text color for an appearance
    ///
    /// Overrides win; links fall back to the palette link color, all
    /// other variants to the palette text color.
    pub fn resolved_color(
        &self,
        appearance: EffectiveAppearance,
        colors: &SemanticColors,
    ) -> Color {
        let overridden = match appearance {
            EffectiveAppearance::Light => self.light_color.as_ref(),
            EffectiveAppearance::Dark => self.dark_color.as_ref(),
        };
        if let Some(color) = overridden {
            return color.clone();
        }
        match self.variant {
            TextVariant::Link => colors.link.clone(),
            _ => colors.text.clone(),
        }
    }

    /// Resolve the text style for this variant
    pub fn resolved_style(&self) -> TextStyle {
        Typography.get(self.variant)
    }
}

// =============================================================================
// ThemedView
// =============================================================================

/// A container that tracks the appearance background
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemedView {
    /// Render on the card surface instead of the screen background
    #[serde(default)]
    pub card: bool,
    /// Background override for the light appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_color: Option<Color>,
    /// Background override for the dark appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_color: Option<Color>,
}

impl ThemedView {
    /// Create a view on the screen background
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view on the card surface
    pub fn card() -> Self {
        Self {
            card: true,
            ..Default::default()
        }
    }

    /// Resolve the background color for an appearance
    pub fn resolved_background(
        &self,
        appearance: EffectiveAppearance,
        colors: &SemanticColors,
    ) -> Color {
        let overridden = match appearance {
            EffectiveAppearance::Light => self.light_color.as_ref(),
            EffectiveAppearance::Dark => self.dark_color.as_ref(),
        };
        if let Some(color) = overridden {
            return color.clone();
        }
        if self.card {
            colors.card.clone()
        } else {
            colors.background.clone()
        }
    }
}

// =============================================================================
// SafeAreaScrollView
// =============================================================================

/// Scrollable container inset to the device safe area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaScrollView {
    /// Padding around the scrolled content
    pub content_padding: f32,
    /// Screen background view
    pub background: ThemedView,
}

impl Default for SafeAreaScrollView {
    fn default() -> Self {
        Self {
            content_padding: crate::tokens::spacing::GUTTER,
            background: ThemedView::new(),
        }
    }
}

impl SafeAreaScrollView {
    /// Create a scroll view with the standard gutter padding
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content padding
    pub fn with_content_padding(mut self, padding: f32) -> Self {
        self.content_padding = padding;
        self
    }
}

// =============================================================================
// SettingsRow
// =============================================================================

/// One row in a settings list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsRow {
    /// Stable identifier
    pub id: String,
    /// Row title
    pub title: String,
    /// Current value shown on the right
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Leading icon color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<Color>,
    /// Shows the disclosure chevron
    #[serde(default = "default_true")]
    pub chevron: bool,
}

fn default_true() -> bool {
    true
}

impl SettingsRow {
    /// Create a row
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value: None,
            icon: None,
            icon_color: None,
            chevron: true,
        }
    }

    /// Set the displayed value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the leading icon
    pub fn with_icon(mut self, icon: impl Into<String>, color: impl Into<Color>) -> Self {
        self.icon = Some(icon.into());
        self.icon_color = Some(color.into());
        self
    }
}

// =============================================================================
// ThemeCard
// =============================================================================

/// A selectable card on the theme picker screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeCard {
    /// Preference token this card selects
    pub id: String,
    /// Card title
    pub title: String,
    /// One-line description under the title
    pub description: String,
    /// Leading icon name
    pub icon: String,
    /// Leading icon color
    pub icon_color: Color,
    /// Whether this card is the current selection
    #[serde(default)]
    pub selected: bool,
}

impl ThemeCard {
    /// Create a card
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        icon_color: impl Into<Color>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            icon_color: icon_color.into(),
            selected: false,
        }
    }

    /// Mark this card as the current selection
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}
