//! User interface for Cobalt Shell
//!
//! This crate provides the UI layer: the design system (palette, tokens,
//! typography), themed components, the two-tab navigation shell, and the
//! screen view models that the frontend renders.
//!
//! # Design System
//!
//! Every color comes from the semantic palette, resolved once per
//! appearance:
//! - Primary: Cobalt blue (#4A6FFF)
//! - Light background: white (#FFFFFF)
//! - Dark background: near-black (#151718)
//!
//! # Modules
//!
//! - [`palette`] - Base palette and per-appearance semantic colors
//! - [`tokens`] - Design tokens (spacing, radii, shadows, responsive scaling)
//! - [`typography`] - Text variants and font scales
//! - [`components`] - Themed component props
//! - [`screens`] - Screen view models
//! - [`navigation`] - Tab and stack navigation
//! - [`provider`] - Ties the theme store to the design system
//!
//! # Example
//!
//! ```rust
//! use app_state::EffectiveAppearance;
//! use app_ui::palette::colors_for;
//! use app_ui::tokens::spacing;
//!
//! let colors = colors_for(EffectiveAppearance::Dark);
//! assert_eq!(colors.background, "#151718");
//!
//! let gutter = spacing::GUTTER;
//! assert_eq!(gutter, 16.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod palette;
pub mod provider;
pub mod screens;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use palette::{colors_for, dark_colors, light_colors, Color, SemanticColors};

pub use tokens::{radius, responsive, shadows, spacing, Shadow};

pub use typography::{font_size, font_weight, line_height, TextStyle, TextVariant, Typography};

pub use components::{SafeAreaScrollView, SettingsRow, ThemeCard, ThemedText, ThemedView};

pub use navigation::{
    NavigationStack, NavigationState, NavigationTab, Route, StackEntry, TabBarStyle,
};

pub use provider::ThemeProvider;

pub use screens::{
    home_screen, settings_screen, theme_settings_screen, HomeScreen, SettingsScreen,
    ThemeSettingsScreen,
};
