//! Application state management for Cobalt Shell
//!
//! This crate owns the theme preference store: the single source of truth
//! for the user's light/dark/system choice, its persistence, and its
//! propagation to consuming views.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appearance;
pub mod theme;

pub use appearance::{AppearanceSource, FixedAppearance, SharedAppearance, SystemScheme};
pub use theme::{
    EffectiveAppearance, LoadState, ThemeError, ThemeEvent, ThemePreference, ThemeSnapshot,
    ThemeStore, THEME_STORAGE_KEY,
};
