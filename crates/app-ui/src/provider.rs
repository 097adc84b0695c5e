//! Theme provider
//!
//! Bridges the theme store to the design system: resolves the semantic
//! palette for the current appearance, builds screen view models, and
//! turns persistence failures into user-facing alert text.

use std::sync::Arc;

use app_state::{
    EffectiveAppearance, ThemeEvent, ThemePreference, ThemeSnapshot, ThemeStore,
};
use tokio::sync::{broadcast, watch};

use crate::palette::{colors_for, SemanticColors};
use crate::screens::{
    home_screen, settings_screen, theme_settings_screen, HomeScreen, SettingsScreen,
    ThemeSettingsScreen,
};

/// Alert shown when a theme selection could not be saved
pub const PERSIST_FAILURE_ALERT: &str =
    "Your theme could not be saved. It will apply for this session only.";

/// Theme-aware view of the application
///
/// Wraps a shared [`ThemeStore`] and derives everything the UI needs
/// from it.
#[derive(Clone)]
pub struct ThemeProvider {
    store: Arc<ThemeStore>,
}

impl ThemeProvider {
    /// Create a provider over a shared store
    pub fn new(store: Arc<ThemeStore>) -> Self {
        Self { store }
    }

    /// Load the persisted preference
    pub async fn initialize(&self) {
        self.store.initialize().await;
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<ThemeStore> {
        &self.store
    }

    /// Current preference
    pub async fn preference(&self) -> ThemePreference {
        self.store.preference().await
    }

    /// Resolved appearance
    pub async fn appearance(&self) -> EffectiveAppearance {
        self.store.effective_appearance().await
    }

    /// Whether dark mode is active
    pub async fn is_dark(&self) -> bool {
        self.appearance().await.is_dark()
    }

    /// True until the persisted preference has loaded
    ///
    /// The shell renders nothing while loading rather than flashing the
    /// wrong theme.
    pub async fn is_loading(&self) -> bool {
        self.store.is_loading().await
    }

    /// Most recent swallowed failure, for diagnostic display
    pub async fn last_error(&self) -> Option<app_state::ThemeError> {
        self.store.last_error().await
    }

    /// Semantic palette for the current appearance
    pub async fn colors(&self) -> SemanticColors {
        colors_for(self.appearance().await)
    }

    /// Select a theme preference
    pub async fn select(&self, preference: ThemePreference) {
        self.store.set_preference(preference).await;
    }

    /// Subscribe to theme snapshots
    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.store.subscribe()
    }

    /// Subscribe to theme events
    pub fn subscribe_events(&self) -> broadcast::Receiver<ThemeEvent> {
        self.store.subscribe_events()
    }

    /// Alert text for an event, if it warrants one
    ///
    /// Only persistence failures surface to the user; read fallbacks
    /// stay silent.
    pub fn alert_for(&self, event: &ThemeEvent) -> Option<&'static str> {
        match event {
            ThemeEvent::PersistFailed { .. } => Some(PERSIST_FAILURE_ALERT),
            _ => None,
        }
    }

    /// Build the home screen for the current appearance
    pub async fn home(&self) -> HomeScreen {
        home_screen(self.appearance().await)
    }

    /// Build the settings screen for the current state
    pub async fn settings(&self) -> SettingsScreen {
        settings_screen(self.preference().await, self.appearance().await)
    }

    /// Build the theme picker for the current state
    pub async fn theme_settings(&self) -> ThemeSettingsScreen {
        theme_settings_screen(self.preference().await, self.appearance().await)
    }
}
