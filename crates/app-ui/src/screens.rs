//! Screen view models for Cobalt Shell
//!
//! Each screen is a serializable view model built from the current theme
//! state. Rebuilding a screen after a theme change yields the props the
//! frontend renders next.

use app_state::{EffectiveAppearance, ThemePreference};
use serde::{Deserialize, Serialize};

use crate::components::{SettingsRow, ThemeCard, ThemedText, ThemedView};
use crate::navigation::Route;
use crate::palette::{colors_for, SemanticColors};
use crate::typography::TextVariant;

// =============================================================================
// Home
// =============================================================================

/// Home screen view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeScreen {
    /// Screen container
    pub container: ThemedView,
    /// Centered title
    pub title: ThemedText,
    /// Resolved palette
    pub colors: SemanticColors,
}

/// Build the home screen
pub fn home_screen(appearance: EffectiveAppearance) -> HomeScreen {
    HomeScreen {
        container: ThemedView::new(),
        title: ThemedText::new(Route::Home.title()).with_variant(TextVariant::Title),
        colors: colors_for(appearance),
    }
}

// =============================================================================
// Settings
// =============================================================================

/// A titled group of settings rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSection {
    /// Section header
    pub title: String,
    /// Rows in this section
    pub rows: Vec<SettingsRow>,
}

/// Settings screen view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsScreen {
    /// Screen container
    pub container: ThemedView,
    /// Settings sections
    pub sections: Vec<SettingsSection>,
    /// Resolved palette
    pub colors: SemanticColors,
}

/// Display name for a preference
fn preference_display_name(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::System => "System",
        ThemePreference::Dark => "Dark",
        ThemePreference::Light => "Light",
    }
}

/// Icon name for a preference
fn preference_icon(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::System => "phone-portrait-outline",
        ThemePreference::Dark => "moon-outline",
        ThemePreference::Light => "sunny-outline",
    }
}

/// Icon color for a preference, from the resolved palette
fn preference_icon_color(preference: ThemePreference, colors: &SemanticColors) -> String {
    match preference {
        ThemePreference::System => colors.primary.clone(),
        ThemePreference::Dark => colors.neutral.clone(),
        ThemePreference::Light => colors.warning.clone(),
    }
}

/// Build the settings screen
pub fn settings_screen(
    preference: ThemePreference,
    appearance: EffectiveAppearance,
) -> SettingsScreen {
    let colors = colors_for(appearance);
    let theme_row = SettingsRow::new("theme", "Theme")
        .with_value(preference_display_name(preference))
        .with_icon(
            preference_icon(preference),
            preference_icon_color(preference, &colors),
        );

    SettingsScreen {
        container: ThemedView::new(),
        sections: vec![SettingsSection {
            title: "Appearance".to_string(),
            rows: vec![theme_row],
        }],
        colors,
    }
}

// =============================================================================
// Theme Settings
// =============================================================================

/// Theme picker view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettingsScreen {
    /// Screen container
    pub container: ThemedView,
    /// Header above the cards
    pub header: ThemedText,
    /// One card per preference
    pub cards: Vec<ThemeCard>,
    /// Footer describing the current setting
    pub current_setting: String,
    /// Resolved palette
    pub colors: SemanticColors,
}

/// Description shown under a card title
fn preference_description(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::System => "Follow your device's appearance settings",
        ThemePreference::Dark => "Dark appearance for low-light environments",
        ThemePreference::Light => "Light appearance for bright environments",
    }
}

/// Build the theme picker screen
pub fn theme_settings_screen(
    preference: ThemePreference,
    appearance: EffectiveAppearance,
) -> ThemeSettingsScreen {
    let colors = colors_for(appearance);

    let cards = ThemePreference::all()
        .into_iter()
        .map(|option| {
            ThemeCard::new(
                option.as_str(),
                preference_display_name(option),
                preference_description(option),
                preference_icon(option),
                preference_icon_color(option, &colors),
            )
            .with_selected(option == preference)
        })
        .collect();

    let current_setting = if preference == ThemePreference::System {
        format!("Current setting: System ({appearance})")
    } else {
        format!("Current setting: {preference}")
    };

    ThemeSettingsScreen {
        container: ThemedView::new(),
        header: ThemedText::new("Choose your preferred appearance"),
        cards,
        current_setting,
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_screen() {
        let screen = home_screen(EffectiveAppearance::Dark);
        assert_eq!(screen.title.content, "Home");
        assert_eq!(screen.title.variant, TextVariant::Title);
        assert_eq!(screen.colors.background, "#151718");
    }

    #[test]
    fn test_settings_screen_theme_row() {
        let screen = settings_screen(ThemePreference::System, EffectiveAppearance::Light);
        assert_eq!(screen.sections.len(), 1);
        assert_eq!(screen.sections[0].title, "Appearance");

        let row = &screen.sections[0].rows[0];
        assert_eq!(row.id, "theme");
        assert_eq!(row.value.as_deref(), Some("System"));
        assert_eq!(row.icon.as_deref(), Some("phone-portrait-outline"));
        assert_eq!(row.icon_color.as_deref(), Some("#4A6FFF"));
    }

    #[test]
    fn test_settings_screen_icon_tracks_preference() {
        let dark = settings_screen(ThemePreference::Dark, EffectiveAppearance::Dark);
        assert_eq!(
            dark.sections[0].rows[0].icon.as_deref(),
            Some("moon-outline")
        );

        let light = settings_screen(ThemePreference::Light, EffectiveAppearance::Light);
        assert_eq!(
            light.sections[0].rows[0].icon.as_deref(),
            Some("sunny-outline")
        );
        assert_eq!(light.sections[0].rows[0].value.as_deref(), Some("Light"));
    }

    #[test]
    fn test_theme_settings_cards() {
        let screen = theme_settings_screen(ThemePreference::Dark, EffectiveAppearance::Dark);
        assert_eq!(screen.cards.len(), 3);

        let selected: Vec<_> = screen.cards.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "dark");
        assert_eq!(selected[0].icon, "moon-outline");
    }

    #[test]
    fn test_theme_settings_descriptions() {
        let screen = theme_settings_screen(ThemePreference::System, EffectiveAppearance::Light);
        let system = screen.cards.iter().find(|c| c.id == "system").unwrap();
        assert_eq!(
            system.description,
            "Follow your device's appearance settings"
        );
        assert!(system.selected);
    }

    #[test]
    fn test_current_setting_shows_resolved_appearance_for_system() {
        let screen = theme_settings_screen(ThemePreference::System, EffectiveAppearance::Dark);
        assert_eq!(screen.current_setting, "Current setting: System (dark)");

        let explicit = theme_settings_screen(ThemePreference::Light, EffectiveAppearance::Light);
        assert_eq!(explicit.current_setting, "Current setting: light");
    }

    #[test]
    fn test_screens_serialize() {
        let screen = theme_settings_screen(ThemePreference::System, EffectiveAppearance::Light);
        let json = serde_json::to_string(&screen).unwrap();
        let parsed: ThemeSettingsScreen = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, screen);
    }
}
