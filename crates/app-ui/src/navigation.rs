//! Navigation for Cobalt Shell
//!
//! A two-tab shell (Home, Settings) with per-tab stacks. The theme
//! picker is pushed onto the Settings stack.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::palette::{Color, SemanticColors};

// =============================================================================
// Routes
// =============================================================================

/// All routes in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Home landing screen
    #[default]
    Home,
    /// Settings list
    Settings,
    /// Theme picker
    ThemeSettings,
    /// Unknown route fallback
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Settings => "/settings",
            Route::ThemeSettings => "/theme-settings",
            Route::NotFound => "/not-found",
        }
    }

    /// Parse a route from a URL path
    pub fn from_path(path: &str) -> Route {
        match path {
            "/" => Route::Home,
            "/settings" => Route::Settings,
            "/theme-settings" => Route::ThemeSettings,
            _ => Route::NotFound,
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Settings => "Settings",
            Route::ThemeSettings => "Theme",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Settings tab
    Settings,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Settings => Route::Settings,
        }
    }

    /// Get the icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Settings => "settings",
        }
    }

    /// Get the label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Settings => "Settings",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 2] {
        [NavigationTab::Home, NavigationTab::Settings]
    }
}

/// Resolved tab bar style for one appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarStyle {
    /// Bar background color
    pub background: Color,
    /// Top border color
    pub border: Color,
    /// Active tab icon tint
    pub active_tint: Color,
    /// Inactive tab icon tint
    pub inactive_tint: Color,
}

impl TabBarStyle {
    /// Derive the tab bar style from the semantic palette
    pub fn from_palette(colors: &SemanticColors) -> Self {
        Self {
            background: colors.card.clone(),
            border: colors.border.clone(),
            active_tint: colors.tab_icon_selected.clone(),
            inactive_tint: colors.tab_icon_default.clone(),
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack for a tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns false at the root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop to the root route
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Reset the stack to a new root
    pub fn reset(&mut self, route: Route) {
        self.entries = vec![StackEntry::new(route)];
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        self.entries
            .last()
            .expect("Stack should never be empty")
            .route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Stacks for each tab
    pub tab_stacks: HashMap<NavigationTab, NavigationStack>,
}

impl Default for NavigationState {
    fn default() -> Self {
        let mut tab_stacks = HashMap::new();
        for tab in NavigationTab::all() {
            tab_stacks.insert(tab, NavigationStack::new(tab.root_route()));
        }

        Self {
            active_tab: NavigationTab::Home,
            tab_stacks,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stack for the active tab
    pub fn current_stack(&self) -> &NavigationStack {
        self.tab_stacks
            .get(&self.active_tab)
            .expect("All tabs should have stacks")
    }

    /// Get mutable stack for the active tab
    pub fn current_stack_mut(&mut self) -> &mut NavigationStack {
        self.tab_stacks
            .get_mut(&self.active_tab)
            .expect("All tabs should have stacks")
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        self.current_stack().current()
    }

    /// Navigate to a route on the active tab
    pub fn navigate(&mut self, route: Route) {
        self.current_stack_mut().push(route);
    }

    /// Go back on the active tab
    pub fn go_back(&mut self) -> bool {
        self.current_stack_mut().pop()
    }

    /// Switch to a tab
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        self.active_tab = tab;
    }

    /// Reset a tab to its root and activate it
    pub fn reset_to_tab(&mut self, tab: NavigationTab) {
        if let Some(stack) = self.tab_stacks.get_mut(&tab) {
            stack.pop_to_root();
        }
        self.active_tab = tab;
    }
}
