//! Operating-system appearance signal
//!
//! The theme store never talks to the OS directly; it depends on anything
//! that can report the current color scheme. Platform glue implements
//! [`AppearanceSource`] for the real device and calls
//! [`ThemeStore::refresh_system_scheme`](crate::theme::ThemeStore::refresh_system_scheme)
//! when the OS posts an appearance-change notification.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Color scheme reported by the operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SystemScheme {
    /// Light appearance
    Light,
    /// Dark appearance
    Dark,
    /// The platform did not report a scheme
    #[default]
    Unknown,
}

impl SystemScheme {
    /// Whether this scheme resolves to dark
    ///
    /// `Unknown` counts as light for derivation purposes.
    pub fn is_dark(&self) -> bool {
        matches!(self, SystemScheme::Dark)
    }
}

impl std::fmt::Display for SystemScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemScheme::Light => write!(f, "light"),
            SystemScheme::Dark => write!(f, "dark"),
            SystemScheme::Unknown => write!(f, "unknown"),
        }
    }
}

/// Capability to report the current OS color scheme
pub trait AppearanceSource: Send + Sync {
    /// The scheme the OS currently reports
    fn scheme(&self) -> SystemScheme;
}

/// Appearance source that always reports the same scheme
///
/// For platforms without an appearance API, and for tests.
pub struct FixedAppearance {
    scheme: SystemScheme,
}

impl FixedAppearance {
    /// Create a source pinned to `scheme`
    pub fn new(scheme: SystemScheme) -> Self {
        Self { scheme }
    }
}

impl AppearanceSource for FixedAppearance {
    fn scheme(&self) -> SystemScheme {
        self.scheme
    }
}

/// Mutable appearance source
///
/// Shared behind an `Arc`, this lets platform glue (or a test) flip the
/// reported scheme and then ask the store to refresh.
#[derive(Default)]
pub struct SharedAppearance {
    scheme: Mutex<SystemScheme>,
}

impl SharedAppearance {
    /// Create a source reporting `initial`
    pub fn new(initial: SystemScheme) -> Self {
        Self { scheme: Mutex::new(initial) }
    }

    /// Change the reported scheme
    pub fn set(&self, scheme: SystemScheme) {
        *self.scheme.lock() = scheme;
    }
}

impl AppearanceSource for SharedAppearance {
    fn scheme(&self) -> SystemScheme {
        *self.scheme.lock()
    }
}
