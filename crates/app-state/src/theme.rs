//! Theme preference store
//!
//! Single source of truth for the user's theme choice. The store persists
//! the choice through a [`PreferenceStorage`] adapter, derives the
//! effective light/dark appearance by combining the choice with the OS
//! scheme, and notifies consumers through watch and broadcast channels.
//!
//! Error policy: read failures at startup are swallowed into the `system`
//! fallback and recorded in `last_error`; write failures keep the new
//! in-memory value and are broadcast as [`ThemeEvent::PersistFailed`] so
//! the view layer can alert the user.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, watch, RwLock};
use tracing::{debug, error, warn};

use storage::PreferenceStorage;

use crate::appearance::{AppearanceSource, SystemScheme};

/// Fixed key under which the preference is persisted
///
/// The stored value is the literal preference token (`system`, `light`,
/// `dark`). The store is the sole writer of this key.
pub const THEME_STORAGE_KEY: &str = "app_theme";

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 16;

// =============================================================================
// Data Model
// =============================================================================

/// The user's explicit theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Defer to the operating system
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ThemePreference {
    /// The literal token persisted for this preference
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// All preferences in display order
    pub fn all() -> [ThemePreference; 3] {
        [
            ThemePreference::System,
            ThemePreference::Dark,
            ThemePreference::Light,
        ]
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ThemePreference::System),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

/// Resolved light/dark state
///
/// Always derived, never stored: dark iff the preference is `dark`, or
/// the preference is `system` and the OS reports dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveAppearance {
    /// Light appearance is active
    #[default]
    Light,
    /// Dark appearance is active
    Dark,
}

impl EffectiveAppearance {
    /// Derive the appearance from a preference and an OS scheme
    pub fn derive(preference: ThemePreference, scheme: SystemScheme) -> Self {
        let dark = preference == ThemePreference::Dark
            || (preference == ThemePreference::System && scheme.is_dark());
        if dark {
            EffectiveAppearance::Dark
        } else {
            EffectiveAppearance::Light
        }
    }

    /// Whether dark mode is active
    pub fn is_dark(&self) -> bool {
        matches!(self, EffectiveAppearance::Dark)
    }
}

impl std::fmt::Display for EffectiveAppearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectiveAppearance::Light => write!(f, "light"),
            EffectiveAppearance::Dark => write!(f, "dark"),
        }
    }
}

/// Store lifecycle state
///
/// `Ready` is terminal for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Created, not yet initialized
    #[default]
    Uninitialized,
    /// Reading the persisted preference
    Loading,
    /// Initialized; reads are meaningful
    Ready,
}

/// Theme store error types
///
/// Observed as data through `last_error`; never thrown across the view
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The persisted preference could not be read or was unrecognized
    #[error("Failed to load theme preference: {0}")]
    ReadFailure(String),

    /// The preference could not be persisted
    #[error("Failed to save theme preference: {0}")]
    WriteFailure(String),

    /// A string outside the three-valued enumeration
    #[error("Unknown theme preference: {0}")]
    InvalidPreference(String),
}

/// Current store state as seen by a consumer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeSnapshot {
    /// The user's preference
    pub preference: ThemePreference,
    /// The resolved appearance
    pub appearance: EffectiveAppearance,
    /// True until initialization completes
    pub is_loading: bool,
    /// Most recent swallowed failure, for diagnostic display
    pub last_error: Option<ThemeError>,
}

/// Events broadcast to subscribers
///
/// Exactly one event is sent per logical change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    /// Initialization finished (successfully or via fallback)
    Loaded,
    /// The preference and/or the effective appearance changed
    Changed {
        /// Preference after the change
        preference: ThemePreference,
        /// Appearance after the change
        appearance: EffectiveAppearance,
    },
    /// A write failed; the in-memory value was kept
    PersistFailed {
        /// The preference that could not be persisted
        preference: ThemePreference,
        /// Failure description for the user-facing alert
        message: String,
    },
}

// =============================================================================
// Store
// =============================================================================

/// Internal mutable state
#[derive(Debug, Default)]
struct ThemeState {
    load_state: LoadState,
    preference: ThemePreference,
    /// Last scheme observed from the appearance source, used to detect
    /// actual OS-level changes
    last_scheme: SystemScheme,
    last_error: Option<ThemeError>,
    /// Ticket of the most recent `set_preference` call
    write_seq: u64,
    /// Whether a writer loop is currently draining writes
    writing: bool,
}

/// The theme preference store
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use app_state::{ThemeStore, ThemePreference, FixedAppearance, SystemScheme};
/// use storage::MemoryPreferenceStorage;
///
/// #[tokio::main]
/// async fn main() {
///     let store = ThemeStore::new(
///         Arc::new(MemoryPreferenceStorage::new()),
///         Arc::new(FixedAppearance::new(SystemScheme::Dark)),
///     );
///     store.initialize().await;
///
///     let mut rx = store.subscribe();
///     store.set_preference(ThemePreference::Light).await;
///     assert_eq!(rx.borrow().preference, ThemePreference::Light);
/// }
/// ```
pub struct ThemeStore {
    storage: Arc<dyn PreferenceStorage>,
    appearance: Arc<dyn AppearanceSource>,
    state: Arc<RwLock<ThemeState>>,
    snapshot_tx: watch::Sender<ThemeSnapshot>,
    events_tx: broadcast::Sender<ThemeEvent>,
}

impl ThemeStore {
    /// Create an uninitialized store over a persistence adapter and an
    /// appearance source
    pub fn new(
        storage: Arc<dyn PreferenceStorage>,
        appearance: Arc<dyn AppearanceSource>,
    ) -> Self {
        let initial = ThemeSnapshot { is_loading: true, ..Default::default() };
        let (snapshot_tx, _) = watch::channel(initial);
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        ThemeStore {
            storage,
            appearance,
            state: Arc::new(RwLock::new(ThemeState::default())),
            snapshot_tx,
            events_tx,
        }
    }

    /// Load the persisted preference and transition to `Ready`
    ///
    /// Read failures and unrecognized values fall back to
    /// [`ThemePreference::System`]; the failure is logged, recorded in
    /// `last_error`, and never propagated. A second call on a ready (or
    /// loading) store returns immediately.
    pub async fn initialize(&self) {
        {
            let mut state = self.state.write().await;
            if state.load_state != LoadState::Uninitialized {
                return;
            }
            state.load_state = LoadState::Loading;
            state.last_scheme = self.appearance.scheme();
        }
        self.publish_snapshot().await;

        let result = self.storage.get(THEME_STORAGE_KEY).await;

        {
            let mut state = self.state.write().await;
            match result {
                Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
                    Ok(preference) => {
                        state.preference = preference;
                    }
                    Err(_) => {
                        warn!(value = %raw, "Unrecognized persisted theme value, falling back to system");
                        state.preference = ThemePreference::System;
                        state.last_error =
                            Some(ThemeError::ReadFailure(format!("unrecognized value: {raw}")));
                    }
                },
                Ok(None) => {
                    state.preference = ThemePreference::System;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read persisted theme, falling back to system");
                    state.preference = ThemePreference::System;
                    state.last_error = Some(ThemeError::ReadFailure(e.to_string()));
                }
            }
            state.load_state = LoadState::Ready;
            debug!(preference = %state.preference, "Theme store ready");
        }

        self.publish_snapshot().await;
        let _ = self.events_tx.send(ThemeEvent::Loaded);
    }

    /// Current preference
    pub async fn preference(&self) -> ThemePreference {
        self.state.read().await.preference
    }

    /// Resolved appearance, recomputed from the live OS signal
    pub async fn effective_appearance(&self) -> EffectiveAppearance {
        let preference = self.state.read().await.preference;
        EffectiveAppearance::derive(preference, self.appearance.scheme())
    }

    /// Current lifecycle state
    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.load_state
    }

    /// True until initialization completes
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.load_state != LoadState::Ready
    }

    /// Most recent swallowed failure, if any
    pub async fn last_error(&self) -> Option<ThemeError> {
        self.state.read().await.last_error.clone()
    }

    /// Change the preference
    ///
    /// The in-memory value and subscribers update before this call
    /// suspends; persistence happens afterwards. Overlapping calls
    /// coalesce into one writer that always persists the most recent
    /// value (last-write-wins). On write failure the in-memory value is
    /// kept, `last_error` is set, and [`ThemeEvent::PersistFailed`] is
    /// broadcast.
    pub async fn set_preference(&self, new: ThemePreference) {
        let start_writer;
        let changed;
        {
            let mut state = self.state.write().await;
            let unchanged =
                state.load_state == LoadState::Ready && state.preference == new;
            if unchanged && state.last_error.is_none() {
                return;
            }
            // Unchanged value with a pending write failure: retry the
            // write, but do not renotify a change that did not happen.
            changed = !unchanged;
            state.preference = new;
            state.last_error = None;
            state.write_seq += 1;
            start_writer = !state.writing;
            state.writing = true;
        }

        self.publish_snapshot().await;
        if changed {
            let appearance =
                EffectiveAppearance::derive(new, self.appearance.scheme());
            debug!(preference = %new, appearance = %appearance, "Theme preference changed");
            let _ = self.events_tx.send(ThemeEvent::Changed { preference: new, appearance });
        }

        if start_writer {
            self.drain_writes().await;
        }
    }

    /// Re-read the OS scheme after an appearance-change notification
    ///
    /// Platform glue calls this once per OS-level change. Subscribers are
    /// notified only if the effective appearance actually flipped.
    pub async fn refresh_system_scheme(&self) {
        let scheme = self.appearance.scheme();
        let event = {
            let mut state = self.state.write().await;
            if state.last_scheme == scheme {
                return;
            }
            let before = EffectiveAppearance::derive(state.preference, state.last_scheme);
            state.last_scheme = scheme;
            let after = EffectiveAppearance::derive(state.preference, scheme);
            if before == after {
                return;
            }
            debug!(scheme = %scheme, appearance = %after, "System scheme changed");
            ThemeEvent::Changed { preference: state.preference, appearance: after }
        };

        self.publish_snapshot().await;
        let _ = self.events_tx.send(event);
    }

    /// Subscribe to the current state and its changes
    ///
    /// Dropping the receiver is the unsubscribe.
    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Subscribe to discrete theme events
    pub fn subscribe_events(&self) -> broadcast::Receiver<ThemeEvent> {
        self.events_tx.subscribe()
    }

    /// Persist the latest in-memory preference until no newer value is
    /// pending
    ///
    /// Runs on at most one caller at a time (`writing` flag). Each pass
    /// re-reads the current value, so a value superseded mid-write is
    /// never the last one persisted. Failures for superseded values are
    /// logged and dropped; a failure for the latest value is surfaced.
    async fn drain_writes(&self) {
        loop {
            let (value, ticket) = {
                let state = self.state.read().await;
                (state.preference, state.write_seq)
            };

            let result = self.storage.set(THEME_STORAGE_KEY, value.as_str()).await;

            let mut state = self.state.write().await;
            let superseded = ticket != state.write_seq;
            match result {
                Ok(()) => {
                    if superseded {
                        continue;
                    }
                    state.writing = false;
                    debug!(preference = %value, "Theme preference persisted");
                    return;
                }
                Err(e) => {
                    if superseded {
                        warn!(error = %e, preference = %value, "Superseded theme write failed");
                        continue;
                    }
                    state.writing = false;
                    state.last_error = Some(ThemeError::WriteFailure(e.to_string()));
                    let preference = state.preference;
                    drop(state);

                    error!(error = %e, preference = %preference, "Failed to persist theme preference");
                    self.publish_snapshot().await;
                    let _ = self.events_tx.send(ThemeEvent::PersistFailed {
                        preference,
                        message: e.to_string(),
                    });
                    return;
                }
            }
        }
    }

    /// Push the current state into the watch channel
    ///
    /// `send_if_modified` keeps equal snapshots from waking subscribers,
    /// so one logical change produces at most one notification.
    async fn publish_snapshot(&self) {
        let snapshot = {
            let state = self.state.read().await;
            ThemeSnapshot {
                preference: state.preference,
                appearance: EffectiveAppearance::derive(state.preference, state.last_scheme),
                is_loading: state.load_state != LoadState::Ready,
                last_error: state.last_error.clone(),
            }
        };
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{FixedAppearance, SharedAppearance};
    use storage::MemoryPreferenceStorage;

    fn store_with(
        storage: Arc<MemoryPreferenceStorage>,
        scheme: SystemScheme,
    ) -> ThemeStore {
        ThemeStore::new(storage, Arc::new(FixedAppearance::new(scheme)))
    }

    // ==========================================================================
    // Derivation
    // ==========================================================================

    #[test]
    fn test_derivation_truth_table() {
        use EffectiveAppearance::{Dark, Light};
        use SystemScheme as S;
        use ThemePreference as P;

        let cases = [
            (P::Dark, S::Light, Dark),
            (P::Dark, S::Dark, Dark),
            (P::Dark, S::Unknown, Dark),
            (P::Light, S::Light, Light),
            (P::Light, S::Dark, Light),
            (P::Light, S::Unknown, Light),
            (P::System, S::Light, Light),
            (P::System, S::Dark, Dark),
            (P::System, S::Unknown, Light),
        ];

        for (preference, scheme, expected) in cases {
            assert_eq!(
                EffectiveAppearance::derive(preference, scheme),
                expected,
                "preference={preference} scheme={scheme}"
            );
        }
    }

    #[test]
    fn test_preference_parse_round_trip() {
        for preference in ThemePreference::all() {
            assert_eq!(
                preference.as_str().parse::<ThemePreference>().unwrap(),
                preference
            );
        }
        assert!(matches!(
            "purple".parse::<ThemePreference>(),
            Err(ThemeError::InvalidPreference(_))
        ));
    }

    #[test]
    fn test_preference_serde_matches_persisted_token() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
        let parsed: ThemePreference = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, ThemePreference::System);
    }

    // ==========================================================================
    // Initialization
    // ==========================================================================

    #[tokio::test]
    async fn test_initialize_without_persisted_value() {
        let store = store_with(Arc::new(MemoryPreferenceStorage::new()), SystemScheme::Light);
        assert!(store.is_loading().await);

        store.initialize().await;

        assert_eq!(store.load_state().await, LoadState::Ready);
        assert!(!store.is_loading().await);
        assert_eq!(store.preference().await, ThemePreference::System);
        assert_eq!(store.last_error().await, None);
    }

    #[tokio::test]
    async fn test_initialize_reads_persisted_value() {
        let storage = Arc::new(MemoryPreferenceStorage::with_value(
            THEME_STORAGE_KEY,
            "dark",
        ));
        let store = store_with(storage, SystemScheme::Light);
        store.initialize().await;

        assert_eq!(store.preference().await, ThemePreference::Dark);
        assert_eq!(
            store.effective_appearance().await,
            EffectiveAppearance::Dark
        );
    }

    #[tokio::test]
    async fn test_initialize_corrupt_value_falls_back_to_system() {
        let storage = Arc::new(MemoryPreferenceStorage::with_value(
            THEME_STORAGE_KEY,
            "purple",
        ));
        let store = store_with(storage, SystemScheme::Light);
        store.initialize().await;

        assert_eq!(store.preference().await, ThemePreference::System);
        assert!(matches!(
            store.last_error().await,
            Some(ThemeError::ReadFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_initialize_read_failure_falls_back_to_system() {
        let storage = Arc::new(MemoryPreferenceStorage::with_value(
            THEME_STORAGE_KEY,
            "dark",
        ));
        storage.set_fail_reads(true);
        let store = store_with(storage, SystemScheme::Light);
        store.initialize().await;

        assert_eq!(store.load_state().await, LoadState::Ready);
        assert_eq!(store.preference().await, ThemePreference::System);
        assert!(matches!(
            store.last_error().await,
            Some(ThemeError::ReadFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_initialize_is_reentrant() {
        let storage = Arc::new(MemoryPreferenceStorage::with_value(
            THEME_STORAGE_KEY,
            "dark",
        ));
        let store = store_with(Arc::clone(&storage), SystemScheme::Light);
        store.initialize().await;
        store.set_preference(ThemePreference::Light).await;

        // Ready is terminal: a second initialize must not reload.
        store.initialize().await;
        assert_eq!(store.preference().await, ThemePreference::Light);
    }

    #[tokio::test]
    async fn test_loaded_event_emitted_once() {
        let store = store_with(Arc::new(MemoryPreferenceStorage::new()), SystemScheme::Light);
        let mut events = store.subscribe_events();

        store.initialize().await;
        store.initialize().await;

        assert_eq!(events.try_recv().unwrap(), ThemeEvent::Loaded);
        assert!(events.try_recv().is_err());
    }

    // ==========================================================================
    // set_preference
    // ==========================================================================

    #[tokio::test]
    async fn test_set_preference_updates_memory_and_persists() {
        let storage = Arc::new(MemoryPreferenceStorage::new());
        let store = store_with(Arc::clone(&storage), SystemScheme::Light);
        store.initialize().await;

        store.set_preference(ThemePreference::Dark).await;

        assert_eq!(store.preference().await, ThemePreference::Dark);
        assert_eq!(storage.snapshot(THEME_STORAGE_KEY), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_set_preference_idempotent() {
        let storage = Arc::new(MemoryPreferenceStorage::new());
        let store = store_with(Arc::clone(&storage), SystemScheme::Light);
        store.initialize().await;

        store.set_preference(ThemePreference::Dark).await;
        let writes_after_first = storage.write_count();
        let mut events = store.subscribe_events();

        store.set_preference(ThemePreference::Dark).await;

        assert_eq!(storage.write_count(), writes_after_first);
        assert!(events.try_recv().is_err());
        assert_eq!(
            store.effective_appearance().await,
            EffectiveAppearance::Dark
        );
    }

    #[tokio::test]
    async fn test_set_preference_emits_single_changed_event() {
        let store = store_with(Arc::new(MemoryPreferenceStorage::new()), SystemScheme::Light);
        store.initialize().await;
        let mut events = store.subscribe_events();

        store.set_preference(ThemePreference::Dark).await;

        assert_eq!(
            events.try_recv().unwrap(),
            ThemeEvent::Changed {
                preference: ThemePreference::Dark,
                appearance: EffectiveAppearance::Dark,
            }
        );
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_set_preference_visible_before_persistence_settles() {
        let storage = Arc::new(MemoryPreferenceStorage::new());
        storage.hold_writes();
        let store = Arc::new(store_with(Arc::clone(&storage), SystemScheme::Light));
        // Initialize before holding affects nothing: reads are not gated.
        store.initialize().await;

        let setter = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.set_preference(ThemePreference::Dark).await })
        };
        tokio::task::yield_now().await;

        // In-memory state reflects the call although the write is parked.
        assert_eq!(store.preference().await, ThemePreference::Dark);
        assert_eq!(storage.snapshot(THEME_STORAGE_KEY), None);

        storage.release_writes();
        setter.await.unwrap();
        assert_eq!(storage.snapshot(THEME_STORAGE_KEY), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_last_write_wins_under_overlap() {
        let storage = Arc::new(MemoryPreferenceStorage::new());
        storage.hold_writes();
        let store = Arc::new(store_with(Arc::clone(&storage), SystemScheme::Light));
        store.initialize().await;

        let first = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.set_preference(ThemePreference::Light).await })
        };
        tokio::task::yield_now().await;

        // Second call lands while the first write is parked.
        store.set_preference(ThemePreference::Dark).await;
        storage.release_writes();
        first.await.unwrap();

        assert_eq!(store.preference().await, ThemePreference::Dark);
        assert_eq!(storage.snapshot(THEME_STORAGE_KEY), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_and_sets_error() {
        let storage = Arc::new(MemoryPreferenceStorage::new());
        let store = store_with(Arc::clone(&storage), SystemScheme::Light);
        store.initialize().await;
        storage.set_fail_writes(true);
        let mut events = store.subscribe_events();

        store.set_preference(ThemePreference::Dark).await;

        // The user's intent wins for the session.
        assert_eq!(store.preference().await, ThemePreference::Dark);
        assert!(matches!(
            store.last_error().await,
            Some(ThemeError::WriteFailure(_))
        ));

        assert_eq!(
            events.try_recv().unwrap(),
            ThemeEvent::Changed {
                preference: ThemePreference::Dark,
                appearance: EffectiveAppearance::Dark,
            }
        );
        assert!(matches!(
            events.try_recv().unwrap(),
            ThemeEvent::PersistFailed { preference: ThemePreference::Dark, .. }
        ));
    }

    #[tokio::test]
    async fn test_retry_same_value_after_write_failure() {
        let storage = Arc::new(MemoryPreferenceStorage::new());
        let store = store_with(Arc::clone(&storage), SystemScheme::Light);
        store.initialize().await;

        storage.set_fail_writes(true);
        store.set_preference(ThemePreference::Dark).await;
        assert!(store.last_error().await.is_some());

        // Same value again once writes work: persists and clears the error.
        storage.set_fail_writes(false);
        store.set_preference(ThemePreference::Dark).await;

        assert_eq!(storage.snapshot(THEME_STORAGE_KEY), Some("dark".to_string()));
        assert_eq!(store.last_error().await, None);
    }

    // ==========================================================================
    // OS appearance changes
    // ==========================================================================

    #[tokio::test]
    async fn test_os_flip_under_system_notifies_once() {
        let appearance = Arc::new(SharedAppearance::new(SystemScheme::Light));
        let store = ThemeStore::new(
            Arc::new(MemoryPreferenceStorage::new()),
            Arc::clone(&appearance) as Arc<dyn AppearanceSource>,
        );
        store.initialize().await;
        let mut events = store.subscribe_events();
        let mut snapshots = store.subscribe();
        snapshots.mark_unchanged();

        appearance.set(SystemScheme::Dark);
        store.refresh_system_scheme().await;

        assert_eq!(
            store.effective_appearance().await,
            EffectiveAppearance::Dark
        );
        assert_eq!(
            events.try_recv().unwrap(),
            ThemeEvent::Changed {
                preference: ThemePreference::System,
                appearance: EffectiveAppearance::Dark,
            }
        );
        assert!(events.try_recv().is_err());
        assert!(snapshots.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_refresh_is_ignored() {
        let appearance = Arc::new(SharedAppearance::new(SystemScheme::Light));
        let store = ThemeStore::new(
            Arc::new(MemoryPreferenceStorage::new()),
            Arc::clone(&appearance) as Arc<dyn AppearanceSource>,
        );
        store.initialize().await;
        let mut events = store.subscribe_events();

        appearance.set(SystemScheme::Dark);
        store.refresh_system_scheme().await;
        store.refresh_system_scheme().await;

        assert_eq!(
            events.try_recv().unwrap(),
            ThemeEvent::Changed {
                preference: ThemePreference::System,
                appearance: EffectiveAppearance::Dark,
            }
        );
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_os_flip_under_explicit_preference_is_silent() {
        let appearance = Arc::new(SharedAppearance::new(SystemScheme::Light));
        let store = ThemeStore::new(
            Arc::new(MemoryPreferenceStorage::new()),
            Arc::clone(&appearance) as Arc<dyn AppearanceSource>,
        );
        store.initialize().await;
        store.set_preference(ThemePreference::Dark).await;
        let mut events = store.subscribe_events();

        appearance.set(SystemScheme::Dark);
        store.refresh_system_scheme().await;

        // Appearance was already dark; nothing changed, nothing notified.
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_effective_appearance_tracks_live_source() {
        let appearance = Arc::new(SharedAppearance::new(SystemScheme::Light));
        let store = ThemeStore::new(
            Arc::new(MemoryPreferenceStorage::new()),
            Arc::clone(&appearance) as Arc<dyn AppearanceSource>,
        );
        store.initialize().await;

        assert_eq!(
            store.effective_appearance().await,
            EffectiveAppearance::Light
        );

        // The derivation reads the live signal even before refresh.
        appearance.set(SystemScheme::Dark);
        assert_eq!(
            store.effective_appearance().await,
            EffectiveAppearance::Dark
        );
    }

    // ==========================================================================
    // Subscriptions
    // ==========================================================================

    #[tokio::test]
    async fn test_watch_carries_current_value() {
        let store = store_with(Arc::new(MemoryPreferenceStorage::new()), SystemScheme::Light);
        store.initialize().await;

        let rx = store.subscribe();
        assert!(!rx.borrow().is_loading);
        assert_eq!(rx.borrow().preference, ThemePreference::System);

        store.set_preference(ThemePreference::Dark).await;
        assert_eq!(rx.borrow().preference, ThemePreference::Dark);
        assert_eq!(rx.borrow().appearance, EffectiveAppearance::Dark);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_each_notified() {
        let store = store_with(Arc::new(MemoryPreferenceStorage::new()), SystemScheme::Light);
        store.initialize().await;

        let mut a = store.subscribe_events();
        let mut b = store.subscribe_events();

        store.set_preference(ThemePreference::Dark).await;

        assert!(matches!(a.try_recv().unwrap(), ThemeEvent::Changed { .. }));
        assert!(matches!(b.try_recv().unwrap(), ThemeEvent::Changed { .. }));
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_block_store() {
        let store = store_with(Arc::new(MemoryPreferenceStorage::new()), SystemScheme::Light);
        store.initialize().await;

        drop(store.subscribe_events());
        drop(store.subscribe());

        store.set_preference(ThemePreference::Dark).await;
        assert_eq!(store.preference().await, ThemePreference::Dark);
    }
}
