//! Fan page core
//!
//! Platform-agnostic logic behind the fan page enhancements: persisted display
//! preferences, the navigation menu, contact form validation and the floating
//! contact panel. Nothing here touches the browser; `fanpage-web` wires these
//! types to the DOM.

pub mod config;
pub mod constants;
pub mod i18n;
pub mod nav;
pub mod panel;
pub mod prefs;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::{
    AccessibilityIds, ContactConfig, FloatingConfig, NavigationIds, PageConfig, StorageKeys,
};
pub use nav::{NavAction, next_open};
pub use panel::{FloatingPanel, PanelEffect};
pub use prefs::{PreferenceError, Preferences, PreferencesController, Theme, parse_stored_scale};
pub use store::{KeyValueStore, MemoryStore};
pub use validation::{
    ContactSubmission, FailureKind, Field, FieldError, FormStatus, ValidationReport, validate,
};
