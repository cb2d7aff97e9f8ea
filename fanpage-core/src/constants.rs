//! Default keys, element ids and tuning values for the fan page.
//!
//! `PageConfig::default` is built from these, and the embedded
//! `assets/page.json` mirrors them.

// Storage keys -------------------------------------------------------------
pub const THEME_KEY: &str = "fanpage_theme";
pub const FONT_SCALE_KEY: &str = "fanpage_font_scale";

// Font scale ---------------------------------------------------------------
pub const BASE_FONT_PX: f64 = 16.0;
pub const FONT_SCALE_DEFAULT: f64 = 1.0;
pub const FONT_SCALE_STEP: f64 = 0.1;
pub const FONT_SCALE_MIN: f64 = 0.8;
pub const FONT_SCALE_MAX: f64 = 1.5;
/// Exclusive bounds for a stored scale to be accepted on load.
pub const FONT_SCALE_LOAD_FLOOR: f64 = 0.7;
pub const FONT_SCALE_LOAD_CEILING: f64 = 1.6;

// Theme --------------------------------------------------------------------
pub const LIGHT_THEME_CLASS: &str = "light-theme";

// Accessibility controls ---------------------------------------------------
pub const FONT_INCREASE_ID: &str = "font-increase";
pub const FONT_DECREASE_ID: &str = "font-decrease";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Navigation ---------------------------------------------------------------
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_LIST_ID: &str = "nav-list";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_OPEN_CLASS: &str = "open";

// Contact forms ------------------------------------------------------------
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FLOATING_FORM_ID: &str = "floating-contact-form-el";
pub const FORM_STATUS_SELECTOR: &str = ".form-status";
pub const FIELD_ERROR_CLASS: &str = "error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const STATUS_FAILURE_COLOR: &str = "#f97373";
pub const STATUS_SUCCESS_COLOR: &str = "#22c55e";
pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

// Floating panel -----------------------------------------------------------
pub const FLOATING_PANEL_ID: &str = "floating-contact";
pub const FLOATING_TOGGLE_ID: &str = "contact-toggle";
pub const FLOATING_BODY_ID: &str = "floating-contact-form";
pub const FLOATING_CLOSE_ID: &str = "floating-contact-close";
pub const FLOATING_VISIBLE_CLASS: &str = "visible";
pub const SCROLL_THRESHOLD_PX: f64 = 200.0;
pub const FOCUSABLE_FIELD_QUERY: &str = "input, textarea";
