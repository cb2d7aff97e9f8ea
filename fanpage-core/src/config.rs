//! Page wiring configuration: storage keys, element ids, class names and
//! tuning values the browser layer binds against.
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONTACT_FORM_ID, ERROR_MESSAGE_CLASS, FIELD_ERROR_CLASS, FLOATING_BODY_ID, FLOATING_CLOSE_ID,
    FLOATING_FORM_ID, FLOATING_PANEL_ID, FLOATING_TOGGLE_ID, FLOATING_VISIBLE_CLASS,
    FONT_DECREASE_ID, FONT_INCREASE_ID, FONT_SCALE_KEY, FORM_STATUS_SELECTOR, LIGHT_THEME_CLASS,
    NAV_LINK_SELECTOR, NAV_LIST_ID, NAV_OPEN_CLASS, NAV_TOGGLE_ID, SCROLL_THRESHOLD_PX,
    STATUS_FAILURE_COLOR, STATUS_SUCCESS_COLOR, THEME_KEY, THEME_TOGGLE_ID,
};

const DEFAULT_PAGE_DATA: &str = include_str!("../assets/page.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    pub storage: StorageKeys,
    pub accessibility: AccessibilityIds,
    pub navigation: NavigationIds,
    pub contact: ContactConfig,
    pub floating: FloatingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub font_scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityIds {
    pub font_increase: String,
    pub font_decrease: String,
    pub theme_toggle: String,
    pub light_theme_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationIds {
    pub toggle: String,
    pub list: String,
    pub link_selector: String,
    pub open_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Ids of every form that gets validation, in binding order.
    pub form_ids: Vec<String>,
    pub status_selector: String,
    pub error_class: String,
    pub error_message_class: String,
    pub failure_color: String,
    pub success_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    pub panel: String,
    pub toggle: String,
    pub body: String,
    pub close: String,
    pub visible_class: String,
    pub scroll_threshold: f64,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: THEME_KEY.to_string(),
            font_scale: FONT_SCALE_KEY.to_string(),
        }
    }
}

impl Default for AccessibilityIds {
    fn default() -> Self {
        Self {
            font_increase: FONT_INCREASE_ID.to_string(),
            font_decrease: FONT_DECREASE_ID.to_string(),
            theme_toggle: THEME_TOGGLE_ID.to_string(),
            light_theme_class: LIGHT_THEME_CLASS.to_string(),
        }
    }
}

impl Default for NavigationIds {
    fn default() -> Self {
        Self {
            toggle: NAV_TOGGLE_ID.to_string(),
            list: NAV_LIST_ID.to_string(),
            link_selector: NAV_LINK_SELECTOR.to_string(),
            open_class: NAV_OPEN_CLASS.to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_ids: vec![CONTACT_FORM_ID.to_string(), FLOATING_FORM_ID.to_string()],
            status_selector: FORM_STATUS_SELECTOR.to_string(),
            error_class: FIELD_ERROR_CLASS.to_string(),
            error_message_class: ERROR_MESSAGE_CLASS.to_string(),
            failure_color: STATUS_FAILURE_COLOR.to_string(),
            success_color: STATUS_SUCCESS_COLOR.to_string(),
        }
    }
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            panel: FLOATING_PANEL_ID.to_string(),
            toggle: FLOATING_TOGGLE_ID.to_string(),
            body: FLOATING_BODY_ID.to_string(),
            close: FLOATING_CLOSE_ID.to_string(),
            visible_class: FLOATING_VISIBLE_CLASS.to_string(),
            scroll_threshold: SCROLL_THRESHOLD_PX,
        }
    }
}

impl PageConfig {
    /// Configuration shipped with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_PAGE_DATA).unwrap_or_default()
    }

    /// Parse a page-provided override. Missing sections and fields keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Like [`PageConfig::from_json`], but malformed input is logged and the
    /// static configuration is used instead.
    #[must_use]
    pub fn from_json_or_static(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            log::warn!("ignoring malformed page config: {err}");
            Self::load_from_static()
        })
    }
}
