//! Floating contact panel.
//!
//! Two independent flags: `visible` follows the scroll offset, `expanded`
//! follows the toggle and close buttons. Hiding the panel always collapses
//! the form body as well.
use crate::constants::SCROLL_THRESHOLD_PX;

/// Focus change the DOM layer has to perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffect {
    None,
    /// Move focus to the first input or textarea inside the body.
    FocusFirstField,
    /// Move focus back to the toggle button.
    FocusToggle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingPanel {
    threshold: f64,
    visible: bool,
    expanded: bool,
}

impl Default for FloatingPanel {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

impl FloatingPanel {
    /// Hidden and collapsed.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self::with_state(threshold, false, false)
    }

    /// Resume from flags read off the page at bind time.
    #[must_use]
    pub const fn with_state(threshold: f64, visible: bool, expanded: bool) -> Self {
        Self {
            threshold,
            visible,
            expanded: visible && expanded,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Apply a vertical scroll offset. Strictly above the threshold shows the
    /// panel; at or below it hides the panel and collapses the body.
    pub fn on_scroll(&mut self, offset_y: f64) {
        if offset_y > self.threshold {
            self.visible = true;
        } else {
            self.visible = false;
            self.expanded = false;
        }
    }

    /// Flip the body open or closed.
    pub const fn toggle(&mut self) -> PanelEffect {
        self.expanded = !self.expanded;
        if self.expanded {
            PanelEffect::FocusFirstField
        } else {
            PanelEffect::None
        }
    }

    /// Collapse the body and hand focus back to the toggle.
    pub const fn close(&mut self) -> PanelEffect {
        self.expanded = false;
        PanelEffect::FocusToggle
    }
}
