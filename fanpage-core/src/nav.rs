//! Responsive navigation menu.
//!
//! The menu keeps no state of its own; the open flag is whatever the DOM
//! class says when the event fires.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The hamburger button was pressed.
    Toggle,
    /// A navigation link was followed.
    LinkFollowed,
}

/// Whether the menu should be open after `action`.
#[must_use]
pub const fn next_open(action: NavAction, currently_open: bool) -> bool {
    match action {
        NavAction::Toggle => !currently_open,
        NavAction::LinkFollowed => false,
    }
}
