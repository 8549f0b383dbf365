//! Navigation menu state: the mobile menu and the per-item dropdowns.
//!
//! # Design
//! - The menu and dropdown flags live here; the DOM only mirrors them as
//!   `active` / `dropdown-open` classes.
//! - Whether a dropdown parent reacts to hover or to clicks depends on the
//!   [`ViewportMode`]. [`NavModePolicy`] decides if that mode follows the live
//!   width or stays frozen at the width seen during initialization.

use serde::Deserialize;

/// Class mirrored onto the toggle control and menu container while open.
pub const MENU_OPEN_CLASS: &str = "active";
/// Class mirrored onto a dropdown item while its submenu is open.
pub const DROPDOWN_OPEN_CLASS: &str = "dropdown-open";
/// Id of the mobile menu toggle control.
pub const TOGGLE_ID: &str = "navToggle";
/// Id of the menu container.
pub const MENU_ID: &str = "navMenu";
/// Selector for every navigation link.
pub const LINK_SELECTOR: &str = ".nav-link";
/// Selector for top-level items owning a submenu.
pub const DROPDOWN_ITEM_SELECTOR: &str = ".nav-item.has-dropdown";

/// Interaction mode derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    /// Wider than the breakpoint: dropdowns open on hover.
    Desktop,
    /// At or below the breakpoint: dropdowns open on click.
    Mobile,
}

impl ViewportMode {
    /// Classify a viewport width against the breakpoint.
    #[must_use]
    pub fn for_width(width: f64, breakpoint_px: u32) -> Self {
        if width > f64::from(breakpoint_px) {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// When the dropdown interaction mode is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavModePolicy {
    /// Re-evaluate the width on every interaction.
    #[default]
    PerInteraction,
    /// Keep the mode seen at initialization for the page lifetime.
    FrozenAtInit,
}

/// Navigation input, already classified by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The mobile toggle control was activated.
    ToggleActivated,
    /// A navigation link that is not a dropdown parent was activated.
    LinkActivated,
    /// The link heading dropdown item `item` was activated.
    ParentLinkActivated {
        /// Index of the dropdown item.
        item: usize,
    },
    /// A click reached the document.
    DocumentClicked {
        /// The click target lies within the toggle control.
        inside_toggle: bool,
        /// The click target lies within the menu container.
        inside_menu: bool,
    },
    /// The pointer entered dropdown item `item`.
    PointerEntered {
        /// Index of the dropdown item.
        item: usize,
    },
    /// The pointer left dropdown item `item`.
    PointerLeft {
        /// Index of the dropdown item.
        item: usize,
    },
    /// The viewport was resized.
    Resized,
}

/// What the adapter must do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavOutcome {
    /// Suppress the browser's default action (link navigation).
    pub prevent_default: bool,
    /// State changed; classes must be repainted.
    pub changed: bool,
}

/// Menu and dropdown flags plus the inputs needed to pick a viewport mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    /// The mobile menu is open.
    pub menu_open: bool,
    /// Per-item submenu visibility, indexed like the dropdown items.
    pub dropdown_open: Vec<bool>,
    breakpoint_px: u32,
    policy: NavModePolicy,
    initial_mode: ViewportMode,
}

impl NavState {
    /// Fresh state for `items` dropdown items at the initial viewport width.
    #[must_use]
    pub fn new(items: usize, width: f64, breakpoint_px: u32, policy: NavModePolicy) -> Self {
        Self {
            menu_open: false,
            dropdown_open: vec![false; items],
            breakpoint_px,
            policy,
            initial_mode: ViewportMode::for_width(width, breakpoint_px),
        }
    }

    /// Mode that governs an interaction happening at `width`.
    #[must_use]
    pub fn mode(&self, width: f64) -> ViewportMode {
        match self.policy {
            NavModePolicy::PerInteraction => ViewportMode::for_width(width, self.breakpoint_px),
            NavModePolicy::FrozenAtInit => self.initial_mode,
        }
    }

    /// Whether dropdown item `item` is open.
    #[must_use]
    pub fn is_dropdown_open(&self, item: usize) -> bool {
        self.dropdown_open.get(item).copied().unwrap_or(false)
    }

    /// Apply one event observed at viewport `width`.
    pub fn apply(&mut self, event: NavEvent, width: f64) -> NavOutcome {
        let mode = self.mode(width);
        match event {
            NavEvent::ToggleActivated => {
                self.menu_open = !self.menu_open;
                changed()
            }
            NavEvent::LinkActivated => self.close_menu(),
            NavEvent::ParentLinkActivated { item } => self.parent_link(item, mode, width),
            NavEvent::DocumentClicked {
                inside_toggle,
                inside_menu,
            } => {
                if inside_toggle || inside_menu {
                    NavOutcome::default()
                } else {
                    self.close_menu()
                }
            }
            NavEvent::PointerEntered { item } => self.hover(item, mode, true),
            NavEvent::PointerLeft { item } => self.hover(item, mode, false),
            NavEvent::Resized => {
                if ViewportMode::for_width(width, self.breakpoint_px) == ViewportMode::Desktop {
                    self.close_dropdowns()
                } else {
                    NavOutcome::default()
                }
            }
        }
    }

    fn parent_link(&mut self, item: usize, mode: ViewportMode, width: f64) -> NavOutcome {
        let mut outcome = match self.policy {
            NavModePolicy::PerInteraction => NavOutcome {
                prevent_default: true,
                changed: false,
            },
            // Navigation follows the live width even when the dropdown wiring is frozen.
            NavModePolicy::FrozenAtInit => {
                if ViewportMode::for_width(width, self.breakpoint_px) == ViewportMode::Desktop {
                    NavOutcome {
                        prevent_default: true,
                        changed: false,
                    }
                } else {
                    self.close_menu()
                }
            }
        };
        if mode == ViewportMode::Mobile {
            outcome.prevent_default = true;
            if let Some(open) = self.dropdown_open.get_mut(item) {
                *open = !*open;
                outcome.changed = true;
            }
        }
        outcome
    }

    fn close_menu(&mut self) -> NavOutcome {
        let was_open = self.menu_open;
        self.menu_open = false;
        NavOutcome {
            prevent_default: false,
            changed: was_open,
        }
    }

    fn close_dropdowns(&mut self) -> NavOutcome {
        let any_open = self.dropdown_open.iter().any(|open| *open);
        self.dropdown_open.iter_mut().for_each(|open| *open = false);
        NavOutcome {
            prevent_default: false,
            changed: any_open,
        }
    }

    fn hover(&mut self, item: usize, mode: ViewportMode, entering: bool) -> NavOutcome {
        if mode != ViewportMode::Desktop {
            return NavOutcome::default();
        }
        match self.dropdown_open.get_mut(item) {
            Some(open) if *open != entering => {
                *open = entering;
                changed()
            }
            _ => NavOutcome::default(),
        }
    }
}

const fn changed() -> NavOutcome {
    NavOutcome {
        prevent_default: false,
        changed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f64 = 1280.0;
    const MOBILE: f64 = 375.0;

    fn state(width: f64, policy: NavModePolicy) -> NavState {
        NavState::new(3, width, 767, policy)
    }

    #[test]
    fn breakpoint_is_inclusive_for_mobile() {
        assert_eq!(ViewportMode::for_width(767.0, 767), ViewportMode::Mobile);
        assert_eq!(ViewportMode::for_width(768.0, 767), ViewportMode::Desktop);
    }

    #[test]
    fn toggle_flips_menu() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        assert!(nav.apply(NavEvent::ToggleActivated, MOBILE).changed);
        assert!(nav.menu_open);
        nav.apply(NavEvent::ToggleActivated, MOBILE);
        assert!(!nav.menu_open);
    }

    #[test]
    fn plain_link_closes_menu() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        nav.apply(NavEvent::ToggleActivated, MOBILE);
        let outcome = nav.apply(NavEvent::LinkActivated, MOBILE);
        assert!(!nav.menu_open);
        assert!(outcome.changed);
        assert!(!outcome.prevent_default);
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        nav.apply(NavEvent::ToggleActivated, MOBILE);
        nav.apply(
            NavEvent::DocumentClicked {
                inside_toggle: false,
                inside_menu: false,
            },
            MOBILE,
        );
        assert!(!nav.menu_open);
    }

    #[test]
    fn inside_click_keeps_menu_open() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        nav.apply(NavEvent::ToggleActivated, MOBILE);
        let outcome = nav.apply(
            NavEvent::DocumentClicked {
                inside_toggle: false,
                inside_menu: true,
            },
            MOBILE,
        );
        assert!(nav.menu_open);
        assert!(!outcome.changed);

        nav.apply(
            NavEvent::DocumentClicked {
                inside_toggle: true,
                inside_menu: false,
            },
            MOBILE,
        );
        assert!(nav.menu_open);
    }

    #[test]
    fn desktop_hover_opens_and_closes_dropdown() {
        let mut nav = state(DESKTOP, NavModePolicy::PerInteraction);
        nav.apply(NavEvent::PointerEntered { item: 1 }, DESKTOP);
        assert!(nav.is_dropdown_open(1));
        assert!(!nav.is_dropdown_open(0));
        nav.apply(NavEvent::PointerLeft { item: 1 }, DESKTOP);
        assert!(!nav.is_dropdown_open(1));
    }

    #[test]
    fn desktop_parent_click_only_prevents_navigation() {
        let mut nav = state(DESKTOP, NavModePolicy::PerInteraction);
        nav.apply(NavEvent::ToggleActivated, DESKTOP);
        let outcome = nav.apply(NavEvent::ParentLinkActivated { item: 0 }, DESKTOP);
        assert!(outcome.prevent_default);
        assert!(!outcome.changed);
        assert!(nav.menu_open);
        assert!(!nav.is_dropdown_open(0));
    }

    #[test]
    fn mobile_parent_click_toggles_dropdown() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        let outcome = nav.apply(NavEvent::ParentLinkActivated { item: 2 }, MOBILE);
        assert!(outcome.prevent_default);
        assert!(nav.is_dropdown_open(2));
        nav.apply(NavEvent::ParentLinkActivated { item: 2 }, MOBILE);
        assert!(!nav.is_dropdown_open(2));
    }

    #[test]
    fn mobile_hover_is_ignored() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        let outcome = nav.apply(NavEvent::PointerEntered { item: 0 }, MOBILE);
        assert!(!outcome.changed);
        assert!(!nav.is_dropdown_open(0));
    }

    #[test]
    fn resize_to_desktop_clears_dropdowns() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        nav.apply(NavEvent::ParentLinkActivated { item: 0 }, MOBILE);
        nav.apply(NavEvent::ParentLinkActivated { item: 1 }, MOBILE);

        let outcome = nav.apply(NavEvent::Resized, 600.0);
        assert!(!outcome.changed);
        assert!(nav.is_dropdown_open(0));

        let outcome = nav.apply(NavEvent::Resized, DESKTOP);
        assert!(outcome.changed);
        assert!(nav.dropdown_open.iter().all(|open| !open));
    }

    #[test]
    fn per_interaction_mode_follows_live_width() {
        let mut nav = state(DESKTOP, NavModePolicy::PerInteraction);
        nav.apply(NavEvent::ParentLinkActivated { item: 0 }, MOBILE);
        assert!(nav.is_dropdown_open(0));
    }

    #[test]
    fn frozen_mode_keeps_initial_wiring() {
        let mut nav = state(DESKTOP, NavModePolicy::FrozenAtInit);
        assert_eq!(nav.mode(MOBILE), ViewportMode::Desktop);

        nav.apply(NavEvent::ParentLinkActivated { item: 0 }, MOBILE);
        assert!(!nav.is_dropdown_open(0));

        nav.apply(NavEvent::PointerEntered { item: 0 }, MOBILE);
        assert!(nav.is_dropdown_open(0));

        // Resize still clears flags even though the mode is frozen.
        nav.apply(NavEvent::Resized, DESKTOP);
        assert!(!nav.is_dropdown_open(0));
    }

    #[test]
    fn frozen_desktop_parent_click_at_mobile_width_navigates() {
        let mut nav = NavState::new(1, DESKTOP, 767, NavModePolicy::FrozenAtInit);
        nav.apply(NavEvent::ToggleActivated, MOBILE);
        let outcome = nav.apply(NavEvent::ParentLinkActivated { item: 0 }, MOBILE);
        assert!(!outcome.prevent_default);
        assert!(outcome.changed);
        assert!(!nav.menu_open);
        assert!(!nav.is_dropdown_open(0));
    }

    #[test]
    fn frozen_mobile_parent_click_toggles_and_closes_menu() {
        let mut nav = state(MOBILE, NavModePolicy::FrozenAtInit);
        nav.apply(NavEvent::ToggleActivated, MOBILE);
        let outcome = nav.apply(NavEvent::ParentLinkActivated { item: 1 }, MOBILE);
        assert!(outcome.prevent_default);
        assert!(nav.is_dropdown_open(1));
        assert!(!nav.menu_open);

        // Wider than the breakpoint the frozen click wiring still toggles.
        let outcome = nav.apply(NavEvent::ParentLinkActivated { item: 1 }, DESKTOP);
        assert!(outcome.prevent_default);
        assert!(!nav.is_dropdown_open(1));
    }

    #[test]
    fn out_of_range_items_are_ignored() {
        let mut nav = state(MOBILE, NavModePolicy::PerInteraction);
        let outcome = nav.apply(NavEvent::ParentLinkActivated { item: 9 }, MOBILE);
        assert!(outcome.prevent_default);
        assert!(!outcome.changed);
        assert!(!nav.is_dropdown_open(9));
    }
}
