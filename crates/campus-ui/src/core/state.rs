//! Page state owned by the behavior controller.
//!
//! # Design
//! - One explicit state object replaces class membership as the source of
//!   truth; adapters mirror it onto the document.
//! - Mutations return the plan or outcome to paint and never touch the DOM.

use crate::core::category::CategoryHighlight;
use crate::core::nav::NavState;
use crate::core::prefs::PreferenceStore;
use crate::core::reveal::RevealSet;
use crate::core::theme::{NAV_LINK_HOVER_BACKGROUND, ThemeId, ThemePlan};
use crate::error::UiResult;

/// Presentation state of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    /// Applied theme, `None` until the first application.
    pub theme: Option<ThemeId>,
    /// Menu and dropdown flags.
    pub nav: NavState,
    /// Cards already revealed.
    pub revealed: RevealSet,
    /// Selected category link.
    pub category: CategoryHighlight,
}

impl PageState {
    /// Initial state around a navigation state.
    #[must_use]
    pub fn new(nav: NavState) -> Self {
        Self {
            theme: None,
            nav,
            revealed: RevealSet::default(),
            category: CategoryHighlight::default(),
        }
    }

    /// Resolve `requested`, record it as the current theme and persist it.
    ///
    /// The plan is returned even when persisting fails so the page still
    /// repaints; the second element reports the storage result.
    pub fn apply_theme(
        &mut self,
        requested: &str,
        store: &mut impl PreferenceStore,
        storage_key: &str,
    ) -> (ThemePlan, UiResult<()>) {
        let theme = ThemeId::resolve(requested);
        self.theme = Some(theme);
        let plan = ThemePlan::for_theme(theme);
        let persisted = store.write(storage_key, plan.storage_value());
        (plan, persisted)
    }

    /// Background for a hovered navigation link once a theme is applied.
    #[must_use]
    pub const fn nav_hover_background(&self) -> Option<&'static str> {
        match self.theme {
            Some(_) => Some(NAV_LINK_HOVER_BACKGROUND),
            None => None,
        }
    }
}

/// Whether a `document.readyState` value means parsing is still underway,
/// so wiring has to wait for `DOMContentLoaded`.
#[must_use]
pub fn document_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}
