//! Presentational highlight of the selected news category.

/// Selector for category links.
pub const LINK_SELECTOR: &str = ".category-link";
/// Class marking the selected category link.
pub const ACTIVE_CLASS: &str = "active";

/// Injected rule styling the selected category link.
pub const CATEGORY_ACTIVE_RULE: &str = "
    .category-link.active {
        color: var(--primary-color);
        font-weight: 600;
        padding-left: var(--spacing-sm);
    }
";

/// Which category link, if any, has been selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryHighlight {
    active: Option<usize>,
}

impl CategoryHighlight {
    /// Select link `index`, replacing any previous selection.
    pub fn select(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Active flag for each of `count` links.
    #[must_use]
    pub fn flags(&self, count: usize) -> Vec<bool> {
        (0..count).map(|index| self.active == Some(index)).collect()
    }
}
