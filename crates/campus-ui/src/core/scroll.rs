//! Smooth-scroll targets and the scroll-dependent header shadow.

/// Selector for in-page anchor links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
/// Selector for the site header.
pub const HEADER_SELECTOR: &str = ".header";
/// Selector for the secondary navigation bar.
pub const NAVIGATION_BAR_SELECTOR: &str = ".navigation-bar";

/// Element id addressed by an in-page `href`, or `None` for a bare `#`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset that places an element `header_offset` below the viewport top.
///
/// `bounding_top` is the element's viewport-relative top and `page_offset`
/// the current vertical scroll position.
#[must_use]
pub fn scroll_destination(bounding_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    bounding_top + page_offset - header_offset
}

/// Header elevation level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderShadow {
    /// Page at or near the top.
    Resting,
    /// Page scrolled past the threshold.
    Scrolled,
}

impl HeaderShadow {
    /// Shadow level for a vertical scroll offset.
    #[must_use]
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Scrolled
        } else {
            Self::Resting
        }
    }

    /// `box-shadow` for the header.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Resting => "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            Self::Scrolled => "0 4px 6px -1px rgba(0, 0, 0, 0.2)",
        }
    }

    /// `box-shadow` for the navigation bar.
    #[must_use]
    pub const fn navigation_bar(self) -> &'static str {
        match self {
            Self::Resting => "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            Self::Scrolled => "0 2px 4px -1px rgba(0, 0, 0, 0.1)",
        }
    }
}
