//! Scroll reveal cascade and the hover lift of revealed cards.
//!
//! Cards start hidden and shifted down; an intersection observer adds
//! [`VISIBLE_CLASS`] once, and the injected [`visible_rule`] resolves it to the
//! shown state. Each card's transition is delayed by its index so the matched
//! set cascades in.

use std::collections::BTreeSet;

/// Card-like selectors that take part in the reveal.
pub const REVEAL_SELECTORS: [&str; 5] = [
    ".news-card",
    ".sidebar-card",
    ".training-card",
    ".student-block",
    ".partner-logo",
];
/// Cards that lift on hover once revealed.
pub const HOVER_SELECTORS: [&str; 3] = [".news-card", ".sidebar-card", ".training-card"];
/// Class added when a card enters the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Join selectors into one selector list.
#[must_use]
pub fn selector_list(selectors: &[&str]) -> String {
    selectors.join(", ")
}

/// Stylesheet rule that shows every revealed card.
#[must_use]
pub fn visible_rule(selectors: &[&str]) -> String {
    let targets = selectors
        .iter()
        .map(|selector| format!("    {selector}.{VISIBLE_CLASS}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "\n{targets} {{\n        opacity: 1 !important;\n        transform: translateY(0) !important;\n    }}\n"
    )
}

/// Transition delay for the card at `index`, e.g. `0.3s` for index 3.
#[must_use]
pub fn transition_delay(index: usize, step_tenths: u32) -> String {
    let tenths = index.saturating_mul(step_tenths as usize);
    format!("{}.{}s", tenths / 10, tenths % 10)
}

/// Inline styles given to a card before it is revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenStyle {
    /// Initial `opacity`.
    pub opacity: &'static str,
    /// Initial `transform`.
    pub transform: &'static str,
    /// `transition` carrying the cascade delay.
    pub transition: String,
}

/// Hidden style for the card at `index`.
#[must_use]
pub fn hidden_style(index: usize, step_tenths: u32) -> HiddenStyle {
    let delay = transition_delay(index, step_tenths);
    HiddenStyle {
        opacity: "0",
        transform: "translateY(20px)",
        transition: format!("opacity 0.6s ease-out {delay}, transform 0.6s ease-out {delay}"),
    }
}

/// Pointer movement over a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    /// Pointer entered the card.
    Enter,
    /// Pointer left the card.
    Leave,
}

/// `transform` for a hover change, or `None` while the card is still hidden.
#[must_use]
pub const fn hover_transform(revealed: bool, hover: Hover) -> Option<&'static str> {
    if !revealed {
        return None;
    }
    Some(match hover {
        Hover::Enter => "translateY(-4px)",
        Hover::Leave => "translateY(0)",
    })
}

/// Indices of the cards already revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: BTreeSet<usize>,
}

impl RevealSet {
    /// Record that card `index` intersected. Returns `true` only the first time.
    pub fn mark(&mut self, index: usize) -> bool {
        self.revealed.insert(index)
    }

    /// Whether card `index` has been revealed.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_delay_is_index_tenths() {
        assert_eq!(transition_delay(0, 1), "0.0s");
        assert_eq!(transition_delay(1, 1), "0.1s");
        assert_eq!(transition_delay(3, 1), "0.3s");
        assert_eq!(transition_delay(12, 1), "1.2s");
        assert_eq!(transition_delay(3, 2), "0.6s");
    }

    #[test]
    fn hidden_style_carries_delay_on_both_transitions() {
        let style = hidden_style(4, 1);
        assert_eq!(style.opacity, "0");
        assert_eq!(style.transform, "translateY(20px)");
        assert_eq!(
            style.transition,
            "opacity 0.6s ease-out 0.4s, transform 0.6s ease-out 0.4s"
        );
    }

    #[test]
    fn visible_rule_covers_every_selector() {
        let rule = visible_rule(&REVEAL_SELECTORS);
        for selector in REVEAL_SELECTORS {
            assert!(rule.contains(&format!("{selector}.visible")));
        }
        assert!(rule.contains("opacity: 1 !important;"));
        assert!(rule.contains("transform: translateY(0) !important;"));
    }

    #[test]
    fn selector_list_joins_with_commas() {
        assert_eq!(
            selector_list(&HOVER_SELECTORS),
            ".news-card, .sidebar-card, .training-card"
        );
    }

    #[test]
    fn hidden_cards_ignore_hover() {
        assert_eq!(hover_transform(false, Hover::Enter), None);
        assert_eq!(hover_transform(false, Hover::Leave), None);
        assert_eq!(hover_transform(true, Hover::Enter), Some("translateY(-4px)"));
        assert_eq!(hover_transform(true, Hover::Leave), Some("translateY(0)"));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut set = RevealSet::default();
        assert!(!set.contains(2));
        assert!(set.mark(2));
        assert!(!set.mark(2));
        assert!(set.contains(2));
        assert!(!set.contains(0));
    }
}
