//! School theme palettes and the style plan painted by the theme switcher.

use crate::error::ColorError;

/// Selectable site themes, one per school level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    /// Whole-school palette.
    #[default]
    Default,
    /// Upper secondary (THPT).
    Thpt,
    /// Lower secondary (THCS).
    Thcs,
    /// Primary school (Tiểu học).
    TieuHoc,
}

impl ThemeId {
    /// All themes in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Default, Self::Thpt, Self::Thcs, Self::TieuHoc]
    }

    /// Identifier used in `data-theme` attributes and local storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Thpt => "thpt",
            Self::Thcs => "thcs",
            Self::TieuHoc => "tieu-hoc",
        }
    }

    /// Parse an exact identifier.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|theme| theme.as_str() == key)
    }

    /// Parse an identifier, falling back to [`ThemeId::Default`].
    #[must_use]
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    /// Color palette for the theme.
    #[must_use]
    pub const fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Default => &DEFAULT,
            Self::Thpt => &THPT,
            Self::Thcs => &THCS,
            Self::TieuHoc => &TIEU_HOC,
        }
    }
}

/// The six color roles of a theme, as `#rrggbb` strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    /// Brand color for bars, buttons and titles.
    pub primary: &'static str,
    /// Secondary brand color.
    pub secondary: &'static str,
    /// Darker shade for the navigation bar and gradients.
    pub dark: &'static str,
    /// Lighter shade.
    pub light: &'static str,
    /// Deepest shade.
    pub deep: &'static str,
    /// Hover shade for interactive elements.
    pub hover: &'static str,
}

/// Whole-school palette, also the fallback for unknown identifiers.
pub const DEFAULT: ThemePalette = ThemePalette {
    primary: "#2f69d3",
    secondary: "#1b4796",
    dark: "#1b4796",
    light: "#49566e",
    deep: "#0a285e",
    hover: "#2563c7",
};

/// Upper secondary palette.
pub const THPT: ThemePalette = ThemePalette {
    primary: "#1b4796",
    secondary: "#1b4796",
    dark: "#154075",
    light: "#2d5a8a",
    deep: "#0a285e",
    hover: "#1a4285",
};

/// Lower secondary palette.
pub const THCS: ThemePalette = ThemePalette {
    primary: "#49566e",
    secondary: "#49566e",
    dark: "#3d4759",
    light: "#5a677a",
    deep: "#0a285e",
    hover: "#3f4d60",
};

/// Primary school palette.
pub const TIEU_HOC: ThemePalette = ThemePalette {
    primary: "#0a285e",
    secondary: "#0a285e",
    dark: "#071d42",
    light: "#0d3268",
    deep: "#0a285e",
    hover: "#081f4a",
};

/// Class marking the selected theme link.
pub const ACTIVE_CLASS: &str = "active";
/// Selector for theme switcher links.
pub const THEME_LINK_SELECTOR: &str = ".theme-link";
/// Attribute carrying a theme link's identifier.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Selector for navigation links that receive the hover background.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
/// Background painted on a navigation link under the pointer.
pub const NAV_LINK_HOVER_BACKGROUND: &str = "rgba(255, 255, 255, 0.1)";
/// Opacity of the banner overlay gradient's starting color.
pub const BANNER_OVERLAY_ALPHA: f64 = 0.95;

/// Injected rule highlighting the selected theme link.
pub const THEME_ACTIVE_RULE: &str = "
    .theme-link.active {
        color: var(--primary-color);
        font-weight: 600;
    }
";

/// An 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Decode a `#rrggbb` (or bare `rrggbb`) color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] when the value is not six hex digits.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex {
                value: value.to_string(),
            });
        }
        let channel = |start: usize| {
            u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| ColorError::InvalidHex {
                value: value.to_string(),
            })
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Render as a CSS `rgba()` color.
    #[must_use]
    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

/// Whether a style targets the first match of a selector or every match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Only the first matching element.
    First,
    /// Every matching element.
    All,
}

/// One inline style assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleAssignment {
    /// CSS selector of the target element(s).
    pub selector: &'static str,
    /// Which matches receive the style.
    pub scope: Scope,
    /// CSS property name.
    pub property: &'static str,
    /// CSS value.
    pub value: String,
}

impl StyleAssignment {
    fn first(selector: &'static str, property: &'static str, value: impl Into<String>) -> Self {
        Self {
            selector,
            scope: Scope::First,
            property,
            value: value.into(),
        }
    }

    fn all(selector: &'static str, property: &'static str, value: impl Into<String>) -> Self {
        Self {
            selector,
            scope: Scope::All,
            property,
            value: value.into(),
        }
    }
}

/// Everything applying a theme paints, computed without a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePlan {
    /// Resolved theme.
    pub theme: ThemeId,
    /// Custom properties set on the document root, in application order.
    pub root_variables: Vec<(&'static str, String)>,
    /// Direct element styles, each skipped when its target is absent.
    pub element_styles: Vec<StyleAssignment>,
}

impl ThemePlan {
    /// Build the plan for a theme.
    #[must_use]
    pub fn for_theme(theme: ThemeId) -> Self {
        let colors = theme.palette();
        let root_variables = vec![
            ("--primary-color", colors.primary.to_string()),
            ("--primary-dark", colors.dark.to_string()),
            ("--primary-light", colors.light.to_string()),
            ("--primary-deep", colors.deep.to_string()),
            ("--secondary-color", colors.primary.to_string()),
            ("--accent-color", colors.primary.to_string()),
            // Legacy aliases still referenced by older stylesheets.
            ("--red-primary", colors.primary.to_string()),
            ("--red-secondary", colors.dark.to_string()),
            ("--red-light", colors.light.to_string()),
        ];

        let mut element_styles = vec![
            StyleAssignment::first(".header", "background-color", colors.primary),
            StyleAssignment::first(".navigation-bar", "background-color", colors.dark),
            StyleAssignment::first(".motto-section", "background-color", colors.primary),
            StyleAssignment::first(".search-btn-submit", "background-color", colors.primary),
            StyleAssignment::first(".footer-logo-icon", "background-color", colors.primary),
            StyleAssignment::first(".banner-image", "background", banner_gradient(colors)),
        ];
        if let Ok(overlay) = banner_overlay_gradient(colors.primary) {
            element_styles.push(StyleAssignment::first(
                ".banner-overlay",
                "background",
                overlay,
            ));
        }
        element_styles.extend([
            StyleAssignment::all(".category-title", "border-bottom-color", colors.primary),
            StyleAssignment::all(".section-main-title", "color", colors.primary),
            StyleAssignment::all(".logo-icon", "color", colors.primary),
        ]);

        Self {
            theme,
            root_variables,
            element_styles,
        }
    }

    /// `data-theme` value of the link to mark active.
    #[must_use]
    pub const fn active_link(&self) -> &'static str {
        self.theme.as_str()
    }

    /// Value persisted under the theme storage key.
    #[must_use]
    pub const fn storage_value(&self) -> &'static str {
        self.theme.as_str()
    }

    /// Value of a root custom property, if the plan sets it.
    #[must_use]
    pub fn root_variable(&self, name: &str) -> Option<&str> {
        self.root_variables
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value assigned to `property` on `selector`, if the plan sets it.
    #[must_use]
    pub fn style_for(&self, selector: &str, property: &str) -> Option<&str> {
        self.element_styles
            .iter()
            .find(|style| style.selector == selector && style.property == property)
            .map(|style| style.value.as_str())
    }
}

fn banner_gradient(colors: &ThemePalette) -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        colors.primary, colors.dark
    )
}

/// Bottom-up overlay fading from the translucent primary color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] when `primary` is not a hex color.
pub fn banner_overlay_gradient(primary: &str) -> Result<String, ColorError> {
    let rgb = Rgb::from_hex(primary)?;
    Ok(format!(
        "linear-gradient(to top, {}, transparent)",
        rgb.rgba(BANNER_OVERLAY_ALPHA)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for theme in ThemeId::all() {
            assert_eq!(ThemeId::from_key(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemeId::from_key("THPT"), None);
        assert_eq!(ThemeId::resolve("tieu-hoc"), ThemeId::TieuHoc);
    }

    #[test]
    fn unknown_identifiers_plan_like_default() {
        let default = ThemePlan::for_theme(ThemeId::Default);
        for key in ["", "purple", "thpt ", "Default", "tieu_hoc"] {
            assert_eq!(ThemePlan::for_theme(ThemeId::resolve(key)), default);
        }
    }

    #[test]
    fn root_variables_mirror_palette() {
        for theme in ThemeId::all() {
            let colors = theme.palette();
            let plan = ThemePlan::for_theme(theme);
            assert_eq!(plan.root_variable("--primary-color"), Some(colors.primary));
            assert_eq!(plan.root_variable("--primary-dark"), Some(colors.dark));
            assert_eq!(plan.root_variable("--primary-light"), Some(colors.light));
            assert_eq!(plan.root_variable("--primary-deep"), Some(colors.deep));
            assert_eq!(plan.root_variable("--secondary-color"), Some(colors.primary));
            assert_eq!(plan.root_variable("--accent-color"), Some(colors.primary));
            assert_eq!(plan.root_variable("--red-primary"), Some(colors.primary));
            assert_eq!(plan.root_variable("--red-secondary"), Some(colors.dark));
            assert_eq!(plan.root_variable("--red-light"), Some(colors.light));
            assert_eq!(plan.root_variables.len(), 9);
        }
    }

    #[test]
    fn direct_styles_use_palette_colors() {
        let plan = ThemePlan::for_theme(ThemeId::Thcs);
        assert_eq!(plan.style_for(".header", "background-color"), Some("#49566e"));
        assert_eq!(
            plan.style_for(".navigation-bar", "background-color"),
            Some("#3d4759")
        );
        assert_eq!(
            plan.style_for(".motto-section", "background-color"),
            Some("#49566e")
        );
        assert_eq!(
            plan.style_for(".search-btn-submit", "background-color"),
            Some("#49566e")
        );
        assert_eq!(
            plan.style_for(".footer-logo-icon", "background-color"),
            Some("#49566e")
        );
        assert_eq!(
            plan.style_for(".banner-image", "background"),
            Some("linear-gradient(135deg, #49566e 0%, #3d4759 100%)")
        );
        assert_eq!(
            plan.style_for(".category-title", "border-bottom-color"),
            Some("#49566e")
        );
        assert_eq!(plan.style_for(".section-main-title", "color"), Some("#49566e"));
        assert_eq!(plan.style_for(".logo-icon", "color"), Some("#49566e"));
    }

    #[test]
    fn collection_styles_target_every_match() {
        let plan = ThemePlan::for_theme(ThemeId::Default);
        let scoped: Vec<_> = plan
            .element_styles
            .iter()
            .filter(|style| style.scope == Scope::All)
            .map(|style| style.selector)
            .collect();
        assert_eq!(
            scoped,
            vec![".category-title", ".section-main-title", ".logo-icon"]
        );
    }

    #[test]
    fn logo_icons_follow_each_palette() {
        for theme in ThemeId::all() {
            let plan = ThemePlan::for_theme(theme);
            let primary = theme.palette().primary;
            assert_eq!(plan.style_for(".logo-icon", "color"), Some(primary));
            assert_eq!(
                plan.style_for(".footer-logo-icon", "background-color"),
                Some(primary)
            );
        }
    }

    #[test]
    fn overlay_decodes_primary_hex() {
        let plan = ThemePlan::for_theme(ThemeId::Default);
        assert_eq!(
            plan.style_for(".banner-overlay", "background"),
            Some("linear-gradient(to top, rgba(47, 105, 211, 0.95), transparent)")
        );
    }

    #[test]
    fn hex_decoding_rejects_malformed_values() {
        assert_eq!(
            Rgb::from_hex("#0a285e"),
            Ok(Rgb {
                r: 10,
                g: 40,
                b: 94
            })
        );
        assert_eq!(
            Rgb::from_hex("FFFFFF"),
            Ok(Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
        for bad in ["#fff", "#12345g", "#+12345", "", "#1234567"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn plan_is_deterministic() {
        let first = ThemePlan::for_theme(ThemeId::Thpt);
        let second = ThemePlan::for_theme(ThemeId::Thpt);
        assert_eq!(first, second);
        assert_eq!(first.active_link(), "thpt");
        assert_eq!(first.storage_value(), "thpt");
    }
}
