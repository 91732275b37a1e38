//! Styles and glyphs for the pager's default renderer.
//!
//! The defaults use `AdaptiveColor` so the current page stands out on both
//! light and dark terminals while the remaining indicators stay subdued.
//!
//! ```rust
//! use bubbletea_pager::style::{PaginatorStyles, ELLIPSIS};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = PaginatorStyles::default();
//! styles.active_page = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
//!     .underline(true);
//! assert_eq!(styles.ellipsis_glyph, ELLIPSIS);
//! ```

use lipgloss_extras::prelude::*;

/// Unicode ellipsis (…) drawn in place of omitted pages.
pub const ELLIPSIS: &str = "…";

/// Separator placed between indicators by default.
pub const SEPARATOR: &str = " ";

/// Styles applied to each kind of indicator.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// The current page's number.
    pub active_page: Style,
    /// Every other page number.
    pub inactive_page: Style,
    /// The gap marker.
    pub ellipsis: Style,
    /// The `current/total` summary.
    pub summary: Style,
    /// Text drawn for a gap marker.
    pub ellipsis_glyph: String,
    /// Text drawn between indicators.
    pub separator: String,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            active_page: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .bold(true),
            inactive_page: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            ellipsis: Style::new().foreground(subdued_color.clone()),
            summary: Style::new().foreground(subdued_color),
            ellipsis_glyph: ELLIPSIS.to_string(),
            separator: SEPARATOR.to_string(),
        }
    }
}

impl PaginatorStyles {
    /// Styles that render plain, unstyled text.
    ///
    /// Handy for snapshot-style tests and for hosts that apply their own
    /// styling to the token strip.
    pub fn plain() -> Self {
        Self {
            active_page: Style::new(),
            inactive_page: Style::new(),
            ellipsis: Style::new(),
            summary: Style::new(),
            ..Self::default()
        }
    }
}
