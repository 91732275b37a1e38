//! Page window calculation.
//!
//! Turns a total page count and the current page into the ordered sequence of
//! indicators a pager should display. The first and last pages are always
//! shown, a run of pages surrounds the current page, and the omitted stretches
//! in between collapse into [`PageToken::Ellipsis`] markers:
//!
//! ```text
//! page 1 of 10:  1 2 … 10
//! page 5 of 10:  1 … 4 5 6 … 10
//! page 10 of 10: 1 … 9 10
//! ```
//!
//! Everything here is pure. The stateful side lives in
//! [`crate::paginator::Model`], which calls [`Window::compute`] on every
//! render.

use serde::{Deserialize, Serialize};

/// A single indicator in a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageToken {
    /// A clickable page number (1-based).
    Page {
        /// The page this indicator jumps to.
        page: usize,
    },
    /// A non-interactive marker standing in for omitted pages.
    Ellipsis,
}

impl PageToken {
    /// Shorthand for `PageToken::Page { page }`.
    pub const fn page(page: usize) -> Self {
        PageToken::Page { page }
    }

    /// Returns the page number, or `None` for an ellipsis.
    ///
    /// ```rust
    /// use bubbletea_pager::window::PageToken;
    ///
    /// assert_eq!(PageToken::page(3).page_number(), Some(3));
    /// assert_eq!(PageToken::Ellipsis.page_number(), None);
    /// ```
    pub fn page_number(&self) -> Option<usize> {
        match self {
            PageToken::Page { page } => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    /// Returns true for [`PageToken::Ellipsis`].
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

/// Number of pages shown on each side of the current page by default.
pub const DEFAULT_SIBLINGS: usize = 1;

/// Window shape used to truncate long page ranges.
///
/// `siblings` is how many pages on each side of the current page stay
/// visible. With the default of one sibling a pager of up to five pages shows
/// every page, and longer pagers show at most `1 … c-1 c c+1 … N`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::window::{PageToken, Window};
///
/// let tokens = Window::new(2).compute(10, 20);
/// let pages: Vec<Option<usize>> = tokens.iter().map(PageToken::page_number).collect();
/// assert_eq!(
///     pages,
///     vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(20)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Pages shown on each side of the current page.
    pub siblings: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            siblings: DEFAULT_SIBLINGS,
        }
    }
}

impl Window {
    /// Creates a window showing `siblings` pages on each side of the current page.
    pub fn new(siblings: usize) -> Self {
        Self { siblings }
    }

    /// Largest page count that is rendered without any truncation.
    ///
    /// That is the first and last page, the current page with its siblings,
    /// and one slot on each side that would otherwise hold an ellipsis.
    pub fn compact_limit(&self) -> usize {
        self.siblings.saturating_mul(2).saturating_add(3)
    }

    /// Upper bound on the number of tokens [`Window::compute`] returns for
    /// `total_pages`.
    pub fn len_hint(&self, total_pages: usize) -> usize {
        total_pages.min(self.siblings.saturating_mul(2).saturating_add(5))
    }

    /// Computes the indicator sequence for `current_page` out of `total_pages`.
    ///
    /// `current_page` is 1-based and is clamped into `[1, total_pages]` before
    /// use. A `total_pages` of zero yields an empty sequence.
    pub fn compute(&self, current_page: usize, total_pages: usize) -> Vec<PageToken> {
        if total_pages == 0 {
            return Vec::new();
        }
        if total_pages <= self.compact_limit() {
            return (1..=total_pages).map(PageToken::page).collect();
        }

        let current = current_page.clamp(1, total_pages);
        let mut tokens = Vec::with_capacity(self.len_hint(total_pages));

        tokens.push(PageToken::page(1));
        if current > self.siblings.saturating_add(2) {
            tokens.push(PageToken::Ellipsis);
        }

        // Interior pages only; 1 and total_pages are emitted separately.
        let start = current.saturating_sub(self.siblings).max(2);
        let end = current.saturating_add(self.siblings).min(total_pages - 1);
        tokens.extend((start..=end).map(PageToken::page));

        if current.saturating_add(self.siblings).saturating_add(1) < total_pages {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.push(PageToken::page(total_pages));

        tokens
    }
}

/// Computes the indicator sequence with the default window of one sibling.
///
/// ```rust
/// use bubbletea_pager::window::{compute, PageToken};
///
/// assert_eq!(
///     compute(5, 10),
///     vec![
///         PageToken::page(1),
///         PageToken::Ellipsis,
///         PageToken::page(4),
///         PageToken::page(5),
///         PageToken::page(6),
///         PageToken::Ellipsis,
///         PageToken::page(10),
///     ]
/// );
/// assert!(compute(1, 0).is_empty());
/// ```
pub fn compute(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    Window::default().compute(current_page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const E: PageToken = PageToken::Ellipsis;

    fn p(page: usize) -> PageToken {
        PageToken::page(page)
    }

    #[test]
    fn test_empty_when_no_pages() {
        assert!(compute(0, 0).is_empty());
        assert!(compute(7, 0).is_empty());
    }

    #[test]
    fn test_small_sets_show_every_page() {
        for current in 1..=4 {
            assert_eq!(compute(current, 4), vec![p(1), p(2), p(3), p(4)]);
        }
        assert_eq!(compute(3, 5), vec![p(1), p(2), p(3), p(4), p(5)]);
        assert_eq!(compute(1, 1), vec![p(1)]);
    }

    #[test]
    fn test_ten_pages_at_first() {
        assert_eq!(compute(1, 10), vec![p(1), p(2), E, p(10)]);
    }

    #[test]
    fn test_ten_pages_in_middle() {
        assert_eq!(compute(5, 10), vec![p(1), E, p(4), p(5), p(6), E, p(10)]);
    }

    #[test]
    fn test_ten_pages_at_last() {
        assert_eq!(compute(10, 10), vec![p(1), E, p(9), p(10)]);
    }

    #[test]
    fn test_ellipsis_thresholds() {
        // current = 3 reaches page 2 through the window, so no left marker.
        assert_eq!(compute(3, 10), vec![p(1), p(2), p(3), p(4), E, p(10)]);
        assert_eq!(compute(4, 10), vec![p(1), E, p(3), p(4), p(5), E, p(10)]);
        assert_eq!(compute(8, 10), vec![p(1), E, p(7), p(8), p(9), p(10)]);
        assert_eq!(compute(7, 10), vec![p(1), E, p(6), p(7), p(8), E, p(10)]);
    }

    #[test]
    fn test_six_pages_is_first_truncated_size() {
        assert_eq!(compute(1, 6), vec![p(1), p(2), E, p(6)]);
        assert_eq!(compute(6, 6), vec![p(1), E, p(5), p(6)]);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(compute(0, 10), compute(1, 10));
        assert_eq!(compute(99, 10), compute(10, 10));
    }

    #[test]
    fn test_zero_siblings() {
        let window = Window::new(0);
        assert_eq!(window.compact_limit(), 3);
        assert_eq!(window.compute(1, 10), vec![p(1), E, p(10)]);
        assert_eq!(window.compute(5, 10), vec![p(1), E, p(5), E, p(10)]);
        assert_eq!(window.compute(2, 10), vec![p(1), p(2), E, p(10)]);
        assert_eq!(window.compute(10, 10), vec![p(1), E, p(10)]);
    }

    #[test]
    fn test_wider_window() {
        let window = Window::new(2);
        assert_eq!(window.compact_limit(), 7);
        assert_eq!(window.compute(4, 7).len(), 7);
        assert_eq!(window.compute(1, 12), vec![p(1), p(2), p(3), E, p(12)]);
    }

    #[test]
    fn test_huge_sibling_count_shows_every_page() {
        let window = Window::new(usize::MAX);
        assert_eq!(window.compact_limit(), usize::MAX);
        assert_eq!(window.len_hint(40), 40);

        let expected: Vec<PageToken> = (1..=40).map(p).collect();
        assert_eq!(window.compute(1, 40), expected);
        assert_eq!(window.compute(20, 40), expected);
        assert_eq!(window.compute(usize::MAX, 40), expected);
    }

    #[test]
    fn test_token_serialization() {
        let json = serde_json::to_string(&vec![p(3), E]).expect("serialize tokens");
        assert_eq!(json, r#"[{"type":"page","page":3},{"type":"ellipsis"}]"#);

        let back: Vec<PageToken> = serde_json::from_str(&json).expect("deserialize tokens");
        assert_eq!(back, vec![p(3), E]);
    }

    proptest! {
        #[test]
        fn page_numbers_strictly_increase(
            siblings in 0usize..4,
            total in 0usize..200,
            current in 0usize..220,
        ) {
            let tokens = Window::new(siblings).compute(current, total);
            let pages: Vec<usize> = tokens.iter().filter_map(PageToken::page_number).collect();
            for pair in pages.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        #[test]
        fn first_and_last_page_always_shown(
            siblings in 0usize..4,
            total in 1usize..200,
            current in 1usize..200,
        ) {
            let tokens = Window::new(siblings).compute(current, total);
            prop_assert_eq!(tokens.first().copied(), Some(p(1)));
            prop_assert_eq!(tokens.last().copied(), Some(p(total)));
        }

        #[test]
        fn ellipses_never_adjacent(
            siblings in 0usize..4,
            total in 0usize..200,
            current in 1usize..200,
        ) {
            let tokens = Window::new(siblings).compute(current, total);
            prop_assert!(tokens.iter().filter(|t| t.is_ellipsis()).count() <= 2);
            for pair in tokens.windows(2) {
                prop_assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()));
            }
        }

        // An ellipsis may stand for a single page: page 4 of 10 renders
        // `1 … 3 4 5 … 10`. The window thresholds take precedence over a
        // "more than one hidden page" rule (see "Ellipsis for a single
        // omitted page" in DESIGN.md), so only "hides at least one" holds.
        #[test]
        fn ellipsis_always_hides_pages(
            siblings in 0usize..4,
            total in 1usize..200,
            current in 1usize..200,
        ) {
            let tokens = Window::new(siblings).compute(current, total);
            for (i, token) in tokens.iter().enumerate() {
                if token.is_ellipsis() {
                    let before = tokens[i - 1].page_number().expect("page before ellipsis");
                    let after = tokens[i + 1].page_number().expect("page after ellipsis");
                    prop_assert!(after > before + 1);
                }
            }
        }

        #[test]
        fn current_page_is_visible(
            siblings in 0usize..4,
            (total, current) in (1usize..200).prop_flat_map(|total| (Just(total), 1..=total)),
        ) {
            let window = Window::new(siblings);
            let tokens = window.compute(current, total);
            prop_assert!(tokens.contains(&p(current)));
            prop_assert!(tokens.len() <= window.len_hint(total));
        }
    }
}
