//! A windowed pager component for bubbletea-rs.
//!
//! This component owns the current page of a paginated data set and turns it
//! into a strip of page indicators such as `1 … 4 5 6 … 10`. It does not
//! render the pages' content; it only tracks which page is current, keeps it
//! within bounds, and renders the navigation control itself.
//!
//! Pages are 1-based. Every navigation request is clamped into the valid
//! range instead of being rejected, so a "next" on the last page or a jump to
//! page `-3` is simply a no-op or a move to the nearest valid page.

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::style::PaginatorStyles;
use crate::window::{PageToken, Window};
use bubbletea_rs::{KeyMsg, Msg};
use tracing::{debug, trace};

/// Key bindings for moving between pages.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::paginator::PaginatorKeyMap;
/// use bubbletea_pager::key;
///
/// let keymap = PaginatorKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["a", "left"]),
///         key::with_help("a/←", "previous page"),
///     ]),
///     next_page: key::new_binding(vec![
///         key::with_keys_str(&["d", "right"]),
///         key::with_help("d/→", "next page"),
///     ]),
///     ..PaginatorKeyMap::default()
/// };
/// assert_eq!(keymap.first_page.help().key, "g/home");
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
        ]
    }
}

/// Converts a page count into the signed space navigation requests use.
fn to_signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// A pager model: current page, page size, and the indicator strip.
///
/// The size parameters (`total_items`, `per_page`) are replaced wholesale with
/// [`Model::set_size`] or the individual setters; the current page is the
/// only thing navigation changes, and it is re-clamped whenever the sizes
/// change.
///
/// When there are no items there are no pages: [`Model::page`] reports `0`,
/// [`Model::tokens`] is empty and every navigation call is a no-op.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use bubbletea_pager::paginator::Model;
/// use bubbletea_pager::window::PageToken;
///
/// let mut pager = Model::new().with_size(95, 10); // 10 pages
/// assert_eq!(pager.total_pages(), 10);
/// assert!(pager.on_first_page());
///
/// pager.go_to_page(5);
/// let pages: Vec<Option<usize>> = pager.tokens().iter().map(PageToken::page_number).collect();
/// assert_eq!(pages, vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]);
///
/// pager.go_to_page(1_000);
/// assert!(pager.on_last_page());
/// ```
///
/// ## Integration with bubbletea-rs
///
/// ```rust
/// use bubbletea_pager::paginator::Model as Pager;
/// use bubbletea_rs::{Model, Cmd, Msg};
///
/// struct App {
///     pager: Pager,
///     rows: Vec<String>,
/// }
///
/// impl Model for App {
///     fn init() -> (Self, Option<Cmd>) {
///         let rows: Vec<String> = (1..=50).map(|i| format!("Row {}", i)).collect();
///         let pager = Pager::new().with_size(rows.len(), 6);
///         (Self { pager, rows }, None)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         self.pager.update(&msg);
///         None
///     }
///
///     fn view(&self) -> String {
///         let (start, end) = self.pager.get_slice_bounds(self.rows.len());
///         format!("{}\n\n{}", self.rows[start..end].join("\n"), self.pager.view())
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    page: usize,
    per_page: usize,
    total_items: usize,
    total_pages: usize,
    window: Window,

    /// The format string for [`Model::summary`] (e.g., "%d/%d").
    pub arabic_format: String,
    /// Styles for [`Model::view`].
    pub styles: PaginatorStyles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    /// Creates an empty pager: no items, one item per page, the default
    /// window of one sibling on each side.
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 1,
            total_items: 0,
            total_pages: 0,
            window: Window::default(),
            arabic_format: "%d/%d".to_string(),
            styles: PaginatorStyles::default(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a new pager with default settings.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    ///
    /// let pager = Model::new();
    /// assert!(pager.is_empty());
    /// assert_eq!(pager.page(), 0);
    /// assert_eq!(pager.per_page(), 1);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both size parameters (builder pattern). See [`Model::set_size`].
    pub fn with_size(mut self, total_items: usize, per_page: usize) -> Self {
        self.set_size(total_items, per_page);
        self
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// The minimum value is 1; zero is raised to 1.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    ///
    /// let pager = Model::new().with_per_page(0).with_total_items(3);
    /// assert_eq!(pager.per_page(), 1);
    /// assert_eq!(pager.total_pages(), 3);
    /// ```
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets how many pages surround the current page (builder pattern).
    pub fn with_siblings(mut self, siblings: usize) -> Self {
        self.window = Window::new(siblings);
        self
    }

    /// Moves to `page` (builder pattern). The page is clamped like
    /// [`Model::go_to_page`].
    pub fn with_page(mut self, page: i64) -> Self {
        self.go_to_page(page);
        self
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: PaginatorStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: PaginatorKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the summary format (builder pattern).
    pub fn with_arabic_format(mut self, format: &str) -> Self {
        self.arabic_format = format.to_string();
        self
    }

    /// Replaces both size parameters and re-clamps the current page.
    ///
    /// A `per_page` of zero is treated as one. Going from no pages to some
    /// pages lands on page 1; otherwise the current page is kept if it is
    /// still valid and moved to the last page if it is not.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    ///
    /// let mut pager = Model::new().with_size(100, 10).with_page(8);
    /// pager.set_size(30, 10);
    /// assert_eq!(pager.page(), 3);
    ///
    /// pager.set_size(0, 10);
    /// assert_eq!(pager.page(), 0);
    /// assert!(pager.tokens().is_empty());
    /// ```
    pub fn set_size(&mut self, total_items: usize, per_page: usize) {
        self.total_items = total_items;
        self.per_page = per_page.max(1);
        self.recalculate();
    }

    /// Sets the total number of items and re-clamps the current page.
    pub fn set_total_items(&mut self, items: usize) {
        self.set_size(items, self.per_page);
    }

    /// Sets the number of items per page and re-clamps the current page.
    ///
    /// The minimum value is 1; zero is raised to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.set_size(self.total_items, per_page);
    }

    /// Changes how many pages surround the current page.
    pub fn set_siblings(&mut self, siblings: usize) {
        self.window = Window::new(siblings);
    }

    fn recalculate(&mut self) {
        let previous = self.page;
        self.total_pages = self.total_items.div_ceil(self.per_page);
        self.page = if self.total_pages == 0 {
            0
        } else {
            self.page.clamp(1, self.total_pages)
        };

        debug!(
            total_items = self.total_items,
            per_page = self.per_page,
            total_pages = self.total_pages,
            page = self.page,
            "pager resized"
        );
        if previous != self.page {
            debug!(from = previous, to = self.page, "current page re-clamped");
        }
    }

    /// The current page (1-based), or 0 when there are no pages.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items shown on each page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of items being paginated.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages: `ceil(total_items / per_page)`.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The window shape used by [`Model::tokens`].
    pub fn window(&self) -> Window {
        self.window
    }

    /// Returns true when there is nothing to paginate.
    ///
    /// Callers should render an explicit empty state instead of a pager.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    ///
    /// Any integer is accepted. Does nothing when there are no pages.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    ///
    /// let mut pager = Model::new().with_size(50, 6); // 9 pages
    /// pager.go_to_page(4);
    /// assert_eq!(pager.page(), 4);
    /// pager.go_to_page(-7);
    /// assert_eq!(pager.page(), 1);
    /// pager.go_to_page(i64::MAX);
    /// assert_eq!(pager.page(), 9);
    /// ```
    pub fn go_to_page(&mut self, page: i64) {
        if self.total_pages == 0 {
            trace!(requested = page, "navigation ignored, no pages");
            return;
        }
        let clamped = page.clamp(1, to_signed(self.total_pages));
        // clamped lies in [1, total_pages], which came from a usize
        self.page = usize::try_from(clamped).unwrap_or(self.total_pages);
        trace!(requested = page, page = self.page, "page changed");
    }

    /// Moves to the next page. Does nothing on the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(to_signed(self.page).saturating_add(1));
    }

    /// Moves to the previous page. Does nothing on the first page.
    pub fn prev_page(&mut self) {
        self.go_to_page(to_signed(self.page).saturating_sub(1));
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) {
        self.go_to_page(to_signed(self.total_pages));
    }

    /// Returns true if there is no previous page to move to.
    ///
    /// Also true when there are no pages at all, so "previous" controls
    /// render disabled.
    pub fn on_first_page(&self) -> bool {
        self.total_pages == 0 || self.page == 1
    }

    /// Returns true if there is no next page to move to.
    ///
    /// Also true when there are no pages at all, so "next" controls render
    /// disabled.
    pub fn on_last_page(&self) -> bool {
        self.total_pages == 0 || self.page == self.total_pages
    }

    /// The indicator sequence for the current state.
    pub fn tokens(&self) -> Vec<PageToken> {
        self.window.compute(self.page, self.total_pages)
    }

    /// Calculates slice bounds for the current page.
    ///
    /// Given the length of the data being paginated, returns the half-open
    /// `(start, end)` index range of the current page, clipped to `length`.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    ///
    /// let items: Vec<i32> = (1..=50).collect();
    /// let mut pager = Model::new().with_size(items.len(), 6);
    ///
    /// pager.go_to_page(2);
    /// assert_eq!(pager.get_slice_bounds(items.len()), (6, 12));
    ///
    /// pager.last_page();
    /// let (start, end) = pager.get_slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[49, 50]);
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        if self.page == 0 {
            return (0, 0);
        }
        let start = (self.page - 1).saturating_mul(self.per_page).min(length);
        let end = start.saturating_add(self.per_page).min(length);
        (start, end)
    }

    /// Returns the number of items on the current page.
    pub fn items_on_page(&self, length: usize) -> usize {
        let (start, end) = self.get_slice_bounds(length);
        end - start
    }

    /// Handles key messages, moving between pages on the configured keys.
    ///
    /// Returns true if the current page changed.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut pager = Model::new().with_size(30, 10);
    /// let msg: Msg = Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE });
    /// assert!(pager.update(&msg));
    /// assert_eq!(pager.page(), 2);
    /// ```
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };

        let before = self.page;
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.first_page();
        } else if self.keymap.last_page.matches(key_msg) {
            self.last_page();
        }
        before != self.page
    }

    /// Renders the indicator strip, e.g. `1 … 4 5 6 … 10`.
    ///
    /// The current page uses `styles.active_page`, other pages
    /// `styles.inactive_page`, and gaps `styles.ellipsis`. Returns an empty
    /// string when there are no pages.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    /// use bubbletea_pager::style::PaginatorStyles;
    /// use lipgloss_extras::lipgloss;
    ///
    /// let pager = Model::new()
    ///     .with_size(10, 1)
    ///     .with_page(5)
    ///     .with_styles(PaginatorStyles::plain());
    /// let plain = lipgloss::strip_ansi(&pager.view());
    /// assert_eq!(plain, "1 … 4 5 6 … 10");
    /// ```
    pub fn view(&self) -> String {
        self.tokens()
            .iter()
            .map(|token| self.render_token(token))
            .collect::<Vec<_>>()
            .join(&self.styles.separator)
    }

    fn render_token(&self, token: &PageToken) -> String {
        match token {
            PageToken::Page { page } if *page == self.page => self
                .styles
                .active_page
                .clone()
                .inline(true)
                .render(&page.to_string()),
            PageToken::Page { page } => self
                .styles
                .inactive_page
                .clone()
                .inline(true)
                .render(&page.to_string()),
            PageToken::Ellipsis => self
                .styles
                .ellipsis
                .clone()
                .inline(true)
                .render(&self.styles.ellipsis_glyph),
        }
    }

    /// Renders `current/total` using `arabic_format`.
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    /// use bubbletea_pager::style::PaginatorStyles;
    /// use lipgloss_extras::lipgloss;
    ///
    /// let pager = Model::new()
    ///     .with_size(50, 6)
    ///     .with_page(3)
    ///     .with_arabic_format("page %d of %d")
    ///     .with_styles(PaginatorStyles::plain());
    /// assert_eq!(lipgloss::strip_ansi(&pager.summary()), "page 3 of 9");
    /// ```
    pub fn summary(&self) -> String {
        let text = self
            .arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1);
        self.styles.summary.clone().inline(true).render(&text)
    }
}
