#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pager/")]

//! # bubbletea-pager
//!
//! A windowed page navigator for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications and for any front end that needs a `1 … 4 5 6 … 10` style
//! pager.
//!
//! ## Overview
//!
//! The crate is split into a pure calculation and a thin stateful wrapper:
//!
//! - [`window`] turns `(current page, total pages)` into an ordered list of
//!   [`PageToken`]s. The first and last pages are always present, the pages
//!   around the current one form a window, and longer gaps collapse into
//!   ellipsis markers.
//! - [`paginator::Model`] owns the current page, derives the page count from
//!   the item count and page size, and exposes clamped navigation. It follows
//!   the Elm Architecture used across bubbletea-rs: `update()` consumes key
//!   messages and `view()` renders the indicator strip with lipgloss styles.
//!
//! Navigation never fails. Requests outside `[1, total_pages]` are clamped,
//! and with no items every navigation call is a no-op.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pager::prelude::*;
//!
//! let mut pager = Paginator::new().with_size(50, 6);
//! assert_eq!(pager.total_pages(), 9);
//!
//! pager.go_to_page(5);
//! pager.next_page();
//! assert_eq!(pager.page(), 6);
//!
//! for token in pager.tokens() {
//!     match token {
//!         PageToken::Page { page } => { /* clickable, wired to go_to_page(page) */ }
//!         PageToken::Ellipsis => { /* inert gap marker */ }
//!     }
//! }
//! ```
//!
//! ## Hosts outside Rust
//!
//! [`Config`] and [`PageToken`] are serde types, so settings can arrive as
//! JSON and token lists can leave as JSON:
//!
//! ```rust
//! use bubbletea_pager::Config;
//!
//! let pager = Config::from_json(r#"{"total_items": 100, "per_page": 10, "initial_page": 5}"#)?
//!     .build()?;
//! let json = serde_json::to_string(&pager.tokens())?;
//! assert!(json.starts_with(r#"[{"type":"page","page":1},{"type":"ellipsis"}"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod paginator;
pub mod style;
pub mod window;

pub use config::Config;
pub use error::{Error, Result};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use paginator::{Model as Paginator, PaginatorKeyMap};
pub use style::PaginatorStyles;
pub use window::{compute, PageToken, Window};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pager::prelude::*;
///
/// let pager = Paginator::new().with_size(4, 1);
/// assert_eq!(pager.tokens().len(), 4);
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::paginator::{Model as Paginator, PaginatorKeyMap};
    pub use crate::style::PaginatorStyles;
    pub use crate::window::{PageToken, Window};
}
