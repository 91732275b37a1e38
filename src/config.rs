//! Serializable pager settings.
//!
//! Hosts that receive page sizes from outside (a settings file, a query
//! string, a JSON API) describe the pager with a [`Config`] and validate it
//! into a [`Model`]. This is where a non-positive page size is rejected;
//! past this point the controller only ever clamps.
//!
//! ```rust
//! use bubbletea_pager::config::Config;
//!
//! let pager = Config::from_json(r#"{"total_items": 50, "per_page": 6}"#)?
//!     .build()?;
//! assert_eq!(pager.total_pages(), 9);
//! assert_eq!(pager.page(), 1);
//! # Ok::<(), bubbletea_pager::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::paginator::Model;
use crate::window::DEFAULT_SIBLINGS;
use serde::{Deserialize, Serialize};

fn default_per_page() -> i64 {
    10
}

fn default_siblings() -> usize {
    DEFAULT_SIBLINGS
}

/// Pager settings as supplied by a host application.
///
/// Sizes are signed so that bad input can be reported instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of items being paginated.
    #[serde(default)]
    pub total_items: i64,
    /// Items shown on each page.
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    /// Pages shown on each side of the current page.
    #[serde(default = "default_siblings")]
    pub siblings: usize,
    /// Page to start on (1-based). Out-of-range values are clamped.
    #[serde(default)]
    pub initial_page: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_items: 0,
            per_page: default_per_page(),
            siblings: default_siblings(),
            initial_page: None,
        }
    }
}

impl Config {
    /// Parses settings from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Checks the size parameters.
    pub fn validate(&self) -> Result<()> {
        if self.per_page <= 0 {
            return Err(Error::InvalidPerPage(self.per_page));
        }
        if self.total_items < 0 {
            return Err(Error::InvalidTotalItems(self.total_items));
        }
        Ok(())
    }

    /// Validates the settings and builds a pager from them.
    pub fn build(&self) -> Result<Model> {
        self.validate()?;

        let per_page =
            usize::try_from(self.per_page).map_err(|_| Error::InvalidPerPage(self.per_page))?;
        let total_items = usize::try_from(self.total_items)
            .map_err(|_| Error::InvalidTotalItems(self.total_items))?;

        let mut model = Model::new()
            .with_siblings(self.siblings)
            .with_size(total_items, per_page);
        if let Some(page) = self.initial_page {
            model.go_to_page(page);
        }
        Ok(model)
    }
}
