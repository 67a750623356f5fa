use crate::error::{MeltError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Parsed dining menu export: `menu.periods.categories[].items[]`
#[derive(Debug, Clone, Deserialize)]
pub struct MenuDocument {
    pub menu: Menu,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Menu {
    pub periods: Periods,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Periods {
    pub categories: Vec<Category>,
}

/// A grouping of menu items within a period. Only `items` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub items: Vec<Item>,
}

/// A single menu entry. Absent or null fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub desc: Option<String>,
}

impl MenuDocument {
    /// Parse a whole document from a reader. `origin` is only used in errors.
    ///
    /// Read failures surface as `FileNotFound`; syntax and shape errors as
    /// `MalformedInput`.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                MeltError::FileNotFound {
                    path: origin.to_path_buf(),
                    source: e.into(),
                }
            } else {
                MeltError::malformed(origin, e.to_string())
            }
        })
    }

    /// Total number of items across all categories
    pub fn item_count(&self) -> usize {
        self.menu
            .periods
            .categories
            .iter()
            .map(|c| c.items.len())
            .sum()
    }
}

/// One output row, serialized in column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRow {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub restaurant_id: u64,
}

impl MenuItemRow {
    /// CSV header, matching the field order above
    pub const HEADER: [&'static str; 5] = ["id", "name", "price", "description", "restaurant_id"];
}

/// Configuration for the flattening pass
#[derive(Debug, Clone, PartialEq)]
pub struct MeltConfig {
    /// Id assigned to the first row; later rows count up from here
    pub start_id: u64,

    /// Placeholder price written on every row
    pub price: f64,

    /// Placeholder restaurant written on every row
    pub restaurant_id: u64,
}

impl Default for MeltConfig {
    fn default() -> Self {
        MeltConfig {
            start_id: 100,
            price: 4.99,
            restaurant_id: 13,
        }
    }
}
