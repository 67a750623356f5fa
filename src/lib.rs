//! # dining-melt - Menu Export Flattener
//!
//! Turns a campus dining menu export (nested JSON) into a flat CSV table with
//! one row per menu item: `id,name,price,description,restaurant_id`.
//!
//! ## Quick Start
//!
//! ```rust
//! use dining_melt::melt::{MeltConfig, MenuMelter};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let data = json!({
//!     "menu": {"periods": {"categories": [
//!         {"items": [{"name": "Latte\n", "desc": " hot milk "}]}
//!     ]}}
//! });
//!
//! let melter = MenuMelter::new(MeltConfig::default());
//! let rows = melter.melt_value(data)?;
//!
//! assert_eq!(rows[0].id, 100);
//! assert_eq!(rows[0].name, "Latte");
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod error;
pub mod melt;

pub use error::{MeltError, Result};
pub use melt::{MeltConfig, MenuDocument, MenuItemRow, MenuMelter, RowWriter};

/// Default location of the downloaded menu export
pub const DEFAULT_INPUT: &str = "../data-scrape/starbucks.json";

/// Default CSV written to the current directory
pub const DEFAULT_OUTPUT: &str = "starbucks_items.csv";

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeltReport {
    pub rows_written: usize,
    pub output: PathBuf,
}

/// Read and parse a menu export from disk
pub fn load_document(path: &Path) -> Result<MenuDocument> {
    let file = File::open(path).map_err(|source| MeltError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let document = MenuDocument::from_reader(BufReader::new(file), path)?;
    info!(
        path = %path.display(),
        categories = document.menu.periods.categories.len(),
        items = document.item_count(),
        "loaded menu export"
    );
    Ok(document)
}

/// Main entry point: load `input`, flatten it, and write the CSV to `output`
pub fn melt_menu_file(input: &Path, output: &Path, config: MeltConfig) -> Result<MeltReport> {
    let document = load_document(input)?;
    let rows = MenuMelter::new(config).melt(&document);
    let rows_written = melt::write_csv_file(output, &rows)?;

    Ok(MeltReport {
        rows_written,
        output: output.to_path_buf(),
    })
}
