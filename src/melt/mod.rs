//! Menu melting - flatten a nested dining menu export into CSV rows
//!
//! A menu export nests items two levels deep (`menu.periods.categories[].items[]`).
//! Melting walks categories then items in document order and emits one flat
//! `MenuItemRow` per item, numbered from `MeltConfig::start_id`.

pub mod types;
pub mod extractor;
pub mod writer;

pub use types::{Category, Item, MeltConfig, Menu, MenuDocument, MenuItemRow, Periods};
pub use extractor::{clean_text, MenuMelter};
pub use writer::{write_csv_file, RowWriter};
