use crate::error::{MeltError, Result};
use crate::melt::types::{Item, MeltConfig, MenuDocument, MenuItemRow};
use serde_json::Value;
use tracing::debug;

/// Flattens a nested menu document into one row per item
pub struct MenuMelter {
    config: MeltConfig,
}

impl MenuMelter {
    pub fn new(config: MeltConfig) -> Self {
        MenuMelter { config }
    }

    /// Melt a parsed document into rows, categories then items in document order
    pub fn melt(&self, document: &MenuDocument) -> Vec<MenuItemRow> {
        let categories = &document.menu.periods.categories;
        let mut rows = Vec::with_capacity(document.item_count());
        let mut next_id = self.config.start_id;

        for (index, category) in categories.iter().enumerate() {
            debug!(
                category = index,
                items = category.items.len(),
                "flattening category"
            );

            for item in &category.items {
                rows.push(self.build_row(next_id, item));
                next_id += 1;
            }
        }

        rows
    }

    /// Melt an already-parsed JSON value
    pub fn melt_value(&self, value: Value) -> Result<Vec<MenuItemRow>> {
        let document: MenuDocument = serde_json::from_value(value)
            .map_err(|e| MeltError::malformed_value(e.to_string()))?;
        Ok(self.melt(&document))
    }

    fn build_row(&self, id: u64, item: &Item) -> MenuItemRow {
        MenuItemRow {
            id,
            name: clean_text(item.name.as_deref().unwrap_or("")),
            price: self.config.price,
            description: clean_text(item.desc.as_deref().unwrap_or("")),
            restaurant_id: self.config.restaurant_id,
        }
    }
}

/// Replace line breaks with spaces, then trim surrounding whitespace.
///
/// Order matters: `"a\n"` becomes `"a "` and then `"a"`. The ASCII
/// separators `\x1c`..=`\x1f` count as whitespace at the edges.
pub fn clean_text(raw: &str) -> String {
    raw.replace(['\n', '\r'], " ")
        .trim_matches(is_strippable)
        .to_string()
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
