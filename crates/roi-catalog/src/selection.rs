//! Product selection
//!
//! Tracks the chosen product ids and applies the catalog's combination
//! rules when the user toggles a product.

use crate::catalog::Catalog;
use serde::Serialize;

/// Ordered set of chosen product ids.
///
/// Every id refers to a catalog product and at most one id belongs to an
/// exclusive category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from raw ids, normalizing against the catalog.
    ///
    /// Unknown ids and duplicates are dropped. If several exclusive ids are
    /// given only the first one is kept.
    pub fn from_ids<I, S>(ids: I, catalog: &Catalog) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        let mut has_exclusive = false;

        for id in ids {
            let id = id.as_ref();
            if catalog.find_product(id).is_none() {
                tracing::debug!(id, "dropping unknown product id from selection");
                continue;
            }
            if selection.contains(id) {
                continue;
            }
            if catalog.is_exclusive(id) {
                if has_exclusive {
                    tracing::debug!(id, "dropping second exclusive product from selection");
                    continue;
                }
                has_exclusive = true;
            }
            selection.ids.push(id.to_string());
        }

        selection
    }

    /// Toggle a product the way the product picker does.
    ///
    /// Choosing an exclusive product replaces the whole selection with it.
    /// Toggling an additive product adds or removes it and then clears every
    /// exclusive id, including when the toggle removes the additive product.
    /// Returns `false` and leaves the selection untouched for unknown ids.
    pub fn toggle(&mut self, id: &str, catalog: &Catalog) -> bool {
        let Some(category) = catalog.category_of(id) else {
            return false;
        };

        if category.is_exclusive() {
            self.ids = vec![id.to_string()];
            return true;
        }

        if self.contains(id) {
            self.ids.retain(|s| s != id);
        } else {
            self.ids.push(id.to_string());
        }

        let exclusive = catalog.exclusive_ids();
        self.ids.retain(|s| !exclusive.contains(&s.as_str()));
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
