//! Selection resolver
//!
//! Aggregates the prices and unlocked gains of the selected products. It
//! applies no exclusivity correction; it sums whatever it is given.

use roi_catalog::Catalog;
use roi_core::GainCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSelection {
    /// Union of the gain tags of every resolved product
    pub active_gains: BTreeSet<GainCategory>,
    /// Sum of recurring prices
    pub monthly_cost: f64,
    /// Sum of one-time prices
    pub one_time_cost: f64,
}

impl ResolvedSelection {
    pub fn is_active(&self, gain: GainCategory) -> bool {
        self.active_gains.contains(&gain)
    }
}

/// Resolve selected ids against the catalog.
///
/// Ids missing from the catalog are dropped. Each catalog product counts
/// once no matter how often its id appears.
pub fn resolve<S: AsRef<str>>(selection: &[S], catalog: &Catalog) -> ResolvedSelection {
    let selected = |id: &str| selection.iter().any(|s| s.as_ref() == id);

    for id in selection.iter().map(AsRef::as_ref) {
        if catalog.find_product(id).is_none() {
            tracing::debug!(id, "ignoring unknown product id");
        }
    }

    catalog
        .products()
        .filter(|p| selected(&p.id))
        .fold(ResolvedSelection::default(), |mut acc, product| {
            acc.monthly_cost += product.price_monthly;
            acc.one_time_cost += product.price_one_time;
            acc.active_gains.extend(product.gains.iter().copied());
            acc
        })
}
