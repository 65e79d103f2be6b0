//! Scenario session
//!
//! Holds the current inputs, assumptions and product selection. Every
//! report is computed fresh from an immutable snapshot of that state.

use crate::error::GenerationError;
use roi_catalog::{Catalog, Selection};
use roi_core::{AssumptionField, BusinessInputs, InputField, ModelAssumptions, ProfilePatch};
use roi_engine::{compute, resolve, Report};
use std::sync::Arc;

/// Product picked when a scenario starts
pub const DEFAULT_PRODUCT: &str = "crew";

#[derive(Debug, Clone)]
pub struct Scenario {
    catalog: Arc<Catalog>,
    inputs: BusinessInputs,
    assumptions: ModelAssumptions,
    selection: Selection,
}

impl Scenario {
    /// Start from the default inputs, assumptions and package
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let selection = Selection::from_ids([DEFAULT_PRODUCT], &catalog);
        Self {
            catalog,
            inputs: BusinessInputs::default(),
            assumptions: ModelAssumptions::default(),
            selection,
        }
    }

    pub fn inputs(&self) -> &BusinessInputs {
        &self.inputs
    }

    pub fn assumptions(&self) -> &ModelAssumptions {
        &self.assumptions
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_input(&mut self, field: InputField, value: f64) {
        self.inputs.set(field, value);
    }

    pub fn set_assumption(&mut self, field: AssumptionField, value: f64) {
        self.assumptions.set(field, value);
    }

    pub fn toggle_product(&mut self, id: &str) -> bool {
        self.selection.toggle(id, &self.catalog)
    }

    pub fn apply_patch(&mut self, patch: &ProfilePatch) {
        self.inputs = self.inputs.merged(patch);
    }

    /// Apply the outcome of a coordinated generation.
    ///
    /// `Ok(true)` when a patch was merged, `Ok(false)` when the request was
    /// superseded. On error the current inputs stay as they were.
    pub fn apply_generation(
        &mut self,
        outcome: Result<Option<ProfilePatch>, GenerationError>,
    ) -> Result<bool, GenerationError> {
        match outcome? {
            Some(patch) => {
                self.apply_patch(&patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn report(&self) -> Report {
        let resolved = resolve(self.selection.ids(), &self.catalog);
        compute(&self.inputs, &self.assumptions, &resolved)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin().clone()))
    }
}
