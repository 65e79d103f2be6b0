//! ROI Engine: cost, gain and return projections
//!
//! Maps business inputs, model assumptions and a product selection to a
//! [`Report`]. The computation is pure and total: the same snapshot always
//! produces a bit-identical report and no division can yield a non-finite
//! value.
//!
//! # Architecture
//!
//! ```text
//! Catalog → resolve(selection) → ResolvedSelection ─┐
//!                                                   ├→ compute → Report
//!                 BusinessInputs + ModelAssumptions ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use roi_catalog::Catalog;
//! use roi_core::{BusinessInputs, ModelAssumptions};
//! use roi_engine::evaluate;
//!
//! let report = evaluate(
//!     &BusinessInputs::default(),
//!     &ModelAssumptions::default(),
//!     &["crew"],
//!     Catalog::builtin(),
//! );
//!
//! assert_eq!(report.current.labor_cost_scheduling, 800.0);
//! println!("ROI: {:.0}%", report.summary.roi_percentage);
//! ```

pub mod engine;
pub mod report;
pub mod resolver;

pub use engine::{compute, Fractions, CONSERVATIVE_FACTOR};
pub use report::{CurrentCosts, Gains, Report, RoiSummary};
pub use resolver::{resolve, ResolvedSelection};

use roi_catalog::Catalog;
use roi_core::{BusinessInputs, ModelAssumptions};

/// Resolve a selection against the catalog and compute its report
pub fn evaluate<S: AsRef<str>>(
    inputs: &BusinessInputs,
    assumptions: &ModelAssumptions,
    selection: &[S],
    catalog: &Catalog,
) -> Report {
    let resolved = resolve(selection, catalog);
    compute(inputs, assumptions, &resolved)
}
