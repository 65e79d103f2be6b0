//! ROI Core: shared data model and error types
//!
//! Plain numeric records passed between the catalog, the engine and the
//! collaborators that produce inputs. Nothing in here performs I/O.

pub mod data_model;
pub mod error;
pub mod fingerprint;

pub use data_model::{
    AssumptionField, BusinessInputs, GainCategory, InputField, ModelAssumptions, ProfilePatch,
};
pub use error::RoiError;
pub use fingerprint::fingerprint;

/// Version of the ROI model
pub const MODEL_VERSION: &str = "1.0.0";
