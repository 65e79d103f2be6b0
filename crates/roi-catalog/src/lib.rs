//! ROI Catalog: products, slider bounds and selection rules
//!
//! Static configuration loaded once at start-up and read-only afterwards.
//!
//! # Example
//!
//! ```
//! use roi_catalog::{Catalog, Selection};
//!
//! let catalog = Catalog::builtin();
//! let mut selection = Selection::from_ids(["crew"], catalog);
//!
//! // Picking an a la carte tool drops the package
//! selection.toggle("chatbot", catalog);
//! assert_eq!(selection.ids(), ["chatbot"]);
//! ```

pub mod catalog;
pub mod error;
pub mod selection;
pub mod sliders;

pub use catalog::{Catalog, Product, ProductCategory, SelectionType};
pub use error::CatalogError;
pub use selection::Selection;
pub use sliders::{BoundViolation, SliderConfig, SliderTable, ValueKind};
