//! ROI Profile: business profiles from free-text descriptions
//!
//! A [`ProfileGenerator`] turns a description such as "a small auto
//! detailing shop" into a partial set of business inputs. The host
//! application supplies the generator; the engine never sees it.
//!
//! # Example
//!
//! ```ignore
//! use roi_profile::{PresetGenerator, ProfileCoordinator, Scenario};
//! use std::sync::Arc;
//!
//! let coordinator = ProfileCoordinator::new(Arc::new(PresetGenerator::new()));
//! let mut scenario = Scenario::default();
//!
//! let outcome = coordinator.generate("a busy plumbing company").await;
//! match scenario.apply_generation(outcome) {
//!     Ok(true) => println!("Profile applied"),
//!     Ok(false) => println!("Superseded by a newer request"),
//!     Err(e) => println!("{}", e.user_message()),
//! }
//! ```

pub mod coordinator;
pub mod error;
pub mod generator;
pub mod normalizer;
pub mod presets;
pub mod response;
pub mod scenario;

pub use coordinator::{ProfileCoordinator, Ticket};
pub use error::GenerationError;
pub use generator::ProfileGenerator;
pub use presets::{BusinessPreset, PresetGenerator};
pub use response::parse_profile_response;
pub use scenario::Scenario;
