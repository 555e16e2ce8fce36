//! outbreak-core
//!
//! Pure domain types for the disease prediction pages. No I/O. Defines the
//! three prediction domains, their ordered field schemas, the per-submission
//! input vector, the completeness gate, and the diagnosis strings.

pub mod diagnosis;
pub mod domain;
pub mod error;
pub mod gate;
pub mod input;
pub mod schema;

pub use diagnosis::{render, Diagnosis, Label};
pub use domain::Domain;
pub use error::CoreError;
pub use input::InputVector;
pub use schema::{Field, FieldSchema};
