//! # carelink-core
//!
//! Foundation crate for the CareLink coordination system.
//! Defines all domain models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CareConfig;
pub use errors::{CareError, CareResult, StorageError};
pub use models::{
    AccountStatus, Alert, AlertStatus, Assignment, AssignmentOutcome, HealthReading, NewUser,
    Role, User, Vitals,
};
