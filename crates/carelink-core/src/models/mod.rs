//! Domain models: users, health readings, alerts, assignments.

mod alert;
mod assignment;
mod user;
mod vitals;

pub use alert::{Alert, AlertStatus};
pub use assignment::{Assignment, AssignmentOutcome};
pub use user::{AccountStatus, NewUser, Role, User};
pub use vitals::{HealthReading, Vitals};
