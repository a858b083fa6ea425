//! # carelink-triage
//!
//! Classifies a set of vital signs into a severity tier using the fixed
//! threshold table from `carelink_core::constants`. Pure and total: any
//! four numbers produce exactly one classification.

mod classifier;
mod severity;

pub use classifier::classify;
pub use severity::{Severity, TriageBadge};
