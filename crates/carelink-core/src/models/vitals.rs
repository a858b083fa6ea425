use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One set of vital-sign measurements. Classifier input; total over any
/// numeric values, including out-of-physiological-range ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Systolic blood pressure (the higher number), mmHg.
    pub systolic: i32,
    /// Diastolic blood pressure (the lower number), mmHg.
    pub diastolic: i32,
    /// Blood sugar level, mg/dL.
    pub sugar: f64,
    /// Heart rate, beats per minute.
    pub heart_rate: i32,
}

/// A patient's point-in-time reading. Append-only history: created only by
/// the owning patient, never mutated or deleted through normal flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReading {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Owning patient's user id.
    pub patient_id: String,
    pub vitals: Vitals,
    pub recorded_at: DateTime<Utc>,
}
