/// CareLink system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Vitals severity thresholds. The table is fixed product behavior: the
// ordered rules in carelink-triage must match it exactly, so the boundary
// values live here rather than in config.

/// Systolic blood pressure at or above this is Critical.
pub const CRITICAL_SYSTOLIC: i32 = 180;
/// Diastolic blood pressure at or above this is Critical.
pub const CRITICAL_DIASTOLIC: i32 = 120;
/// Blood sugar at or above this is Critical.
pub const CRITICAL_SUGAR: f64 = 300.0;
/// Heart rate at or above this is Critical.
pub const CRITICAL_HEART_RATE_HIGH: i32 = 180;
/// Heart rate at or below this is Critical.
pub const CRITICAL_HEART_RATE_LOW: i32 = 50;

/// Systolic blood pressure at or above this is at least Warning.
pub const WARNING_SYSTOLIC: i32 = 140;
/// Diastolic blood pressure at or above this is at least Warning.
pub const WARNING_DIASTOLIC: i32 = 90;
/// Blood sugar at or above this is at least Warning.
pub const WARNING_SUGAR_HIGH: f64 = 200.0;
/// Blood sugar at or below this is at least Warning.
pub const WARNING_SUGAR_LOW: f64 = 80.0;
/// Heart rate at or above this is at least Warning.
pub const WARNING_HEART_RATE_HIGH: i32 = 150;
/// Heart rate at or below this is at least Warning.
pub const WARNING_HEART_RATE_LOW: i32 = 60;
