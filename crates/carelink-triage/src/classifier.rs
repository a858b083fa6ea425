//! Ordered first-match-wins severity rules.
//!
//! The boundaries are fixed product behavior (see the constants crate doc);
//! note the asymmetry between tiers is intentional: sugar has a low-side
//! Warning bound but no low-side Critical bound, while heart rate has both.

use carelink_core::constants::{
    CRITICAL_DIASTOLIC, CRITICAL_HEART_RATE_HIGH, CRITICAL_HEART_RATE_LOW, CRITICAL_SUGAR,
    CRITICAL_SYSTOLIC, WARNING_DIASTOLIC, WARNING_HEART_RATE_HIGH, WARNING_HEART_RATE_LOW,
    WARNING_SUGAR_HIGH, WARNING_SUGAR_LOW, WARNING_SYSTOLIC,
};
use carelink_core::models::Vitals;

use crate::severity::{Severity, TriageBadge};

/// Classify a reading. Critical rules are checked first, so any reading
/// matching both tiers is Critical.
pub fn classify(vitals: &Vitals) -> TriageBadge {
    severity_of(vitals).into()
}

fn severity_of(v: &Vitals) -> Severity {
    if v.systolic >= CRITICAL_SYSTOLIC
        || v.diastolic >= CRITICAL_DIASTOLIC
        || v.sugar >= CRITICAL_SUGAR
        || v.heart_rate >= CRITICAL_HEART_RATE_HIGH
        || v.heart_rate <= CRITICAL_HEART_RATE_LOW
    {
        return Severity::Critical;
    }
    if v.systolic >= WARNING_SYSTOLIC
        || v.diastolic >= WARNING_DIASTOLIC
        || v.sugar >= WARNING_SUGAR_HIGH
        || v.sugar <= WARNING_SUGAR_LOW
        || v.heart_rate >= WARNING_HEART_RATE_HIGH
        || v.heart_rate <= WARNING_HEART_RATE_LOW
    {
        return Severity::Warning;
    }
    Severity::Normal
}
