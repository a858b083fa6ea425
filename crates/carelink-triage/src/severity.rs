use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tier of a vitals reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    /// Presentation label.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }

    /// Badge color name for the portal UI.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Normal => "green",
            Severity::Warning => "orange",
            Severity::Critical => "red",
        }
    }

    /// Whether the badge pulses. Warning and Critical pulse, Normal is
    /// static.
    pub fn pulses(self) -> bool {
        !matches!(self, Severity::Normal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified reading together with its presentation hints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriageBadge {
    pub severity: Severity,
    pub label: &'static str,
    pub color: &'static str,
    pub pulse: bool,
}

impl From<Severity> for TriageBadge {
    fn from(severity: Severity) -> Self {
        Self {
            severity,
            label: severity.label(),
            color: severity.color(),
            pulse: severity.pulses(),
        }
    }
}
