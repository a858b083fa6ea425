//! Parameterized query modules, one per table family.

pub mod alert_ops;
pub mod assignment_ops;
pub mod reports;
pub mod user_ops;
pub mod vitals_ops;

use carelink_core::errors::CareResult;

use crate::to_storage_err;

/// Helper trait to make `query_row` return `Option` on not-found.
pub(crate) trait OptionalRow<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalRow<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Parse an RFC 3339 TEXT column into a UTC timestamp.
pub(crate) fn parse_dt(s: &str) -> CareResult<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{s}': {e}")))
}
