//! Trait seams implemented by the storage engine and mocked in tests.

mod storage;

pub use storage::{IAlertStore, IAssignmentStore, IReportStore, IUserStore, IVitalsStore};
