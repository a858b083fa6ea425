//! StorageEngine — owns the ConnectionPool and implements the carelink-core
//! storage traits. Admin mutations are recorded in the audit log; audit
//! failure degrades to a warning and never fails the mutation.

use std::path::Path;

use carelink_core::errors::CareResult;
use carelink_core::models::{
    Alert, AlertStatus, Assignment, AssignmentOutcome, HealthReading, Role, User,
};
use carelink_core::traits::{IAlertStore, IAssignmentStore, IReportStore, IUserStore, IVitalsStore};

use crate::audit::AuditLogger;
use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path, read_pool_size: usize) -> CareResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> CareResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations on the write connection.
    fn initialize(&self) -> CareResult<()> {
        self.pool
            .writer
            .with_conn_sync(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> CareResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> CareResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }

    fn audit(conn: &rusqlite::Connection, action: &str, subject_id: &str, details: serde_json::Value) {
        if let Err(e) = AuditLogger::log(conn, action, subject_id, details) {
            tracing::warn!(action, subject_id, error = %e, "failed to write audit entry");
        }
    }
}

impl IUserStore for StorageEngine {
    fn create_user(&self, user: &User) -> CareResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::user_ops::insert_user(conn, user))
    }

    fn get_user(&self, id: &str) -> CareResult<Option<User>> {
        self.with_reader(|conn| crate::queries::user_ops::get_user(conn, id))
    }

    fn get_user_by_username(&self, username: &str) -> CareResult<Option<User>> {
        self.with_reader(|conn| crate::queries::user_ops::get_user_by_username(conn, username))
    }

    fn list_users_by_role(&self, role: Role) -> CareResult<Vec<User>> {
        self.with_reader(|conn| crate::queries::user_ops::list_users_by_role(conn, role))
    }

    fn list_pending_doctors(&self) -> CareResult<Vec<User>> {
        self.with_reader(crate::queries::user_ops::list_pending_doctors)
    }

    fn approve_doctor(&self, id: &str) -> CareResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::user_ops::approve_doctor(conn, id)?;
            Self::audit(conn, "approve_doctor", id, serde_json::json!({}));
            Ok(())
        })
    }

    fn delete_user(&self, id: &str) -> CareResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::user_ops::delete_user(conn, id)?;
            Self::audit(conn, "delete_user", id, serde_json::json!({}));
            Ok(())
        })
    }
}

impl IVitalsStore for StorageEngine {
    fn insert_reading(&self, reading: &HealthReading) -> CareResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::vitals_ops::insert_reading(conn, reading))
    }

    fn reading_history(&self, patient_id: &str) -> CareResult<Vec<HealthReading>> {
        self.with_reader(|conn| crate::queries::vitals_ops::reading_history(conn, patient_id))
    }

    fn latest_reading(&self, patient_id: &str) -> CareResult<Option<HealthReading>> {
        self.with_reader(|conn| crate::queries::vitals_ops::latest_reading(conn, patient_id))
    }
}

impl IAlertStore for StorageEngine {
    fn create_alert(&self, alert: &Alert) -> CareResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::alert_ops::insert_alert(conn, alert))
    }

    fn get_alert(&self, id: &str) -> CareResult<Option<Alert>> {
        self.with_reader(|conn| crate::queries::alert_ops::get_alert(conn, id))
    }

    fn mark_seen(&self, alert_id: &str, patient_id: &str) -> CareResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::alert_ops::mark_seen(conn, alert_id, patient_id))
    }

    fn alerts_for_patient(&self, patient_id: &str) -> CareResult<Vec<Alert>> {
        self.with_reader(|conn| crate::queries::alert_ops::alerts_for_patient(conn, patient_id))
    }

    fn alerts_from_doctor(&self, doctor_id: &str) -> CareResult<Vec<Alert>> {
        self.with_reader(|conn| crate::queries::alert_ops::alerts_from_doctor(conn, doctor_id))
    }

    fn unseen_count(&self, patient_id: &str) -> CareResult<usize> {
        self.with_reader(|conn| crate::queries::alert_ops::unseen_count(conn, patient_id))
    }
}

impl IAssignmentStore for StorageEngine {
    fn create_assignment(
        &self,
        doctor_id: &str,
        patient_id: &str,
    ) -> CareResult<AssignmentOutcome> {
        self.pool.writer.with_conn_sync(|conn| {
            let outcome =
                crate::queries::assignment_ops::create_assignment(conn, doctor_id, patient_id)?;
            if let AssignmentOutcome::Created(id) = &outcome {
                Self::audit(
                    conn,
                    "create_assignment",
                    id,
                    serde_json::json!({ "doctor_id": doctor_id, "patient_id": patient_id }),
                );
            }
            Ok(outcome)
        })
    }

    fn delete_assignment(&self, id: &str) -> CareResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::assignment_ops::delete_assignment(conn, id)?;
            Self::audit(conn, "delete_assignment", id, serde_json::json!({}));
            Ok(())
        })
    }

    fn find_assignment(
        &self,
        doctor_id: &str,
        patient_id: &str,
    ) -> CareResult<Option<Assignment>> {
        self.with_reader(|conn| {
            crate::queries::assignment_ops::find_assignment(conn, doctor_id, patient_id)
        })
    }

    fn patients_of_doctor(&self, doctor_id: &str) -> CareResult<Vec<User>> {
        self.with_reader(|conn| {
            crate::queries::assignment_ops::patients_of_doctor(conn, doctor_id)
        })
    }

    fn doctors_of_patient(&self, patient_id: &str) -> CareResult<Vec<User>> {
        self.with_reader(|conn| {
            crate::queries::assignment_ops::doctors_of_patient(conn, patient_id)
        })
    }
}

impl IReportStore for StorageEngine {
    fn user_counts_by_role(&self) -> CareResult<Vec<(Role, usize)>> {
        self.with_reader(crate::queries::reports::user_counts_by_role)
    }

    fn pending_doctor_count(&self) -> CareResult<usize> {
        self.with_reader(crate::queries::reports::pending_doctor_count)
    }

    fn alert_counts_by_status(&self) -> CareResult<Vec<(AlertStatus, usize)>> {
        self.with_reader(crate::queries::reports::alert_counts_by_status)
    }

    fn reading_counts_per_patient(&self) -> CareResult<Vec<(String, usize)>> {
        self.with_reader(crate::queries::reports::reading_counts_per_patient)
    }
}
