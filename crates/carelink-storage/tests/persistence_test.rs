mod common;

use carelink_core::models::Role;
use carelink_core::traits::{IAssignmentStore, IUserStore};
use carelink_storage::StorageEngine;

use common::seed_user;

// ── File-backed lifecycle ─────────────────────────────────────────────────

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("carelink.db");

    let doc_id;
    let pat_id;
    {
        let store = StorageEngine::open(&db_path, 2).unwrap();
        doc_id = seed_user(&store, "doc", Role::Doctor).id;
        pat_id = seed_user(&store, "pat", Role::Patient).id;
        store.create_assignment(&doc_id, &pat_id).unwrap();
    }

    let reopened = StorageEngine::open(&db_path, 2).unwrap();
    assert!(reopened.get_user(&doc_id).unwrap().is_some());
    assert!(reopened
        .find_assignment(&doc_id, &pat_id)
        .unwrap()
        .is_some());
}

#[test]
fn migrations_are_recorded_and_rerun_safe() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("carelink.db");

    // Open twice: the second run must see every migration already applied.
    let store = StorageEngine::open(&db_path, 1).unwrap();
    drop(store);
    let store = StorageEngine::open(&db_path, 1).unwrap();

    let version = store
        .pool()
        .writer
        .with_conn_sync(carelink_storage::migrations::schema_version)
        .unwrap();
    assert!(version >= 4, "all migrations applied, got v{version}");
}

#[test]
fn reads_go_through_the_read_pool() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("carelink.db");

    let store = StorageEngine::open(&db_path, 3).unwrap();
    assert_eq!(store.pool().readers.size(), 3);

    let pat = seed_user(&store, "pat", Role::Patient);
    // Several reads to cycle the round-robin pool.
    for _ in 0..6 {
        assert!(store.get_user(&pat.id).unwrap().is_some());
    }
}

#[test]
fn wal_mode_is_active_on_file_databases() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("carelink.db");

    let store = StorageEngine::open(&db_path, 1).unwrap();
    let wal = store
        .pool()
        .writer
        .with_conn_sync(carelink_storage::pool::pragmas::verify_wal_mode)
        .unwrap();
    assert!(wal, "file-backed databases must run in WAL mode");
}
