mod common;

use carelink_core::models::{AccountStatus, AssignmentOutcome, Role};
use carelink_core::traits::{IAssignmentStore, IUserStore};
use carelink_storage::audit::AuditLogger;
use carelink_storage::StorageEngine;

use common::{make_user, seed_user};

fn audit_count(store: &StorageEngine, subject_id: &str) -> usize {
    store
        .pool()
        .writer
        .with_conn_sync(|conn| AuditLogger::count_for_subject(conn, subject_id))
        .unwrap()
}

// ── Admin mutations leave audit entries ───────────────────────────────────

#[test]
fn approve_doctor_is_audited() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = make_user("doc", Role::Doctor, AccountStatus::Pending);
    store.create_user(&doc).unwrap();
    assert_eq!(audit_count(&store, &doc.id), 0);

    store.approve_doctor(&doc.id).unwrap();
    assert_eq!(audit_count(&store, &doc.id), 1);
}

#[test]
fn reject_is_audited_and_entry_outlives_the_account() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = make_user("doc", Role::Doctor, AccountStatus::Pending);
    store.create_user(&doc).unwrap();

    store.delete_user(&doc.id).unwrap();
    assert!(store.get_user(&doc.id).unwrap().is_none());
    assert_eq!(audit_count(&store, &doc.id), 1, "audit row survives the delete");
}

#[test]
fn assignment_lifecycle_is_audited() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = seed_user(&store, "doc", Role::Doctor);
    let pat = seed_user(&store, "pat", Role::Patient);

    let AssignmentOutcome::Created(id) = store.create_assignment(&doc.id, &pat.id).unwrap()
    else {
        panic!("first create must insert");
    };
    assert_eq!(audit_count(&store, &id), 1);

    // A duplicate create mutates nothing, so it writes no entry.
    assert_eq!(
        store.create_assignment(&doc.id, &pat.id).unwrap(),
        AssignmentOutcome::Duplicate
    );
    assert_eq!(audit_count(&store, &id), 1);

    store.delete_assignment(&id).unwrap();
    assert_eq!(audit_count(&store, &id), 2);
}

#[test]
fn plain_reads_are_not_audited() {
    let store = StorageEngine::open_in_memory().unwrap();
    let pat = seed_user(&store, "pat", Role::Patient);

    store.get_user(&pat.id).unwrap();
    store.list_users_by_role(Role::Patient).unwrap();
    assert_eq!(audit_count(&store, &pat.id), 0);
}
