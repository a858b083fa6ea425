mod common;

use carelink_core::errors::CareError;
use carelink_core::models::{AssignmentOutcome, Role};
use carelink_core::traits::{IAssignmentStore, IUserStore};
use carelink_storage::StorageEngine;

use common::seed_user;

// ── Idempotent create via uniqueness constraint ───────────────────────────

#[test]
fn second_identical_create_is_duplicate() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = seed_user(&store, "doc", Role::Doctor);
    let pat = seed_user(&store, "pat", Role::Patient);

    let first = store.create_assignment(&doc.id, &pat.id).unwrap();
    assert!(matches!(first, AssignmentOutcome::Created(_)));

    let second = store.create_assignment(&doc.id, &pat.id).unwrap();
    assert_eq!(second, AssignmentOutcome::Duplicate);

    // Exactly one stored edge.
    assert!(store.find_assignment(&doc.id, &pat.id).unwrap().is_some());
    assert_eq!(store.patients_of_doctor(&doc.id).unwrap().len(), 1);
}

#[test]
fn endpoints_must_have_matching_roles() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = seed_user(&store, "doc", Role::Doctor);
    let pat = seed_user(&store, "pat", Role::Patient);

    // Swapped endpoints.
    assert!(matches!(
        store.create_assignment(&pat.id, &doc.id).unwrap_err(),
        CareError::RoleMismatch { .. }
    ));
    // Unknown doctor.
    assert!(matches!(
        store.create_assignment("ghost", &pat.id).unwrap_err(),
        CareError::UserNotFound { .. }
    ));
}

// ── Delete ────────────────────────────────────────────────────────────────

#[test]
fn delete_by_id_and_not_found() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = seed_user(&store, "doc", Role::Doctor);
    let pat = seed_user(&store, "pat", Role::Patient);

    let AssignmentOutcome::Created(id) = store.create_assignment(&doc.id, &pat.id).unwrap()
    else {
        panic!("first create must insert");
    };

    store.delete_assignment(&id).unwrap();
    assert!(store.find_assignment(&doc.id, &pat.id).unwrap().is_none());

    assert!(matches!(
        store.delete_assignment(&id).unwrap_err(),
        CareError::AssignmentNotFound { .. }
    ));
}

#[test]
fn removing_edge_then_recreating_is_created_again() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = seed_user(&store, "doc", Role::Doctor);
    let pat = seed_user(&store, "pat", Role::Patient);

    let AssignmentOutcome::Created(id) = store.create_assignment(&doc.id, &pat.id).unwrap()
    else {
        panic!("first create must insert");
    };
    store.delete_assignment(&id).unwrap();

    assert!(matches!(
        store.create_assignment(&doc.id, &pat.id).unwrap(),
        AssignmentOutcome::Created(_)
    ));
}

// ── Edge listings ─────────────────────────────────────────────────────────

#[test]
fn listings_join_through_assignments() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc1 = seed_user(&store, "doc1", Role::Doctor);
    let doc2 = seed_user(&store, "doc2", Role::Doctor);
    let pat1 = seed_user(&store, "pat1", Role::Patient);
    let pat2 = seed_user(&store, "pat2", Role::Patient);

    store.create_assignment(&doc1.id, &pat1.id).unwrap();
    store.create_assignment(&doc1.id, &pat2.id).unwrap();
    store.create_assignment(&doc2.id, &pat1.id).unwrap();

    assert_eq!(store.patients_of_doctor(&doc1.id).unwrap().len(), 2);
    assert_eq!(store.patients_of_doctor(&doc2.id).unwrap().len(), 1);
    assert_eq!(store.doctors_of_patient(&pat1.id).unwrap().len(), 2);
    assert_eq!(store.doctors_of_patient(&pat2.id).unwrap().len(), 1);
}

#[test]
fn deleting_user_cascades_to_assignments() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = seed_user(&store, "doc", Role::Doctor);
    let pat = seed_user(&store, "pat", Role::Patient);

    store.create_assignment(&doc.id, &pat.id).unwrap();
    store.delete_user(&doc.id).unwrap();

    assert!(store.find_assignment(&doc.id, &pat.id).unwrap().is_none());
    assert_eq!(store.doctors_of_patient(&pat.id).unwrap().len(), 0);
}
