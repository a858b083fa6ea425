mod common;

use carelink_core::models::{AccountStatus, AlertStatus, Role};
use carelink_core::traits::{IAlertStore, IReportStore, IUserStore, IVitalsStore};
use carelink_storage::StorageEngine;

use common::{make_alert, make_reading, make_user, normal_vitals, seed_user};

#[test]
fn user_counts_group_by_role() {
    let store = StorageEngine::open_in_memory().unwrap();
    seed_user(&store, "admin1", Role::Admin);
    seed_user(&store, "doc1", Role::Doctor);
    seed_user(&store, "pat1", Role::Patient);
    seed_user(&store, "pat2", Role::Patient);

    let counts = store.user_counts_by_role().unwrap();
    let count_of = |role: Role| {
        counts
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };
    assert_eq!(count_of(Role::Admin), 1);
    assert_eq!(count_of(Role::Doctor), 1);
    assert_eq!(count_of(Role::Patient), 2);
}

#[test]
fn pending_doctor_count_tracks_approvals() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = make_user("doc", Role::Doctor, AccountStatus::Pending);
    store.create_user(&doc).unwrap();

    assert_eq!(store.pending_doctor_count().unwrap(), 1);
    store.approve_doctor(&doc.id).unwrap();
    assert_eq!(store.pending_doctor_count().unwrap(), 0);
}

#[test]
fn alert_counts_group_by_status() {
    let store = StorageEngine::open_in_memory().unwrap();
    let doc = seed_user(&store, "doc", Role::Doctor);
    let pat = seed_user(&store, "pat", Role::Patient);

    let a = make_alert(&doc.id, &pat.id, "one");
    let b = make_alert(&doc.id, &pat.id, "two");
    store.create_alert(&a).unwrap();
    store.create_alert(&b).unwrap();
    store.mark_seen(&a.id, &pat.id).unwrap();

    let counts = store.alert_counts_by_status().unwrap();
    let count_of = |status: AlertStatus| {
        counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };
    assert_eq!(count_of(AlertStatus::Sent), 1);
    assert_eq!(count_of(AlertStatus::Seen), 1);
}

#[test]
fn reading_counts_per_patient_most_active_first() {
    let store = StorageEngine::open_in_memory().unwrap();
    let pat1 = seed_user(&store, "pat1", Role::Patient);
    let pat2 = seed_user(&store, "pat2", Role::Patient);

    for _ in 0..3 {
        store
            .insert_reading(&make_reading(&pat1.id, normal_vitals()))
            .unwrap();
    }
    store
        .insert_reading(&make_reading(&pat2.id, normal_vitals()))
        .unwrap();

    let counts = store.reading_counts_per_patient().unwrap();
    assert_eq!(counts[0], (pat1.id.clone(), 3));
    assert_eq!(counts[1], (pat2.id.clone(), 1));
}
