#![allow(dead_code)]

use chrono::Utc;
use uuid::Uuid;

use carelink_core::models::{
    AccountStatus, Alert, AlertStatus, HealthReading, Role, User, Vitals,
};
use carelink_core::traits::IUserStore;
use carelink_storage::StorageEngine;

pub fn make_user(username: &str, role: Role, status: AccountStatus) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        username: username.to_string(),
        full_name: format!("Test {username}"),
        password_hash: "$argon2id$test$hash".to_string(),
        role,
        status,
        created_at: Utc::now(),
    }
}

pub fn seed_user(store: &StorageEngine, username: &str, role: Role) -> User {
    let user = make_user(username, role, AccountStatus::Approved);
    store.create_user(&user).unwrap();
    user
}

pub fn make_reading(patient_id: &str, vitals: Vitals) -> HealthReading {
    HealthReading {
        id: Uuid::new_v4().to_string(),
        patient_id: patient_id.to_string(),
        vitals,
        recorded_at: Utc::now(),
    }
}

pub fn normal_vitals() -> Vitals {
    Vitals {
        systolic: 120,
        diastolic: 80,
        sugar: 95.0,
        heart_rate: 72,
    }
}

pub fn make_alert(doctor_id: &str, patient_id: &str, message: &str) -> Alert {
    Alert {
        id: Uuid::new_v4().to_string(),
        doctor_id: doctor_id.to_string(),
        patient_id: patient_id.to_string(),
        message: message.to_string(),
        status: AlertStatus::Sent,
        created_at: Utc::now(),
    }
}
