// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finapp::models::{Features, Goal, User};
use finapp::store::{Store, FEATURES_KEY, USER_KEY};
use tempfile::tempdir;

#[test]
fn missing_key_reads_as_none() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let user: Option<User> = store.get(USER_KEY).unwrap();
    assert!(user.is_none());
}

#[test]
fn user_blob_round_trips_with_camel_case_keys() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    let user = User {
        name: "Asha".into(),
        email: "asha@example.com".into(),
        profile_pic: "https://example.com/pic.png".into(),
        goals: vec![Goal {
            id: 42,
            name: "Emergency Fund".into(),
            target_amount: 100000.0,
            current_amount: 25000.0,
            deadline: "2026-12-31".into(),
            category: "Savings".into(),
            milestones: vec![25, 50, 75, 100],
            reached_milestones: vec![25],
            ..Default::default()
        }],
        ..Default::default()
    };
    store.save_current_user(&user).unwrap();

    // On-disk shape keeps the camelCase field names of the original blobs.
    let raw = std::fs::read_to_string(dir.path().join("finapp_user.json")).unwrap();
    assert!(raw.contains("\"incomeData\""));
    assert!(raw.contains("\"targetAmount\""));
    assert!(raw.contains("\"reachedMilestones\""));

    let loaded = store.current_user().unwrap().unwrap();
    assert_eq!(loaded.goals.len(), 1);
    assert_eq!(loaded.goals[0].id, 42);
    assert_eq!(loaded.goals[0].target_amount, 100000.0);
    assert_eq!(loaded.goals[0].reached_milestones, vec![25]);
}

#[test]
fn writes_replace_the_whole_blob() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    let first = User {
        name: "First".into(),
        ..Default::default()
    };
    let second = User {
        name: "Second".into(),
        ..Default::default()
    };
    store.save_current_user(&first).unwrap();
    store.save_current_user(&second).unwrap();

    let loaded = store.current_user().unwrap().unwrap();
    assert_eq!(loaded.name, "Second");
}

#[test]
fn remove_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    store
        .save_current_user(&User {
            name: "Asha".into(),
            ..Default::default()
        })
        .unwrap();
    store.clear_current_user().unwrap();
    store.clear_current_user().unwrap();
    assert!(store.current_user().unwrap().is_none());
}

#[test]
fn features_default_to_all_off() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    let features = store.features().unwrap();
    assert!(!features.cash_flow_forecasting);
    assert!(!features.bill_reminder);
    assert!(!features.debt_repayment);

    store
        .save_features(&Features {
            bill_reminder: true,
            ..Default::default()
        })
        .unwrap();
    let loaded: Features = store.get(FEATURES_KEY).unwrap().unwrap();
    assert!(loaded.bill_reminder);
    assert!(!loaded.cash_flow_forecasting);
}

#[cfg(debug_assertions)]
#[test]
fn corrupt_blob_is_an_error_in_debug_builds() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    std::fs::write(dir.path().join("finapp_user.json"), "{not json").unwrap();
    assert!(store.current_user().is_err());
}
