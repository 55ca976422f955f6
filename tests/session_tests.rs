// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finapp::models::FinancialDetails;
use finapp::session;
use finapp::store::Store;
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, Store) {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    (dir, store)
}

#[test]
fn register_writes_both_copies_and_strips_the_session_password() {
    let (_dir, store) = setup();
    let state = session::register(&store, "Asha", "asha@example.com", "secret1").unwrap();
    assert!(state.needs_setup);

    let registered = store.registered_users().unwrap();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].password, "secret1");

    let session_user = store.current_user().unwrap().unwrap();
    assert_eq!(session_user.email, "asha@example.com");
    assert!(session_user.password.is_empty());
}

#[test]
fn register_rejects_duplicate_email_and_short_password() {
    let (_dir, store) = setup();
    session::register(&store, "Asha", "asha@example.com", "secret1").unwrap();
    assert!(session::register(&store, "Other", "asha@example.com", "secret2").is_err());
    assert!(session::register(&store, "New", "new@example.com", "short").is_err());
}

#[test]
fn login_matches_credentials_and_resolves_setup_state() {
    let (_dir, store) = setup();
    session::register(&store, "Asha", "asha@example.com", "secret1").unwrap();
    store.clear_current_user().unwrap();

    assert!(session::login(&store, "asha@example.com", "wrong").is_err());

    let state = session::login(&store, "asha@example.com", "secret1").unwrap();
    assert!(state.needs_setup);
    assert!(!state.authenticated);
}

#[test]
fn profile_setup_lands_in_both_the_session_and_the_registered_entry() {
    let (_dir, store) = setup();
    session::register(&store, "Asha", "asha@example.com", "secret1").unwrap();

    let details = FinancialDetails {
        monthly_income: 82000.0,
        account_balance: 250000.0,
        ..Default::default()
    };
    session::complete_profile_setup(&store, details).unwrap();

    let session_user = store.current_user().unwrap().unwrap();
    assert_eq!(
        session_user.financial_details.as_ref().unwrap().monthly_income,
        82000.0
    );

    let registered = store.registered_users().unwrap();
    assert_eq!(
        registered[0].financial_details.as_ref().unwrap().monthly_income,
        82000.0
    );

    // A fresh login now resolves straight to authenticated.
    store.clear_current_user().unwrap();
    let state = session::login(&store, "asha@example.com", "secret1").unwrap();
    assert!(state.authenticated);
    assert!(!state.needs_setup);
}

#[test]
fn delete_account_removes_both_copies() {
    let (_dir, store) = setup();
    session::register(&store, "Asha", "asha@example.com", "secret1").unwrap();
    session::delete_account(&store).unwrap();
    assert!(store.current_user().unwrap().is_none());
    assert!(store.registered_users().unwrap().is_empty());
}
