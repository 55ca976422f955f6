// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finapp::models::User;
use finapp::store::Store;
use finapp::{cli, commands::investments};
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, Store) {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    store
        .save_current_user(&User {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            ..Default::default()
        })
        .unwrap();
    (dir, store)
}

fn run_investment(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut full = vec!["finapp", "investment"];
    full.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(full);
    match matches.subcommand() {
        Some(("investment", inv_m)) => investments::handle(store, inv_m),
        _ => panic!("no investment subcommand"),
    }
}

#[test]
fn omitted_current_value_derives_from_returns() {
    let (_dir, store) = setup();
    run_investment(
        &store,
        &[
            "add",
            "--name",
            "Fixed Deposit",
            "--category",
            "Fixed Deposits",
            "--initial",
            "10000",
            "--date",
            "2025-01-01",
            "--returns",
            "6.5",
        ],
    )
    .unwrap();

    let inv = store.current_user().unwrap().unwrap().investment_data[0].clone();
    assert_eq!(inv.initial_amount, 10000.0);
    assert!((inv.current_amount - 10650.0).abs() < 1e-6);
    assert_eq!(inv.returns, 6.5);
}

#[test]
fn omitted_returns_derive_from_the_two_amounts() {
    let (_dir, store) = setup();
    run_investment(
        &store,
        &[
            "add",
            "--name",
            "Equity Fund",
            "--category",
            "Mutual Funds",
            "--initial",
            "1000",
            "--date",
            "2025-01-01",
            "--current",
            "1120",
        ],
    )
    .unwrap();

    let inv = store.current_user().unwrap().unwrap().investment_data[0].clone();
    assert_eq!(inv.current_amount, 1120.0);
    assert!((inv.returns - 12.0).abs() < 1e-6);
}

#[test]
fn omitting_both_keeps_the_holding_flat() {
    let (_dir, store) = setup();
    run_investment(
        &store,
        &[
            "add",
            "--name",
            "New SIP",
            "--category",
            "Mutual Funds",
            "--initial",
            "5000",
            "--date",
            "2025-01-01",
        ],
    )
    .unwrap();

    let inv = store.current_user().unwrap().unwrap().investment_data[0].clone();
    assert_eq!(inv.current_amount, 5000.0);
    assert_eq!(inv.returns, 0.0);
}
