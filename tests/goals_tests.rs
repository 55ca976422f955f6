// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finapp::models::User;
use finapp::store::Store;
use finapp::{cli, commands::goals};
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

fn run_goal(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut full = vec!["finapp", "goal"];
    full.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(full);
    match matches.subcommand() {
        Some(("goal", goal_m)) => goals::handle(store, goal_m),
        _ => panic!("no goal subcommand"),
    }
}

#[test]
fn add_computes_reached_milestones_from_the_starting_amount() {
    let (_dir, store) = setup();
    run_goal(
        &store,
        &[
            "add",
            "--name",
            "Emergency Fund",
            "--target",
            "100000",
            "--deadline",
            "2027-06-30",
            "--current",
            "50000",
        ],
    )
    .unwrap();

    let user = store.current_user().unwrap().unwrap();
    assert_eq!(user.goals.len(), 1);
    let goal = &user.goals[0];
    assert_eq!(goal.milestones, vec![25, 50, 75, 100]);
    assert_eq!(goal.reached_milestones, vec![25, 50]);
    assert_eq!(goal.category, "Savings");
}

#[test]
fn update_recomputes_milestones_and_persists() {
    let (_dir, store) = setup();
    run_goal(
        &store,
        &["add", "--name", "Car", "--target", "400000", "--deadline", "2027-01-01"],
    )
    .unwrap();

    let id = store.current_user().unwrap().unwrap().goals[0].id.to_string();
    run_goal(&store, &["update", "--id", &id, "--amount", "300000"]).unwrap();

    let goal = store.current_user().unwrap().unwrap().goals[0].clone();
    assert_eq!(goal.current_amount, 300000.0);
    assert_eq!(goal.reached_milestones, vec![25, 50, 75]);
}

#[test]
fn current_above_target_is_rejected_on_add_and_update() {
    let (_dir, store) = setup();
    assert!(
        run_goal(
            &store,
            &[
                "add",
                "--name",
                "Bad",
                "--target",
                "1000",
                "--deadline",
                "2027-01-01",
                "--current",
                "2000",
            ],
        )
        .is_err()
    );

    run_goal(
        &store,
        &["add", "--name", "Ok", "--target", "1000", "--deadline", "2027-01-01"],
    )
    .unwrap();
    let id = store.current_user().unwrap().unwrap().goals[0].id.to_string();
    assert!(run_goal(&store, &["update", "--id", &id, "--amount", "2000"]).is_err());
}

#[test]
fn delete_removes_only_the_matching_goal() {
    let (_dir, store) = setup();
    run_goal(
        &store,
        &["add", "--name", "One", "--target", "1000", "--deadline", "2027-01-01"],
    )
    .unwrap();
    run_goal(
        &store,
        &["add", "--name", "Two", "--target", "2000", "--deadline", "2027-01-01"],
    )
    .unwrap();

    let id = store.current_user().unwrap().unwrap().goals[0].id.to_string();
    run_goal(&store, &["delete", "--id", &id]).unwrap();

    let goals = store.current_user().unwrap().unwrap().goals;
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].name, "Two");
}
