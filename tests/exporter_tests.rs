// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finapp::models::{ExpenseEntry, IncomeEntry, User};
use finapp::store::Store;
use finapp::{cli, commands::exporter};
use tempfile::tempdir;

fn seeded_store(dir: &std::path::Path) -> Store {
    let store = Store::open_at(dir).unwrap();
    store
        .save_current_user(&User {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            income_data: vec![IncomeEntry {
                id: 1,
                source: "Salary".into(),
                amount: 82000.0,
                date: "2025-01-05".into(),
                recurring: true,
            }],
            expense_data: vec![ExpenseEntry {
                id: 2,
                category: "Food".into(),
                amount: 4500.0,
                date: "2025-01-10".into(),
                description: "Groceries".into(),
                recurring: false,
            }],
            ..Default::default()
        })
        .unwrap();
    store
}

fn run_export(store: &Store, kind: &str, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "finapp", "export", kind, "--format", format, "--out", out,
    ]);
    match matches.subcommand() {
        Some(("export", export_m)) => exporter::handle(store, export_m),
        _ => panic!("no export subcommand"),
    }
}

#[test]
fn income_exports_as_csv_with_header() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out = dir.path().join("income.csv");
    run_export(&store, "income", "csv", &out.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "id,date,source,amount,recurring");
    assert_eq!(lines.next().unwrap(), "1,2025-01-05,Salary,82000,true");
}

#[test]
fn expenses_export_as_pretty_json_with_camel_case_keys() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out = dir.path().join("expenses.json");
    run_export(&store, "expenses", "json", &out.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["category"], "Food");
    assert_eq!(rows[0]["description"], "Groceries");
    assert!(rows[0].get("recurring").is_some());
}

#[test]
fn unknown_kind_and_format_are_errors() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out = dir.path().join("out.csv");
    assert!(run_export(&store, "wallets", "csv", &out.to_string_lossy()).is_err());
    assert!(run_export(&store, "income", "xml", &out.to_string_lossy()).is_err());
}
