// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;

use crate::session;
use crate::store::Store;
use crate::utils::pretty_table;

/// Read-only scan for soft-invariant violations. Nothing here blocks or
/// repairs; the store trusts form-level validation, so this is the one place
/// drifted data becomes visible.
pub fn handle(store: &Store) -> Result<()> {
    let user = session::require_user(store)?;
    let mut rows = Vec::new();

    if let Some(details) = &user.financial_details {
        let pct_sum: f64 = details.budget_categories.iter().map(|c| c.percentage).sum();
        if (pct_sum - 100.0).abs() > f64::EPSILON {
            rows.push(vec![
                "budget_percentages".to_string(),
                format!("sum to {}%, expected 100%", pct_sum),
            ]);
        }
    } else {
        rows.push(vec![
            "missing_financial_details".to_string(),
            "profile setup incomplete".to_string(),
        ]);
    }

    for goal in &user.goals {
        if goal.current_amount > goal.target_amount {
            rows.push(vec![
                "goal_over_target".to_string(),
                format!("goal #{} '{}'", goal.id, goal.name),
            ]);
        }
        if NaiveDate::parse_from_str(&goal.deadline, "%Y-%m-%d").is_err() {
            rows.push(vec![
                "bad_goal_deadline".to_string(),
                format!("goal #{} '{}'", goal.id, goal.deadline),
            ]);
        }
    }

    for e in &user.income_data {
        if e.amount < 0.0 {
            rows.push(vec!["negative_income".to_string(), format!("entry #{}", e.id)]);
        }
        if NaiveDate::parse_from_str(&e.date, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_income_date".to_string(), format!("entry #{} '{}'", e.id, e.date)]);
        }
    }
    for e in &user.expense_data {
        if e.amount < 0.0 {
            rows.push(vec!["negative_expense".to_string(), format!("entry #{}", e.id)]);
        }
        if NaiveDate::parse_from_str(&e.date, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_expense_date".to_string(), format!("entry #{} '{}'", e.id, e.date)]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
