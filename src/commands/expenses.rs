// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::json;

use crate::metrics;
use crate::models::ExpenseEntry;
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, next_id, parse_amount, parse_date, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("stats", sub)) => stats(store, sub)?,
        Some(("breakdown", sub)) => breakdown(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    let description = sub
        .get_one::<String>("description")
        .cloned()
        .unwrap_or_default();
    let recurring = sub.get_flag("recurring");

    let mut user = session::require_user(store)?;
    let entry = ExpenseEntry {
        id: next_id(),
        category: category.clone(),
        amount,
        date: date.to_string(),
        description,
        recurring,
    };
    let id = entry.id;
    user.expense_data.push(entry);
    store.save_current_user(&user)?;
    println!("Added expense #{}: {} ({}) on {}", id, fmt_money(amount), category, date);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    if maybe_print_json(json_flag, &user.expense_data)? {
        return Ok(());
    }
    let rows = user
        .expense_data
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.clone(),
                e.category.clone(),
                fmt_money(e.amount),
                e.description.clone(),
                if e.recurring { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Category", "Amount", "Description", "Recurring"],
            rows
        )
    );
    Ok(())
}

fn stats(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    let total = metrics::total_of(&user.expense_data);
    let average = metrics::monthly_average(&user.expense_data);
    let groups = metrics::group_by_category(
        user.expense_data.iter().map(|e| (e.category.as_str(), e.amount)),
    );
    let (largest_cat, largest_amount) = metrics::largest_category(&groups);

    if maybe_print_json(
        json_flag,
        &json!({
            "total": total,
            "monthlyAverage": average,
            "largest": { "category": largest_cat, "amount": largest_amount },
        }),
    )? {
        return Ok(());
    }
    println!("Total expenses:   {}", fmt_money(total));
    println!("Monthly average:  {}", fmt_money(average));
    println!("Largest category: {} ({})", largest_cat, fmt_money(largest_amount));
    Ok(())
}

fn breakdown(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    let groups = metrics::group_by_category(
        user.expense_data.iter().map(|e| (e.category.as_str(), e.amount)),
    );
    if maybe_print_json(json_flag, &groups)? {
        return Ok(());
    }
    let total = metrics::total_of(&user.expense_data);
    let rows = groups
        .into_iter()
        .map(|(category, amount)| {
            let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
            vec![category, fmt_money(amount), format!("{:.1}%", share)]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    Ok(())
}

fn delete(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = sub
        .get_one::<String>("id")
        .unwrap()
        .trim()
        .parse()
        .context("Invalid id")?;
    let mut user = session::require_user(store)?;
    let before = user.expense_data.len();
    user.expense_data.retain(|e| e.id != id);
    if user.expense_data.len() == before {
        println!("No expense entry with id {}", id);
        return Ok(());
    }
    store.save_current_user(&user)?;
    println!("Deleted expense #{}", id);
    Ok(())
}
