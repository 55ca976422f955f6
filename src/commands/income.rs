// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::json;

use crate::metrics;
use crate::models::IncomeEntry;
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, next_id, parse_amount, parse_date, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("stats", sub)) => stats(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let source = sub
        .get_one::<String>("source")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    let recurring = sub.get_flag("recurring");

    let mut user = session::require_user(store)?;
    let entry = IncomeEntry {
        id: next_id(),
        source,
        amount,
        date: date.to_string(),
        recurring,
    };
    let id = entry.id;
    user.income_data.push(entry);
    store.save_current_user(&user)?;
    println!("Added income #{}: {} on {}", id, fmt_money(amount), date);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    if maybe_print_json(json_flag, &user.income_data)? {
        return Ok(());
    }
    let rows = user
        .income_data
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.clone(),
                e.source.clone(),
                fmt_money(e.amount),
                if e.recurring { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Source", "Amount", "Recurring"], rows)
    );
    Ok(())
}

fn stats(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    let total = metrics::total_of(&user.income_data);
    let average = metrics::monthly_average(&user.income_data);
    if maybe_print_json(json_flag, &json!({ "total": total, "monthlyAverage": average }))? {
        return Ok(());
    }
    println!("Total income:    {}", fmt_money(total));
    println!("Monthly average: {}", fmt_money(average));

    let rows = metrics::monthly_totals(&user.income_data)
        .into_iter()
        .map(|(month, sum)| vec![month, fmt_money(sum)])
        .collect();
    println!("{}", pretty_table(&["Month", "Income"], rows));
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
    let before = user.income_data.len();
    user.income_data.retain(|e| e.id != id);
    if user.income_data.len() == before {
        println!("No income entry with id {}", id);
        return Ok(());
    }
    store.save_current_user(&user)?;
    println!("Deleted income #{}", id);
    Ok(())
}
