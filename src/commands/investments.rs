// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::metrics;
use crate::models::InvestmentEntry;
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, next_id, parse_amount, parse_date, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("stats", sub)) => stats(store, sub)?,
        Some(("allocation", sub)) => allocation(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Either of current value and returns may be omitted: a missing current
/// value derives from the returns percentage, a missing returns percentage
/// derives from the two amounts.
fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub
        .get_one::<String>("name")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let initial_amount = parse_amount(sub.get_one::<String>("initial").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    let supplied_returns = sub
        .get_one::<String>("returns")
        .map(|s| s.trim().parse::<f64>().context("Invalid returns percentage"))
        .transpose()?;
    let supplied_current = sub
        .get_one::<String>("current")
        .map(|s| parse_amount(s))
        .transpose()?;

    let returns_hint = supplied_returns.unwrap_or(0.0);
    let current_amount =
        supplied_current.unwrap_or(initial_amount * (1.0 + returns_hint / 100.0));
    let returns = supplied_returns.unwrap_or_else(|| {
        if initial_amount > 0.0 {
            (current_amount - initial_amount) / initial_amount * 100.0
        } else {
            0.0
        }
    });

    let mut user = session::require_user(store)?;
    let entry = InvestmentEntry {
        id: next_id(),
        name: name.clone(),
        category,
        initial_amount,
        current_amount,
        date: date.to_string(),
        returns,
    };
    let id = entry.id;
    user.investment_data.push(entry);
    store.save_current_user(&user)?;
    println!(
        "Added investment #{}: {} at {} ({:.2}% returns)",
        id,
        name,
        fmt_money(initial_amount),
        returns
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    if maybe_print_json(json_flag, &user.investment_data)? {
        return Ok(());
    }
    let rows = user
        .investment_data
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.name.clone(),
                i.category.clone(),
                fmt_money(i.initial_amount),
                fmt_money(i.current_amount),
                format!("{:.2}%", i.returns),
                i.date.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Category", "Initial", "Current", "Returns", "Purchased"],
            rows
        )
    );
    Ok(())
}

fn stats(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    let stats = metrics::portfolio_returns(&user.investment_data);
    if maybe_print_json(json_flag, &stats)? {
        return Ok(());
    }
    println!("Total invested: {}", fmt_money(stats.total_invested));
    println!("Current value:  {}", fmt_money(stats.current_value));
    println!(
        "Total returns:  {} ({:.2}%)",
        fmt_money(stats.total_returns),
        stats.total_growth_pct
    );
    match (&stats.best_performer, &stats.worst_performer) {
        (Some(best), Some(worst)) => {
            println!(
                "Best performer:  {} ({:.2}%, {})",
                best.name, best.returns, best.category
            );
            println!(
                "Worst performer: {} ({:.2}%, {})",
                worst.name, worst.returns, worst.category
            );
        }
        _ => println!("No investments yet"),
    }
    Ok(())
}

fn allocation(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    let groups = metrics::group_by_category(
        user.investment_data
            .iter()
            .map(|i| (i.category.as_str(), i.current_amount)),
    );
    if maybe_print_json(json_flag, &groups)? {
        return Ok(());
    }
    let total: f64 = groups.iter().map(|(_, v)| v).sum();
    let rows = groups
        .into_iter()
        .map(|(category, value)| {
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            vec![category, fmt_money(value), format!("{:.0}%", share)]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Value", "Share"], rows));
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
    let before = user.investment_data.len();
    user.investment_data.retain(|i| i.id != id);
    if user.investment_data.len() == before {
        println!("No investment with id {}", id);
        return Ok(());
    }
    store.save_current_user(&user)?;
    println!("Deleted investment #{}", id);
    Ok(())
}
