// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};

use crate::metrics;
use crate::models::{Goal, MILESTONES};
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, next_id, parse_amount, parse_date, pretty_table, today};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update_amount(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

// One consistent rule everywhere: a goal's current amount may never be set
// above its target, whether on add, edit, or update.
fn check_amounts(current: f64, target: f64) -> Result<()> {
    if current > target {
        return Err(anyhow!("Current amount cannot exceed target amount"));
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub
        .get_one::<String>("name")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let target_amount = parse_amount(sub.get_one::<String>("target").unwrap())?;
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap().trim())?;
    let current_amount = sub
        .get_one::<String>("current")
        .map(|s| parse_amount(s))
        .transpose()?
        .unwrap_or(0.0);
    let category = sub
        .get_one::<String>("category")
        .cloned()
        .unwrap_or_else(|| "Savings".to_string());
    let notes = sub.get_one::<String>("notes").cloned().unwrap_or_default();

    check_amounts(current_amount, target_amount)?;

    let mut user = session::require_user(store)?;
    let goal = Goal {
        id: next_id(),
        name: name.clone(),
        target_amount,
        current_amount,
        deadline: deadline.to_string(),
        category,
        notes,
        created_at: today().to_string(),
        milestones: MILESTONES.to_vec(),
        reached_milestones: metrics::reached_milestones(current_amount, target_amount),
    };
    let id = goal.id;
    user.goals.push(goal);
    store.save_current_user(&user)?;
    println!(
        "Added goal #{}: {} ({} of {})",
        id,
        name,
        fmt_money(current_amount),
        fmt_money(target_amount)
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    if maybe_print_json(json_flag, &user.goals)? {
        return Ok(());
    }
    let now = today();
    let rows = user
        .goals
        .iter()
        .map(|g| {
            let progress = metrics::goal_progress(g, now);
            let days = match progress.days_remaining {
                Some(d) if d < 0 => format!("overdue by {}", -d),
                Some(d) => d.to_string(),
                None => "-".to_string(),
            };
            vec![
                g.id.to_string(),
                g.name.clone(),
                g.category.clone(),
                fmt_money(g.current_amount),
                fmt_money(g.target_amount),
                format!("{:.0}%", metrics::display_percent(progress.percent)),
                days,
                progress.status.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Goal", "Category", "Current", "Target", "Progress", "Days left", "Status"],
            rows
        )
    );
    Ok(())
}

fn update_amount(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = sub
        .get_one::<String>("id")
        .unwrap()
        .trim()
        .parse()
        .context("Invalid id")?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;

    let mut user = session::require_user(store)?;
    let goal = user
        .goals
        .iter_mut()
        .find(|g| g.id == id)
        .ok_or_else(|| anyhow!("No goal with id {}", id))?;

    check_amounts(amount, goal.target_amount)?;

    goal.current_amount = amount;
    let reached = metrics::reached_milestones(goal.current_amount, goal.target_amount);
    let newly_reached: Vec<u32> = reached
        .iter()
        .copied()
        .filter(|m| !goal.reached_milestones.contains(m))
        .collect();
    goal.reached_milestones = reached;

    let name = goal.name.clone();
    store.save_current_user(&user)?;
    println!("Updated goal #{} to {}", id, fmt_money(amount));
    if let Some(m) = newly_reached.first() {
        println!(
            "Congratulations! You've reached the {}% milestone for your \"{}\" goal!",
            m, name
        );
    }
    Ok(())
}

fn edit(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = sub
        .get_one::<String>("id")
        .unwrap()
        .trim()
        .parse()
        .context("Invalid id")?;

    let mut user = session::require_user(store)?;
    let goal = user
        .goals
        .iter_mut()
        .find(|g| g.id == id)
        .ok_or_else(|| anyhow!("No goal with id {}", id))?;

    if let Some(name) = sub.get_one::<String>("name") {
        goal.name = name.trim().to_string();
    }
    if let Some(target) = sub.get_one::<String>("target") {
        goal.target_amount = parse_amount(target)?;
    }
    if let Some(current) = sub.get_one::<String>("current") {
        goal.current_amount = parse_amount(current)?;
    }
    if let Some(deadline) = sub.get_one::<String>("deadline") {
        goal.deadline = parse_date(deadline.trim())?.to_string();
    }
    if let Some(category) = sub.get_one::<String>("category") {
        goal.category = category.clone();
    }
    if let Some(notes) = sub.get_one::<String>("notes") {
        goal.notes = notes.clone();
    }

    check_amounts(goal.current_amount, goal.target_amount)?;
    goal.reached_milestones = metrics::reached_milestones(goal.current_amount, goal.target_amount);

    store.save_current_user(&user)?;
    println!("Updated goal #{}", id);
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
    let before = user.goals.len();
    user.goals.retain(|g| g.id != id);
    if user.goals.len() == before {
        println!("No goal with id {}", id);
        return Ok(());
    }
    store.save_current_user(&user)?;
    println!("Deleted goal #{}", id);
    Ok(())
}
