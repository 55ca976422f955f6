// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use serde_json::json;

use crate::models::User;
use crate::session;
use crate::store::Store;

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<String>("KIND").unwrap().to_lowercase();
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let user = session::require_user(store)?;
    match kind.as_str() {
        "income" => export_income(&user, &fmt, out)?,
        "expenses" => export_expenses(&user, &fmt, out)?,
        "investments" => export_investments(&user, &fmt, out)?,
        other => return Err(anyhow!("Unknown export kind '{}' (use income|expenses|investments)", other)),
    }
    println!("Exported {} to {}", kind, out);
    Ok(())
}

fn export_income(user: &User, fmt: &str, out: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "source", "amount", "recurring"])?;
            for e in &user.income_data {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.clone(),
                    e.source.clone(),
                    e.amount.to_string(),
                    e.recurring.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => std::fs::write(out, serde_json::to_string_pretty(&user.income_data)?)?,
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    Ok(())
}

fn export_expenses(user: &User, fmt: &str, out: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "category", "amount", "description", "recurring"])?;
            for e in &user.expense_data {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.clone(),
                    e.category.clone(),
                    e.amount.to_string(),
                    e.description.clone(),
                    e.recurring.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => std::fs::write(out, serde_json::to_string_pretty(&user.expense_data)?)?,
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    Ok(())
}

fn export_investments(user: &User, fmt: &str, out: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "name", "category", "initial", "current", "returns"])?;
            for i in &user.investment_data {
                wtr.write_record([
                    i.id.to_string(),
                    i.date.clone(),
                    i.name.clone(),
                    i.category.clone(),
                    i.initial_amount.to_string(),
                    i.current_amount.to_string(),
                    i.returns.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            // Flat shape, one object per holding.
            let items: Vec<_> = user
                .investment_data
                .iter()
                .map(|i| {
                    json!({
                        "id": i.id, "date": i.date, "name": i.name, "category": i.category,
                        "initialAmount": i.initial_amount, "currentAmount": i.current_amount,
                        "returns": i.returns,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    Ok(())
}
