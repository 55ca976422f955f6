// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("toggle", sub)) => toggle(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let features = store.features()?;
    if maybe_print_json(json_flag, &features)? {
        return Ok(());
    }
    let onoff = |b: bool| if b { "on" } else { "off" }.to_string();
    let rows = vec![
        vec!["cash-flow-forecasting".to_string(), onoff(features.cash_flow_forecasting)],
        vec!["bill-reminder".to_string(), onoff(features.bill_reminder)],
        vec!["debt-repayment".to_string(), onoff(features.debt_repayment)],
    ];
    println!("{}", pretty_table(&["Feature", "State"], rows));
    Ok(())
}

fn toggle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let key = sub.get_one::<String>("FEATURE").unwrap();
    let mut features = store.features()?;
    let new_state = match key.as_str() {
        "cash-flow-forecasting" => {
            features.cash_flow_forecasting = !features.cash_flow_forecasting;
            features.cash_flow_forecasting
        }
        "bill-reminder" => {
            features.bill_reminder = !features.bill_reminder;
            features.bill_reminder
        }
        "debt-repayment" => {
            features.debt_repayment = !features.debt_repayment;
            features.debt_repayment
        }
        other => return Err(anyhow!("Unknown feature '{}'", other)),
    };
    store.save_features(&features)?;
    println!("{} is now {}", key, if new_state { "on" } else { "off" });
    Ok(())
}
