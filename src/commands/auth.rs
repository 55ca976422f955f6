// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::session;
use crate::store::Store;
use crate::utils::maybe_print_json;

pub fn register(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").map(|s| s.trim()).unwrap_or_default();
    let email = sub.get_one::<String>("email").map(|s| s.trim()).unwrap_or_default();
    let password = sub.get_one::<String>("password").map(String::as_str).unwrap_or_default();

    let state = session::register(store, name, email, password)?;
    println!("Registered {} <{}>", state.user.name, state.user.email);
    println!("Next: run 'finapp profile setup' to complete your financial profile.");
    Ok(())
}

pub fn login(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").map(|s| s.trim()).unwrap_or_default();
    let password = sub.get_one::<String>("password").map(String::as_str).unwrap_or_default();

    let state = session::login(store, email, password)?;
    if state.needs_setup {
        println!(
            "Welcome back, {}. Profile setup is incomplete; run 'finapp profile setup'.",
            state.user.name
        );
    } else {
        println!("Welcome back, {}.", state.user.name);
    }
    Ok(())
}

pub fn logout(store: &Store) -> Result<()> {
    session::logout(store)?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    match store.current_user()? {
        Some(user) => {
            let registered = store.registered_users()?;
            let state = session::resolve_session(user, &registered);
            if !maybe_print_json(
                json_flag,
                &json!({
                    "name": state.user.name,
                    "email": state.user.email,
                    "authenticated": state.authenticated,
                    "needsSetup": state.needs_setup,
                }),
            )? {
                println!("{} <{}>", state.user.name, state.user.email);
                if state.needs_setup {
                    println!("Profile setup incomplete.");
                }
            }
        }
        None => {
            if !maybe_print_json(json_flag, &json!({ "authenticated": false }))? {
                println!("No active session.");
            }
        }
    }
    Ok(())
}
