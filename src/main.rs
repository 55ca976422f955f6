// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finapp::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open_or_init()?;

    match matches.subcommand() {
        Some(("register", sub)) => commands::auth::register(&store, sub)?,
        Some(("login", sub)) => commands::auth::login(&store, sub)?,
        Some(("logout", _)) => commands::auth::logout(&store)?,
        Some(("whoami", sub)) => commands::auth::whoami(&store, sub)?,
        Some(("profile", sub)) => commands::profile::handle(&store, sub)?,
        Some(("income", sub)) => commands::income::handle(&store, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&store, sub)?,
        Some(("investment", sub)) => commands::investments::handle(&store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&store, sub)?,
        Some(("card", sub)) => commands::cards::handle(&store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("features", sub)) => commands::features::handle(&store, sub)?,
        Some(("news", sub)) => commands::news::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
