// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg};

fn json_flag() -> Arg {
    arg!(--json "Print machine-readable JSON instead of a table").action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("finapp")
        .about("Local-first personal finance dashboard")
        .subcommand_required(false)
        .subcommand(
            Command::new("register")
                .about("Register a new local user")
                .arg(arg!(--name <NAME> "Display name").required(true))
                .arg(arg!(--email <EMAIL> "Email address").required(true))
                .arg(arg!(--password <PASSWORD> "Password (stored as-is, local only)").required(true)),
        )
        .subcommand(
            Command::new("login")
                .about("Start a session for a registered user")
                .arg(arg!(--email <EMAIL>).required(true))
                .arg(arg!(--password <PASSWORD>).required(true)),
        )
        .subcommand(Command::new("logout").about("End the current session"))
        .subcommand(Command::new("whoami").about("Show session status").arg(json_flag()))
        .subcommand(
            Command::new("profile")
                .about("Financial profile setup and details")
                .subcommand(
                    Command::new("setup")
                        .about("Complete (or redo) profile setup")
                        .arg(arg!(--"monthly-income" <AMOUNT>).required(true))
                        .arg(arg!(--"account-balance" <AMOUNT>).required(true))
                        .arg(arg!(--salary <AMOUNT> "Salary amount").required(true))
                        .arg(arg!(--"pay-day" <DAY> "Day of month salary arrives").required(true))
                        .arg(arg!(--"savings-goal" <AMOUNT>))
                        .arg(arg!(--"major-expenses" <AMOUNT>))
                        .arg(arg!(--"monthly-savings" <AMOUNT>))
                        .arg(arg!(--"total-debt" <AMOUNT>))
                        .arg(
                            arg!(--category <SPEC> "Budget category as NAME:PERCENT, repeatable")
                                .action(ArgAction::Append),
                        )
                        .arg(
                            arg!(--"seed-demo" "Seed example income/expense/investment/goal data")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(Command::new("show").about("Show financial details").arg(json_flag()))
                .subcommand(
                    Command::new("update")
                        .about("Update personal details")
                        .arg(arg!(--name <NAME>))
                        .arg(arg!(--phone <PHONE>))
                        .arg(arg!(--"profile-pic" <URL>)),
                )
                .subcommand(Command::new("delete-account").about("Delete the current user entirely")),
        )
        .subcommand(
            Command::new("income")
                .about("Income records")
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--source <SOURCE>).required(true))
                        .arg(arg!(--amount <AMOUNT>).required(true))
                        .arg(arg!(--date <DATE> "YYYY-MM-DD").required(true))
                        .arg(arg!(--recurring "Mark as recurring").action(ArgAction::SetTrue)),
                )
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(Command::new("stats").about("Totals and monthly average").arg(json_flag()))
                .subcommand(
                    Command::new("delete").arg(arg!(--id <ID>).required(true)),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Expense records")
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--category <CATEGORY>).required(true))
                        .arg(arg!(--amount <AMOUNT>).required(true))
                        .arg(arg!(--date <DATE> "YYYY-MM-DD").required(true))
                        .arg(arg!(--description <TEXT>))
                        .arg(arg!(--recurring "Mark as recurring").action(ArgAction::SetTrue)),
                )
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(
                    Command::new("stats")
                        .about("Total, monthly average, largest category")
                        .arg(json_flag()),
                )
                .subcommand(Command::new("breakdown").about("Per-category totals").arg(json_flag()))
                .subcommand(
                    Command::new("delete").arg(arg!(--id <ID>).required(true)),
                ),
        )
        .subcommand(
            Command::new("investment")
                .about("Investment records")
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--name <NAME>).required(true))
                        .arg(arg!(--category <CATEGORY>).required(true))
                        .arg(arg!(--initial <AMOUNT> "Initial invested amount").required(true))
                        .arg(arg!(--date <DATE> "Purchase date, YYYY-MM-DD").required(true))
                        .arg(arg!(--current <AMOUNT> "Current value (derived from returns if omitted)"))
                        .arg(arg!(--returns <PERCENT> "Return percentage (derived if omitted)")),
                )
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(
                    Command::new("stats")
                        .about("Invested/current totals, best and worst performers")
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("allocation")
                        .about("Current value by category")
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("delete").arg(arg!(--id <ID>).required(true)),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Financial goals with milestones")
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--name <NAME>).required(true))
                        .arg(arg!(--target <AMOUNT>).required(true))
                        .arg(arg!(--deadline <DATE> "YYYY-MM-DD").required(true))
                        .arg(arg!(--current <AMOUNT>))
                        .arg(arg!(--category <CATEGORY>))
                        .arg(arg!(--notes <TEXT>)),
                )
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(
                    Command::new("update")
                        .about("Set a goal's current amount (recomputes milestones)")
                        .arg(arg!(--id <ID>).required(true))
                        .arg(arg!(--amount <AMOUNT>).required(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(arg!(--id <ID>).required(true))
                        .arg(arg!(--name <NAME>))
                        .arg(arg!(--target <AMOUNT>))
                        .arg(arg!(--current <AMOUNT>))
                        .arg(arg!(--deadline <DATE>))
                        .arg(arg!(--category <CATEGORY>))
                        .arg(arg!(--notes <TEXT>)),
                )
                .subcommand(
                    Command::new("delete").arg(arg!(--id <ID>).required(true)),
                ),
        )
        .subcommand(
            Command::new("card")
                .about("Cards and bank accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add a credit or debit card")
                        .arg(arg!(--type <TYPE> "credit or debit").required(true))
                        .arg(arg!(--number <NUMBER> "Card number (stored masked)").required(true))
                        .arg(arg!(--holder <NAME>).required(true))
                        .arg(arg!(--expiry <MMYY> "Expiry as MM/YY").required(true))
                        .arg(arg!(--bank <BANK>).required(true)),
                )
                .subcommand(
                    Command::new("add-account")
                        .about("Add a bank account")
                        .arg(arg!(--name <NAME> "Account name").required(true))
                        .arg(arg!(--number <NUMBER> "Account number (stored masked)").required(true))
                        .arg(arg!(--bank <BANK>).required(true))
                        .arg(arg!(--ifsc <CODE>))
                        .arg(arg!(--type <TYPE> "savings or current"))
                        .arg(arg!(--balance <AMOUNT>)),
                )
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(
                    Command::new("delete").arg(arg!(--id <ID>).required(true)),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Overview: balances, budget allocation, financial health score")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("features")
                .about("Feature toggles")
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(
                    Command::new("toggle").arg(
                        arg!(<FEATURE> "cash-flow-forecasting, bill-reminder, or debt-repayment"),
                    ),
                ),
        )
        .subcommand(
            Command::new("news")
                .about("Financial headlines via FINAPP_NEWS_API_KEY (static fallback otherwise)")
                .arg(arg!(--limit <N> "Max headlines to show")),
        )
        .subcommand(
            Command::new("export")
                .about("Export record lists")
                .arg(arg!(<KIND> "income, expenses, or investments"))
                .arg(arg!(--format <FORMAT> "csv or json").required(true))
                .arg(arg!(--out <FILE>).required(true)),
        )
        .subcommand(Command::new("doctor").about("Report soft-invariant violations in stored data"))
}
