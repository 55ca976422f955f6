// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::Duration;

use crate::models::{
    BudgetCategory, ExpenseEntry, FinancialDetails, Goal, IncomeEntry, InvestmentEntry, Salary,
    User, MILESTONES,
};
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, next_id, parse_amount, pretty_table, today};
use crate::metrics;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("setup", sub)) => setup(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("delete-account", _)) => delete_account(store)?,
        _ => {}
    }
    Ok(())
}

fn default_budget_categories() -> Vec<BudgetCategory> {
    [
        ("Housing", 30.0),
        ("Food", 15.0),
        ("Transportation", 10.0),
        ("Utilities", 10.0),
        ("Entertainment", 5.0),
        ("Savings", 20.0),
        ("Others", 10.0),
    ]
    .into_iter()
    .map(|(name, percentage)| BudgetCategory {
        name: name.to_string(),
        percentage,
    })
    .collect()
}

fn parse_category_spec(spec: &str) -> Result<BudgetCategory> {
    let (name, pct) = spec
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("Invalid category '{}', expected NAME:PERCENT", spec))?;
    let percentage: f64 = pct
        .trim()
        .parse()
        .with_context(|| format!("Invalid percentage in category '{}'", spec))?;
    Ok(BudgetCategory {
        name: name.trim().to_string(),
        percentage,
    })
}

fn setup(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let monthly_income = parse_amount(sub.get_one::<String>("monthly-income").unwrap())?;
    let account_balance = parse_amount(sub.get_one::<String>("account-balance").unwrap())?;
    let salary_amount = parse_amount(sub.get_one::<String>("salary").unwrap())?;
    let pay_day = sub.get_one::<String>("pay-day").unwrap().trim().to_string();

    let savings_goal = sub
        .get_one::<String>("savings-goal")
        .map(|s| parse_amount(s))
        .transpose()?
        .unwrap_or(0.0);
    let major_expenses = sub
        .get_one::<String>("major-expenses")
        .map(|s| parse_amount(s))
        .transpose()?
        .unwrap_or(0.0);
    let monthly_savings = sub
        .get_one::<String>("monthly-savings")
        .map(|s| parse_amount(s))
        .transpose()?;
    let total_debt = sub
        .get_one::<String>("total-debt")
        .map(|s| parse_amount(s))
        .transpose()?;

    let budget_categories = match sub.get_many::<String>("category") {
        Some(specs) => specs
            .map(|s| parse_category_spec(s))
            .collect::<Result<Vec<_>>>()?,
        None => default_budget_categories(),
    };

    let details = FinancialDetails {
        monthly_income,
        savings_goal,
        major_expenses,
        account_balance,
        salary: Salary {
            amount: salary_amount,
            pay_day,
        },
        budget_categories,
        monthly_savings,
        total_debt,
    };

    let mut user = session::complete_profile_setup(store, details)?;
    println!("Profile setup complete for {}.", user.email);

    let pct_sum: f64 = user
        .financial_details
        .as_ref()
        .map(|d| d.budget_categories.iter().map(|c| c.percentage).sum())
        .unwrap_or(0.0);
    if (pct_sum - 100.0).abs() > f64::EPSILON {
        // Soft invariant: displayed, never enforced.
        println!("Note: budget categories sum to {}%, not 100%.", pct_sum);
    }

    if sub.get_flag("seed-demo") {
        seed_demo_data(&mut user);
        store.save_current_user(&user)?;
        println!(
            "Seeded demo data: {} income, {} expense, {} investment entries, {} goals.",
            user.income_data.len(),
            user.expense_data.len(),
            user.investment_data.len(),
            user.goals.len()
        );
    }
    Ok(())
}

/// Example records derived from monthly income, mirroring what the dashboard
/// seeds for a fresh profile: six months of salary, a few recurring expenses
/// per budget category, four investments, three goals.
fn seed_demo_data(user: &mut User) {
    let Some(details) = user.financial_details.clone() else {
        return;
    };
    let monthly_income = details.monthly_income;
    let salary = if details.salary.amount > 0.0 {
        details.salary.amount
    } else {
        monthly_income * 0.8
    };
    let now = today();

    for back in (0..6).rev() {
        let date = now - Duration::days(30 * back);
        user.income_data.push(IncomeEntry {
            id: next_id(),
            source: "Salary".to_string(),
            amount: salary * (0.95 + (5 - back) as f64 * 0.01),
            date: date.format("%Y-%m-%d").to_string(),
            recurring: true,
        });
        if back % 2 == 0 {
            user.income_data.push(IncomeEntry {
                id: next_id(),
                source: "Side Project".to_string(),
                amount: monthly_income * 0.1,
                date: date.format("%Y-%m-%d").to_string(),
                recurring: false,
            });
        }
    }

    for (i, cat) in details.budget_categories.iter().take(5).enumerate() {
        user.expense_data.push(ExpenseEntry {
            id: next_id(),
            category: cat.name.clone(),
            amount: monthly_income * cat.percentage / 100.0,
            date: (now - Duration::days(7 * i as i64)).format("%Y-%m-%d").to_string(),
            description: format!("{} expense", cat.name),
            recurring: i < 3,
        });
    }

    let samples = [
        ("Equity Mutual Fund", "Mutual Funds", 3.0, 12.0, 180),
        ("Fixed Deposit", "Fixed Deposits", 6.0, 6.5, 365),
        ("Company Stock", "Stocks", 2.0, 15.0, 120),
        ("Gold ETF", "Gold", 1.0, 8.0, 90),
    ];
    for (name, category, multiple, returns, age_days) in samples {
        let initial = monthly_income * multiple;
        user.investment_data.push(InvestmentEntry {
            id: next_id(),
            name: name.to_string(),
            category: category.to_string(),
            initial_amount: initial,
            current_amount: initial * (1.0 + returns / 100.0),
            date: (now - Duration::days(age_days)).format("%Y-%m-%d").to_string(),
            returns,
        });
    }

    let goal_samples = [
        ("Emergency Fund", "Emergency Fund", 6.0, 2.0, 180, "Build a 6-month emergency fund for unexpected expenses"),
        ("Europe Trip", "Travel", 3.0, 1.0, 365, "Dream vacation to visit France, Italy and Spain"),
        ("Down Payment for Home", "Home", 24.0, 4.0, 730, "Save 20% for down payment on a new home"),
    ];
    for (name, category, target_mult, current_mult, days_ahead, notes) in goal_samples {
        let target = monthly_income * target_mult;
        let current = monthly_income * current_mult;
        user.goals.push(Goal {
            id: next_id(),
            name: name.to_string(),
            target_amount: target,
            current_amount: current,
            deadline: (now + Duration::days(days_ahead)).format("%Y-%m-%d").to_string(),
            category: category.to_string(),
            notes: notes.to_string(),
            created_at: now.format("%Y-%m-%d").to_string(),
            milestones: MILESTONES.to_vec(),
            reached_milestones: metrics::reached_milestones(current, target),
        });
    }
}

fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    let Some(details) = user.financial_details else {
        println!("Profile setup incomplete; run 'finapp profile setup'.");
        return Ok(());
    };

    if maybe_print_json(json_flag, &details)? {
        return Ok(());
    }

    let mut rows = vec![
        vec!["Monthly income".to_string(), fmt_money(details.monthly_income)],
        vec!["Account balance".to_string(), fmt_money(details.account_balance)],
        vec!["Savings goal".to_string(), fmt_money(details.savings_goal)],
        vec!["Major expenses".to_string(), fmt_money(details.major_expenses)],
        vec![
            "Salary".to_string(),
            format!(
                "{} (pay day {})",
                fmt_money(details.salary.amount),
                details.salary.pay_day
            ),
        ],
    ];
    if let Some(s) = details.monthly_savings {
        rows.push(vec!["Monthly savings".to_string(), fmt_money(s)]);
    }
    if let Some(d) = details.total_debt {
        rows.push(vec!["Total debt".to_string(), fmt_money(d)]);
    }
    println!("{}", pretty_table(&["Field", "Value"], rows));

    let budget_rows = details
        .budget_categories
        .iter()
        .map(|c| vec![c.name.clone(), format!("{}%", c.percentage)])
        .collect();
    println!("{}", pretty_table(&["Budget category", "Share"], budget_rows));
    Ok(())
}

fn update(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = session::update_personal_details(
        store,
        sub.get_one::<String>("name").map(String::as_str),
        sub.get_one::<String>("phone").map(String::as_str),
        sub.get_one::<String>("profile-pic").map(String::as_str),
    )?;
    println!("Updated personal details for {}.", user.email);
    Ok(())
}

fn delete_account(store: &Store) -> Result<()> {
    session::delete_account(store)?;
    println!("Account deleted.");
    Ok(())
}
