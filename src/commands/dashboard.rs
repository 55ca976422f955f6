// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::metrics;
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;

    let details = user.financial_details.as_ref();
    let monthly_income = details.map_or(0.0, |d| d.monthly_income);
    let account_balance = details.map_or(0.0, |d| d.account_balance);
    let savings_goal = details.map_or(0.0, |d| d.savings_goal);
    let major_expenses = details.map_or(0.0, |d| d.major_expenses);
    let salary_amount = details.map_or(0.0, |d| d.salary.amount);

    // Expenses fall back to a quarter of income when none were declared.
    let effective_expenses = if major_expenses > 0.0 {
        major_expenses
    } else {
        monthly_income * 0.25
    };
    let current_profit = monthly_income - effective_expenses;
    let income_pct = if monthly_income > 0.0 {
        (current_profit / monthly_income * 100.0).round()
    } else {
        0.0
    };

    let health = metrics::financial_health_score(details, &user.investment_data);

    if maybe_print_json(
        json_flag,
        &json!({
            "accountBalance": account_balance,
            "monthlyIncome": monthly_income,
            "savingsGoal": savings_goal,
            "majorExpenses": major_expenses,
            "currentProfit": current_profit,
            "incomePercentage": income_pct,
            "health": health,
        }),
    )? {
        return Ok(());
    }

    println!("Financial Dashboard — {}", user.name);
    println!();
    println!("Total balance:  {}", fmt_money(account_balance));
    println!("Monthly income: {}", fmt_money(monthly_income));
    if savings_goal > 0.0 && salary_amount > 0.0 {
        println!(
            "Savings goal:   {} ({:.0}% of salary)",
            fmt_money(savings_goal),
            savings_goal / salary_amount * 100.0
        );
    } else {
        println!("Savings goal:   {}", fmt_money(savings_goal));
    }
    println!(
        "Profit / loss:  {} ({:.0}% of income)",
        fmt_money(current_profit),
        income_pct.abs()
    );
    println!();

    if let Some(d) = details {
        let pct_sum: f64 = d.budget_categories.iter().map(|c| c.percentage).sum();
        let rows = d
            .budget_categories
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    format!("{}%", c.percentage),
                    fmt_money(monthly_income * c.percentage / 100.0),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Budget category", "Share", "Amount"], rows));
        if (pct_sum - 100.0).abs() > f64::EPSILON {
            println!("Note: budget shares sum to {}%, not 100%.", pct_sum);
        }
        println!();
    }

    println!("Financial health score: {}/100", health.score);
    let rows = vec![
        vec!["Savings rate".to_string(), format!("{}/20", health.breakdown.savings_rate)],
        vec!["Debt-to-income".to_string(), format!("{}/20", health.breakdown.debt_to_income)],
        vec!["Emergency fund".to_string(), format!("{}/25", health.breakdown.emergency_fund)],
        vec![
            "Diversification".to_string(),
            format!("{}/15", health.breakdown.investment_diversification),
        ],
        vec!["Budget adherence".to_string(), format!("{}/15", health.breakdown.budget_adherence)],
    ];
    println!("{}", pretty_table(&["Sub-score", "Points"], rows));
    for rec in &health.recommendations {
        println!("• {}", rec);
    }
    Ok(())
}
