// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure, stateless transforms over entry lists. Every function tolerates
//! empty or malformed input by returning zeroed defaults; nothing here
//! rejects an entry or panics.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{FinancialDetails, Goal, InvestmentEntry, MILESTONES};

pub trait DatedAmount {
    fn amount(&self) -> f64;
    fn date(&self) -> &str;

    /// `YYYY-MM` prefix of the entry date. Plain string slicing, so a
    /// malformed date (too short, or a non-ASCII byte across the cut)
    /// degrades to its own bucket instead of an error.
    fn month(&self) -> &str {
        let d = self.date();
        d.get(..7).unwrap_or(d)
    }
}

impl DatedAmount for crate::models::IncomeEntry {
    fn amount(&self) -> f64 {
        self.amount
    }
    fn date(&self) -> &str {
        &self.date
    }
}

impl DatedAmount for crate::models::ExpenseEntry {
    fn amount(&self) -> f64 {
        self.amount
    }
    fn date(&self) -> &str {
        &self.date
    }
}

pub fn total_of<T: DatedAmount>(entries: &[T]) -> f64 {
    entries.iter().map(|e| e.amount()).sum()
}

/// Total divided by the number of distinct `YYYY-MM` months present.
pub fn monthly_average<T: DatedAmount>(entries: &[T]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let months: std::collections::HashSet<&str> = entries.iter().map(|e| e.month()).collect();
    total_of(entries) / months.len() as f64
}

/// Per-month totals in ascending month order, for trend tables.
pub fn monthly_totals<T: DatedAmount>(entries: &[T]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for e in entries {
        let month = e.month().to_string();
        match index.get(&month) {
            Some(&i) => totals[i].1 += e.amount(),
            None => {
                index.insert(month.clone(), totals.len());
                totals.push((month, e.amount()));
            }
        }
    }
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    totals
}

/// Category sums in first-encounter order. The order matters: largest-category
/// detection breaks ties by keeping the category seen first.
pub fn group_by_category<'a, I>(pairs: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (category, amount) in pairs {
        match index.get(category) {
            Some(&i) => groups[i].1 += amount,
            None => {
                index.insert(category.to_string(), groups.len());
                groups.push((category.to_string(), amount));
            }
        }
    }
    groups
}

/// Largest category under a strict `>` scan seeded at ("N/A", 0), so the
/// first category to reach a given sum wins and all-zero input reports N/A.
pub fn largest_category(groups: &[(String, f64)]) -> (String, f64) {
    let mut largest = ("N/A".to_string(), 0.0);
    for (category, amount) in groups {
        if *amount > largest.1 {
            largest = (category.clone(), *amount);
        }
    }
    largest
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_invested: f64,
    pub current_value: f64,
    pub total_returns: f64,
    pub total_growth_pct: f64,
    pub best_performer: Option<InvestmentEntry>,
    pub worst_performer: Option<InvestmentEntry>,
}

/// Aggregate invested/current totals plus best and worst performer by
/// percentage return. Strict comparisons seeded from the first element, so
/// ties keep the earlier entry.
pub fn portfolio_returns(investments: &[InvestmentEntry]) -> PortfolioStats {
    if investments.is_empty() {
        return PortfolioStats {
            total_invested: 0.0,
            current_value: 0.0,
            total_returns: 0.0,
            total_growth_pct: 0.0,
            best_performer: None,
            worst_performer: None,
        };
    }

    let total_invested: f64 = investments.iter().map(|i| i.initial_amount).sum();
    let current_value: f64 = investments.iter().map(|i| i.current_amount).sum();
    let total_returns = current_value - total_invested;
    let total_growth_pct = if total_invested > 0.0 {
        total_returns / total_invested * 100.0
    } else {
        0.0
    };

    let mut best = &investments[0];
    let mut worst = &investments[0];
    for inv in investments {
        if inv.returns > best.returns {
            best = inv;
        }
        if inv.returns < worst.returns {
            worst = inv;
        }
    }

    PortfolioStats {
        total_invested,
        current_value,
        total_returns,
        total_growth_pct,
        best_performer: Some(best.clone()),
        worst_performer: Some(worst.clone()),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub savings_rate: u32,
    pub debt_to_income: u32,
    pub emergency_fund: u32,
    pub investment_diversification: u32,
    pub budget_adherence: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

/// Heuristic 0-100 composite of five weighted sub-scores. Step tables and
/// recommendation cutoffs are fixed; budget adherence has no real tracking
/// behind it and always contributes its default.
pub fn financial_health_score(
    details: Option<&FinancialDetails>,
    investments: &[InvestmentEntry],
) -> HealthReport {
    let monthly_income = details.map_or(0.0, |d| d.monthly_income);
    let monthly_savings = details.and_then(|d| d.monthly_savings).unwrap_or(0.0);
    let total_debt = details.and_then(|d| d.total_debt).unwrap_or(0.0);
    let monthly_expenses = details.map_or(0.0, |d| d.major_expenses);
    let emergency_fund = details.map_or(0.0, |d| d.account_balance);

    // Savings rate, 20 points max.
    let savings_rate = if monthly_income > 0.0 {
        monthly_savings / monthly_income * 100.0
    } else {
        0.0
    };
    let savings_score = if savings_rate >= 20.0 {
        20
    } else if savings_rate >= 15.0 {
        16
    } else if savings_rate >= 10.0 {
        12
    } else if savings_rate >= 5.0 {
        8
    } else {
        savings_rate.floor() as u32
    };

    // Debt-to-income against annual income, 20 points max, inverted.
    let debt_ratio = if monthly_income > 0.0 {
        total_debt / (monthly_income * 12.0) * 100.0
    } else {
        100.0
    };
    let debt_score = if debt_ratio <= 15.0 {
        20
    } else if debt_ratio <= 30.0 {
        16
    } else if debt_ratio <= 45.0 {
        12
    } else if debt_ratio <= 60.0 {
        8
    } else {
        4
    };

    // Emergency fund coverage in months of expenses, 25 points max.
    let fund_months = if monthly_expenses > 0.0 {
        emergency_fund / monthly_expenses
    } else {
        0.0
    };
    let fund_score = if fund_months >= 6.0 {
        25
    } else if fund_months >= 3.0 {
        20
    } else if fund_months >= 1.0 {
        10
    } else {
        (fund_months * 8.0).floor() as u32
    };

    // Diversification by count of distinct investment categories, 15 max.
    let unique_categories = investments
        .iter()
        .map(|i| i.category.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();
    let diversification_score = match unique_categories {
        n if n >= 4 => 15,
        3 => 12,
        2 => 9,
        1 => 6,
        _ => 0,
    };

    let breakdown = ScoreBreakdown {
        savings_rate: savings_score,
        debt_to_income: debt_score,
        emergency_fund: fund_score,
        investment_diversification: diversification_score,
        budget_adherence: 15,
    };
    let score = breakdown.savings_rate
        + breakdown.debt_to_income
        + breakdown.emergency_fund
        + breakdown.investment_diversification
        + breakdown.budget_adherence;

    // Fixed priority order, capped at three.
    let mut recommendations = Vec::new();
    if breakdown.savings_rate < 12 {
        recommendations
            .push("Try to increase your savings rate to at least 10% of income.".to_string());
    }
    if breakdown.debt_to_income < 16 {
        recommendations.push(
            "Focus on reducing high-interest debt to improve your debt-to-income ratio."
                .to_string(),
        );
    }
    if breakdown.emergency_fund < 20 {
        recommendations
            .push("Build your emergency fund to cover at least 3-6 months of expenses.".to_string());
    }
    if breakdown.investment_diversification < 12 {
        recommendations
            .push("Diversify your investment portfolio across more asset categories.".to_string());
    }
    recommendations.truncate(3);

    HealthReport {
        score,
        breakdown,
        recommendations,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Raw percentage; storage keeps values past 100, clamp only for bars.
    pub percent: f64,
    pub days_remaining: Option<i64>,
    pub status: &'static str,
}

pub fn reached_milestones(current: f64, target: f64) -> Vec<u32> {
    if target <= 0.0 {
        return Vec::new();
    }
    let pct = (current / target * 100.0).floor() as i64;
    MILESTONES
        .iter()
        .copied()
        .filter(|&m| pct >= m as i64)
        .collect()
}

pub fn goal_progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
    let percent = if goal.target_amount > 0.0 {
        goal.current_amount / goal.target_amount * 100.0
    } else {
        0.0
    };
    let days_remaining = NaiveDate::parse_from_str(&goal.deadline, "%Y-%m-%d")
        .ok()
        .map(|d| d.signed_duration_since(today).num_days());

    let status = if percent >= 100.0 {
        "Completed!"
    } else if days_remaining.is_some_and(|d| d < 0) {
        "Overdue"
    } else if days_remaining.is_some_and(|d| d <= 30) {
        "Urgent"
    } else if percent >= 75.0 {
        "Almost there!"
    } else if percent >= 50.0 {
        "Halfway there"
    } else {
        "In progress"
    };

    GoalProgress {
        percent,
        days_remaining,
        status,
    }
}

/// Percent for progress-bar display only.
pub fn display_percent(percent: f64) -> f64 {
    percent.clamp(0.0, 100.0)
}
