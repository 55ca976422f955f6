// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// The whole per-user blob stored under the `finapp_user` key. Field names
/// stay camelCase on disk so existing blobs round-trip unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_pic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_details: Option<FinancialDetails>,
    pub income_data: Vec<IncomeEntry>,
    pub expense_data: Vec<ExpenseEntry>,
    pub investment_data: Vec<InvestmentEntry>,
    pub goals: Vec<Goal>,
    pub cards: Wallet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialDetails {
    pub monthly_income: f64,
    pub savings_goal: f64,
    pub major_expenses: f64,
    pub account_balance: f64,
    pub salary: Salary,
    pub budget_categories: Vec<BudgetCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_savings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_debt: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Salary {
    pub amount: f64,
    pub pay_day: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    pub percentage: f64,
}

/// Dated income line item. Dates are ISO `YYYY-MM-DD` strings; the
/// aggregation layer only ever slices the `YYYY-MM` prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeEntry {
    pub id: i64,
    pub source: String,
    pub amount: f64,
    pub date: String,
    pub recurring: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseEntry {
    pub id: i64,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
    pub recurring: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentEntry {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub initial_amount: f64,
    pub current_amount: f64,
    pub date: String,
    /// Percentage return, supplied or derived from the two amounts.
    pub returns: f64,
}

pub const MILESTONES: [u32; 4] = [25, 50, 75, 100];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: String,
    pub category: String,
    pub notes: String,
    pub created_at: String,
    pub milestones: Vec<u32>,
    pub reached_milestones: Vec<u32>,
}

/// Cards and bank accounts, kept as three independent lists exactly as the
/// stored blob shapes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wallet {
    pub credit: Vec<Card>,
    pub debit: Vec<Card>,
    pub accounts: Vec<BankAccount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub id: String,
    pub card_number: String,
    pub cardholder_name: String,
    pub expiry_date: String,
    pub bank_name: String,
    pub balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAccount {
    pub id: String,
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
    pub account_type: String,
    pub balance: f64,
}

/// Feature toggles stored under `finapp_features`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    pub cash_flow_forecasting: bool,
    pub bill_reminder: bool,
    pub debt_repayment: bool,
}
