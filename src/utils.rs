// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

const UA: &str = concat!(
    "finapp/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/finapp-dev/finapp)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Form-level validation for money input: a finite, non-negative number.
pub fn parse_amount(s: &str) -> Result<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    if !v.is_finite() || v < 0.0 {
        return Err(anyhow!("Amount '{}' must be a non-negative number", s));
    }
    Ok(v)
}

/// Single-currency display with Indian digit grouping, no fraction digits:
/// 1234567 renders as ₹12,34,567.
pub fn fmt_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    let first = if digits.len() > 3 {
        let split = (digits.len() - 3) % 2;
        let head = &digits[..digits.len() - 3];
        let (lead, rest) = head.split_at(if split == 0 { 2.min(head.len()) } else { split });
        grouped.push_str(lead);
        for chunk in rest.as_bytes().chunks(2) {
            grouped.push(',');
            grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
        }
        grouped.push(',');
        &digits[digits.len() - 3..]
    } else {
        &digits
    };
    grouped.push_str(first);
    format!("{}₹{}", if negative { "-" } else { "" }, grouped)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}

// Seeded from the wall clock once, then strictly monotonic, so rapid
// successive adds in one process can never collide.
static NEXT_ID: Lazy<AtomicI64> = Lazy::new(|| AtomicI64::new(chrono::Utc::now().timestamp_millis()));

pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_reject_negatives_and_garbage() {
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_amount(" 500.25 ").unwrap(), 500.25);
    }

    #[test]
    fn money_uses_indian_grouping() {
        assert_eq!(fmt_money(0.0), "₹0");
        assert_eq!(fmt_money(985.0), "₹985");
        assert_eq!(fmt_money(85400.0), "₹85,400");
        assert_eq!(fmt_money(985653.0), "₹9,85,653");
        assert_eq!(fmt_money(12345678.0), "₹1,23,45,678");
        assert_eq!(fmt_money(-50000.0), "-₹50,000");
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let a = next_id();
        let b = next_id();
        assert!(b > a);
    }
}
