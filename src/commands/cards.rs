// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::models::{BankAccount, Card};
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, next_id, parse_amount, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add_card(store, sub)?,
        Some(("add-account", sub)) => add_account(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// First and last four digits kept, middle groups masked:
/// "4321 XXXX XXXX 1234".
fn mask_card_number(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 8 {
        return "XXXX".to_string();
    }
    format!(
        "{} XXXX XXXX {}",
        &digits[..4],
        &digits[digits.len() - 4..]
    )
}

/// Only the last four digits survive: "XXXX XXXX 4321".
fn mask_account_number(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return "XXXX".to_string();
    }
    format!("XXXX XXXX {}", &digits[digits.len() - 4..])
}

fn add_card(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<String>("type").unwrap().trim().to_lowercase();
    if kind != "credit" && kind != "debit" {
        return Err(anyhow!("Card type must be 'credit' or 'debit', got '{}'", kind));
    }
    let number = sub.get_one::<String>("number").unwrap();
    let holder = sub.get_one::<String>("holder").unwrap().trim().to_string();
    let expiry = sub.get_one::<String>("expiry").unwrap().trim().to_string();
    let bank = sub.get_one::<String>("bank").unwrap().trim().to_string();

    let mut user = session::require_user(store)?;
    let card = Card {
        id: format!("card-{}", next_id()),
        card_number: mask_card_number(number),
        cardholder_name: holder,
        expiry_date: expiry,
        bank_name: bank,
        balance: 0.0,
        limit: if kind == "credit" { Some(100_000.0) } else { None },
    };
    let id = card.id.clone();
    if kind == "credit" {
        user.cards.credit.push(card);
    } else {
        user.cards.debit.push(card);
    }
    store.save_current_user(&user)?;
    println!("Added {} card {}", kind, id);
    Ok(())
}

fn add_account(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let number = sub.get_one::<String>("number").unwrap();
    let bank = sub.get_one::<String>("bank").unwrap().trim().to_string();
    let ifsc = sub
        .get_one::<String>("ifsc")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "savings".to_string());
    let balance = sub
        .get_one::<String>("balance")
        .map(|s| parse_amount(s))
        .transpose()?
        .unwrap_or(0.0);

    let mut user = session::require_user(store)?;
    let account = BankAccount {
        id: format!("account-{}", next_id()),
        account_name: name,
        account_number: mask_account_number(number),
        bank_name: bank,
        ifsc_code: ifsc,
        account_type: kind,
        balance,
    };
    let id = account.id.clone();
    user.cards.accounts.push(account);
    store.save_current_user(&user)?;
    println!("Added bank account {}", id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let user = session::require_user(store)?;
    if maybe_print_json(json_flag, &user.cards)? {
        return Ok(());
    }

    let mut card_rows = Vec::new();
    for card in &user.cards.credit {
        card_rows.push(vec![
            card.id.clone(),
            "credit".to_string(),
            card.card_number.clone(),
            card.bank_name.clone(),
            card.expiry_date.clone(),
            card.limit.map(fmt_money).unwrap_or_default(),
        ]);
    }
    for card in &user.cards.debit {
        card_rows.push(vec![
            card.id.clone(),
            "debit".to_string(),
            card.card_number.clone(),
            card.bank_name.clone(),
            card.expiry_date.clone(),
            String::new(),
        ]);
    }
    println!(
        "{}",
        pretty_table(&["ID", "Type", "Number", "Bank", "Expiry", "Limit"], card_rows)
    );

    let account_rows = user
        .cards
        .accounts
        .iter()
        .map(|a| {
            vec![
                a.id.clone(),
                a.account_name.clone(),
                a.account_number.clone(),
                a.bank_name.clone(),
                a.account_type.clone(),
                fmt_money(a.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Account", "Number", "Bank", "Type", "Balance"], account_rows)
    );
    Ok(())
}

/// Hard delete by id, whichever of the three lists owns it.
fn delete(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let mut user = session::require_user(store)?;
    let before = user.cards.credit.len() + user.cards.debit.len() + user.cards.accounts.len();
    user.cards.credit.retain(|c| c.id != id);
    user.cards.debit.retain(|c| c.id != id);
    user.cards.accounts.retain(|a| a.id != id);
    let after = user.cards.credit.len() + user.cards.debit.len() + user.cards.accounts.len();
    if after == before {
        println!("No card or account with id {}", id);
        return Ok(());
    }
    store.save_current_user(&user)?;
    println!("Deleted {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_numbers_keep_first_and_last_groups() {
        assert_eq!(mask_card_number("4321 8765 2109 1234"), "4321 XXXX XXXX 1234");
        assert_eq!(mask_card_number("4321876521091234"), "4321 XXXX XXXX 1234");
        assert_eq!(mask_card_number("123"), "XXXX");
    }

    #[test]
    fn account_numbers_keep_only_the_tail() {
        assert_eq!(mask_account_number("000012344321"), "XXXX XXXX 4321");
        assert_eq!(mask_account_number("12"), "XXXX");
    }
}
