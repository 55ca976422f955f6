// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use thiserror::Error;

use crate::models::{FinancialDetails, User};
use crate::store::Store;

pub const DEFAULT_PROFILE_PIC: &str =
    "https://www.pngall.com/wp-content/uploads/5/User-Profile-PNG-Image.png";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("This email is already registered")]
    EmailAlreadyRegistered,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("No active session; run 'finapp login' first")]
    NoSession,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub user: User,
    pub authenticated: bool,
    pub needs_setup: bool,
}

/// Decide whether a stored user may reach the dashboard or must finish
/// profile setup first. A stored user that already carries financial details
/// is authenticated as-is; otherwise the registered-users list is consulted
/// by email and its details merged in. Only when neither copy has details is
/// the user routed to setup. This lookup-and-merge order is what keeps users
/// whose session blob predates setup from being stranded in a setup loop.
pub fn resolve_session(stored: User, registered: &[User]) -> SessionState {
    let mut user = stored;
    if user.profile_pic.is_empty() {
        user.profile_pic = DEFAULT_PROFILE_PIC.to_string();
    }

    if user.financial_details.is_some() {
        return SessionState {
            user,
            authenticated: true,
            needs_setup: false,
        };
    }

    let registered_details = registered
        .iter()
        .find(|u| u.email == user.email)
        .and_then(|u| u.financial_details.clone());

    match registered_details {
        Some(details) => {
            user.financial_details = Some(details);
            SessionState {
                user,
                authenticated: true,
                needs_setup: false,
            }
        }
        None => SessionState {
            user,
            authenticated: false,
            needs_setup: true,
        },
    }
}

/// Match credentials against the registered-users list and persist the
/// resolved session. Plaintext comparison against the same local store; this
/// is a gate, not a security boundary.
pub fn login(store: &Store, email: &str, password: &str) -> Result<SessionState> {
    let registered = store.registered_users()?;
    let matched = registered
        .iter()
        .find(|u| u.email == email && u.password == password)
        .ok_or(AuthError::InvalidCredentials)?;

    let mut session_user = matched.clone();
    session_user.password = String::new(); // session copy never carries the password

    let state = resolve_session(session_user, &registered);
    store.save_current_user(&state.user)?;
    Ok(state)
}

pub fn register(store: &Store, name: &str, email: &str, password: &str) -> Result<SessionState> {
    if password.len() < 6 {
        return Err(AuthError::PasswordTooShort.into());
    }
    let mut registered = store.registered_users()?;
    if registered.iter().any(|u| u.email == email) {
        return Err(AuthError::EmailAlreadyRegistered.into());
    }

    let user = User {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        profile_pic: DEFAULT_PROFILE_PIC.to_string(),
        ..Default::default()
    };
    registered.push(user.clone());
    store.save_registered_users(&registered)?;

    let mut session_user = user;
    session_user.password = String::new();
    store.save_current_user(&session_user)?;

    Ok(SessionState {
        user: session_user,
        authenticated: false,
        needs_setup: true,
    })
}

pub fn logout(store: &Store) -> Result<()> {
    store.clear_current_user()
}

/// The current session user, for commands that mutate their record lists.
pub fn require_user(store: &Store) -> Result<User> {
    store.current_user()?.ok_or_else(|| AuthError::NoSession.into())
}

/// Write financial details into both the session blob and the matching
/// registered-users entry. The two copies are a deliberate (fragile) part of
/// the storage contract; writing both here is what keeps them in step.
pub fn complete_profile_setup(store: &Store, details: FinancialDetails) -> Result<User> {
    let mut user = require_user(store)?;
    user.financial_details = Some(details.clone());
    store.save_current_user(&user)?;

    let mut registered = store.registered_users()?;
    if let Some(entry) = registered.iter_mut().find(|u| u.email == user.email) {
        entry.financial_details = Some(details);
        store.save_registered_users(&registered)?;
    }
    Ok(user)
}

/// Update name / phone / profile picture on both copies.
pub fn update_personal_details(
    store: &Store,
    name: Option<&str>,
    phone: Option<&str>,
    profile_pic: Option<&str>,
) -> Result<User> {
    let mut user = require_user(store)?;
    if let Some(n) = name {
        user.name = n.to_string();
    }
    if let Some(p) = phone {
        user.phone_number = Some(p.to_string());
    }
    if let Some(pic) = profile_pic {
        user.profile_pic = pic.to_string();
    }
    store.save_current_user(&user)?;

    let mut registered = store.registered_users()?;
    if let Some(entry) = registered.iter_mut().find(|u| u.email == user.email) {
        entry.name = user.name.clone();
        entry.phone_number = user.phone_number.clone();
        entry.profile_pic = user.profile_pic.clone();
        store.save_registered_users(&registered)?;
    }
    Ok(user)
}

/// Remove the session blob and the registered entry for the current user.
pub fn delete_account(store: &Store) -> Result<()> {
    let user = require_user(store)?;
    let mut registered = store.registered_users()?;
    registered.retain(|u| u.email != user.email);
    store.save_registered_users(&registered)?;
    store.clear_current_user()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialDetails;

    fn registered_user(email: &str, details: Option<FinancialDetails>) -> User {
        User {
            name: "Asha".into(),
            email: email.into(),
            password: "secret1".into(),
            financial_details: details,
            ..Default::default()
        }
    }

    #[test]
    fn stored_details_authenticate_directly() {
        let stored = registered_user("a@b.c", Some(FinancialDetails::default()));
        let state = resolve_session(stored, &[]);
        assert!(state.authenticated);
        assert!(!state.needs_setup);
    }

    #[test]
    fn registered_details_merge_into_session() {
        let details = FinancialDetails {
            monthly_income: 50000.0,
            ..Default::default()
        };
        let stored = registered_user("a@b.c", None);
        let registered = vec![registered_user("a@b.c", Some(details))];
        let state = resolve_session(stored, &registered);
        assert!(state.authenticated);
        assert!(!state.needs_setup);
        assert_eq!(
            state.user.financial_details.unwrap().monthly_income,
            50000.0
        );
    }

    #[test]
    fn unknown_user_needs_setup() {
        let stored = registered_user("new@b.c", None);
        let registered = vec![registered_user("other@b.c", Some(FinancialDetails::default()))];
        let state = resolve_session(stored, &registered);
        assert!(!state.authenticated);
        assert!(state.needs_setup);
    }

    #[test]
    fn missing_profile_pic_gets_the_default() {
        let mut stored = registered_user("a@b.c", None);
        stored.profile_pic = String::new();
        let state = resolve_session(stored, &[]);
        assert_eq!(state.user.profile_pic, DEFAULT_PROFILE_PIC);
    }
}
