//! Session-wide application state and settings.
//!
//! All mutable state lives in one [`AppState`] value owned by the root
//! component and is only changed by dispatching an [`AppAction`], never
//! by views poking at shared globals.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::api::{Note, ProfileRow, SavingsEntry, Transaction, TransactionKind};

pub const DEFAULT_AVATAR: &str = "https://cdn-icons-png.flaticon.com/512/3135/3135715.png";

pub const QUOTES: &[&str] = &[
    "অর্থ সঞ্চয় মানে কেবল টাকা জমানো নয়, এটি ভবিষ্যতের নিরাপত্তা।",
    "অপ্রয়োজনীয় ব্যয় কমালে আয় বাড়ানোর সমান কাজ হয়।",
    "আপনার প্রতিটি টাকা হিসাব করে খরচ করুন, ভবিষ্যৎ সহজ হবে।",
    "ধৈর্য ধরুন, সঞ্চয় করুন, এবং আপনার সম্পদ বাড়তে দেখুন।",
    "বুদ্ধিমানের কাজ হলো আয়ের চেয়ে ব্যয় কম রাখা।",
];

#[derive(Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// Build a fully-populated profile from the optional sources, in order of
/// precedence: the profile row stored by the backend, then the auth
/// provider's metadata, then fixed defaults.
pub fn resolve_profile(
    row: Option<&ProfileRow>,
    auth_name: Option<&str>,
    session_email: &str,
) -> Profile {
    let name = row
        .and_then(|r| r.name.clone())
        .filter(|n| !n.trim().is_empty())
        .or_else(|| auth_name.map(str::to_string))
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "User".to_string());

    let email = row
        .and_then(|r| r.email.clone())
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| session_email.to_string());

    let avatar_url = row
        .and_then(|r| r.avatar_url.clone())
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

    Profile {
        name,
        email,
        avatar_url,
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    pub user: Option<Profile>,
    pub transactions: Vec<Transaction>,
    pub notes: Vec<Note>,
    pub savings: Vec<SavingsEntry>,
}

pub enum AppAction {
    SessionStarted {
        user: Profile,
        transactions: Vec<Transaction>,
        notes: Vec<Note>,
        savings: Vec<SavingsEntry>,
    },
    SessionEnded,
    ProfileUpdated(Profile),
    TransactionAdded(Transaction),
    TransactionRemoved(i64),
    NoteAdded(Note),
    NoteRemoved(i64),
    SavingsAdded(SavingsEntry),
    SavingsRemoved(i64),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::SessionStarted {
                user,
                transactions,
                notes,
                savings,
            } => {
                next.user = Some(user);
                next.transactions = transactions;
                next.notes = notes;
                next.savings = savings;
            }
            AppAction::SessionEnded => next = AppState::default(),
            AppAction::ProfileUpdated(profile) => next.user = Some(profile),
            AppAction::TransactionAdded(txn) => next.transactions.push(txn),
            AppAction::TransactionRemoved(id) => {
                next.transactions.retain(|t| t.id != Some(id));
            }
            AppAction::NoteAdded(note) => next.notes.push(note),
            AppAction::NoteRemoved(id) => next.notes.retain(|n| n.id != Some(id)),
            AppAction::SavingsAdded(entry) => next.savings.push(entry),
            AppAction::SavingsRemoved(id) => next.savings.retain(|s| s.id != Some(id)),
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub savings: f64,
}

pub fn summarize(transactions: &[Transaction], savings: &[SavingsEntry]) -> Totals {
    let mut totals = Totals::default();
    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => totals.income += txn.amount,
            TransactionKind::Expense => totals.expense += txn.amount,
        }
    }
    totals.balance = totals.income - totals.expense;
    totals.savings = savings.iter().map(|s| s.amount).sum();
    totals
}

/// Summary string sent alongside an advisor question.
pub fn advice_context(transactions: &[Transaction]) -> String {
    let totals = summarize(transactions, &[]);
    format!(
        "Total Income: {}\nTotal Expense: {}\nCurrent Balance: {}\nRecent Transactions count: {}",
        totals.income,
        totals.expense,
        totals.balance,
        transactions.len()
    )
}

/// The advice endpoint sometimes replies with markdown markers; the view
/// renders plain text.
pub fn strip_markup(text: &str) -> String {
    text.chars().filter(|c| *c != '*' && *c != '#').collect()
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

pub fn default_settings() -> AppSettings {
    AppSettings {
        currency_code: "BDT".to_string(),
        currency_symbol: "৳".to_string(),
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => "৳",
    }
}

pub fn load_settings() -> AppSettings {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item("settings") {
                if let Ok(settings) = serde_json::from_str::<AppSettings>(&raw) {
                    return settings;
                }
            }
        }
    }
    default_settings()
}

pub fn save_settings(settings: &AppSettings) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(settings) {
                let _ = storage.set_item("settings", &raw);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: Some(1),
            kind,
            amount,
            category: "Test".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn profile_prefers_the_stored_row() {
        let row = ProfileRow {
            name: Some("Rifat".to_string()),
            email: Some("rifat@example.com".to_string()),
            avatar_url: Some("https://example.com/a.png".to_string()),
        };
        let profile = resolve_profile(Some(&row), Some("Meta Name"), "session@example.com");
        assert_eq!(profile.name, "Rifat");
        assert_eq!(profile.email, "rifat@example.com");
        assert_eq!(profile.avatar_url, "https://example.com/a.png");
    }

    #[test]
    fn profile_falls_back_to_auth_metadata_then_defaults() {
        let row = ProfileRow {
            name: Some("   ".to_string()),
            email: None,
            avatar_url: None,
        };
        let profile = resolve_profile(Some(&row), Some("Meta Name"), "session@example.com");
        assert_eq!(profile.name, "Meta Name");
        assert_eq!(profile.email, "session@example.com");
        assert_eq!(profile.avatar_url, DEFAULT_AVATAR);

        let bare = resolve_profile(None, None, "session@example.com");
        assert_eq!(bare.name, "User");
        assert_eq!(bare.email, "session@example.com");
    }

    #[test]
    fn totals_separate_income_and_expense() {
        let transactions = vec![
            txn(TransactionKind::Income, 5000.0),
            txn(TransactionKind::Expense, 1200.0),
            txn(TransactionKind::Income, 300.0),
        ];
        let savings = vec![SavingsEntry {
            id: Some(1),
            amount: 900.0,
            description: "General".to_string(),
            date: "2024-01-01".to_string(),
        }];
        let totals = summarize(&transactions, &savings);
        assert_eq!(totals.income, 5300.0);
        assert_eq!(totals.expense, 1200.0);
        assert_eq!(totals.balance, 4100.0);
        assert_eq!(totals.savings, 900.0);
    }

    #[test]
    fn advice_context_mentions_all_totals() {
        let transactions = vec![
            txn(TransactionKind::Income, 100.0),
            txn(TransactionKind::Expense, 40.0),
        ];
        let context = advice_context(&transactions);
        assert!(context.contains("Total Income: 100"));
        assert!(context.contains("Total Expense: 40"));
        assert!(context.contains("Current Balance: 60"));
        assert!(context.contains("count: 2"));
    }

    #[test]
    fn markup_characters_are_stripped() {
        assert_eq!(strip_markup("**bold** and # heading"), "bold and  heading");
    }
}
