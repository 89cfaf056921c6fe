//! Backend API layer.
//!
//! Every call is an explicit async function returning `Result`, so view
//! code decides what a failure means instead of silently dropping it.
//! The access token lives in `localStorage` and is attached as a bearer
//! header when present.

use gloo_net::http::{Request, RequestBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::RequestCredentials;

pub const API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode the response body")]
    Decode,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub date: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEntry {
    pub id: Option<i64>,
    pub amount: f64,
    pub description: String,
    pub date: String,
}

/// Raw profile row as stored by the backend; every field is optional.
/// Resolved into a full profile by `state::resolve_profile`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProfileRow {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

fn access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item("access_token").ok()?
}

pub fn store_access_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("access_token", token);
        }
    }
}

pub fn drop_access_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item("access_token");
        }
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn get_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, ApiError> {
    let url = format!("{}{}", API_BASE_URL, path);
    let resp = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|_| ApiError::Decode)
}

async fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = format!("{}{}", API_BASE_URL, path);
    let resp = authorized(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|_| ApiError::Decode)
}

async fn delete(path: &str) -> Result<(), ApiError> {
    let url = format!("{}{}", API_BASE_URL, path);
    let resp = authorized(Request::delete(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

pub async fn fetch_transactions() -> Result<Vec<Transaction>, ApiError> {
    get_json("/api/transactions").await
}

pub async fn add_transaction(txn: &Transaction) -> Result<Transaction, ApiError> {
    post_json("/api/transactions", txn).await
}

pub async fn delete_transaction(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/transactions/{}", id)).await
}

pub async fn fetch_notes() -> Result<Vec<Note>, ApiError> {
    get_json("/api/notes").await
}

pub async fn add_note(note: &Note) -> Result<Note, ApiError> {
    post_json("/api/notes", note).await
}

pub async fn delete_note(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/notes/{}", id)).await
}

pub async fn fetch_savings() -> Result<Vec<SavingsEntry>, ApiError> {
    get_json("/api/savings").await
}

pub async fn add_savings(entry: &SavingsEntry) -> Result<SavingsEntry, ApiError> {
    post_json("/api/savings", entry).await
}

pub async fn delete_savings(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/savings/{}", id)).await
}

pub async fn fetch_profile() -> Result<ProfileRow, ApiError> {
    get_json("/api/profile").await
}

#[derive(Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub avatar_url: String,
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<ProfileRow, ApiError> {
    post_json("/api/profile", update).await
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    access_token: Option<String>,
    email: Option<String>,
}

/// Log in (or register) against the delegated auth provider. Returns the
/// account email; the access token is stored as a side effect.
pub async fn authenticate(
    email: &str,
    password: &str,
    register: bool,
) -> Result<String, ApiError> {
    let path = if register {
        "/api/auth/register"
    } else {
        "/api/auth/login"
    };
    let resp: AuthResponse = post_json(path, &AuthRequest { email, password }).await?;
    if let Some(token) = &resp.access_token {
        store_access_token(token);
    }
    Ok(resp.email.unwrap_or_else(|| email.to_string()))
}

/// Refresh the session on startup. Returns the session email if one is
/// still valid.
pub async fn refresh_session() -> Result<Option<String>, ApiError> {
    let resp: AuthResponse = post_json("/api/auth/refresh", &serde_json::json!({})).await?;
    if let Some(token) = &resp.access_token {
        store_access_token(token);
    }
    Ok(resp.email)
}

pub async fn logout() -> Result<(), ApiError> {
    let url = format!("{}/api/auth/logout", API_BASE_URL);
    let _ = authorized(Request::post(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    drop_access_token();
    Ok(())
}

#[derive(Serialize)]
struct AdviceRequest<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Deserialize)]
struct AdviceResponse {
    advice: String,
}

/// Ask the AI advisor one question with a financial-context summary.
/// Single call, no retries, no streaming.
pub async fn request_advice(question: &str, context: &str) -> Result<String, ApiError> {
    let resp: AdviceResponse =
        post_json("/api/advice", &AdviceRequest { question, context }).await?;
    Ok(resp.advice)
}
