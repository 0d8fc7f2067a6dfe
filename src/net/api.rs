//! REST API helpers for the maintenance service.
//!
//! All company data lives behind a remote HTTP API; this module owns the
//! endpoint URLs and the request/response plumbing so pages only deal in
//! typed values.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a short human-readable
//! message. Callers stash the message in state for inline display and log
//! it; nothing here panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Company, CompanyDraft, CompanyProgress};

/// Base URL of the maintenance API. Overridable at compile time via the
/// `UPKEEP_API_BASE` environment variable; a trailing slash on the
/// override is tolerated.
fn api_base() -> &'static str {
    trim_base(option_env!("UPKEEP_API_BASE").unwrap_or("http://localhost:8000"))
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

fn companies_endpoint() -> String {
    format!("{}/companies/", api_base())
}

fn company_endpoint(company_id: &str) -> String {
    format!("{}/companies/{company_id}", api_base())
}

fn progress_endpoint(company_id: &str) -> String {
    format!("{}/progress/{company_id}", api_base())
}

fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch every company from `GET /companies/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_companies() -> Result<Vec<Company>, String> {
    let resp = gloo_net::http::Request::get(&companies_endpoint())
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("load companies", resp.status()));
    }
    resp.json::<Vec<Company>>().await.map_err(|e| e.to_string())
}

/// Create a company via `POST /companies/` and return the server's record,
/// including its assigned id.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn create_company(draft: &CompanyDraft) -> Result<Company, String> {
    let resp = gloo_net::http::Request::post(&companies_endpoint())
        .json(draft)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("create company", resp.status()));
    }
    resp.json::<Company>().await.map_err(|e| e.to_string())
}

/// Fetch a single company from `GET /companies/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_company(company_id: &str) -> Result<Company, String> {
    let resp = gloo_net::http::Request::get(&company_endpoint(company_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("load company", resp.status()));
    }
    resp.json::<Company>().await.map_err(|e| e.to_string())
}

/// Update a company via `PUT /companies/{id}`. Callers re-fetch afterwards
/// to pick up server-maintained fields like `last_updated`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn update_company(company_id: &str, draft: &CompanyDraft) -> Result<(), String> {
    let resp = gloo_net::http::Request::put(&company_endpoint(company_id))
        .json(draft)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("update company", resp.status()));
    }
    Ok(())
}

/// Delete a company via `DELETE /companies/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn delete_company(company_id: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(&company_endpoint(company_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("delete company", resp.status()));
    }
    Ok(())
}

/// Fetch cycle progress for one company from `GET /progress/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_company_progress(company_id: &str) -> Result<CompanyProgress, String> {
    let resp = gloo_net::http::Request::get(&progress_endpoint(company_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("load progress", resp.status()));
    }
    resp.json::<CompanyProgress>()
        .await
        .map_err(|e| e.to_string())
}
