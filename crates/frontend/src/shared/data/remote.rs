//! Generic client for the optional managed backend.
//!
//! Issues select/insert/update/delete calls per named table against a
//! PostgREST-style endpoint. Enabled only when both configuration
//! values are present at build time; otherwise every call silently
//! degrades to demo mode (reads return nothing, writes are no-ops).

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Backend endpoint configuration, baked in at compile time.
#[derive(Clone, Copy)]
pub struct RemoteConfig {
    pub base_url: &'static str,
    pub anon_key: &'static str,
}

/// Both values must be present for live mode.
pub fn remote_config() -> Option<RemoteConfig> {
    match (option_env!("ERP_BACKEND_URL"), option_env!("ERP_BACKEND_ANON_KEY")) {
        (Some(base_url), Some(anon_key)) if !base_url.is_empty() && !anon_key.is_empty() => {
            Some(RemoteConfig { base_url, anon_key })
        }
        _ => None,
    }
}

pub fn is_configured() -> bool {
    remote_config().is_some()
}

/// Outcome of a write against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteWrite {
    /// The backend accepted the write.
    Applied,
    /// No backend configured; the data lives only in memory.
    DemoMode,
}

fn table_url(config: &RemoteConfig, table: &str) -> String {
    format!("{}/rest/v1/{}", config.base_url.trim_end_matches('/'), table)
}

/// Fetch all rows of a table. Demo mode yields an empty list.
pub async fn fetch_rows<T: DeserializeOwned>(table: &str) -> Result<Vec<T>, String> {
    let Some(config) = remote_config() else {
        log::debug!("Using demo mode for {table}");
        return Ok(Vec::new());
    };

    let response = Request::get(&table_url(&config, table))
        .header("apikey", config.anon_key)
        .header("Authorization", &format!("Bearer {}", config.anon_key))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<Vec<T>>().await.map_err(|e| format!("{e}"))
}

/// Insert one row. Demo mode is a logged no-op.
pub async fn insert_row<T: Serialize>(table: &str, row: &T) -> Result<RemoteWrite, String> {
    let Some(config) = remote_config() else {
        log::debug!("Demo mode: skipping insert for {table}");
        return Ok(RemoteWrite::DemoMode);
    };

    let response = Request::post(&table_url(&config, table))
        .header("apikey", config.anon_key)
        .header("Authorization", &format!("Bearer {}", config.anon_key))
        .json(row)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(RemoteWrite::Applied)
}

/// Update the row with the given id. Demo mode is a logged no-op.
pub async fn update_row<T: Serialize>(table: &str, id: &str, row: &T) -> Result<RemoteWrite, String> {
    let Some(config) = remote_config() else {
        log::debug!("Demo mode: skipping update for {table}");
        return Ok(RemoteWrite::DemoMode);
    };

    let url = format!("{}?id=eq.{}", table_url(&config, table), id);
    let response = Request::patch(&url)
        .header("apikey", config.anon_key)
        .header("Authorization", &format!("Bearer {}", config.anon_key))
        .json(row)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(RemoteWrite::Applied)
}

/// Delete the row with the given id. Demo mode is a logged no-op.
pub async fn delete_row(table: &str, id: &str) -> Result<RemoteWrite, String> {
    let Some(config) = remote_config() else {
        log::debug!("Demo mode: skipping delete for {table}");
        return Ok(RemoteWrite::DemoMode);
    };

    let url = format!("{}?id=eq.{}", table_url(&config, table), id);
    let response = Request::delete(&url)
        .header("apikey", config.anon_key)
        .header("Authorization", &format!("Bearer {}", config.anon_key))
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(RemoteWrite::Applied)
}
