//! Public pool-hooks catalog fetched over HTTPS

use std::time::Duration;
use tracing::{info, warn};
use crate::{
    errors::{ScaffoldError, ScaffoldResult},
    types::HookInfo,
};

pub const CATALOG_TIMEOUT_SECS: u64 = 10;

pub async fn fetch_hooks_catalog(url: &str) -> ScaffoldResult<Vec<HookInfo>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(CATALOG_TIMEOUT_SECS))
        .build()
        .map_err(|e| ScaffoldError::Network {
            message: "Failed to build HTTP client".to_string(),
            source: Some(e.into()),
        })?;

    let response = client.get(url).send().await.map_err(|e| ScaffoldError::Network {
        message: format!("Hooks catalog request failed: {}", url),
        source: Some(e.into()),
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("⚠️ Hooks catalog returned error status {}: {}", status, body);
        return Err(ScaffoldError::Network {
            message: format!("Hooks catalog error: {}", status),
            source: None,
        });
    }

    let hooks: Vec<HookInfo> = response.json().await.map_err(|e| ScaffoldError::DataParsing {
        context: "hooks catalog JSON".to_string(),
        source: e.into(),
    })?;

    info!("📚 Loaded {} hooks from catalog", hooks.len());
    Ok(hooks)
}

/// Keeps catalog order; `None` keeps everything.
pub fn filter_hooks<'a>(hooks: &'a [HookInfo], category: Option<&str>) -> Vec<&'a HookInfo> {
    hooks
        .iter()
        .filter(|hook| category.is_none_or(|c| hook.in_category(c)))
        .collect()
}
