//! JSON-RPC 2.0 transport over HTTP.

use crate::error::{ChainError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error object of a failed JSON-RPC response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

/// Minimal JSON-RPC client. One instance per endpoint; request ids are unique per client.
pub struct JsonRpcClient {
    http: Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChainError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `method` with positional `params` and decode the `result` member.
    ///
    /// A `null` result decodes into `R`, so callers that expect "not yet" answers
    /// (receipts) ask for an `Option<_>`.
    pub async fn request<R: DeserializeOwned>(&self, method: &str, params: Value) -> Result<R> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::trace!(id, method, "JSON-RPC request");

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        decode_response(&text).inspect_err(|e| tracing::debug!(id, method, error = %e, "JSON-RPC call failed"))
    }
}

fn decode_response<R: DeserializeOwned>(text: &str) -> Result<R> {
    let response: RpcResponse = serde_json::from_str(text)?;

    if let Some(error) = response.error {
        return Err(ChainError::from_rpc(error.code, error.message));
    }

    let result = response.result.unwrap_or(Value::Null);
    Ok(serde_json::from_value(result)?)
}
