// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Raw JSON-RPC reads against the chain endpoints.
//!
//! Only `eth_call` is needed here. The write paths (bridge, mint) go through
//! an alloy provider instead since they require signing.

use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::chain::{Chain, ChainSet};
use crate::utils::{decode0x, encode0x};

const RPC_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed result hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Seam for issuing read-only contract calls.
///
/// [`RpcClient`] is the production implementation; tests substitute fixed
/// ownership/URI maps.
pub trait EthCall: Send + Sync {
    /// Issues `eth_call` against `chain` and returns the raw return data.
    ///
    /// A missing or `0x`-only result means the call returned no data and maps
    /// to `Ok(None)` rather than an error.
    fn eth_call(
        &self,
        chain: Chain,
        to: Address,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, RpcError>> + Send;
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: &'a Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<String>,
    error: Option<JsonRpcErrorObject>,
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client over the configured chain endpoints.
pub struct RpcClient {
    http: reqwest::Client,
    chains: ChainSet,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(chains: ChainSet) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder().timeout(RPC_TIMEOUT).build()?;
        Ok(Self {
            http,
            chains,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn chains(&self) -> &ChainSet {
        &self.chains
    }
}

impl EthCall for RpcClient {
    async fn eth_call(
        &self,
        chain: Chain,
        to: Address,
        data: Vec<u8>,
    ) -> Result<Option<Vec<u8>>, RpcError> {
        let spec = self.chains.spec(chain);
        let params = json!([{ "to": to.to_string(), "data": encode0x(&data) }, "latest"]);
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method: "eth_call",
            params: &params,
        };
        let response = self
            .http
            .post(&spec.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: JsonRpcResponse = serde_json::from_slice(&response.bytes().await?)?;
        if let Some(err) = body.error {
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        match body.result.as_deref() {
            None | Some("0x") => Ok(None),
            Some(result) => Ok(Some(decode0x(result)?)),
        }
    }
}
