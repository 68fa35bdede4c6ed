// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("{0}")]
    Rpc(#[from] crate::core::rpc::RpcError),
    #[error("{0}")]
    Fetch(#[from] crate::core::metadata::FetchError),
    #[error("{0}")]
    Aggregation(#[from] crate::core::aggregate::AggregationError),
    #[error("{0}")]
    Bridge(#[from] crate::core::bridge::BridgeError),
    #[error("{0}")]
    Mint(#[from] crate::core::mint::MintError),
}
