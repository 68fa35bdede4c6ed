// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Core functionality: chain reads, ownership scanning, metadata resolution,
//! aggregation, and the bridge/mint write paths.

pub mod abi;
pub mod aggregate;
pub mod bridge;
pub mod chain;
pub mod metadata;
pub mod mint;
pub mod rpc;
pub mod scan;
pub mod uri;

#[cfg(test)]
pub(crate) mod testing;
