// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for working with the Galactic Kitties omnichain collection.
//!
//! The collection is an ERC-721 deployed on Base Sepolia (the canonical chain)
//! and mirrored onto Flow EVM testnet through an ONFT adapter. Metadata and
//! images live on Filecoin and are served through a caching HTTP proxy.
//!
//! The heart of this crate is [`core::aggregate`]: given an owner address it
//! discovers which token IDs that address holds on each chain, resolves each
//! token's URI and metadata, and merges everything into one display model.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;

pub mod utils;

pub use error::{Error, Result};
