// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{address, Address};

/// Default RPC endpoint for Base Sepolia, the canonical chain.
pub const DEFAULT_BASE_ENDPOINT: &str = "https://sepolia.base.org";

/// Default RPC endpoint for Flow EVM testnet.
pub const DEFAULT_FLOW_ENDPOINT: &str = "https://testnet.evm.nodes.onflow.org";

/// The collection contract on Base Sepolia.
pub const DEFAULT_BASE_NFT: Address = address!("0x3A25Ec105ac25f27476998616555674F7F8EBA3E");

/// The mirror contract on Flow EVM.
pub const DEFAULT_FLOW_NFT: Address = address!("0x255763f3fC9774E04559ee7A4d49F78a27759C09");

/// The ONFT adapter on Base Sepolia.
pub const DEFAULT_ADAPTER: Address = address!("0x7eD427C937235822c43D30c56aa52823E55E0c42");

/// Collection owner, the default address to view.
pub const DEFAULT_OWNER: Address = address!("0x8151a21cdaa1675a105497859ae181edd3d0c5c2");

/// The metadata/image caching proxy in front of Filecoin storage.
pub const DEFAULT_PROXY: &str = "https://galactickitties-production.up.railway.app";

/// Block explorer for the canonical chain.
pub const BASESCAN_TX: &str = "https://sepolia.basescan.org/tx";
