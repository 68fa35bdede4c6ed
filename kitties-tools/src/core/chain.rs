// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// LayerZero endpoint ID for Flow EVM testnet, the bridge destination.
pub const FLOW_EID: u32 = 40351;

/// A chain the collection lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Base Sepolia, where the collection was minted.
    Base,
    /// Flow EVM testnet, reachable via the ONFT adapter.
    Flow,
}

impl Chain {
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Base => "base",
            Chain::Flow => "flow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Base => "Base Sepolia",
            Chain::Flow => "Flow EVM",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(Chain::Base),
            "flow" => Ok(Chain::Flow),
            other => Err(format!("unknown chain: {other} (expected base or flow)")),
        }
    }
}

/// Where to find the collection on one chain.
#[derive(Debug, Clone)]
pub struct ChainSpec {
    pub chain: Chain,
    /// JSON-RPC endpoint.
    pub endpoint: String,
    /// NFT contract address on this chain.
    pub contract: Address,
}

/// The full set of chains an aggregation pass covers.
#[derive(Debug, Clone)]
pub struct ChainSet {
    pub base: ChainSpec,
    pub flow: ChainSpec,
}

impl ChainSet {
    pub fn spec(&self, chain: Chain) -> &ChainSpec {
        match chain {
            Chain::Base => &self.base,
            Chain::Flow => &self.flow,
        }
    }

    /// The chain holding the authoritative token URIs.
    ///
    /// URIs are only ever written on Base and are not re-synced to Flow after
    /// bridging, so `tokenURI` must be read here even for tokens that
    /// currently live on the other chain.
    pub fn canonical(&self) -> &ChainSpec {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_names() {
        assert_eq!(Chain::Base.to_string(), "base");
        assert_eq!(Chain::Flow.to_string(), "flow");
        assert_eq!(Chain::Flow.display_name(), "Flow EVM");
    }

    #[test]
    fn canonical_chain_is_base() {
        let set = ChainSet {
            base: ChainSpec {
                chain: Chain::Base,
                endpoint: "http://localhost:8545".into(),
                contract: Address::ZERO,
            },
            flow: ChainSpec {
                chain: Chain::Flow,
                endpoint: "http://localhost:8546".into(),
                contract: Address::ZERO,
            },
        };
        assert_eq!(set.canonical().chain, Chain::Base);
        assert_eq!(set.spec(Chain::Flow).chain, Chain::Flow);
    }
}
