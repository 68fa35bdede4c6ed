// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Mock chain and metadata sources for unit tests.

use std::collections::{HashMap, HashSet};

use alloy::{
    primitives::{Address, U256},
    sol_types::{SolCall, SolValue},
};

use crate::core::{
    abi::IGalacticKitties,
    chain::Chain,
    metadata::{FetchError, MetadataSource, TokenMetadata},
    rpc::{EthCall, RpcError},
};

/// In-memory chain state answering `eth_call` from fixed maps.
#[derive(Debug, Default)]
pub(crate) struct MockChain {
    owners: HashMap<(Chain, u64), Address>,
    /// Token URIs, served only from the canonical (Base) contract.
    uris: HashMap<u64, String>,
    failing_probes: HashSet<(Chain, u64)>,
    failing_balances: HashSet<Chain>,
}

impl MockChain {
    pub(crate) const OWNER: Address = Address::repeat_byte(0x42);
    pub(crate) const CONTRACT: Address = Address::repeat_byte(0xaa);

    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_owner(mut self, chain: Chain, token_id: u64, owner: Address) -> Self {
        self.owners.insert((chain, token_id), owner);
        self
    }

    pub(crate) fn with_uri(mut self, token_id: u64, uri: impl Into<String>) -> Self {
        self.uris.insert(token_id, uri.into());
        self
    }

    pub(crate) fn with_failing_probe(mut self, chain: Chain, token_id: u64) -> Self {
        self.failing_probes.insert((chain, token_id));
        self
    }

    pub(crate) fn with_failing_balance(mut self, chain: Chain) -> Self {
        self.failing_balances.insert(chain);
        self
    }

    fn balance_of(&self, chain: Chain, owner: Address) -> u64 {
        self.owners
            .iter()
            .filter(|((c, _), holder)| *c == chain && **holder == owner)
            .count() as u64
    }

    fn rpc_failure() -> RpcError {
        RpcError::Rpc {
            code: -32000,
            message: "mock failure".into(),
        }
    }
}

impl EthCall for MockChain {
    async fn eth_call(
        &self,
        chain: Chain,
        _to: Address,
        data: Vec<u8>,
    ) -> Result<Option<Vec<u8>>, RpcError> {
        let selector: [u8; 4] = data[..4].try_into().expect("selector");
        match selector {
            IGalacticKitties::balanceOfCall::SELECTOR => {
                if self.failing_balances.contains(&chain) {
                    return Err(Self::rpc_failure());
                }
                let call = IGalacticKitties::balanceOfCall::abi_decode(&data).expect("balanceOf");
                let balance = self.balance_of(chain, call.owner);
                Ok(Some(U256::from(balance).abi_encode()))
            }
            IGalacticKitties::ownerOfCall::SELECTOR => {
                let call = IGalacticKitties::ownerOfCall::abi_decode(&data).expect("ownerOf");
                let token_id: u64 = call.tokenId.to::<u64>();
                if self.failing_probes.contains(&(chain, token_id)) {
                    return Err(Self::rpc_failure());
                }
                match self.owners.get(&(chain, token_id)) {
                    Some(owner) => Ok(Some(owner.abi_encode())),
                    None => Ok(None),
                }
            }
            IGalacticKitties::tokenURICall::SELECTOR => {
                // URIs live on the canonical chain only.
                if chain != Chain::Base {
                    return Ok(None);
                }
                let call = IGalacticKitties::tokenURICall::abi_decode(&data).expect("tokenURI");
                let token_id: u64 = call.tokenId.to::<u64>();
                match self.uris.get(&token_id) {
                    Some(uri) => Ok(Some(uri.abi_encode())),
                    None => Ok(None),
                }
            }
            _ => Ok(None),
        }
    }
}

/// Metadata source answering from a fixed CID map.
#[derive(Debug, Default)]
pub(crate) struct MockMetadata {
    documents: HashMap<String, TokenMetadata>,
    failing: HashSet<String>,
}

impl MockMetadata {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_document(mut self, cid: impl Into<String>, name: &str) -> Self {
        let metadata = TokenMetadata {
            name: Some(name.to_string()),
            ..Default::default()
        };
        self.documents.insert(cid.into(), metadata);
        self
    }

    pub(crate) fn with_failing(mut self, cid: impl Into<String>) -> Self {
        self.failing.insert(cid.into());
        self
    }
}

impl MetadataSource for MockMetadata {
    async fn fetch_metadata(&self, cid: &str) -> Result<TokenMetadata, FetchError> {
        if self.failing.contains(cid) {
            return Err(FetchError::RetriesExhausted {
                attempts: 3,
                last: "HTTP 500 Internal Server Error".into(),
            });
        }
        self.documents
            .get(cid)
            .cloned()
            .ok_or(FetchError::RetriesExhausted {
                attempts: 3,
                last: "HTTP 404 Not Found".into(),
            })
    }
}
