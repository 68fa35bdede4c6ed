// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Ownership scanning: which token IDs does an address hold on a chain?
//!
//! The collection has no enumeration extension, so ownership is established by
//! probing `ownerOf` per candidate ID. A failed probe (revert, empty result,
//! RPC hiccup) means "not owned" and never aborts the scan.

use std::{sync::Arc, time::Duration};

use alloy::{
    primitives::{Address, U256},
    sol_types::SolCall,
};
use tokio::{task::JoinSet, time::sleep};

use crate::core::{abi::IGalacticKitties, chain::ChainSpec, rpc::EthCall};

/// Probe candidate IDs start at 1; the collection mints sequentially from there.
pub const FIRST_TOKEN_ID: u64 = 1;

/// Default upper bound on probed token IDs.
///
/// Tokens with IDs above the bound are not discovered even if owned. This is a
/// deliberate cost ceiling against public RPC endpoints, kept configurable
/// rather than "fixed" with unbounded enumeration.
pub const DEFAULT_PROBE_BOUND: u64 = 100;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Highest token ID a bounded probe will check.
    pub probe_bound: u64,
    /// Probes issued concurrently per batch.
    pub probe_batch: usize,
    /// Fixed delay between batches, a simple substitute for proactive
    /// rate limiting.
    pub probe_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            probe_bound: DEFAULT_PROBE_BOUND,
            probe_batch: 10,
            probe_delay: Duration::from_millis(100),
        }
    }
}

/// How to determine the candidate ID set.
#[derive(Debug, Clone)]
pub enum ScanStrategy {
    /// Probe IDs `1..=probe_bound`, stopping once `balance` owned tokens are
    /// found.
    BoundedProbe { balance: u64 },
    /// Probe exactly this candidate set, all concurrently.
    Enumerate(Vec<u64>),
}

/// Returns the sorted set of token IDs on `spec` owned by `owner`.
pub async fn scan_owned_tokens<C: EthCall + 'static>(
    client: &Arc<C>,
    spec: &ChainSpec,
    owner: Address,
    strategy: &ScanStrategy,
    config: &ScanConfig,
) -> Vec<u64> {
    let mut owned = match strategy {
        ScanStrategy::BoundedProbe { balance } => {
            bounded_probe(client, spec, owner, *balance, config).await
        }
        ScanStrategy::Enumerate(ids) => probe_batch(client, spec, owner, ids.clone()).await,
    };
    owned.sort_unstable();
    owned
}

async fn bounded_probe<C: EthCall + 'static>(
    client: &Arc<C>,
    spec: &ChainSpec,
    owner: Address,
    balance: u64,
    config: &ScanConfig,
) -> Vec<u64> {
    let mut owned = Vec::new();
    if balance == 0 {
        return owned;
    }
    let candidates: Vec<u64> = (FIRST_TOKEN_ID..=config.probe_bound).collect();
    for (batch_index, batch) in candidates.chunks(config.probe_batch.max(1)).enumerate() {
        if batch_index > 0 {
            sleep(config.probe_delay).await;
        }
        let mut found = probe_batch(client, spec, owner, batch.to_vec()).await;
        // Collect in ID order so "stop at balance" is deterministic.
        found.sort_unstable();
        for id in found {
            owned.push(id);
            if owned.len() as u64 >= balance {
                return owned;
            }
        }
    }
    if (owned.len() as u64) < balance {
        warn!(
            @grey,
            "{} of {balance} tokens found on {} within probe bound {}",
            owned.len(),
            spec.chain,
            config.probe_bound
        );
    }
    owned
}

/// Probes a batch of candidate IDs concurrently, pairing each completion with
/// its originating ID rather than relying on completion order.
async fn probe_batch<C: EthCall + 'static>(
    client: &Arc<C>,
    spec: &ChainSpec,
    owner: Address,
    ids: Vec<u64>,
) -> Vec<u64> {
    let mut probes = JoinSet::new();
    for id in ids {
        let client = Arc::clone(client);
        let chain = spec.chain;
        let contract = spec.contract;
        probes.spawn(async move {
            let data = IGalacticKitties::ownerOfCall {
                tokenId: U256::from(id),
            }
            .abi_encode();
            let owned = match client.eth_call(chain, contract, data).await {
                Ok(Some(bytes)) => {
                    match IGalacticKitties::ownerOfCall::abi_decode_returns(&bytes) {
                        Ok(holder) => holder == owner,
                        Err(err) => {
                            debug!(@grey, "token {id} on {chain}: bad ownerOf return: {err}");
                            false
                        }
                    }
                }
                // No data: the token does not exist.
                Ok(None) => false,
                Err(err) => {
                    debug!(@grey, "token {id} on {chain}: probe failed: {err}");
                    false
                }
            };
            (id, owned)
        });
    }

    let mut found = Vec::new();
    while let Some(result) = probes.join_next().await {
        match result {
            Ok((id, true)) => found.push(id),
            Ok((_, false)) => {}
            Err(err) => debug!(@grey, "probe task failed: {err}"),
        }
    }
    found
}
