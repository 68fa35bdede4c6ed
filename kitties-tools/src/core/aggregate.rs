// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Multi-chain NFT aggregation.
//!
//! One pass takes an owner address, scans each requested chain for owned token
//! IDs, resolves each token's URI from the canonical chain, fetches metadata
//! through the proxy, and merges everything into one list of [`NftRecord`]s.
//!
//! Per-token failures are recorded on the token's record and never abort the
//! batch. The record list names exactly the tokens whose ownership was
//! confirmed on-chain at scan time, whether or not metadata resolved.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use alloy::{
    primitives::{Address, U256},
    sol_types::SolCall,
};
use serde::Serialize;
use tokio::{task::JoinSet, time::sleep};

use crate::core::{
    abi::IGalacticKitties,
    chain::{Chain, ChainSet, ChainSpec},
    metadata::{FetchError, MetadataSource, TokenMetadata},
    rpc::{EthCall, RpcError},
    scan::{scan_owned_tokens, ScanConfig, ScanStrategy},
    uri::extract_cid,
};

#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// The pass was cancelled by the caller; no partial results are returned.
    #[error("aggregation cancelled")]
    Cancelled,
    #[error("no chains requested")]
    NoChains,
}

/// Why a single record is missing its URI or metadata.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("token URI call failed: {0}")]
    UriCall(#[from] RpcError),
    #[error("bad tokenURI return: {0}")]
    UriDecode(#[from] alloy::sol_types::Error),
    #[error("no metadata CID in token URI")]
    NoMetadataCid,
    #[error("{0}")]
    Fetch(#[from] FetchError),
}

/// Terminal state of a record's resolution pipeline.
///
/// Every record starts as discovered (ownership confirmed), then either its
/// URI lookup fails, or the URI resolves and metadata resolution succeeds or
/// fails. There are no transitions after these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    MetadataResolved,
    MetadataFailed,
    UriFailed,
}

/// One aggregated view of a token. Immutable once constructed; a reload
/// rebuilds the whole list.
#[derive(Debug, Clone, Serialize)]
pub struct NftRecord {
    pub token_id: u64,
    pub chain: Chain,
    /// Raw token URI as returned by the canonical contract.
    pub uri: Option<String>,
    pub metadata_cid: Option<String>,
    pub metadata: Option<TokenMetadata>,
    /// Set when any resolution step failed; the record may still carry
    /// partial data (URI without metadata).
    pub error: Option<String>,
    pub status: RecordStatus,
}

impl NftRecord {
    /// CID of the token's image, if metadata resolved to one.
    pub fn image_cid(&self) -> Option<String> {
        let metadata = self.metadata.as_ref()?;
        extract_cid(metadata.image.as_deref())
    }

    fn uri_failed(chain: Chain, token_id: u64, error: RecordError) -> Self {
        NftRecord {
            token_id,
            chain,
            uri: None,
            metadata_cid: None,
            metadata: None,
            error: Some(error.to_string()),
            status: RecordStatus::UriFailed,
        }
    }
}

/// One aggregation pass: who to query and where. Not persisted.
#[derive(Debug, Clone)]
pub struct AggregationRequest {
    pub owner: Address,
    pub chains: Vec<Chain>,
}

impl AggregationRequest {
    pub fn new(owner: Address, chains: Vec<Chain>) -> Self {
        Self { owner, chains }
    }
}

#[derive(Debug, Clone)]
pub struct AggregationConfig {
    pub chains: ChainSet,
    pub scan: ScanConfig,
    /// Per-token stagger before the URI/metadata pipeline starts, keeping
    /// concurrent lookups from bursting the endpoints.
    pub uri_delay: Duration,
}

impl AggregationConfig {
    pub fn new(chains: ChainSet) -> Self {
        Self {
            chains,
            scan: ScanConfig::default(),
            uri_delay: Duration::from_millis(150),
        }
    }
}

/// Caller-driven cancellation for an in-flight pass.
///
/// Checked at stage boundaries; a superseded pass errors out instead of
/// delivering stale results.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs one aggregation pass.
///
/// Returns exactly one record per token ID confirmed owned by
/// `request.owner`, sorted by (chain, token ID). Only request-construction
/// problems and cancellation are fatal; everything else degrades to
/// per-record errors or a chain contributing zero records.
pub async fn aggregate<C, M>(
    request: &AggregationRequest,
    client: &Arc<C>,
    metadata: &Arc<M>,
    config: &AggregationConfig,
    cancel: &CancelToken,
) -> Result<Vec<NftRecord>, AggregationError>
where
    C: EthCall + 'static,
    M: MetadataSource + 'static,
{
    if request.chains.is_empty() {
        return Err(AggregationError::NoChains);
    }

    let mut records = Vec::new();
    for &chain in &request.chains {
        if cancel.is_cancelled() {
            return Err(AggregationError::Cancelled);
        }
        let chain_records = aggregate_chain(request.owner, chain, client, metadata, config).await;
        records.extend(chain_records);
    }

    if cancel.is_cancelled() {
        return Err(AggregationError::Cancelled);
    }
    records.sort_by_key(|record| (record.chain, record.token_id));
    info!(@grey, "aggregated {} records for {}", records.len(), request.owner);
    Ok(records)
}

/// Scans one chain and resolves each owned token. A failed balance read means
/// the chain contributes nothing, not that the pass fails.
async fn aggregate_chain<C, M>(
    owner: Address,
    chain: Chain,
    client: &Arc<C>,
    metadata: &Arc<M>,
    config: &AggregationConfig,
) -> Vec<NftRecord>
where
    C: EthCall + 'static,
    M: MetadataSource + 'static,
{
    let spec = config.chains.spec(chain);
    let balance = match balance_of(client, spec, owner).await {
        Ok(balance) => balance,
        Err(err) => {
            warn!(@grey, "balance lookup on {chain} failed: {err}");
            return Vec::new();
        }
    };
    if balance == 0 {
        debug!(@grey, "no tokens on {chain}");
        return Vec::new();
    }
    debug!(@grey, "balance on {chain}: {balance}");

    let strategy = ScanStrategy::BoundedProbe { balance };
    let owned = scan_owned_tokens(client, spec, owner, &strategy, &config.scan).await;
    debug!(@grey, "owned on {chain}: {owned:?}");

    let canonical = config.chains.canonical().clone();
    let mut pipeline = JoinSet::new();
    for (index, token_id) in owned.into_iter().enumerate() {
        let client = Arc::clone(client);
        let metadata = Arc::clone(metadata);
        let canonical = canonical.clone();
        let stagger = config.uri_delay * index as u32;
        pipeline.spawn(async move {
            sleep(stagger).await;
            resolve_record(&*client, &*metadata, &canonical, chain, token_id).await
        });
    }

    let mut records = Vec::new();
    while let Some(result) = pipeline.join_next().await {
        match result {
            Ok(record) => records.push(record),
            Err(err) => warn!(@grey, "record task failed: {err}"),
        }
    }
    records
}

async fn balance_of<C: EthCall>(
    client: &Arc<C>,
    spec: &ChainSpec,
    owner: Address,
) -> Result<u64, RpcError> {
    let data = IGalacticKitties::balanceOfCall { owner }.abi_encode();
    let Some(bytes) = client.eth_call(spec.chain, spec.contract, data).await? else {
        return Ok(0);
    };
    let balance = IGalacticKitties::balanceOfCall::abi_decode_returns(&bytes)
        .map(|balance| balance.min(U256::from(u64::MAX)).to::<u64>())
        .unwrap_or(0);
    Ok(balance)
}

/// Drives one record through `Discovered -> UriResolved|UriFailed ->
/// MetadataResolved|MetadataFailed`. Ownership is already confirmed, so this
/// always yields a record.
async fn resolve_record<C: EthCall, M: MetadataSource>(
    client: &C,
    metadata_source: &M,
    canonical: &ChainSpec,
    chain: Chain,
    token_id: u64,
) -> NftRecord {
    // Token URIs always come from the canonical chain, even for bridged
    // tokens living on the other chain.
    let uri = match token_uri(client, canonical, token_id).await {
        Ok(uri) => uri,
        Err(err) => return NftRecord::uri_failed(chain, token_id, err),
    };

    let Some(cid) = extract_cid(uri.as_deref()) else {
        // `0x` return or empty URI string: there is nothing to fetch.
        let status = if uri.is_none() {
            RecordStatus::UriFailed
        } else {
            RecordStatus::MetadataFailed
        };
        return NftRecord {
            token_id,
            chain,
            uri,
            metadata_cid: None,
            metadata: None,
            error: Some(RecordError::NoMetadataCid.to_string()),
            status,
        };
    };

    match metadata_source.fetch_metadata(&cid).await {
        Ok(metadata) => NftRecord {
            token_id,
            chain,
            uri,
            metadata_cid: Some(cid),
            metadata: Some(metadata),
            error: None,
            status: RecordStatus::MetadataResolved,
        },
        Err(err) => NftRecord {
            token_id,
            chain,
            uri,
            metadata_cid: Some(cid),
            metadata: None,
            error: Some(RecordError::from(err).to_string()),
            status: RecordStatus::MetadataFailed,
        },
    }
}

async fn token_uri<C: EthCall>(
    client: &C,
    canonical: &ChainSpec,
    token_id: u64,
) -> Result<Option<String>, RecordError> {
    let data = IGalacticKitties::tokenURICall {
        tokenId: U256::from(token_id),
    }
    .abi_encode();
    let Some(bytes) = client
        .eth_call(canonical.chain, canonical.contract, data)
        .await?
    else {
        return Ok(None);
    };
    let uri = IGalacticKitties::tokenURICall::abi_decode_returns(&bytes)?;
    Ok(Some(uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use crate::core::testing::{MockChain, MockMetadata};

    fn chain_set() -> ChainSet {
        ChainSet {
            base: ChainSpec {
                chain: Chain::Base,
                endpoint: String::new(),
                contract: MockChain::CONTRACT,
            },
            flow: ChainSpec {
                chain: Chain::Flow,
                endpoint: String::new(),
                contract: MockChain::CONTRACT,
            },
        }
    }

    fn fast_config() -> AggregationConfig {
        let mut config = AggregationConfig::new(chain_set());
        config.scan.probe_delay = Duration::from_millis(1);
        config.uri_delay = Duration::from_millis(1);
        config
    }

    fn request() -> AggregationRequest {
        AggregationRequest::new(MockChain::OWNER, vec![Chain::Base, Chain::Flow])
    }

    #[tokio::test]
    async fn aggregates_across_both_chains() {
        let owner = MockChain::OWNER;
        let chain = MockChain::new()
            .with_owner(Chain::Base, 1, owner)
            .with_owner(Chain::Base, 3, owner)
            .with_owner(Chain::Flow, 2, owner)
            .with_uri(1, "filecoin://cid1")
            .with_uri(2, "filecoin://cid2")
            .with_uri(3, "filecoin://cid3");
        let metadata = MockMetadata::new()
            .with_document("cid1", "Kitty #1")
            .with_document("cid2", "Kitty #2")
            .with_document("cid3", "Kitty #3");

        let records = aggregate(
            &request(),
            &Arc::new(chain),
            &Arc::new(metadata),
            &fast_config(),
            &CancelToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 3);
        let keys: Vec<(Chain, u64)> = records.iter().map(|r| (r.chain, r.token_id)).collect();
        assert_eq!(
            keys,
            vec![(Chain::Base, 1), (Chain::Base, 3), (Chain::Flow, 2)]
        );
        assert!(records.iter().all(|r| r.status == RecordStatus::MetadataResolved));
        assert_eq!(
            records[2].metadata.as_ref().unwrap().name.as_deref(),
            Some("Kitty #2")
        );
    }

    #[tokio::test]
    async fn bridged_tokens_use_canonical_uris() {
        // Token 2 lives on Flow; its URI is still served by the Base contract.
        let owner = MockChain::OWNER;
        let chain = MockChain::new()
            .with_owner(Chain::Flow, 2, owner)
            .with_uri(2, "filecoin://cid2");
        let metadata = MockMetadata::new().with_document("cid2", "Kitty #2");

        let records = aggregate(
            &request(),
            &Arc::new(chain),
            &Arc::new(metadata),
            &fast_config(),
            &CancelToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chain, Chain::Flow);
        assert_eq!(records[0].uri.as_deref(), Some("filecoin://cid2"));
        assert_eq!(records[0].metadata_cid.as_deref(), Some("cid2"));
    }

    #[tokio::test]
    async fn missing_uri_yields_record_with_error() {
        // Token 5's tokenURI call returns no data.
        let owner = MockChain::OWNER;
        let chain = MockChain::new().with_owner(Chain::Base, 5, owner);
        let metadata = MockMetadata::new();

        let records = aggregate(
            &request(),
            &Arc::new(chain),
            &Arc::new(metadata),
            &fast_config(),
            &CancelToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.token_id, 5);
        assert!(record.uri.is_none());
        assert!(record.metadata_cid.is_none());
        assert!(record.metadata.is_none());
        assert_eq!(record.status, RecordStatus::UriFailed);
        assert!(record.error.as_deref().unwrap().contains("no metadata CID"));
    }

    #[tokio::test]
    async fn fetch_failure_lands_on_the_record_only() {
        let owner = MockChain::OWNER;
        let chain = MockChain::new()
            .with_owner(Chain::Base, 1, owner)
            .with_owner(Chain::Base, 2, owner)
            .with_uri(1, "filecoin://good")
            .with_uri(2, "filecoin://bad");
        let metadata = MockMetadata::new()
            .with_document("good", "Kitty #1")
            .with_failing("bad");

        let records = aggregate(
            &request(),
            &Arc::new(chain),
            &Arc::new(metadata),
            &fast_config(),
            &CancelToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, RecordStatus::MetadataResolved);
        let failed = &records[1];
        assert_eq!(failed.status, RecordStatus::MetadataFailed);
        assert_eq!(failed.metadata_cid.as_deref(), Some("bad"));
        assert!(failed.metadata.is_none());
        assert!(failed.error.as_deref().unwrap().contains("3 attempts"));
    }

    #[tokio::test]
    async fn failed_balance_read_skips_the_chain() {
        let owner = MockChain::OWNER;
        let chain = MockChain::new()
            .with_owner(Chain::Base, 1, owner)
            .with_uri(1, "filecoin://cid1")
            .with_failing_balance(Chain::Flow);
        let metadata = MockMetadata::new().with_document("cid1", "Kitty #1");

        let records = aggregate(
            &request(),
            &Arc::new(chain),
            &Arc::new(metadata),
            &fast_config(),
            &CancelToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chain, Chain::Base);
    }

    #[tokio::test]
    async fn repeated_passes_agree_as_sets() {
        let owner = MockChain::OWNER;
        let chain = Arc::new(
            MockChain::new()
                .with_owner(Chain::Base, 1, owner)
                .with_owner(Chain::Flow, 2, owner)
                .with_uri(1, "filecoin://cid1")
                .with_uri(2, "filecoin://cid2"),
        );
        let metadata = Arc::new(
            MockMetadata::new()
                .with_document("cid1", "Kitty #1")
                .with_document("cid2", "Kitty #2"),
        );

        let config = fast_config();
        let first = aggregate(&request(), &chain, &metadata, &config, &CancelToken::new())
            .await
            .unwrap();
        let second = aggregate(&request(), &chain, &metadata, &config, &CancelToken::new())
            .await
            .unwrap();

        let key = |records: &[NftRecord]| -> BTreeSet<(Chain, u64)> {
            records.iter().map(|r| (r.chain, r.token_id)).collect()
        };
        assert_eq!(key(&first), key(&second));
    }

    #[tokio::test]
    async fn cancelled_pass_returns_no_records() {
        let chain = Arc::new(MockChain::new());
        let metadata = Arc::new(MockMetadata::new());
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = aggregate(&request(), &chain, &metadata, &fast_config(), &cancel).await;
        assert!(matches!(result, Err(AggregationError::Cancelled)));
    }

    #[tokio::test]
    async fn empty_chain_set_is_a_request_error() {
        let chain = Arc::new(MockChain::new());
        let metadata = Arc::new(MockMetadata::new());
        let request = AggregationRequest::new(MockChain::OWNER, Vec::new());

        let result = aggregate(
            &request,
            &chain,
            &metadata,
            &fast_config(),
            &CancelToken::new(),
        )
        .await;
        assert!(matches!(result, Err(AggregationError::NoChains)));
    }
}
