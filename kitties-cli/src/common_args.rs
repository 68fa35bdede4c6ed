// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf, time::Duration};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, FixedBytes},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use kitties_tools::{
    core::{
        chain::{Chain, ChainSet, ChainSpec},
        metadata::{FetchConfig, MetadataClient},
        scan::{ScanConfig, DEFAULT_PROBE_BOUND},
    },
    utils::decode0x,
};

use crate::constants::{
    DEFAULT_BASE_ENDPOINT, DEFAULT_BASE_NFT, DEFAULT_FLOW_ENDPOINT, DEFAULT_FLOW_NFT,
    DEFAULT_PROXY,
};

#[derive(Debug, clap::Args)]
pub struct ChainArgs {
    /// Base Sepolia RPC endpoint
    #[arg(long, default_value = DEFAULT_BASE_ENDPOINT)]
    pub base_endpoint: String,
    /// Flow EVM RPC endpoint
    #[arg(long, default_value = DEFAULT_FLOW_ENDPOINT)]
    pub flow_endpoint: String,
    /// Collection contract on Base Sepolia
    #[arg(long, default_value_t = DEFAULT_BASE_NFT)]
    pub base_nft: Address,
    /// Mirror contract on Flow EVM
    #[arg(long, default_value_t = DEFAULT_FLOW_NFT)]
    pub flow_nft: Address,
}

impl ChainArgs {
    pub fn chain_set(&self) -> ChainSet {
        ChainSet {
            base: ChainSpec {
                chain: Chain::Base,
                endpoint: self.base_endpoint.clone(),
                contract: self.base_nft,
            },
            flow: ChainSpec {
                chain: Chain::Flow,
                endpoint: self.flow_endpoint.clone(),
                contract: self.flow_nft,
            },
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Highest token ID the ownership probe will check. Tokens with IDs above
    /// the bound are not found even if owned.
    #[arg(long, default_value_t = DEFAULT_PROBE_BOUND)]
    pub probe_bound: u64,
    /// Ownership probes issued concurrently per batch
    #[arg(long, default_value_t = 10)]
    pub probe_batch: usize,
    /// Delay between probe batches in milliseconds
    #[arg(long, default_value_t = 100)]
    pub probe_delay_ms: u64,
}

impl ScanArgs {
    pub fn config(&self) -> ScanConfig {
        ScanConfig {
            probe_bound: self.probe_bound,
            probe_batch: self.probe_batch,
            probe_delay: Duration::from_millis(self.probe_delay_ms),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct ProxyArgs {
    /// Metadata/image proxy base URL
    #[arg(long, default_value = DEFAULT_PROXY)]
    pub proxy: String,
    /// Extra fetch attempts after the first failure
    #[arg(long, default_value_t = 2)]
    pub max_retries: u32,
    /// Base backoff delay in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub backoff_ms: u64,
    /// Bound on the in-memory metadata cache
    #[arg(long, default_value_t = 256)]
    pub cache_capacity: usize,
}

impl ProxyArgs {
    pub fn metadata_client(&self) -> eyre::Result<MetadataClient> {
        let config = FetchConfig {
            max_retries: self.max_retries,
            backoff_base: Duration::from_millis(self.backoff_ms),
            cache_capacity: self.cache_capacity,
        };
        let client = MetadataClient::new(&self.proxy, config)
            .wrap_err("could not build metadata client")?;
        Ok(client)
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(decode0x(key)?.as_slice());
            let signer =
                PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(decode0x(key)?.as_slice());
            let signer =
                PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no keystore"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint of the canonical chain, where writes land
    #[arg(short, long, default_value = DEFAULT_BASE_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}
