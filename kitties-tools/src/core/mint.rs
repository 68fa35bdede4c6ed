// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Minting and URI administration on the canonical contract.

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
};

use crate::core::abi::IGalacticKitties;
use crate::utils::color::DebugColor;

#[derive(Debug, thiserror::Error)]
pub enum MintError {
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
}

/// Mints one token to the signer.
pub async fn mint(
    contract: Address,
    provider: &(impl Provider + WalletProvider),
) -> Result<TxHash, MintError> {
    let nft = IGalacticKitties::new(contract, provider);
    let pending = nft.mint().send().await?;
    let receipt = pending.get_receipt().await?;
    let tx_hash = receipt.transaction_hash;
    info!(@grey, "Minted a Galactic Kitty: {}", tx_hash.debug_lavender());
    Ok(tx_hash)
}

/// Points a token's URI at a stored metadata piece.
///
/// URIs are only written here, on the canonical chain; bridged mirrors keep
/// reading them from this contract.
pub async fn set_token_uri(
    contract: Address,
    token_id: u64,
    uri: &str,
    provider: &(impl Provider + WalletProvider),
) -> Result<TxHash, MintError> {
    let nft = IGalacticKitties::new(contract, provider);
    let pending = nft
        .setTokenURI(U256::from(token_id), uri.to_string())
        .send()
        .await?;
    let receipt = pending.get_receipt().await?;
    let tx_hash = receipt.transaction_hash;
    info!(@grey, "Token {token_id} -> {uri}");
    debug!(@grey, "setTokenURI tx: {}", tx_hash.debug_lavender());
    Ok(tx_hash)
}
