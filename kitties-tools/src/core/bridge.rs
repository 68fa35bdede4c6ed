// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Bridging a token from Base to Flow through the ONFT adapter.
//!
//! Two sequential writes: approve the adapter for the token, then `send` with
//! the quoted LayerZero fee attached as value. The adapter burns/locks on Base
//! and the mirror contract mints/unlocks on Flow a few minutes later.

use alloy::{
    primitives::{Address, FixedBytes, TxHash, U256},
    providers::{Provider, WalletProvider},
};

use crate::core::abi::{IGalacticKitties, IOnftAdapter};
use crate::core::chain::FLOW_EID;
use crate::utils::{color::DebugColor, format_fee};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
}

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// NFT contract on the source (canonical) chain.
    pub nft: Address,
    /// ONFT adapter on the source chain.
    pub adapter: Address,
    /// LayerZero endpoint ID of the destination chain.
    pub dst_eid: u32,
}

impl BridgeConfig {
    pub fn new(nft: Address, adapter: Address) -> Self {
        Self {
            nft,
            adapter,
            dst_eid: FLOW_EID,
        }
    }
}

/// Builds the adapter's send parameter for one token.
///
/// The recipient address is left-padded into the protocol's bytes32 form; the
/// option/compose/command fields stay empty for a plain transfer.
pub fn send_param(recipient: Address, token_id: u64, dst_eid: u32) -> IOnftAdapter::SendParam {
    IOnftAdapter::SendParam {
        dstEid: dst_eid,
        to: FixedBytes::<32>::left_padding_from(recipient.as_slice()),
        tokenId: U256::from(token_id),
        extraOptions: Default::default(),
        composeMsg: Default::default(),
        onftCmd: Default::default(),
    }
}

/// Quotes the native fee for bridging `token_id` to `recipient`.
pub async fn quote_fee(
    token_id: u64,
    recipient: Address,
    config: &BridgeConfig,
    provider: &impl Provider,
) -> Result<IOnftAdapter::MessagingFee, BridgeError> {
    let adapter = IOnftAdapter::new(config.adapter, provider);
    let fee = adapter
        .quoteSend(send_param(recipient, token_id, config.dst_eid), false)
        .call()
        .await?;
    Ok(fee)
}

/// Bridges a token to the signer's own address on the destination chain.
///
/// Returns the hash of the `send` transaction.
pub async fn bridge_token(
    token_id: u64,
    config: &BridgeConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<TxHash, BridgeError> {
    let owner = provider.default_signer_address();

    info!(@grey, "Approving adapter for token {token_id}...");
    let nft = IGalacticKitties::new(config.nft, provider);
    nft.approve(config.adapter, U256::from(token_id))
        .send()
        .await?
        .watch()
        .await?;

    let adapter = IOnftAdapter::new(config.adapter, provider);
    let param = send_param(owner, token_id, config.dst_eid);
    let fee = adapter.quoteSend(param.clone(), false).call().await?;
    info!(@grey, "Bridge fee: {}", format_fee(U256::from(fee.nativeFee)));

    info!(@grey, "Sending token {token_id} to eid {}...", config.dst_eid);
    let pending = adapter
        .send(param, fee.clone(), owner)
        .value(U256::from(fee.nativeFee))
        .send()
        .await?;
    let receipt = pending.get_receipt().await?;
    let tx_hash = receipt.transaction_hash;
    info!(@grey, "Sent bridge tx with hash: {}", tx_hash.debug_lavender());
    Ok(tx_hash)
}
