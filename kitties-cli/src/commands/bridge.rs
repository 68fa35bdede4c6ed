// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use kitties_tools::{
    core::{bridge::{bridge_token, BridgeConfig}, chain::FLOW_EID},
    utils::color::Color,
};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    constants::{BASESCAN_TX, DEFAULT_ADAPTER, DEFAULT_BASE_NFT},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token to bridge to Flow
    #[arg(long)]
    token_id: u64,
    /// ONFT adapter address
    #[arg(long, default_value_t = DEFAULT_ADAPTER)]
    adapter: Address,
    /// Collection contract on Base Sepolia
    #[arg(long, default_value_t = DEFAULT_BASE_NFT)]
    nft: Address,
    /// LayerZero endpoint ID of the destination chain
    #[arg(long, default_value_t = FLOW_EID)]
    dst_eid: u32,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let config = BridgeConfig {
        nft: args.nft,
        adapter: args.adapter,
        dst_eid: args.dst_eid,
    };
    let tx_hash = bridge_token(args.token_id, &config, &provider).await?;
    println!("{}", "Bridge transaction sent!".mint());
    println!("View on BaseScan: {BASESCAN_TX}/{tx_hash}");
    println!(
        "{}",
        "The NFT will appear on Flow EVM in a few minutes.".grey()
    );
    Ok(())
}
