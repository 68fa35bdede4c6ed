// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, U256};
use kitties_tools::{
    core::{bridge::{quote_fee, BridgeConfig}, chain::FLOW_EID},
    utils::format_fee,
};

use crate::{
    common_args::ProviderArgs,
    constants::{DEFAULT_ADAPTER, DEFAULT_BASE_NFT, DEFAULT_OWNER},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token to quote the bridge fee for
    #[arg(long)]
    token_id: u64,
    /// Recipient on the destination chain (defaults to the collection owner)
    #[arg(long)]
    recipient: Option<Address>,
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
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let provider = args.provider.build_provider().await?;
    let recipient = args.recipient.unwrap_or(DEFAULT_OWNER);
    let config = BridgeConfig {
        nft: args.nft,
        adapter: args.adapter,
        dst_eid: args.dst_eid,
    };
    let fee = quote_fee(args.token_id, recipient, &config, &provider).await?;
    println!(
        "Bridging token {} to eid {} costs {}",
        args.token_id,
        args.dst_eid,
        format_fee(U256::from(fee.nativeFee))
    );
    if fee.lzTokenFee > 0 {
        println!("LZ token fee: {}", fee.lzTokenFee);
    }
    Ok(())
}
