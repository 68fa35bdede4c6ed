// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use kitties_tools::{core::mint::mint, utils::color::Color};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    constants::{BASESCAN_TX, DEFAULT_BASE_NFT},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Collection contract on Base Sepolia
    #[arg(long, default_value_t = DEFAULT_BASE_NFT)]
    nft: Address,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let tx_hash = mint(args.nft, &provider).await?;
    println!("{}", "Minted a Galactic Kitty!".mint());
    println!("View on BaseScan: {BASESCAN_TX}/{tx_hash}");
    Ok(())
}
