// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use eyre::eyre;
use kitties_tools::core::mint::set_token_uri;

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    constants::DEFAULT_BASE_NFT,
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token whose URI to set
    #[arg(long)]
    token_id: u64,
    /// Metadata piece CID; stored as filecoin://{cid}
    #[arg(long)]
    cid: Option<String>,
    /// Full token URI, if not a filecoin piece
    #[arg(long, conflicts_with = "cid")]
    uri: Option<String>,
    /// Collection contract on Base Sepolia
    #[arg(long, default_value_t = DEFAULT_BASE_NFT)]
    nft: Address,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let uri = match (&args.cid, &args.uri) {
        (Some(cid), _) => format!("filecoin://{cid}"),
        (None, Some(uri)) => uri.clone(),
        (None, None) => return Err(eyre!("either --cid or --uri is required").into()),
    };
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    set_token_uri(args.nft, args.token_id, &uri, &provider).await?;
    Ok(())
}
