// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use kitties_tools::utils::color::Color;

use crate::{common_args::ProxyArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    proxy: ProxyArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let client = args.proxy.metadata_client()?;
    client.health().await?;
    println!("{} {}", "proxy ok:".mint(), args.proxy.proxy);
    Ok(())
}
