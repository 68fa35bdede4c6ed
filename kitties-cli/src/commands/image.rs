// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use kitties_tools::utils::color::Color;

use crate::{common_args::ProxyArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Piece CID of the image to download
    #[arg(long)]
    cid: String,
    /// Output file (defaults to the CID with a sniffed extension)
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    proxy: ProxyArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let client = args.proxy.metadata_client()?;
    let image = client.fetch_image(&args.cid).await?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", args.cid, image.extension())));
    fs::write(&output, &image.bytes)?;
    println!(
        "Saved {} image to {}",
        image.content_type,
        output.display().to_string().lavender()
    );
    Ok(())
}
