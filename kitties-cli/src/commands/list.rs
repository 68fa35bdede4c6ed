// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::sync::Arc;

use alloy::primitives::Address;
use kitties_tools::{
    core::{
        aggregate::{aggregate, AggregationConfig, AggregationRequest, CancelToken, NftRecord},
        chain::Chain,
        metadata::MetadataClient,
        rpc::RpcClient,
    },
    utils::color::Color,
};

use crate::{
    common_args::{ChainArgs, ProxyArgs, ScanArgs},
    constants::DEFAULT_OWNER,
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Address to view (defaults to the collection owner)
    #[arg(long)]
    address: Option<Address>,
    /// Restrict the scan to one chain
    #[arg(long)]
    chain: Option<Chain>,
    /// Show raw token URIs and CIDs
    #[arg(long)]
    raw: bool,
    /// Print records as JSON instead of cards
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    chains: ChainArgs,
    #[command(flatten)]
    scan: ScanArgs,
    #[command(flatten)]
    proxy: ProxyArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let owner = args.address.unwrap_or(DEFAULT_OWNER);
    let chains = match args.chain {
        Some(chain) => vec![chain],
        None => vec![Chain::Base, Chain::Flow],
    };
    let request = AggregationRequest::new(owner, chains);

    let chain_set = args.chains.chain_set();
    let rpc = Arc::new(RpcClient::new(chain_set.clone())?);
    let metadata: Arc<MetadataClient> = Arc::new(args.proxy.metadata_client()?);
    let mut config = AggregationConfig::new(chain_set);
    config.scan = args.scan.config();

    if !args.json {
        println!("{}", format!("Loading NFTs for {owner}...").grey());
    }
    let records = aggregate(&request, &rpc, &metadata, &config, &CancelToken::new()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records).map_err(eyre::Error::from)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No NFTs found");
        println!(
            "{}",
            "Make sure you have NFTs minted and the contract addresses are correct.".grey()
        );
        return Ok(());
    }

    for record in &records {
        print_record(record, &metadata, args.raw);
    }
    println!("{}", format!("{} NFTs total", records.len()).grey());
    Ok(())
}

fn print_record(record: &NftRecord, metadata: &MetadataClient, raw: bool) {
    let tag = format!("[{}]", record.chain.display_name());
    let tag = match record.chain {
        Chain::Base => tag.blue(),
        Chain::Flow => tag.mint(),
    };
    let name = record
        .metadata
        .as_ref()
        .and_then(|m| m.name.clone())
        .unwrap_or_else(|| format!("Galactic Kitty #{}", record.token_id));
    println!("{tag} {}", name.white());

    let description = record
        .metadata
        .as_ref()
        .and_then(|m| m.description.clone())
        .unwrap_or_else(|| "An omnichain space cat".to_string());
    println!("    {}", description.grey());

    if let Some(doc) = &record.metadata {
        if !doc.attributes.is_empty() {
            let attrs: Vec<String> = doc
                .attributes
                .iter()
                .take(4)
                .map(|attr| format!("{}: {}", attr.trait_type, attr_value(&attr.value)))
                .collect();
            println!("    {}", attrs.join("  "));
        }
    }

    if let Some(image_cid) = record.image_cid() {
        println!("    image: {}", metadata.image_url(&image_cid).lavender());
    }

    if let Some(error) = &record.error {
        println!("    error: {}", error.red());
    }

    if raw {
        println!(
            "    uri: {}",
            record.uri.as_deref().unwrap_or("N/A").grey()
        );
        if let Some(cid) = &record.metadata_cid {
            println!("    metadata CID: {}", cid.grey());
        }
        if let Some(cid) = record.image_cid() {
            println!("    image CID: {}", cid.grey());
        }
    }
}

fn attr_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
