// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod bridge;
mod image;
mod list;
mod mint;
mod quote;
mod set_token_uri;
mod status;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List NFTs owned by an address across Base and Flow
    #[clap(visible_alias = "l")]
    List(list::Args),
    /// Quote the fee for bridging a token to Flow
    #[clap(visible_alias = "q")]
    Quote(quote::Args),
    /// Bridge a token from Base to Flow (approve, then send)
    #[clap(visible_alias = "b")]
    Bridge(bridge::Args),
    /// Mint a new Galactic Kitty on Base
    #[clap(visible_alias = "m")]
    Mint(mint::Args),
    /// Point a token's URI at a stored metadata piece
    SetTokenUri(set_token_uri::Args),
    /// Download a token image from the proxy
    #[clap(visible_alias = "i")]
    Image(image::Args),
    /// Check the metadata proxy's health
    Status(status::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::List(args) => list::exec(args).await,
        Command::Quote(args) => quote::exec(args).await,
        Command::Bridge(args) => bridge::exec(args).await,
        Command::Mint(args) => mint::exec(args).await,
        Command::SetTokenUri(args) => set_token_uri::exec(args).await,
        Command::Image(args) => image::exec(args).await,
        Command::Status(args) => status::exec(args).await,
    }
}
