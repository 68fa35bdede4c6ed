// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

pub mod color;

use alloy::primitives::utils::format_ether;
use alloy::primitives::U256;

use color::Color;

/// Pretty-prints a bridge fee in native units.
pub fn format_fee(fee: U256) -> String {
    let text = format!("{} ETH", format_ether(fee));
    text.mint()
}

/// Decodes a hex string, accepting an optional `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

/// Encodes bytes as a `0x`-prefixed hex string.
pub fn encode0x(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes.as_ref()))
}
