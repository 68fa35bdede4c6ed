// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Token URI handling.
//!
//! Token URIs point at metadata with a `filecoin://{pieceCid}` or
//! `ipfs://{cid}[/path]` scheme. The piece CID is everything after the scheme
//! prefix up to the first `/`.

const SCHEMES: &[&str] = &["filecoin://", "ipfs://"];

/// Extracts the content identifier from a token URI.
///
/// A URI with an unrecognized scheme is assumed to already be a bare CID and
/// is returned unchanged. Empty or absent input yields `None`.
pub fn extract_cid(uri: Option<&str>) -> Option<String> {
    let uri = uri?;
    if uri.is_empty() {
        return None;
    }
    for scheme in SCHEMES {
        if let Some(rest) = uri.strip_prefix(scheme) {
            let cid = rest.split('/').next().unwrap_or(rest);
            return Some(cid.to_string());
        }
    }
    Some(uri.to_string())
}
