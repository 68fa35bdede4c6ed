// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract interfaces for the collection and the ONFT adapter.

use alloy::sol;

sol! {
    /// The ERC-721 surface the viewer and scripts touch. `mint` and
    /// `setTokenURI` are collection-specific extensions.
    #[sol(rpc)]
    interface IGalacticKitties {
        function balanceOf(address owner) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function tokenURI(uint256 tokenId) external view returns (string);
        function approve(address to, uint256 tokenId) external;
        function mint() external;
        function setTokenURI(uint256 tokenId, string memory uri) external;
    }

    /// LayerZero ONFT adapter used to bridge tokens from Base to Flow.
    #[sol(rpc)]
    interface IOnftAdapter {
        struct SendParam {
            uint32 dstEid;
            bytes32 to;
            uint256 tokenId;
            bytes extraOptions;
            bytes composeMsg;
            bytes onftCmd;
        }

        struct MessagingFee {
            uint128 nativeFee;
            uint128 lzTokenFee;
        }

        function quoteSend(SendParam calldata sendParam, bool payInLzToken)
            external view returns (MessagingFee memory fee);
        function send(SendParam calldata sendParam, MessagingFee calldata fee, address refundTo)
            external payable;
    }
}
