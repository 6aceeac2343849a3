use alloy::sol;

sol! {
    /// Reward surface of the TaikoL1 contract, as supplied by the
    /// deployment's ABI artifact
    #[sol(rpc)]
    interface TaikoL1 {
        /// Accumulated proving reward for an account, in base units
        function getRewardBalance(address addr) external view returns (uint256);

        /// Withdraw the caller's entire reward balance
        function withdrawBalance() external;
    }
}
