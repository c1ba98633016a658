//! Constants used in the deploy scripts

/// Directory scanned for Solidity sources by the build command
pub const CONTRACTS_DIR: &str = "contracts";

/// Directory where compiled contract artifacts are written and read back
pub const ARTIFACTS_DIR: &str = "artifacts";

/// File recording the deployed contract addresses
pub const DEPLOY_OUTPUT_FILE: &str = "deployed.json";

/// Name of the contract artifact deployed by default
pub const DEFAULT_CONTRACT: &str = "RefundProvider";

/// Well known private key of the first pre-funded account on local development nodes
pub const DEV_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
