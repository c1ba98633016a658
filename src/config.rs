//! Static project configuration: compiler settings and the network map
//!
//! The configuration is built once at startup and read-only afterwards. It
//! mirrors what the contracts were audited against: solc 0.8.25 targeting
//! istanbul with the optimizer at 200 runs.

use crate::errors::ScriptError;

/// Solidity optimizer settings
pub struct OptimizerConfig {
    /// Whether the optimizer is enabled
    pub enabled: bool,
    /// Expected number of executions of each opcode, trading deploy cost
    /// against runtime cost
    pub runs: u32,
}

/// Solidity compiler settings
pub struct CompilerConfig {
    /// Compiler version the sources are pinned to
    pub version: &'static str,
    /// EVM hardfork to target
    pub evm_version: &'static str,
    /// Optimizer settings
    pub optimizer: OptimizerConfig,
}

/// Connection parameters for a single named network
pub struct NetworkConfig {
    /// Name used to select the network on the command line
    pub name: &'static str,
    /// JSON-RPC endpoint URL
    pub url: &'static str,
    /// Expected chain id, checked against the node at client init when set
    pub chain_id: Option<u64>,
    /// Environment variable holding the deployer private key. When unset the
    /// well known dev key of local nodes is used.
    pub accounts_env: Option<&'static str>,
    /// Block gas limit override for the local in-memory node
    pub block_gas_limit: Option<u64>,
    /// Whether the local node should skip the EIP-170 contract size check
    pub allow_unlimited_contract_size: bool,
}

/// The whole project configuration
pub struct ProjectConfig {
    /// Network targeted when no `--network` flag is given
    pub default_network: &'static str,
    /// Solidity compiler settings
    pub solidity: CompilerConfig,
    /// The declared networks
    pub networks: Vec<NetworkConfig>,
}

impl ProjectConfig {
    /// Build the static project configuration
    pub fn new() -> Self {
        Self {
            default_network: "hardhat",
            solidity: CompilerConfig {
                version: "0.8.25",
                evm_version: "istanbul",
                optimizer: OptimizerConfig {
                    enabled: true,
                    runs: 200,
                },
            },
            networks: vec![
                NetworkConfig {
                    name: "hardhat",
                    url: "http://127.0.0.1:8545",
                    chain_id: None,
                    accounts_env: None,
                    block_gas_limit: Some(130_000_000),
                    allow_unlimited_contract_size: true,
                },
                NetworkConfig {
                    name: "bscTestnet",
                    url: "https://data-seed-prebsc-1-s1.binance.org:8545",
                    chain_id: Some(97),
                    accounts_env: Some("PRIVATE_KEY"),
                    block_gas_limit: None,
                    allow_unlimited_contract_size: false,
                },
                NetworkConfig {
                    name: "bsc",
                    url: "https://bsc-dataseed.binance.org/",
                    chain_id: Some(56),
                    accounts_env: Some("PRIVATE_KEY"),
                    block_gas_limit: None,
                    allow_unlimited_contract_size: false,
                },
            ],
        }
    }

    /// Look up a declared network by name
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ScriptError> {
        self.networks
            .iter()
            .find(|network| network.name == name)
            .ok_or_else(|| ScriptError::UnknownNetwork(name.to_string()))
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_network_is_the_local_node() {
        let config = ProjectConfig::default();
        assert_eq!(config.default_network, "hardhat");

        let default = config.network(config.default_network).unwrap();
        assert!(default.allow_unlimited_contract_size);
        assert_eq!(default.block_gas_limit, Some(130_000_000));
        assert_eq!(default.chain_id, None);
    }

    #[test]
    fn optimizer_is_enabled_with_200_runs() {
        let config = ProjectConfig::default();
        assert!(config.solidity.optimizer.enabled);
        assert_eq!(config.solidity.optimizer.runs, 200);
        assert_eq!(config.solidity.version, "0.8.25");
        assert_eq!(config.solidity.evm_version, "istanbul");
    }

    #[test]
    fn bsc_networks_declare_url_and_chain_id() {
        let config = ProjectConfig::default();

        let testnet = config.network("bscTestnet").unwrap();
        assert!(!testnet.url.is_empty());
        assert_eq!(testnet.chain_id, Some(97));
        assert_eq!(testnet.accounts_env, Some("PRIVATE_KEY"));

        let mainnet = config.network("bsc").unwrap();
        assert!(!mainnet.url.is_empty());
        assert_eq!(mainnet.chain_id, Some(56));
        assert_eq!(mainnet.accounts_env, Some("PRIVATE_KEY"));
    }

    #[test]
    fn unknown_network_is_an_error() {
        let config = ProjectConfig::default();
        assert!(matches!(
            config.network("goerli"),
            Err(ScriptError::UnknownNetwork(_))
        ));
    }
}
