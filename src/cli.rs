//! Definitions of CLI arguments and commands for the deploy scripts

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{build_artifacts, deploy_refund_provider},
    config::ProjectConfig,
    constants::{ARTIFACTS_DIR, CONTRACTS_DIR, DEFAULT_CONTRACT},
    errors::ScriptError,
};

/// Scripts for building & deploying the refund provider contracts
#[derive(Parser)]
pub struct Cli {
    /// Name of the configured network to target, defaults to the local node
    #[arg(short, long)]
    pub network: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Compile the Solidity contracts with the configured settings
    Build(BuildArgs),
    /// Deploy the refund provider contract
    Deploy(DeployArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        config: &ProjectConfig,
        network: Option<String>,
    ) -> Result<(), ScriptError> {
        let network_name = network.unwrap_or_else(|| config.default_network.to_string());
        match self {
            Command::Build(args) => build_artifacts(args, config),
            Command::Deploy(args) => deploy_refund_provider(args, config, &network_name).await,
        }
    }
}

/// Compile the contracts
#[derive(Args)]
pub struct BuildArgs {
    /// Directory holding the Solidity sources
    #[arg(long, default_value = CONTRACTS_DIR)]
    pub contracts: String,

    /// Directory receiving the compiled artifacts
    #[arg(long, default_value = ARTIFACTS_DIR)]
    pub artifacts: String,
}

/// Deploy the refund provider contract
#[derive(Args)]
pub struct DeployArgs {
    /// Address of the LockDealNFT contract
    #[arg(short, long)]
    pub lock_deal_nft: Address,

    /// Address of the collateral provider contract
    #[arg(short, long)]
    pub collateral_provider: Address,

    /// Name of the contract artifact to deploy
    #[arg(long, default_value = DEFAULT_CONTRACT)]
    pub contract: String,

    /// Directory holding the compiled artifacts
    #[arg(long, default_value = ARTIFACTS_DIR)]
    pub artifacts: String,
}
