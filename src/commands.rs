//! Orchestration of the build and deploy commands

use std::path::Path;

use alloy::{primitives::Address, sol_types::SolValue};
use tracing::{info, warn};

use crate::{
    build::SolcBuilder,
    cli::{BuildArgs, DeployArgs},
    client::create_rpc_provider,
    config::ProjectConfig,
    constants::DEPLOY_OUTPUT_FILE,
    deploy::deploy_contract,
    errors::ScriptError,
    factory::ContractFactory,
    output_writer::{read_deployment, record_deployment},
};

/// Compile the project contracts with the configured compiler settings
pub fn build_artifacts(args: BuildArgs, config: &ProjectConfig) -> Result<(), ScriptError> {
    info!("Compiling contracts...");
    SolcBuilder::new(&config.solidity)
        .compile(Path::new(&args.contracts), Path::new(&args.artifacts))?;
    info!("Compiled with success");

    Ok(())
}

/// Deploy the refund provider contract on the selected network
pub async fn deploy_refund_provider(
    args: DeployArgs,
    config: &ProjectConfig,
    network_name: &str,
) -> Result<(), ScriptError> {
    // Fail fast on placeholder arguments, before any network interaction
    validate_constructor_args(&args)?;

    let network = config.network(network_name)?;

    if let Some(previous) = read_deployment(DEPLOY_OUTPUT_FILE, &args.contract)? {
        warn!(
            "{} is already recorded at {}, the record will be overwritten",
            args.contract, previous
        );
    }

    // Resolve the compiled artifact
    let factory = ContractFactory::from_artifacts(Path::new(&args.artifacts), &args.contract)?;

    // Build our RPC client with signer
    let client = create_rpc_provider(network).await?;

    // Deploy with the two constructor addresses
    info!("Deploying {} on {}...", factory.name(), network.name);
    let constructor_args = (args.lock_deal_nft, args.collateral_provider).abi_encode_params();
    let deployed = deploy_contract(&factory, &constructor_args, &client).await?;
    info!("Deployed with success at {}", deployed);

    record_deployment(DEPLOY_OUTPUT_FILE, &args.contract, deployed)?;

    Ok(())
}

/// Reject constructor arguments that are still placeholders
fn validate_constructor_args(args: &DeployArgs) -> Result<(), ScriptError> {
    if args.lock_deal_nft == Address::ZERO {
        return Err(ScriptError::InvalidConstructorArgument(String::from(
            "lock-deal-nft must not be the zero address",
        )));
    }
    if args.collateral_provider == Address::ZERO {
        return Err(ScriptError::InvalidConstructorArgument(String::from(
            "collateral-provider must not be the zero address",
        )));
    }

    Ok(())
}
