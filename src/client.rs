//! RPC client creation for the configured networks

use std::env;

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{config::NetworkConfig, constants::DEV_PRIVATE_KEY, errors::ScriptError};

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// A provider that uses a local wallet to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Sets up the signing client for the given network, reading the deployer
/// private key from the environment variable the network declares.
pub async fn create_rpc_provider(network: &NetworkConfig) -> Result<RpcProvider, ScriptError> {
    // Resolve the deployer key, falling back to the dev key on local nodes
    let raw_key = match network.accounts_env {
        Some(var) => env::var(var).map_err(|_| {
            ScriptError::ClientInitialization(format!(
                "the {} environment variable must hold the deployer key for network {}",
                var, network.name
            ))
        })?,
        None => DEV_PRIVATE_KEY.to_string(),
    };
    let private_key = parse_private_key(&raw_key)?;

    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = EthereumWallet::from(signer);

    let url = network
        .url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url);

    // Fetch chain id and check it against the configured one
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if let Some(expected) = network.chain_id {
        if expected != chain_id {
            return Err(ScriptError::ClientInitialization(format!(
                "network {} is declared with chain id {} but the node reports {}",
                network.name, expected, chain_id
            )));
        }
    }

    info!("Built client for {} on chain ID: {}", network.name, chain_id);

    Ok(provider)
}

/// Parse a hex encoded 32 byte private key, with or without 0x prefix
fn parse_private_key(raw: &str) -> Result<B256, ScriptError> {
    let bytes = hex::decode(raw.trim().trim_start_matches("0x"))
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {}", e)))?;
    if bytes.len() != 32 {
        return Err(ScriptError::ClientInitialization(format!(
            "invalid private key length: {} bytes",
            bytes.len()
        )));
    }
    Ok(B256::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_dev_key() {
        parse_private_key(DEV_PRIVATE_KEY).unwrap();
        parse_private_key(&format!("0x{}", DEV_PRIVATE_KEY)).unwrap();
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!(
            parse_private_key("not a key"),
            Err(ScriptError::ClientInitialization(_))
        ));
        assert!(matches!(
            parse_private_key("0x1234"),
            Err(ScriptError::ClientInitialization(_))
        ));
    }
}
