//! Deployment helpers: CREATE address prediction and transaction submission

use alloy::{
    primitives::{keccak256, Address},
    providers::{Provider, WalletProvider},
};
use ethers::{types::U256, utils::rlp};
use tracing::{info, warn};

use crate::{client::RpcProvider, errors::ScriptError, factory::ContractFactory};

/// Compute the CREATE address for a deployer and nonce
pub fn compute_create_address(deployer: Address, nonce: u64) -> Address {
    let mut stream = rlp::RlpStream::new();
    stream.begin_list(2);
    stream.append(&deployer.to_vec());
    stream.append(&U256::from(nonce));
    let hash = keccak256(&stream.out());

    Address::from_slice(&hash[12..])
}

/// Predict the address the next deployment from this client will land on
pub async fn predict_contract_address(client: &RpcProvider) -> Result<Address, ScriptError> {
    // Get signer
    let signer = client.default_signer_address();

    // Get the signer nonce
    let signer_nonce = client
        .get_transaction_count(signer)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;

    Ok(compute_create_address(signer, signer_nonce))
}

/// Deploy the factory's contract with the given ABI encoded constructor
/// arguments, waiting for the transaction to be included
pub async fn deploy_contract(
    factory: &ContractFactory,
    constructor_args: &[u8],
    client: &RpcProvider,
) -> Result<Address, ScriptError> {
    // Predict the contract address
    let predicted = predict_contract_address(client).await?;

    // Build and send the deployment tx
    let tx_request = factory.deploy_request(constructor_args);
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!("Pending deployment transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    let deployed = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "no contract address in the receipt for {}",
            factory.name()
        ))
    })?;
    info!(
        "{} deployment tx done on block: {}",
        factory.name(),
        receipt.block_number.unwrap_or_default()
    );

    if deployed != predicted {
        warn!("Deployed at {} but predicted {}", deployed, predicted);
    }

    Ok(deployed)
}

#[cfg(test)]
mod tests {
    use ethers::{types::H160, utils::get_contract_address};

    use super::*;

    #[test]
    fn create_address_matches_ethers() {
        let deployer = Address::repeat_byte(0x42);
        for nonce in [0u64, 1, 127, 128, 1_000] {
            let expected =
                get_contract_address(H160::from_slice(deployer.as_slice()), U256::from(nonce));
            let ours = compute_create_address(deployer, nonce);
            assert_eq!(ours.as_slice(), expected.as_bytes());
        }
    }
}
