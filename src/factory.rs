//! Contract factory: resolves compiled artifacts by name and produces
//! deployment transactions

use std::{fs, path::Path};

use alloy::{
    hex, network::TransactionBuilder, primitives::Bytes, rpc::types::eth::TransactionRequest,
};
use tracing::warn;

use crate::errors::ScriptError;

/// A deployable contract, resolved from the artifacts directory
pub struct ContractFactory {
    /// Name of the contract, matching the artifact file stem
    name: String,
    /// Creation bytecode from the `.bin` artifact
    bytecode: Vec<u8>,
}

impl ContractFactory {
    /// Resolve the `<name>.bin` artifact in the given directory
    pub fn from_artifacts(artifacts_dir: &Path, name: &str) -> Result<Self, ScriptError> {
        let bin_path = artifacts_dir.join(format!("{}.bin", name));
        if !bin_path.exists() {
            return Err(ScriptError::ArtifactResolution(format!(
                "no compiled artifact for contract {} in {}, run the build command first",
                name,
                artifacts_dir.display()
            )));
        }

        // The ABI sibling is not needed for deployment, but its absence
        // suggests an incomplete build
        let abi_path = artifacts_dir.join(format!("{}.abi", name));
        if !abi_path.exists() {
            warn!(
                "No {}.abi artifact next to the bytecode for {}",
                name,
                artifacts_dir.display()
            );
        }

        let raw = fs::read_to_string(&bin_path)
            .map_err(|e| ScriptError::ArtifactResolution(e.to_string()))?;
        let bytecode = hex::decode(raw.trim().trim_start_matches("0x"))
            .map_err(|e| ScriptError::ArtifactResolution(e.to_string()))?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactResolution(format!(
                "artifact for contract {} holds no creation bytecode",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            bytecode,
        })
    }

    /// Name of the resolved contract
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation bytecode of the resolved contract
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    /// Build the deployment transaction, appending the ABI encoded
    /// constructor arguments to the creation bytecode
    pub fn deploy_request(&self, constructor_args: &[u8]) -> TransactionRequest {
        let mut code = self.bytecode.clone();
        code.extend_from_slice(constructor_args);
        TransactionRequest::default().with_deploy_code(Bytes::from(code))
    }
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use alloy::{
        primitives::{Address, TxKind},
        sol_types::SolValue,
    };

    use super::*;

    fn temp_artifacts_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("factory-tests-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn resolves_bytecode_from_artifacts() {
        let dir = temp_artifacts_dir("resolve");
        fs::write(dir.join("RefundProvider.bin"), "0x60806040\n").unwrap();

        let factory = ContractFactory::from_artifacts(&dir, "RefundProvider").unwrap();
        assert_eq!(factory.name(), "RefundProvider");
        assert_eq!(factory.bytecode(), &[0x60, 0x80, 0x60, 0x40]);
    }

    #[test]
    fn resolves_with_the_abi_sibling_present() {
        let dir = temp_artifacts_dir("abi");
        fs::write(dir.join("RefundProvider.bin"), "60806040").unwrap();
        fs::write(dir.join("RefundProvider.abi"), "[]").unwrap();

        let factory = ContractFactory::from_artifacts(&dir, "RefundProvider").unwrap();
        assert_eq!(factory.bytecode(), &[0x60, 0x80, 0x60, 0x40]);
    }

    #[test]
    fn missing_artifact_is_an_error() {
        let dir = temp_artifacts_dir("missing");
        assert!(matches!(
            ContractFactory::from_artifacts(&dir, "Unknown"),
            Err(ScriptError::ArtifactResolution(_))
        ));
    }

    #[test]
    fn empty_artifact_is_an_error() {
        let dir = temp_artifacts_dir("empty");
        fs::write(dir.join("Empty.bin"), "0x").unwrap();
        assert!(matches!(
            ContractFactory::from_artifacts(&dir, "Empty"),
            Err(ScriptError::ArtifactResolution(_))
        ));
    }

    #[test]
    fn deploy_request_appends_constructor_args() {
        let dir = temp_artifacts_dir("deploy");
        fs::write(dir.join("RefundProvider.bin"), "60806040").unwrap();
        let factory = ContractFactory::from_artifacts(&dir, "RefundProvider").unwrap();

        let lock_deal_nft = Address::repeat_byte(0x11);
        let collateral_provider = Address::repeat_byte(0x22);
        let args = (lock_deal_nft, collateral_provider).abi_encode_params();

        let tx = factory.deploy_request(&args);
        // A deployment carries no recipient, only the CREATE kind
        assert_eq!(tx.to, Some(TxKind::Create));
        let input = tx.input.input().unwrap();
        assert!(input.starts_with(factory.bytecode()));
        // Two address words follow the creation bytecode
        assert_eq!(input.len(), factory.bytecode().len() + 64);
        assert_eq!(&input[input.len() - 20..], collateral_provider.as_slice());
    }
}
