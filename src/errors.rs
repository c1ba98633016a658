//! Definitions of errors that can occur during the execution of the contract management scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the contract management scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error when looking up a network name in the project configuration
    UnknownNetwork(String),
    /// Error when creating the client
    ClientInitialization(String),
    /// Error when a constructor argument is a placeholder or otherwise unusable
    InvalidConstructorArgument(String),
    /// Error when resolving a compiled contract artifact by name
    ArtifactResolution(String),
    /// Error when fetching the nonce to deploy a contract
    NonceFetching(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error compiling a contract
    ContractCompilation(String),
    /// Error when reading or writing the deployment output file
    JsonOutputError(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownNetwork(s) => write!(f, "unknown network: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::InvalidConstructorArgument(s) => {
                write!(f, "invalid constructor argument: {}", s)
            }
            ScriptError::ArtifactResolution(s) => {
                write!(f, "error resolving contract artifact: {}", s)
            }
            ScriptError::NonceFetching(s) => {
                write!(f, "error during nonce fetching for client signing: {}", s)
            }
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractCompilation(s) => write!(f, "error compiling contract: {}", s),
            ScriptError::JsonOutputError(s) => write!(f, "error writing json output: {}", s),
        }
    }
}

impl Error for ScriptError {}
