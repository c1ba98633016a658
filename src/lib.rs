//! Scripts for building and deploying the RefundProvider smart contract.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;

/// Our solc build utils
pub mod build;

/// Our RPC client utils
pub mod client;

/// Our deploy utils
pub mod deploy;

/// Our contract artifact utils
pub mod factory;

// Our output utils
pub mod output_writer;
