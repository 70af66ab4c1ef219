use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Build deployment messages for the Pulitzer contract
#[derive(Parser, Clone, Debug)]
#[command(version, about = "Emit instantiate and funding messages for a target network")]
pub struct Args {
    /// Network registry file overriding the built-in table
    #[arg(long, global = true)]
    pub networks: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Build the contract InstantiateMsg for a chain
    Instantiate {
        /// Chain id to deploy to
        #[arg(long)]
        chain_id: String,
        /// Code id of the token collection contract
        #[arg(long)]
        collection_code_id: u64,
        /// Oracle contract address; required on development chains,
        /// where the mock oracle is deployed first
        #[arg(long)]
        oracle: Option<String>,
    },
    /// Build the message topping up a deployed contract's fee balance
    Fund {
        #[arg(long)]
        chain_id: String,
        /// Address of the deployed contract
        #[arg(long)]
        contract: String,
        /// Amount in the network fee denom; defaults to the network's
        /// fund amount
        #[arg(long)]
        amount: Option<u128>,
    },
}
