use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Deployment parameters for one target chain
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub chain_id: String,
    pub name: String,
    /// Denom the oracle fee is paid in
    pub denom: String,
    /// Fee paid to the oracle per verification request
    pub fee: u128,
    /// Default top-up when funding a deployed contract
    pub fund_amount: u128,
    /// Oracle contract address; absent on development chains, where the
    /// mock oracle is deployed first and its address passed explicitly
    pub oracle: Option<String>,
    pub job_id: Option<String>,
}

/// Chain ids where the mock oracle stands in for a live one
pub const DEVELOPMENT_CHAINS: &[&str] = &["localnet", "testing"];

pub fn is_development(chain_id: &str) -> bool {
    DEVELOPMENT_CHAINS.contains(&chain_id)
}

/// Network table handed to the deployment commands. Always an explicit
/// value constructed at startup, either from the built-in defaults or
/// from an operator-supplied file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Registry {
    pub networks: Vec<NetworkConfig>,
}

impl Registry {
    pub fn with_defaults() -> Self {
        Self {
            networks: vec![
                NetworkConfig {
                    chain_id: "localnet".to_string(),
                    name: "localnet".to_string(),
                    denom: "ustars".to_string(),
                    fee: 100,
                    fund_amount: 1_000,
                    oracle: None,
                    job_id: None,
                },
                NetworkConfig {
                    chain_id: "elgafar-1".to_string(),
                    name: "testnet".to_string(),
                    denom: "ustars".to_string(),
                    fee: 100_000,
                    fund_amount: 1_000_000,
                    oracle: Some(
                        "stars1v5kc2uizkqvf4dtu3lazllnfvzp3q6lyc6luv9vv3ls4x5fzx9vsuw0s2j"
                            .to_string(),
                    ),
                    job_id: Some("6b88e0402e5d415eb946e528b8e0c7ba".to_string()),
                },
                NetworkConfig {
                    chain_id: "stargaze-1".to_string(),
                    name: "mainnet".to_string(),
                    denom: "ustars".to_string(),
                    fee: 2_000_000,
                    fund_amount: 20_000_000,
                    oracle: Some(
                        "stars1jprhc9jmkfwt9s6zv4nyfm7h20f8u287qm2r30954yyp6vn7zlcql83qgl"
                            .to_string(),
                    ),
                    job_id: Some("6ca2e68622bd421d98c648f056ee7c76".to_string()),
                },
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid network registry")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read network registry: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn get(&self, chain_id: &str) -> Option<&NetworkConfig> {
        self.networks.iter().find(|n| n.chain_id == chain_id)
    }
}
