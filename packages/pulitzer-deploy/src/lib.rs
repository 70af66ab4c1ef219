use anyhow::{Context, Result};
use cosmwasm_std::{coin, coins, Coin};
use pulitzer::msg::{ExecuteMsg, InstantiateMsg};
use serde::Serialize;

pub mod args;
pub mod networks;

use args::{Args, Command};
use networks::{NetworkConfig, Registry};

/// Job id used when no live oracle job exists, matching the mock
/// oracle's expectations on development chains
pub const LOCAL_JOB_ID: &str = "00000000000000000000000000000000";

/// A funding instruction: the execute message plus the coins to attach
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FundInstruction {
    pub contract: String,
    pub msg: ExecuteMsg,
    pub funds: Vec<Coin>,
}

pub fn instantiate_msg(
    network: &NetworkConfig,
    collection_code_id: u64,
    oracle_override: Option<String>,
) -> Result<InstantiateMsg> {
    let oracle = oracle_override
        .or_else(|| network.oracle.clone())
        .with_context(|| {
            format!(
                "no oracle configured for {}; deploy the mock oracle first and pass --oracle",
                network.chain_id
            )
        })?;
    let job_id = network
        .job_id
        .clone()
        .unwrap_or_else(|| LOCAL_JOB_ID.to_string());

    Ok(InstantiateMsg {
        oracle,
        job_id,
        fee: coin(network.fee, &network.denom),
        collection_code_id,
    })
}

pub fn fund_instruction(
    network: &NetworkConfig,
    contract: &str,
    amount: Option<u128>,
) -> FundInstruction {
    let amount = amount.unwrap_or(network.fund_amount);
    FundInstruction {
        contract: contract.to_string(),
        msg: ExecuteMsg::Fund {},
        funds: coins(amount, &network.denom),
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    let registry = match &args.networks {
        Some(path) => Registry::from_file(path)?,
        None => Registry::with_defaults(),
    };

    match args.command {
        Command::Instantiate {
            chain_id,
            collection_code_id,
            oracle,
        } => {
            let network = registry
                .get(&chain_id)
                .with_context(|| format!("unknown chain id: {chain_id}"))?;
            let msg = instantiate_msg(network, collection_code_id, oracle)?;
            println!("{}", serde_json::to_string_pretty(&msg)?);
        }
        Command::Fund {
            chain_id,
            contract,
            amount,
        } => {
            let network = registry
                .get(&chain_id)
                .with_context(|| format!("unknown chain id: {chain_id}"))?;
            let instruction = fund_instruction(network, &contract, amount);
            println!("{}", serde_json::to_string_pretty(&instruction)?);
        }
    }

    Ok(())
}
