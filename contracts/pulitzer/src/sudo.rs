#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Addr, Coin, DepsMut, Env, Event, Response};
use pulitzer_oracle::OracleContract;

use crate::{
    msg::SudoMsg,
    state::CONFIG,
    ContractError,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        SudoMsg::UpdateParams { job_id, fee } => sudo_update_params(deps, job_id, fee),
        SudoMsg::UpdateOracle { oracle } => {
            sudo_update_oracle(deps, api.addr_validate(&oracle)?)
        }
    }
}

pub fn sudo_update_params(
    deps: DepsMut,
    job_id: String,
    fee: Coin,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    config.job_id = job_id.clone();
    config.fee = fee.clone();
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("update_params")
        .add_attribute("job_id", job_id)
        .add_attribute("fee", fee.to_string());
    Ok(Response::new().add_event(event))
}

pub fn sudo_update_oracle(deps: DepsMut, oracle: Addr) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    config.oracle = OracleContract(oracle.clone());
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("update_oracle").add_attribute("oracle", oracle);
    Ok(Response::new().add_event(event))
}
