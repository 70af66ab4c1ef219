#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult, WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::must_pay;
use pulitzer_oracle::{OracleCallbackMsg, OracleConfigResponse, OracleRequestResponse, RequestId};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, OracleRequest, CONFIG, REQUESTS, REQUEST_COUNT};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:mock-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        operator: info.sender,
        fee: msg.fee,
    };
    CONFIG.save(deps.storage, &config)?;
    REQUEST_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Verify {
            job_id,
            domain,
            proof_body,
        } => execute_verify(deps, info, job_id, domain, proof_body),
        ExecuteMsg::FulfillOracleRequest { request_id, result } => {
            execute_fulfill_oracle_request(deps, info, request_id, result)
        }
    }
}

pub fn execute_verify(
    deps: DepsMut,
    info: MessageInfo,
    job_id: String,
    domain: String,
    proof_body: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let paid = must_pay(&info, &config.fee.denom)?;
    if paid < config.fee.amount {
        return Err(ContractError::InsufficientFee {
            expected: config.fee,
            got: paid,
        });
    }

    let request_id = REQUEST_COUNT.load(deps.storage)? + 1;
    REQUEST_COUNT.save(deps.storage, &request_id)?;

    let request = OracleRequest {
        requester: info.sender.clone(),
        job_id: job_id.clone(),
        domain: domain.clone(),
        proof_body,
    };
    REQUESTS.save(deps.storage, request_id, &request)?;

    let event = Event::new("oracle-request")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("requester", info.sender)
        .add_attribute("job_id", job_id)
        .add_attribute("domain", domain);
    Ok(Response::new()
        .add_event(event)
        .set_data(to_binary(&request_id)?))
}

pub fn execute_fulfill_oracle_request(
    deps: DepsMut,
    info: MessageInfo,
    request_id: RequestId,
    result: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.operator != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { request_id })?;
    REQUESTS.remove(deps.storage, request_id);

    let callback = WasmMsg::Execute {
        contract_addr: request.requester.to_string(),
        msg: to_binary(&OracleCallbackMsg::FulfillVerification {
            request_id,
            verified: result,
        })?,
        funds: vec![],
    };

    let event = Event::new("oracle-fulfill")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("requester", request.requester)
        .add_attribute("result", result.to_string());
    Ok(Response::new().add_message(callback).add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Request { request_id } => to_binary(&query_request(deps, request_id)?),
        QueryMsg::RequestCount {} => to_binary(&REQUEST_COUNT.load(deps.storage)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
    }
}

fn query_request(deps: Deps, request_id: RequestId) -> StdResult<Option<OracleRequestResponse>> {
    let request = REQUESTS.may_load(deps.storage, request_id)?;
    Ok(request.map(|r| OracleRequestResponse {
        request_id,
        requester: r.requester,
        job_id: r.job_id,
        domain: r.domain,
        proof_body: r.proof_body,
    }))
}

fn query_config(deps: Deps) -> StdResult<OracleConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OracleConfigResponse {
        operator: config.operator,
        fee: config.fee,
    })
}
