#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, DepsMut, Empty, Env, Event, MessageInfo, Order, Reply, Response, StdResult,
    SubMsg, WasmMsg,
};
use cw2::set_contract_version;
use cw721_base::{
    ExecuteMsg as Cw721ExecuteMsg, Extension, InstantiateMsg as Cw721InstantiateMsg, MintMsg,
};
use cw_utils::{must_pay, parse_reply_instantiate_data};
use pulitzer_domain::{domain_hash, extract_domain, validate_domain};
use pulitzer_oracle::{OracleContract, RequestId};
use sha2::{Digest, Sha256};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{
    Config, VerificationRequest, CONFIG, IN_FLIGHT_REQUEST, PENDING_REQUESTS, TOKEN_COLLECTION,
    TOKEN_COUNT, VERIFICATIONS,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:pulitzer";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const INIT_COLLECTION_REPLY_ID: u64 = 1;
pub const ORACLE_REQUEST_REPLY_ID: u64 = 2;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        oracle: OracleContract(deps.api.addr_validate(&msg.oracle)?),
        job_id: msg.job_id,
        fee: msg.fee,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Cw721InstantiateMsg {
            name: "Pulitzer Tokens".to_string(),
            symbol: "PRESS".to_string(),
            minter: env.contract.address.to_string(),
        })?,
        funds: vec![],
        admin: None,
        label: "Pulitzer Token Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("oracle", config.oracle.addr())
        .add_submessage(submsg)
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INIT_COLLECTION_REPLY_ID => {
            let reply = parse_reply_instantiate_data(msg);
            match reply {
                Ok(res) => {
                    TOKEN_COLLECTION.save(deps.storage, &Addr::unchecked(res.contract_address))?;
                    Ok(Response::default().add_attribute("action", "init_collection_reply"))
                }
                Err(_) => Err(ContractError::ReplyOnSuccess {}),
            }
        }
        ORACLE_REQUEST_REPLY_ID => {
            let res = msg
                .result
                .into_result()
                .map_err(|_| ContractError::ReplyOnSuccess {})?;

            // The oracle carries the assigned id on its request event;
            // events are the part of a submessage result every
            // environment propagates.
            let request_id = res
                .events
                .iter()
                .filter(|e| e.ty.ends_with("oracle-request"))
                .flat_map(|e| e.attributes.iter())
                .find(|a| a.key == "request_id")
                .ok_or(ContractError::MissingRequestId {})?
                .value
                .parse::<RequestId>()
                .map_err(|_| ContractError::MissingRequestId {})?;

            let request = IN_FLIGHT_REQUEST.load(deps.storage)?;
            IN_FLIGHT_REQUEST.remove(deps.storage);
            PENDING_REQUESTS.save(deps.storage, request_id, &request)?;

            let event = Event::new("verification-requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("requester", request.requester)
                .add_attribute("domain", request.domain)
                .add_attribute("proof_body", request.proof_body);
            Ok(Response::new().add_event(event))
        }
        _ => Err(ContractError::InvalidReplyID {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RequestVerification { domain } => {
            execute_request_verification(deps, env, info, domain.trim())
        }
        ExecuteMsg::FulfillVerification {
            request_id,
            verified,
        } => execute_fulfill_verification(deps, info, request_id, verified),
        ExecuteMsg::Mint { url } => execute_mint(deps, info, url.trim()),
        ExecuteMsg::Fund {} => execute_fund(deps, info),
        ExecuteMsg::ForgetMe {} => execute_forget_me(deps, info),
    }
}

pub fn execute_request_verification(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    domain: &str,
) -> Result<Response, ContractError> {
    if !validate_domain(domain) {
        return Err(ContractError::InvalidDomain {
            domain: domain.to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;

    // The request fee comes out of the contract's own balance. Check
    // funding before dispatching a paid request.
    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.fee.denom)?;
    if balance.amount < config.fee.amount {
        return Err(ContractError::InsufficientOracleFunds {
            needed: config.fee,
            available: balance,
        });
    }

    let proof_body = proof_body(&info.sender);
    IN_FLIGHT_REQUEST.save(
        deps.storage,
        &VerificationRequest {
            requester: info.sender.clone(),
            domain: domain.to_string(),
            proof_body: proof_body.clone(),
        },
    )?;

    let msg = config
        .oracle
        .verify(&config.job_id, domain, &proof_body, config.fee)?;
    let submsg = SubMsg::reply_on_success(msg, ORACLE_REQUEST_REPLY_ID);

    Ok(Response::new()
        .add_submessage(submsg)
        .add_attribute("action", "request_verification")
        .add_attribute("requester", info.sender))
}

pub fn execute_fulfill_verification(
    deps: DepsMut,
    info: MessageInfo,
    request_id: RequestId,
    verified: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.oracle.addr() != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let request = PENDING_REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { request_id })?;
    PENDING_REQUESTS.remove(deps.storage, request_id);

    VERIFICATIONS.save(
        deps.storage,
        (request.requester.clone(), domain_hash(&request.domain)),
        &verified,
    )?;

    let event = Event::new("verification-performed")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("requester", request.requester)
        .add_attribute("domain", request.domain)
        .add_attribute("verified", verified.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    url: &str,
) -> Result<Response, ContractError> {
    let domain = extract_domain(url)?;

    let verified = VERIFICATIONS
        .may_load(deps.storage, (info.sender.clone(), domain_hash(&domain)))?
        .unwrap_or(false);
    if !verified {
        return Err(ContractError::DomainNotVerified {});
    }

    let token_id = TOKEN_COUNT.load(deps.storage)? + 1;
    TOKEN_COUNT.save(deps.storage, &token_id)?;

    let mint_msg = Cw721ExecuteMsg::<Extension, Empty>::Mint(MintMsg {
        token_id: token_id.to_string(),
        owner: info.sender.to_string(),
        token_uri: Some(url.to_string()),
        extension: None,
    });
    let msg = WasmMsg::Execute {
        contract_addr: TOKEN_COLLECTION.load(deps.storage)?.to_string(),
        msg: to_binary(&mint_msg)?,
        funds: vec![],
    };

    let event = Event::new("token-mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("url", url);
    Ok(Response::new().add_message(msg).add_event(event))
}

pub fn execute_fund(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let payment = must_pay(&info, &config.fee.denom)?;

    let event = Event::new("fund")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", payment.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_forget_me(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    // Only recorded outcomes are dropped. Requests still waiting on the
    // oracle are left alone; cancellation is not modeled.
    let keys = VERIFICATIONS
        .prefix(info.sender.clone())
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;

    let removed = keys.len();
    for key in keys {
        VERIFICATIONS.remove(deps.storage, (info.sender.clone(), key));
    }

    let event = Event::new("forget-me")
        .add_attribute("sender", info.sender)
        .add_attribute("removed", removed.to_string());
    Ok(Response::new().add_event(event))
}

/// Proof string a publisher hosts on the domain so the oracle can match
/// it back to the requesting address.
pub fn proof_body(address: &Addr) -> String {
    hex::encode(Sha256::digest(address.as_bytes()))
}
