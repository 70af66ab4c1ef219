#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Addr, Binary, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;
use pulitzer_domain::{domain_hash, extract_domain};
use pulitzer_oracle::RequestId;

use crate::contract::proof_body;
use crate::msg::{ConfigResponse, QueryMsg, RequestInfo};
use crate::state::{CONFIG, PENDING_REQUESTS, TOKEN_COLLECTION, TOKEN_COUNT, VERIFICATIONS};

// Query limits
const DEFAULT_QUERY_LIMIT: u32 = 10;
const MAX_QUERY_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let api = deps.api;

    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Collection {} => to_binary(&TOKEN_COLLECTION.load(deps.storage)?.to_string()),
        QueryMsg::IsDomainVerified { domain, address } => to_binary(&query_is_domain_verified(
            deps,
            &domain,
            api.addr_validate(&address)?,
        )?),
        QueryMsg::IsAddressApprovedForUrl { url, address } => {
            let domain =
                extract_domain(&url).map_err(|err| StdError::generic_err(err.to_string()))?;
            to_binary(&query_is_domain_verified(
                deps,
                &domain,
                api.addr_validate(&address)?,
            )?)
        }
        QueryMsg::ProofBody { address } => to_binary(&proof_body(&api.addr_validate(&address)?)),
        QueryMsg::TokenCount {} => to_binary(&TOKEN_COUNT.load(deps.storage)?),
        QueryMsg::Request { request_id } => {
            to_binary(&PENDING_REQUESTS.may_load(deps.storage, request_id)?)
        }
        QueryMsg::Requests { start_after, limit } => {
            to_binary(&query_requests(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        oracle: config.oracle.addr().to_string(),
        job_id: config.job_id,
        fee: config.fee,
    })
}

fn query_is_domain_verified(deps: Deps, domain: &str, address: Addr) -> StdResult<bool> {
    Ok(VERIFICATIONS
        .may_load(deps.storage, (address, domain_hash(domain)))?
        .unwrap_or(false))
}

fn query_requests(
    deps: Deps,
    start_after: Option<RequestId>,
    limit: Option<u32>,
) -> StdResult<Vec<RequestInfo>> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    PENDING_REQUESTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (request_id, request) = item?;
            Ok(RequestInfo {
                request_id,
                requester: request.requester.to_string(),
                domain: request.domain,
                proof_body: request.proof_body,
            })
        })
        .collect()
}
