use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub operator: Addr,
    pub fee: Coin,
}

/// A job waiting for the operator to deliver an outcome
#[cw_serde]
pub struct OracleRequest {
    pub requester: Addr,
    pub job_id: String,
    pub domain: String,
    pub proof_body: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Also the last assigned request id
pub const REQUEST_COUNT: Item<u64> = Item::new("request-count");

pub const REQUESTS: Map<u64, OracleRequest> = Map::new("requests");
