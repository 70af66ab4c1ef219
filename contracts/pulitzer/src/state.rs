use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_storage_plus::{Item, Map};
use pulitzer_oracle::{OracleContract, RequestId};

#[cw_serde]
pub struct Config {
    pub oracle: OracleContract,
    pub job_id: String,
    pub fee: Coin,
}

/// A request that has been dispatched and is waiting on the oracle
#[cw_serde]
pub struct VerificationRequest {
    pub requester: Addr,
    pub domain: String,
    pub proof_body: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const TOKEN_COLLECTION: Item<Addr> = Item::new("token-collection");

/// Staging slot for the request whose oracle submessage is in flight;
/// consumed by the reply handler once the oracle has assigned an id
pub const IN_FLIGHT_REQUEST: Item<VerificationRequest> = Item::new("in-flight-request");

/// Requests waiting on a callback, keyed by the oracle-assigned request
/// id. A request the oracle never fulfills stays here indefinitely.
pub const PENDING_REQUESTS: Map<RequestId, VerificationRequest> = Map::new("pending-requests");

/// Verification outcomes keyed by (requester, domain hash). A later
/// callback for the same pair overwrites the earlier outcome.
pub const VERIFICATIONS: Map<(Addr, String), bool> = Map::new("verifications");

/// Number of tokens minted; the next token id is count + 1
pub const TOKEN_COUNT: Item<u64> = Item::new("token-count");
