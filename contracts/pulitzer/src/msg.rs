use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;
use pulitzer_oracle::RequestId;

use crate::state::VerificationRequest;

#[cw_serde]
pub struct InstantiateMsg {
    /// Oracle contract that fulfills verification requests
    pub oracle: String,
    /// Job id forwarded with every oracle request
    pub job_id: String,
    /// Fee paid to the oracle per request, out of the contract balance
    pub fee: Coin,
    /// Code id used to instantiate the token collection
    pub collection_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Ask the oracle to verify the sender's ownership of `domain`.
    /// The domain must be in bare form, e.g. `example.com`.
    RequestVerification { domain: String },
    /// Oracle callback carrying the outcome of a pending request
    FulfillVerification { request_id: RequestId, verified: bool },
    /// Mint the next token for a url under a domain the sender verified
    Mint { url: String },
    /// Top up the contract's oracle-fee balance
    Fund {},
    /// Drop every verification outcome recorded for the sender
    ForgetMe {},
}

#[cw_serde]
pub enum SudoMsg {
    UpdateParams { job_id: String, fee: Coin },
    UpdateOracle { oracle: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(String)]
    Collection {},
    /// Has `address` verified ownership of `domain`?
    #[returns(bool)]
    IsDomainVerified { domain: String, address: String },
    /// Has `address` verified the domain this url lives under?
    #[returns(bool)]
    IsAddressApprovedForUrl { url: String, address: String },
    /// Proof string `address` has to host on the domain to pass
    /// verification
    #[returns(String)]
    ProofBody { address: String },
    #[returns(u64)]
    TokenCount {},
    #[returns(Option<VerificationRequest>)]
    Request { request_id: RequestId },
    #[returns(Vec<RequestInfo>)]
    Requests {
        start_after: Option<RequestId>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub oracle: String,
    pub job_id: String,
    pub fee: Coin,
}

#[cw_serde]
pub struct RequestInfo {
    pub request_id: RequestId,
    pub requester: String,
    pub domain: String,
    pub proof_body: String,
}
