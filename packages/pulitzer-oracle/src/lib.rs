use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_binary, Addr, Coin, CosmosMsg, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};

/// Correlation key between a verification request and its eventual
/// callback. Assigned by the oracle, unique across all requesting
/// contracts for the life of the oracle.
pub type RequestId = u64;

#[cw_serde]
pub enum OracleExecuteMsg {
    /// Submit a verification job. The per-request fee must be attached as
    /// funds. The assigned request id is set as response data and carried
    /// on the `oracle-request` event.
    Verify {
        job_id: String,
        domain: String,
        proof_body: String,
    },
    /// Deliver the outcome for a pending request and call back the
    /// contract that submitted it. Operator only.
    FulfillOracleRequest { request_id: RequestId, result: bool },
}

/// Callback the oracle sends to the requesting contract. The requester's
/// execute enum must carry a variant with the same shape.
#[cw_serde]
pub enum OracleCallbackMsg {
    FulfillVerification { request_id: RequestId, verified: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum OracleQueryMsg {
    #[returns(Option<OracleRequestResponse>)]
    Request { request_id: RequestId },
    #[returns(u64)]
    RequestCount {},
    #[returns(OracleConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct OracleRequestResponse {
    pub request_id: RequestId,
    pub requester: Addr,
    pub job_id: String,
    pub domain: String,
    pub proof_body: String,
}

#[cw_serde]
pub struct OracleConfigResponse {
    pub operator: Addr,
    pub fee: Coin,
}

/// OracleContract is a wrapper around Addr that provides helpers for
/// dispatching requests to an oracle
#[cw_serde]
pub struct OracleContract(pub Addr);

impl OracleContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<OracleExecuteMsg>>(&self, msg: T, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    /// Build the paid `Verify` dispatch for this oracle.
    pub fn verify(
        &self,
        job_id: &str,
        domain: &str,
        proof_body: &str,
        fee: Coin,
    ) -> StdResult<CosmosMsg> {
        self.call(
            OracleExecuteMsg::Verify {
                job_id: job_id.to_string(),
                domain: domain.to_string(),
                proof_body: proof_body.to_string(),
            },
            vec![fee],
        )
    }

    pub fn request(
        &self,
        querier: &QuerierWrapper,
        request_id: RequestId,
    ) -> StdResult<Option<OracleRequestResponse>> {
        let res: Option<OracleRequestResponse> =
            querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr: self.addr().into(),
                msg: to_binary(&OracleQueryMsg::Request { request_id })?,
            }))?;
        Ok(res)
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<OracleConfigResponse> {
        let res: OracleConfigResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&OracleQueryMsg::Config {})?,
        }))?;
        Ok(res)
    }
}
