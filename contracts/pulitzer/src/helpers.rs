use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, CosmosMsg, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};

use crate::msg::{ExecuteMsg, QueryMsg};

/// PulitzerContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct PulitzerContract(pub Addr);

impl PulitzerContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn is_domain_verified(
        &self,
        querier: &QuerierWrapper,
        domain: &str,
        address: &str,
    ) -> StdResult<bool> {
        let verified: bool = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::IsDomainVerified {
                domain: domain.to_string(),
                address: address.to_string(),
            })?,
        }))?;
        Ok(verified)
    }

    pub fn token_count(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        let count: u64 = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::TokenCount {})?,
        }))?;
        Ok(count)
    }
}
