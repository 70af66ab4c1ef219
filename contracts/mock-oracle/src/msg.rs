use cosmwasm_schema::cw_serde;
use cosmwasm_std::Coin;

pub use pulitzer_oracle::{OracleExecuteMsg as ExecuteMsg, OracleQueryMsg as QueryMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// Fee required with every `Verify` request. The instantiator becomes
    /// the operator allowed to fulfill requests.
    pub fee: Coin,
}
