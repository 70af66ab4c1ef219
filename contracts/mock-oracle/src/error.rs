use cosmwasm_std::{Coin, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("RequestNotFound: {request_id}")]
    RequestNotFound { request_id: u64 },

    #[error("InsufficientFee: expected {expected}, got {got}")]
    InsufficientFee { expected: Coin, got: Uint128 },
}
