use cosmwasm_std::{Coin, StdError};
use cw_utils::PaymentError;
use pulitzer_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("InvalidDomain: {domain}")]
    InvalidDomain { domain: String },

    #[error("Address didn't verify domain.")]
    DomainNotVerified {},

    #[error("RequestNotFound: {request_id}")]
    RequestNotFound { request_id: u64 },

    #[error("InsufficientOracleFunds: needed {needed}, available {available}")]
    InsufficientOracleFunds { needed: Coin, available: Coin },

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},

    #[error("MissingRequestId")]
    MissingRequestId {},
}
