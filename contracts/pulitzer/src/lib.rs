pub mod contract;
mod error;
pub mod helpers;
pub mod migrate;
pub mod msg;
pub mod query;
pub mod state;
pub mod sudo;

pub use crate::error::ContractError;
pub use crate::helpers::PulitzerContract;
