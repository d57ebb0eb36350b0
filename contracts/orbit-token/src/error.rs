use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Sale agent {agent} is not registered")]
    UnknownAgent { agent: String },

    #[error("Sale agent {agent} is already registered")]
    DuplicateAgent { agent: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Mint amount must be > 0")]
    ZeroMintAmount,

    #[error("Mint exceeds the agent's token limit of {limit}")]
    TokensLimitExceeded { limit: String },

    #[error("Mint exceeds the total supply cap of {cap}")]
    SupplyCapExceeded { cap: String },

    #[error("Sale agent is already finalised")]
    AlreadyFinalised,
}
