use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    CheckedMultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("This agent is not registered with the ledger")]
    AgentNotRegistered,

    #[error("Deposit rejected: {0}")]
    DepositRejected(DepositRejection),

    #[error("Funding is still open until block {end_block}")]
    TooEarly { end_block: u64 },

    #[error("No unclaimed contribution for this address")]
    NoContribution,

    #[error("Sale is already finalised")]
    AlreadyFinalised,
}

/// Why a contribution was turned away.
#[derive(Error, Debug, PartialEq)]
pub enum DepositRejection {
    #[error("deposit address is not verified yet")]
    AddressUnverified,

    #[error("block {current} is outside the funding window [{start}, {end}]")]
    WindowNotOpen { current: u64, start: u64, end: u64 },

    #[error("sale is already finalised")]
    SaleFinalised,

    #[error("amount is below the minimum deposit of {min}")]
    BelowMinDeposit { min: String },

    #[error("amount is above the maximum deposit of {max}")]
    AboveMaxDeposit { max: String },

    #[error("contribution would pass the per-address limit of {limit}")]
    OverContributionLimit { limit: String },
}
