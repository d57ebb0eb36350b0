use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// ORBIT ledger (registry) contract address
    pub ledger: String,
    /// What the deposit address receives at finalisation.
    /// Default: exactly the registered target_axm_min.
    #[serde(default)]
    pub reserve_payout: ReservePayout,
}

/// Finalisation payout policy.
#[cw_serde]
#[derive(Default)]
pub enum ReservePayout {
    /// Send exactly the registered target_axm_min
    #[default]
    TargetAxmMin,
    /// Send the agent's whole remaining native balance
    RemainingBalance,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Contribute to the sale. Attach uaxm funds to this message.
    Contribute {},

    /// Deposit address: countersign yourself with the ledger. Relayed so
    /// the ledger sees the request arriving through this agent.
    VerifyDepositAddress {},

    /// After the window closes: settle the sender's stake into minted
    /// ORBIT plus any unused deposit refund
    ClaimTokensAndRefund {},

    /// Deposit address: pay out the reserve and close the campaign
    FinaliseFunding {},
}

/// Message for contract migration
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Agent configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Cumulative unclaimed contribution of an address
    #[returns(ContributionResponse)]
    Contribution { address: String },

    /// Sale phase and totals at the current block
    #[returns(StatusResponse)]
    Status {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub ledger: Addr,
    pub reserve_payout: ReservePayout,
}

#[cw_serde]
pub struct ContributionResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct StatusResponse {
    /// "unverified" | "pending" | "open" | "closed" | "finalised"
    pub phase: String,
    pub contributed_total: Uint128,
    pub funding_start_block: u64,
    pub funding_end_block: u64,
    pub current_block: u64,
}
