use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Display name, e.g. "Orbit Network Token"
    pub name: String,
    pub symbol: String,
    /// Decimal places (max 18); the exponent is derived as 10^decimals
    pub decimals: u8,
    /// Hard cap on total supply, in micro-ORBIT
    pub total_supply_cap: Uint128,
}

/// Campaign parameters for a sale agent, fixed at registration.
#[cw_serde]
pub struct RegisterAgentMsg {
    /// Sale agent contract address
    pub agent: String,
    /// Free-form tag: "reserveFund", "presale", "crowdsale", ...
    pub agent_type: String,
    pub target_axm_max: Uint128,
    pub target_axm_min: Uint128,
    pub tokens_limit: Uint128,
    pub min_deposit: Uint128,
    /// 0 = no per-transaction ceiling
    pub max_deposit: Uint128,
    pub funding_start_block: u64,
    pub funding_end_block: u64,
    pub contribution_limit: Uint128,
    pub deposit_address: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: admit a sale agent contract and fix its campaign parameters
    RegisterAgent(RegisterAgentMsg),

    /// Registered agent: countersign its deposit address. The agent relays
    /// the deposit address's own request, so both parties have signed off.
    VerifyDepositAddress { verify_address: String },

    /// Registered agent: credit settled tokens to a contributor
    Mint { recipient: String, amount: Uint128 },

    /// Registered agent: close out its campaign on behalf of `sender`,
    /// which must be its registered deposit address
    MarkFinalised { sender: String },
}

/// Message for contract migration
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Token metadata, current supply and cap
    #[returns(LedgerInfoResponse)]
    LedgerInfo {},

    /// ORBIT balance of an address (cw20-shaped for wallet tooling)
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Full registry entry for one sale agent
    #[returns(SaleAgentResponse)]
    SaleAgent { address: String },

    /// Page through the registry
    #[returns(SaleAgentsResponse)]
    ListSaleAgents {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ---- Response types ----

#[cw_serde]
pub struct LedgerInfoResponse {
    pub owner: Addr,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub exponent: Uint128,
    pub total_supply: Uint128,
    pub total_supply_cap: Uint128,
}

#[cw_serde]
pub struct SaleAgentResponse {
    pub agent: Addr,
    pub agent_type: String,
    pub target_axm_max: Uint128,
    pub target_axm_min: Uint128,
    pub tokens_limit: Uint128,
    pub tokens_minted: Uint128,
    pub min_deposit: Uint128,
    pub max_deposit: Uint128,
    pub funding_start_block: u64,
    pub funding_end_block: u64,
    pub contribution_limit: Uint128,
    pub deposit_address: Addr,
    pub deposit_address_verified: bool,
    pub finalised: bool,
}

#[cw_serde]
pub struct SaleAgentsResponse {
    pub agents: Vec<SaleAgentResponse>,
}
