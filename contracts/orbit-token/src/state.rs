use cosmwasm_std::{Addr, Uint128};
use cosmwasm_schema::cw_serde;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub name: String,
    pub symbol: String,
    /// Decimal places of one whole ORBIT (max 18)
    pub decimals: u8,
    /// 10^decimals, micro-ORBIT per whole ORBIT
    pub exponent: Uint128,
    /// Hard cap on total supply across all sale agents, in micro-ORBIT
    pub total_supply_cap: Uint128,
}

/// Registry entry for one sale agent contract. All campaign parameters are
/// fixed at registration; only `tokens_minted` and the two flags move.
#[cw_serde]
pub struct SaleAgent {
    /// Free-form tag: "reserveFund", "presale", "crowdsale", ...
    pub agent_type: String,
    /// Max uaxm the token pool is priced against
    pub target_axm_max: Uint128,
    /// Min uaxm reserved for the deposit address at finalisation
    pub target_axm_min: Uint128,
    /// Token pool this agent may mint, in micro-ORBIT
    pub tokens_limit: Uint128,
    pub tokens_minted: Uint128,
    /// Per-transaction deposit bounds in uaxm (max 0 = unbounded)
    pub min_deposit: Uint128,
    pub max_deposit: Uint128,
    /// Inclusive funding window in block heights
    pub funding_start_block: u64,
    pub funding_end_block: u64,
    /// Cumulative per-contributor cap in uaxm
    pub contribution_limit: Uint128,
    /// Must countersign verification; receives the reserve payout
    pub deposit_address: Addr,
    pub deposit_address_verified: bool,
    pub finalised: bool,
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
pub const SALE_AGENTS: Map<&Addr, SaleAgent> = Map::new("sale_agents");
