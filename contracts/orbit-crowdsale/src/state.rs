use cosmwasm_std::{Addr, Uint128};
use cosmwasm_schema::cw_serde;
use cw_storage_plus::{Item, Map};

use crate::msg::ReservePayout;
use orbit_token::msg::SaleAgentResponse;

#[cw_serde]
pub struct Config {
    /// ORBIT ledger this agent is registered with
    pub ledger: Addr,
    pub reserve_payout: ReservePayout,
}

/// Sale lifecycle, derived per call from the registry flags and the current
/// block height. Nothing is stored.
#[cw_serde]
pub enum SalePhase {
    Unverified,
    Pending,
    Open,
    Closed,
    Finalised,
}

pub fn sale_phase(sale: &SaleAgentResponse, height: u64) -> SalePhase {
    if sale.finalised {
        SalePhase::Finalised
    } else if height > sale.funding_end_block {
        SalePhase::Closed
    } else if !sale.deposit_address_verified {
        SalePhase::Unverified
    } else if height < sale.funding_start_block {
        SalePhase::Pending
    } else {
        SalePhase::Open
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const CONTRIBUTIONS: Map<&Addr, Uint128> = Map::new("contributions");

/// Denominator of the settlement split. Never decremented: claims zero the
/// individual entries while every remaining claim settles against the final
/// raised amount.
pub const CONTRIBUTED_TOTAL: Item<Uint128> = Item::new("contributed_total");
