pub mod claim;
pub mod contribute;
pub mod finalise;
pub mod verify;

use cosmwasm_std::{Addr, Deps, Env};

use crate::error::ContractError;
use orbit_token::msg::{QueryMsg as LedgerQueryMsg, SaleAgentResponse};

/// Load this agent's registry entry from the ledger. A failed lookup means
/// the owner has not registered us yet.
pub fn load_sale_agent(
    deps: Deps,
    env: &Env,
    ledger: &Addr,
) -> Result<SaleAgentResponse, ContractError> {
    deps.querier
        .query_wasm_smart(
            ledger.to_string(),
            &LedgerQueryMsg::SaleAgent {
                address: env.contract.address.to_string(),
            },
        )
        .map_err(|_| ContractError::AgentNotRegistered)
}
