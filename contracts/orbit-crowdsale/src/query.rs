use cosmwasm_std::{Deps, Env, StdResult};

use crate::msg::{ConfigResponse, ContributionResponse, StatusResponse};
use crate::state::{sale_phase, CONFIG, CONTRIBUTED_TOTAL, CONTRIBUTIONS};
use orbit_token::msg::{QueryMsg as LedgerQueryMsg, SaleAgentResponse};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        ledger: config.ledger,
        reserve_payout: config.reserve_payout,
    })
}

pub fn query_contribution(deps: Deps, address: String) -> StdResult<ContributionResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let amount = CONTRIBUTIONS
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();
    Ok(ContributionResponse { amount })
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sale: SaleAgentResponse = deps.querier.query_wasm_smart(
        config.ledger.to_string(),
        &LedgerQueryMsg::SaleAgent {
            address: env.contract.address.to_string(),
        },
    )?;
    let contributed_total = CONTRIBUTED_TOTAL.load(deps.storage)?;

    Ok(StatusResponse {
        phase: format!("{:?}", sale_phase(&sale, env.block.height)).to_lowercase(),
        contributed_total,
        funding_start_block: sale.funding_start_block,
        funding_end_block: sale.funding_end_block,
        current_block: env.block.height,
    })
}
