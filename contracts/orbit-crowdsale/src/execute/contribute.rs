use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use cw_utils::must_pay;

use crate::contract::NATIVE_DENOM;
use crate::error::{ContractError, DepositRejection};
use crate::execute::load_sale_agent;
use crate::state::{CONFIG, CONTRIBUTED_TOTAL, CONTRIBUTIONS};

/// Record a native uaxm deposit against the sender. Coins stay on this
/// contract until claim or finalisation; no tokens move here.
pub fn execute_contribute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = must_pay(&info, NATIVE_DENOM)?;

    let sale = load_sale_agent(deps.as_ref(), &env, &config.ledger)?;

    if !sale.deposit_address_verified {
        return Err(ContractError::DepositRejected(
            DepositRejection::AddressUnverified,
        ));
    }

    let height = env.block.height;
    if height < sale.funding_start_block || height > sale.funding_end_block {
        return Err(ContractError::DepositRejected(
            DepositRejection::WindowNotOpen {
                current: height,
                start: sale.funding_start_block,
                end: sale.funding_end_block,
            },
        ));
    }

    if sale.finalised {
        return Err(ContractError::DepositRejected(
            DepositRejection::SaleFinalised,
        ));
    }

    if amount < sale.min_deposit {
        return Err(ContractError::DepositRejected(
            DepositRejection::BelowMinDeposit {
                min: sale.min_deposit.to_string(),
            },
        ));
    }
    if !sale.max_deposit.is_zero() && amount > sale.max_deposit {
        return Err(ContractError::DepositRejected(
            DepositRejection::AboveMaxDeposit {
                max: sale.max_deposit.to_string(),
            },
        ));
    }

    let contribution = CONTRIBUTIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default()
        .checked_add(amount)?;
    if contribution > sale.contribution_limit {
        return Err(ContractError::DepositRejected(
            DepositRejection::OverContributionLimit {
                limit: sale.contribution_limit.to_string(),
            },
        ));
    }

    let total = CONTRIBUTED_TOTAL.load(deps.storage)?.checked_add(amount)?;

    CONTRIBUTIONS.save(deps.storage, &info.sender, &contribution)?;
    CONTRIBUTED_TOTAL.save(deps.storage, &total)?;

    Ok(Response::new()
        .add_attribute("action", "contribute")
        .add_attribute("contributor", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("contribution", contribution.to_string())
        .add_attribute("contributed_total", total.to_string()))
}
