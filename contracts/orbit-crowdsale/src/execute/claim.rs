use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};

use crate::contract::NATIVE_DENOM;
use crate::error::ContractError;
use crate::execute::load_sale_agent;
use crate::state::{CONFIG, CONTRIBUTED_TOTAL, CONTRIBUTIONS};
use orbit_token::msg::ExecuteMsg as LedgerExecuteMsg;

pub fn execute_claim_tokens_and_refund(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sale = load_sale_agent(deps.as_ref(), &env, &config.ledger)?;

    if env.block.height <= sale.funding_end_block {
        return Err(ContractError::TooEarly {
            end_block: sale.funding_end_block,
        });
    }

    let contribution = CONTRIBUTIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if contribution.is_zero() {
        return Err(ContractError::NoContribution);
    }

    let contributed_total = CONTRIBUTED_TOTAL.load(deps.storage)?;
    let (tokens, cost, refund) = settle_contribution(
        contribution,
        contributed_total,
        sale.tokens_limit,
        sale.target_axm_max,
    )?;

    // Zero the entry before any messages go out; a repeat claim sees
    // NoContribution even within the same block.
    CONTRIBUTIONS.save(deps.storage, &info.sender, &Uint128::zero())?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    if !tokens.is_zero() {
        msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.ledger.to_string(),
            msg: to_json_binary(&LedgerExecuteMsg::Mint {
                recipient: info.sender.to_string(),
                amount: tokens,
            })?,
            funds: vec![],
        }));
    }
    if !refund.is_zero() {
        msgs.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: NATIVE_DENOM.to_string(),
                amount: refund,
            }],
        }));
    }

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "claim")
        .add_attribute("contributor", info.sender.to_string())
        .add_attribute("tokens", tokens.to_string())
        .add_attribute("cost", cost.to_string())
        .add_attribute("refund", refund.to_string()))
}

/// Settle one stake against the final raise. Tokens awarded are the stake's
/// floor share of the pool; the uaxm cost is the pool price of those tokens,
/// clamped to the stake; the remainder comes back as refund.
///
/// Both divisions run through a 256-bit intermediate, so the split loses no
/// precision before the final floor.
pub fn settle_contribution(
    contribution: Uint128,
    contributed_total: Uint128,
    tokens_limit: Uint128,
    target_axm_max: Uint128,
) -> Result<(Uint128, Uint128, Uint128), ContractError> {
    let tokens = tokens_limit.checked_multiply_ratio(contribution, contributed_total)?;
    let cost = target_axm_max
        .checked_multiply_ratio(tokens, tokens_limit)?
        .min(contribution);
    let refund = contribution.checked_sub(cost)?;
    Ok((tokens, cost, refund))
}
