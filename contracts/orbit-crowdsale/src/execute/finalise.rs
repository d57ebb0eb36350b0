use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg,
};

use crate::contract::NATIVE_DENOM;
use crate::error::ContractError;
use crate::execute::load_sale_agent;
use crate::msg::ReservePayout;
use crate::state::CONFIG;
use orbit_token::msg::ExecuteMsg as LedgerExecuteMsg;

/// One-shot close-out: pay the reserve to the deposit address and flip the
/// ledger flag. The ledger rejects the relay when already finalised, which
/// rolls the whole call back.
pub fn execute_finalise_funding(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sale = load_sale_agent(deps.as_ref(), &env, &config.ledger)?;

    if info.sender != sale.deposit_address {
        return Err(ContractError::Unauthorized);
    }
    if env.block.height <= sale.funding_end_block {
        return Err(ContractError::TooEarly {
            end_block: sale.funding_end_block,
        });
    }
    if sale.finalised {
        return Err(ContractError::AlreadyFinalised);
    }

    let amount = match config.reserve_payout {
        ReservePayout::TargetAxmMin => sale.target_axm_min,
        ReservePayout::RemainingBalance => {
            deps.querier
                .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?
                .amount
        }
    };

    let mut msgs: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.ledger.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::MarkFinalised {
            sender: info.sender.to_string(),
        })?,
        funds: vec![],
    })];
    if !amount.is_zero() {
        msgs.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: sale.deposit_address.to_string(),
            amount: vec![Coin {
                denom: NATIVE_DENOM.to_string(),
                amount,
            }],
        }));
    }

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "finalise_funding")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("recipient", sale.deposit_address.to_string())
        .add_attribute("agent", env.contract.address.to_string())
        .add_attribute("amount", amount.to_string()))
}
