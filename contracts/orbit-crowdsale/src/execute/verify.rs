use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg};

use crate::error::ContractError;
use crate::execute::load_sale_agent;
use crate::state::CONFIG;
use orbit_token::msg::ExecuteMsg as LedgerExecuteMsg;

/// The deposit address countersigns itself. We relay to the ledger so the
/// flag only flips on a request that arrived through this agent; the ledger
/// checks the relayed address against the registered one.
pub fn execute_verify_deposit_address(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sale = load_sale_agent(deps.as_ref(), &env, &config.ledger)?;

    if info.sender != sale.deposit_address {
        return Err(ContractError::Unauthorized);
    }

    let relay_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.ledger.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::VerifyDepositAddress {
            verify_address: info.sender.to_string(),
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(relay_msg)
        .add_attribute("action", "verify_deposit_address")
        .add_attribute("deposit_address", info.sender.to_string()))
}
