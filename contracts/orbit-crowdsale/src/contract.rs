use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, CONTRIBUTED_TOTAL};

const CONTRACT_NAME: &str = "crates.io:orbit-crowdsale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NATIVE_DENOM: &str = "uaxm";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        ledger: deps.api.addr_validate(&msg.ledger)?,
        reserve_payout: msg.reserve_payout,
    };

    CONFIG.save(deps.storage, &config)?;
    CONTRIBUTED_TOTAL.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("ledger", config.ledger.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Contribute {} => {
            crate::execute::contribute::execute_contribute(deps, env, info)
        }
        ExecuteMsg::VerifyDepositAddress {} => {
            crate::execute::verify::execute_verify_deposit_address(deps, env, info)
        }
        ExecuteMsg::ClaimTokensAndRefund {} => {
            crate::execute::claim::execute_claim_tokens_and_refund(deps, env, info)
        }
        ExecuteMsg::FinaliseFunding {} => {
            crate::execute::finalise::execute_finalise_funding(deps, env, info)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::Contribution { address } => {
            to_json_binary(&crate::query::query_contribution(deps, address)?)
        }
        QueryMsg::Status {} => to_json_binary(&crate::query::query_status(deps, env)?),
    }
}
