use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, LedgerInfoResponse, QueryMsg, RegisterAgentMsg, SaleAgentResponse,
    SaleAgentsResponse,
};
use crate::state::{Config, SaleAgent, BALANCES, CONFIG, SALE_AGENTS, TOTAL_SUPPLY};

const CONTRACT_NAME: &str = "crates.io:orbit-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const MAX_DECIMALS: u8 = 18;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidConfig {
            reason: format!("decimals must be <= {}", MAX_DECIMALS),
        });
    }
    if msg.total_supply_cap.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "total supply cap must be > 0".to_string(),
        });
    }

    let config = Config {
        owner: info.sender,
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        exponent: Uint128::new(10u128.pow(msg.decimals as u32)),
        total_supply_cap: msg.total_supply_cap,
    };

    CONFIG.save(deps.storage, &config)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("symbol", config.symbol.clone())
        .add_attribute("total_supply_cap", config.total_supply_cap.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterAgent(msg) => execute_register_agent(deps, info, msg),
        ExecuteMsg::VerifyDepositAddress { verify_address } => {
            execute_verify_deposit_address(deps, info, verify_address)
        }
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::MarkFinalised { sender } => execute_mark_finalised(deps, info, sender),
    }
}

/// Owner admits a sale agent contract. Campaign parameters are fixed here
/// for the life of the sale; only the flags and minted counter move later.
fn execute_register_agent(
    deps: DepsMut,
    info: MessageInfo,
    msg: RegisterAgentMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let agent_addr = deps.api.addr_validate(&msg.agent)?;
    if SALE_AGENTS.has(deps.storage, &agent_addr) {
        return Err(ContractError::DuplicateAgent {
            agent: agent_addr.to_string(),
        });
    }

    if msg.target_axm_min > msg.target_axm_max {
        return Err(ContractError::InvalidConfig {
            reason: "target_axm_min exceeds target_axm_max".to_string(),
        });
    }
    if msg.tokens_limit.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "tokens_limit must be > 0".to_string(),
        });
    }
    if msg.tokens_limit > config.total_supply_cap {
        return Err(ContractError::InvalidConfig {
            reason: "tokens_limit exceeds the total supply cap".to_string(),
        });
    }
    if !msg.max_deposit.is_zero() && msg.min_deposit > msg.max_deposit {
        return Err(ContractError::InvalidConfig {
            reason: "min_deposit exceeds max_deposit".to_string(),
        });
    }
    if msg.funding_start_block > msg.funding_end_block {
        return Err(ContractError::InvalidConfig {
            reason: "funding window ends before it starts".to_string(),
        });
    }

    let agent = SaleAgent {
        agent_type: msg.agent_type,
        target_axm_max: msg.target_axm_max,
        target_axm_min: msg.target_axm_min,
        tokens_limit: msg.tokens_limit,
        tokens_minted: Uint128::zero(),
        min_deposit: msg.min_deposit,
        max_deposit: msg.max_deposit,
        funding_start_block: msg.funding_start_block,
        funding_end_block: msg.funding_end_block,
        contribution_limit: msg.contribution_limit,
        deposit_address: deps.api.addr_validate(&msg.deposit_address)?,
        deposit_address_verified: false,
        finalised: false,
    };

    SALE_AGENTS.save(deps.storage, &agent_addr, &agent)?;

    Ok(Response::new()
        .add_attribute("action", "register_agent")
        .add_attribute("agent", agent_addr.to_string())
        .add_attribute("agent_type", agent.agent_type.clone())
        .add_attribute("tokens_limit", agent.tokens_limit.to_string())
        .add_attribute("deposit_address", agent.deposit_address.to_string()))
}

/// A registered agent relays its deposit address's verification request.
/// The relayed address must match the registered one, so the flag only
/// flips when both the owner (at registration) and the deposit address
/// (here) have named the same account.
fn execute_verify_deposit_address(
    deps: DepsMut,
    info: MessageInfo,
    verify_address: String,
) -> Result<Response, ContractError> {
    let mut agent = SALE_AGENTS
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::UnknownAgent {
            agent: info.sender.to_string(),
        })?;

    let verify_addr = deps.api.addr_validate(&verify_address)?;
    if verify_addr != agent.deposit_address {
        return Err(ContractError::Unauthorized);
    }

    // Idempotent once set
    agent.deposit_address_verified = true;
    SALE_AGENTS.save(deps.storage, &info.sender, &agent)?;

    Ok(Response::new()
        .add_attribute("action", "verify_deposit_address")
        .add_attribute("agent", info.sender.to_string())
        .add_attribute("deposit_address", agent.deposit_address.to_string()))
}

/// A registered agent credits settled tokens to a contributor, bounded by
/// its own token limit and the global supply cap.
fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut agent = SALE_AGENTS
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::UnknownAgent {
            agent: info.sender.to_string(),
        })?;

    if agent.finalised {
        return Err(ContractError::AlreadyFinalised);
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroMintAmount);
    }

    let minted = agent.tokens_minted.checked_add(amount)?;
    if minted > agent.tokens_limit {
        return Err(ContractError::TokensLimitExceeded {
            limit: agent.tokens_limit.to_string(),
        });
    }

    let supply = TOTAL_SUPPLY.load(deps.storage)?.checked_add(amount)?;
    if supply > config.total_supply_cap {
        return Err(ContractError::SupplyCapExceeded {
            cap: config.total_supply_cap.to_string(),
        });
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let balance = BALANCES
        .may_load(deps.storage, &recipient_addr)?
        .unwrap_or_default()
        .checked_add(amount)?;

    agent.tokens_minted = minted;
    SALE_AGENTS.save(deps.storage, &info.sender, &agent)?;
    TOTAL_SUPPLY.save(deps.storage, &supply)?;
    BALANCES.save(deps.storage, &recipient_addr, &balance)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("agent", info.sender.to_string())
        .add_attribute("recipient", recipient_addr.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("total_supply", supply.to_string()))
}

/// A registered agent closes out its campaign on behalf of its deposit
/// address. One-shot: repeat calls fail.
fn execute_mark_finalised(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
) -> Result<Response, ContractError> {
    let mut agent = SALE_AGENTS
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::UnknownAgent {
            agent: info.sender.to_string(),
        })?;

    let sender_addr = deps.api.addr_validate(&sender)?;
    if sender_addr != agent.deposit_address {
        return Err(ContractError::Unauthorized);
    }
    if agent.finalised {
        return Err(ContractError::AlreadyFinalised);
    }

    agent.finalised = true;
    SALE_AGENTS.save(deps.storage, &info.sender, &agent)?;

    Ok(Response::new()
        .add_attribute("action", "mark_finalised")
        .add_attribute("agent", info.sender.to_string())
        .add_attribute("sender", sender_addr.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LedgerInfo {} => to_json_binary(&query_ledger_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::SaleAgent { address } => to_json_binary(&query_sale_agent(deps, address)?),
        QueryMsg::ListSaleAgents { start_after, limit } => {
            to_json_binary(&query_list_sale_agents(deps, start_after, limit)?)
        }
    }
}

fn query_ledger_info(deps: Deps) -> StdResult<LedgerInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    Ok(LedgerInfoResponse {
        owner: config.owner,
        name: config.name,
        symbol: config.symbol,
        decimals: config.decimals,
        exponent: config.exponent,
        total_supply,
        total_supply_cap: config.total_supply_cap,
    })
}

fn query_balance(deps: Deps, address: String) -> StdResult<cw20::BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(cw20::BalanceResponse { balance })
}

fn query_sale_agent(deps: Deps, address: String) -> StdResult<SaleAgentResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let agent = SALE_AGENTS.load(deps.storage, &addr)?;
    Ok(agent_to_response(addr, agent))
}

fn query_list_sale_agents(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<SaleAgentsResponse> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let agents = SALE_AGENTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(agent, sale)| agent_to_response(agent, sale)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SaleAgentsResponse { agents })
}

fn agent_to_response(agent: Addr, sale: SaleAgent) -> SaleAgentResponse {
    SaleAgentResponse {
        agent,
        agent_type: sale.agent_type,
        target_axm_max: sale.target_axm_max,
        target_axm_min: sale.target_axm_min,
        tokens_limit: sale.tokens_limit,
        tokens_minted: sale.tokens_minted,
        min_deposit: sale.min_deposit,
        max_deposit: sale.max_deposit,
        funding_start_block: sale.funding_start_block,
        funding_end_block: sale.funding_end_block,
        contribution_limit: sale.contribution_limit,
        deposit_address: sale.deposit_address,
        deposit_address_verified: sale.deposit_address_verified,
        finalised: sale.finalised,
    }
}
