#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
        MOCK_CONTRACT_ADDR,
    };
    use cosmwasm_std::{
        coins, from_json, to_json_binary, Addr, ContractResult, Env, OwnedDeps, Response,
        SystemError, SystemResult, Uint128, WasmQuery,
    };

    use crate::contract::{execute, instantiate, query, NATIVE_DENOM};
    use crate::msg::*;
    use orbit_token::msg::{QueryMsg as LedgerQueryMsg, SaleAgentResponse};

    pub const CREATOR: &str = "creator";
    pub const LEDGER: &str = "orbit_ledger";
    pub const DEPOSIT_ADDRESS: &str = "deposit_addr";
    pub const ALICE: &str = "alice";
    pub const BOB: &str = "bob";
    pub const RANDOM_USER: &str = "random_user";

    pub fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            ledger: LEDGER.to_string(),
            reserve_payout: ReservePayout::TargetAxmMin,
        }
    }

    pub fn setup_contract() -> (OwnedDeps<MockStorage, MockApi, MockQuerier>, Env) {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let info = mock_info(CREATOR, &[]);

        let msg = default_instantiate_msg();
        let res = instantiate(deps.as_mut(), env.clone(), info, msg).unwrap();
        assert_eq!(res.attributes.len(), 2);

        (deps, env)
    }

    /// Registry entry the mocked ledger hands back. Numbers give the worked
    /// sale: 1000-token pool priced against 10 uaxm, window [100, 200],
    /// 5 uaxm per-address limit.
    pub fn default_sale_agent() -> SaleAgentResponse {
        SaleAgentResponse {
            agent: Addr::unchecked(MOCK_CONTRACT_ADDR),
            agent_type: "crowdsale".to_string(),
            target_axm_max: Uint128::new(10),
            target_axm_min: Uint128::new(5),
            tokens_limit: Uint128::new(1000),
            tokens_minted: Uint128::zero(),
            min_deposit: Uint128::new(1),
            max_deposit: Uint128::zero(),
            funding_start_block: 100,
            funding_end_block: 200,
            contribution_limit: Uint128::new(5),
            deposit_address: Addr::unchecked(DEPOSIT_ADDRESS),
            deposit_address_verified: true,
            finalised: false,
        }
    }

    /// Serve `sale` for every SaleAgent query the contract sends the ledger.
    pub fn mock_ledger(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        sale: SaleAgentResponse,
    ) {
        deps.querier.update_wasm(move |query| match query {
            WasmQuery::Smart { contract_addr, msg } => {
                assert_eq!(contract_addr, LEDGER);
                let ledger_query: LedgerQueryMsg = from_json(msg).unwrap();
                match ledger_query {
                    LedgerQueryMsg::SaleAgent { .. } => {
                        SystemResult::Ok(ContractResult::Ok(to_json_binary(&sale).unwrap()))
                    }
                    _ => SystemResult::Err(SystemError::UnsupportedRequest {
                        kind: "unexpected ledger query".to_string(),
                    }),
                }
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: "only smart queries are mocked".to_string(),
            }),
        });
    }

    pub fn env_at_height(height: u64) -> Env {
        let mut env = mock_env();
        env.block.height = height;
        env
    }

    pub fn contribute(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        user: &str,
        amount: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(user, &coins(amount, NATIVE_DENOM));
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Contribute {})
    }

    pub fn verify_deposit_address(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::VerifyDepositAddress {},
        )
    }

    pub fn claim(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        user: &str,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(user, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::ClaimTokensAndRefund {},
        )
    }

    pub fn finalise(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::FinaliseFunding {},
        )
    }

    pub fn query_config(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_contribution(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        address: &str,
    ) -> ContributionResponse {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::Contribution {
                address: address.to_string(),
            },
        )
        .unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_status(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> StatusResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Status {}).unwrap();
        from_json(&res).unwrap()
    }
}
