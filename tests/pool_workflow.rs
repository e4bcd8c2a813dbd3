use alloy::{
    primitives::{
        address,
        aliases::{U40, U48, U160},
        Address, Bytes, U256,
    },
    sol_types::SolCall,
};
use balancer_v3_scaffold::{
    actions::{self, ActionContext},
    contracts::{IERC20, IPermit2, IRouter, IVault},
    network::read_provider,
    pools::read_pool,
    ApprovalKind, SwapConfig, SwapKind,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const VAULT: Address = address!("ba1333333333a1ba1108e8412f11850a5c319ba9");
const ROUTER: Address = address!("5c6fb490bdfd3246eb0bb062c168decaf4bd9fdd");
const PERMIT2: Address = address!("000000000022d473030f116ddee9f6b43ac78ba3");
const POOL: Address = address!("1010101010101010101010101010101010101010");
const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
const OWNER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

const ONE_DAI: u128 = 1_000_000_000_000_000_000;

/// Canned `eth_call` results keyed by target contract and function selector.
#[derive(Clone, Default)]
struct FakeChain {
    results: HashMap<(Address, [u8; 4]), Vec<u8>>,
    hits: Arc<Mutex<HashMap<(Address, [u8; 4]), usize>>>,
}

impl FakeChain {
    fn on<C: SolCall>(mut self, to: Address, returns: Vec<u8>) -> Self {
        self.results.insert((to, C::SELECTOR), returns);
        self
    }

    fn calls<C: SolCall>(&self, to: Address) -> usize {
        self.hits.lock().unwrap().get(&(to, C::SELECTOR)).copied().unwrap_or_default()
    }

    fn erc20(self, token: Address, symbol: &str, decimals: u8, supply: U256) -> Self {
        self.on::<IERC20::nameCall>(token, IERC20::nameCall::abi_encode_returns(&(format!("{} token", symbol),)))
            .on::<IERC20::symbolCall>(token, IERC20::symbolCall::abi_encode_returns(&(symbol.to_string(),)))
            .on::<IERC20::decimalsCall>(token, IERC20::decimalsCall::abi_encode_returns(&(decimals,)))
            .on::<IERC20::totalSupplyCall>(token, IERC20::totalSupplyCall::abi_encode_returns(&(supply,)))
    }

    fn bpt(self, registered: bool) -> Self {
        self.erc20(POOL, "USDC-DAI", 18, U256::from(2_000 * ONE_DAI))
            .on::<IERC20::balanceOfCall>(POOL, IERC20::balanceOfCall::abi_encode_returns(&(U256::from(ONE_DAI),)))
            .on::<IVault::isPoolRegisteredCall>(VAULT, IVault::isPoolRegisteredCall::abi_encode_returns(&(registered,)))
    }

    fn registered_pool(self) -> Self {
        let pool_config = IVault::PoolConfig {
            liquidityManagement: IVault::LiquidityManagement {
                disableUnbalancedLiquidity: false,
                enableAddLiquidityCustom: false,
                enableRemoveLiquidityCustom: false,
                enableDonation: false,
            },
            staticSwapFeePercentage: U256::from(3_000_000_000_000_000u64),
            aggregateSwapFeePercentage: U256::ZERO,
            aggregateYieldFeePercentage: U256::ZERO,
            tokenDecimalDiffs: U40::ZERO,
            pauseWindowEndTime: 1_900_000_000,
            isPoolRegistered: true,
            isPoolInitialized: true,
            isPoolPaused: false,
            isPoolInRecoveryMode: false,
        };
        let hooks_config = IVault::HooksConfig {
            enableHookAdjustedAmounts: false,
            shouldCallBeforeInitialize: false,
            shouldCallAfterInitialize: false,
            shouldCallComputeDynamicSwapFee: false,
            shouldCallBeforeSwap: false,
            shouldCallAfterSwap: true,
            shouldCallBeforeAddLiquidity: false,
            shouldCallAfterAddLiquidity: false,
            shouldCallBeforeRemoveLiquidity: false,
            shouldCallAfterRemoveLiquidity: false,
            hooksContract: address!("4444444444444444444444444444444444444444"),
        };
        let token_info = IVault::TokenInfo {
            tokenType: 0,
            rateProvider: Address::ZERO,
            paysYieldFees: false,
        };
        let balances = vec![U256::from(1_000_000_000_000u64), U256::from(1_000_000u128 * ONE_DAI)];

        self.bpt(true)
            .erc20(USDC, "USDC", 6, U256::ZERO)
            .erc20(DAI, "DAI", 18, U256::ZERO)
            .on::<IVault::getPoolConfigCall>(VAULT, IVault::getPoolConfigCall::abi_encode_returns(&(pool_config,)))
            .on::<IVault::getHooksConfigCall>(VAULT, IVault::getHooksConfigCall::abi_encode_returns(&(hooks_config,)))
            .on::<IVault::getPoolTokenInfoCall>(
                VAULT,
                IVault::getPoolTokenInfoCall::abi_encode_returns(&(
                    vec![USDC, DAI],
                    vec![token_info.clone(), token_info],
                    balances.clone(),
                    balances,
                )),
            )
    }

    /// JSON-RPC reply for one request body; unknown calls revert.
    fn respond(&self, body: &[u8]) -> Vec<u8> {
        let request: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let id = request["id"].clone();
        let call = &request["params"][0];
        let to = call["to"].as_str().and_then(|s| s.parse::<Address>().ok());
        let input = call["input"]
            .as_str()
            .or_else(|| call["data"].as_str())
            .and_then(|s| s.parse::<Bytes>().ok())
            .unwrap_or_default();

        let result = match (request["method"].as_str(), to) {
            (Some("eth_call"), Some(to)) if input.len() >= 4 => {
                let selector: [u8; 4] = input[..4].try_into().unwrap();
                *self.hits.lock().unwrap().entry((to, selector)).or_default() += 1;
                self.results.get(&(to, selector)).cloned()
            }
            _ => None,
        };
        let reply = match result {
            Some(data) => json!({ "jsonrpc": "2.0", "id": id, "result": Bytes::from(data) }),
            None => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": 3, "message": "execution reverted" }
            }),
        };
        serde_json::to_vec(&reply).unwrap()
    }

    async fn serve(self) -> mockito::ServerGuard {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |request| {
                self.respond(request.body().map(|b| b.as_slice()).unwrap_or_default())
            })
            .create_async()
            .await;
        server
    }
}

fn context(server: &mockito::ServerGuard, account: Option<Address>) -> ActionContext {
    ActionContext {
        provider: read_provider(&server.url()).unwrap(),
        wallet: None,
        account,
        vault: VAULT,
        router: ROUTER,
        permit2: PERMIT2,
        slippage_bps: 50,
        deadline_secs: 1_200,
        confirmation_timeout_secs: 120,
        permit2_expiration_secs: 2_592_000,
    }
}

fn swap(kind: SwapKind, amount: &str) -> SwapConfig {
    let (token_in_index, token_out_index) = (0, 1);
    SwapConfig { token_in_index, token_out_index, kind, amount: amount.to_string() }
}

#[tokio::test]
async fn unregistered_pool_has_no_vault_state() {
    let server = FakeChain::default().bpt(false).serve().await;
    let provider = read_provider(&server.url()).unwrap();

    let pool = read_pool(provider.as_ref(), VAULT, POOL, None).await.unwrap();

    assert_eq!(pool.symbol, "USDC-DAI");
    assert_eq!(pool.total_supply, U256::from(2_000 * ONE_DAI));
    assert_eq!(pool.decimals, 18);
    assert_eq!(pool.vault_address, VAULT);
    assert_eq!(pool.user_balance, U256::ZERO);
    assert!(pool.pool_config.is_none());
    assert!(pool.hooks_config.is_none());
    assert!(pool.pool_tokens.is_empty());
}

#[tokio::test]
async fn registered_pool_reads_tokens_config_and_balance() {
    let server = FakeChain::default().registered_pool().serve().await;
    let provider = read_provider(&server.url()).unwrap();

    let pool = read_pool(provider.as_ref(), VAULT, POOL, Some(OWNER)).await.unwrap();

    assert_eq!(pool.user_balance, U256::from(ONE_DAI));
    let symbols: Vec<_> = pool.pool_tokens.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["USDC", "DAI"]);
    assert_eq!(pool.pool_tokens[0].decimals, 6);
    assert_eq!(pool.pool_tokens[0].balance, U256::from(1_000_000_000_000u64));

    let config = pool.pool_config.as_ref().unwrap();
    assert!(config.is_pool_initialized);
    assert_eq!(config.static_swap_fee_percentage, U256::from(3_000_000_000_000_000u64));
    let hooks = pool.hooks_config.as_ref().unwrap();
    assert!(hooks.has_hooks());
    assert_eq!(hooks.enabled_callbacks(), vec!["afterSwap"]);
}

#[tokio::test]
async fn swap_quote_limits_come_from_the_router() {
    // 100 USDC in quotes 99 DAI out; 1 DAI out quotes 1.01 USDC in
    let chain = FakeChain::default()
        .registered_pool()
        .on::<IRouter::querySwapSingleTokenExactInCall>(
            ROUTER,
            IRouter::querySwapSingleTokenExactInCall::abi_encode_returns(&(U256::from(99 * ONE_DAI),)),
        )
        .on::<IRouter::querySwapSingleTokenExactOutCall>(
            ROUTER,
            IRouter::querySwapSingleTokenExactOutCall::abi_encode_returns(&(U256::from(1_010_000u64),)),
        );
    let server = chain.clone().serve().await;
    let ctx = context(&server, None);

    let exact_in = actions::run_swap(&ctx, POOL, &swap(SwapKind::ExactIn, "100"), false).await.unwrap();
    assert_eq!(exact_in.pool.address, POOL);
    assert_eq!(exact_in.quote.given_amount, U256::from(100_000_000u64));
    assert_eq!(exact_in.quote.expected_amount, U256::from(99 * ONE_DAI));
    // 99 DAI less 0.5%
    assert_eq!(exact_in.quote.limit, U256::from(98_505_000_000_000_000_000u128));
    assert!(exact_in.approvals.is_empty());
    assert!(exact_in.receipt.is_none());

    let exact_out = actions::run_swap(&ctx, POOL, &swap(SwapKind::ExactOut, "1"), false).await.unwrap();
    assert_eq!(exact_out.quote.given_amount, U256::from(ONE_DAI));
    // 1.01 USDC plus 0.5%, rounded up
    assert_eq!(exact_out.quote.limit, U256::from(1_015_050u64));
    assert_eq!(exact_out.quote.max_amount_in(), U256::from(1_015_050u64));

    // a quote-only run reads the pool once and shows that same state
    assert_eq!(chain.calls::<IVault::isPoolRegisteredCall>(VAULT), 2);
    assert!(exact_out.refreshed_pool.is_none());
    assert_eq!(exact_out.current_pool().pool_tokens.len(), 2);
}

#[tokio::test]
async fn missing_allowances_plan_both_permit2_steps() {
    let server = FakeChain::default()
        .registered_pool()
        .on::<IRouter::querySwapSingleTokenExactInCall>(
            ROUTER,
            IRouter::querySwapSingleTokenExactInCall::abi_encode_returns(&(U256::from(99 * ONE_DAI),)),
        )
        .on::<IERC20::allowanceCall>(USDC, IERC20::allowanceCall::abi_encode_returns(&(U256::ZERO,)))
        .on::<IPermit2::allowanceCall>(
            PERMIT2,
            IPermit2::allowanceCall::abi_encode_returns(&(U160::ZERO, U48::ZERO, U48::ZERO)),
        )
        .serve()
        .await;
    let ctx = context(&server, Some(OWNER));

    let outcome = actions::run_swap(&ctx, POOL, &swap(SwapKind::ExactIn, "100"), false).await.unwrap();

    assert_eq!(outcome.approvals.len(), 2);
    assert_eq!(outcome.approvals[0].kind, ApprovalKind::Erc20);
    assert_eq!(outcome.approvals[0].token, USDC);
    assert_eq!(outcome.approvals[0].spender, PERMIT2);
    assert_eq!(outcome.approvals[0].amount, U256::from(100_000_000u64));
    assert!(matches!(outcome.approvals[1].kind, ApprovalKind::Permit2 { permit2, .. } if permit2 == PERMIT2));
    assert_eq!(outcome.approvals[1].spender, ROUTER);
    assert!(outcome.approval_hashes.is_empty());
}

#[tokio::test]
async fn router_revert_is_a_query_error() {
    let server = FakeChain::default().registered_pool().serve().await;
    let ctx = context(&server, None);

    let err = actions::run_swap(&ctx, POOL, &swap(SwapKind::ExactIn, "100"), false).await.unwrap_err();
    assert!(err.is_query_error(), "{:?}", err);
}

#[tokio::test]
async fn shared_context_is_cheap_to_clone() {
    let server = FakeChain::default().bpt(false).serve().await;
    let ctx = context(&server, None);
    let copy = ctx.clone();
    assert!(Arc::ptr_eq(&ctx.provider, &copy.provider));

    let err = actions::run_swap(&copy, POOL, &swap(SwapKind::ExactIn, "1"), false).await.unwrap_err();
    assert!(matches!(err, balancer_v3_scaffold::ScaffoldError::PoolNotRegistered { .. }));
}
