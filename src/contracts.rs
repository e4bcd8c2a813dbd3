//! Solidity interfaces used by the scaffold, defined with alloy's `sol!` macro.
//!
//! Each interface carries `#[sol(rpc)]` so a contract instance can be built
//! over any provider and called with `.call()` (eth_call) or `.send()`.

use alloy::sol;

// ── ERC20 ─────────────────────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

// ── Permit2 ──────────────────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface IPermit2 {
        function allowance(address user, address token, address spender)
            external view returns (uint160 amount, uint48 expiration, uint48 nonce);
        function approve(address token, address spender, uint160 amount, uint48 expiration) external;
    }
}

// ── Balancer v3 Vault ────────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface IVault {
        struct LiquidityManagement {
            bool disableUnbalancedLiquidity;
            bool enableAddLiquidityCustom;
            bool enableRemoveLiquidityCustom;
            bool enableDonation;
        }

        struct PoolConfig {
            LiquidityManagement liquidityManagement;
            uint256 staticSwapFeePercentage;
            uint256 aggregateSwapFeePercentage;
            uint256 aggregateYieldFeePercentage;
            uint40 tokenDecimalDiffs;
            uint32 pauseWindowEndTime;
            bool isPoolRegistered;
            bool isPoolInitialized;
            bool isPoolPaused;
            bool isPoolInRecoveryMode;
        }

        struct HooksConfig {
            bool enableHookAdjustedAmounts;
            bool shouldCallBeforeInitialize;
            bool shouldCallAfterInitialize;
            bool shouldCallComputeDynamicSwapFee;
            bool shouldCallBeforeSwap;
            bool shouldCallAfterSwap;
            bool shouldCallBeforeAddLiquidity;
            bool shouldCallAfterAddLiquidity;
            bool shouldCallBeforeRemoveLiquidity;
            bool shouldCallAfterRemoveLiquidity;
            address hooksContract;
        }

        struct TokenInfo {
            uint8 tokenType;
            address rateProvider;
            bool paysYieldFees;
        }

        function isPoolRegistered(address pool) external view returns (bool registered);
        function getPoolConfig(address pool) external view returns (PoolConfig memory poolConfig);
        function getHooksConfig(address pool) external view returns (HooksConfig memory hooksConfig);
        function getPoolTokenInfo(address pool)
            external
            view
            returns (
                address[] memory tokens,
                TokenInfo[] memory tokenInfo,
                uint256[] memory balancesRaw,
                uint256[] memory lastBalancesLiveScaled18
            );

        event Swap(
            address indexed pool,
            address indexed tokenIn,
            address indexed tokenOut,
            uint256 amountIn,
            uint256 amountOut,
            uint256 swapFeePercentage,
            uint256 swapFeeAmount
        );

        event LiquidityAdded(
            address indexed pool,
            address indexed liquidityProvider,
            uint8 indexed kind,
            uint256 totalSupply,
            uint256[] amountsAddedRaw,
            uint256[] swapFeeAmountsRaw
        );

        event LiquidityRemoved(
            address indexed pool,
            address indexed liquidityProvider,
            uint8 indexed kind,
            uint256 totalSupply,
            uint256[] amountsRemovedRaw,
            uint256[] swapFeeAmountsRaw
        );
    }
}

// ── Balancer v3 Router ───────────────────────────────────────────────

sol! {
    #[sol(rpc)]
    interface IRouter {
        function querySwapSingleTokenExactIn(
            address pool,
            address tokenIn,
            address tokenOut,
            uint256 exactAmountIn,
            address sender,
            bytes memory userData
        ) external returns (uint256 amountCalculated);

        function querySwapSingleTokenExactOut(
            address pool,
            address tokenIn,
            address tokenOut,
            uint256 exactAmountOut,
            address sender,
            bytes memory userData
        ) external returns (uint256 amountCalculated);

        function swapSingleTokenExactIn(
            address pool,
            address tokenIn,
            address tokenOut,
            uint256 exactAmountIn,
            uint256 minAmountOut,
            uint256 deadline,
            bool wethIsEth,
            bytes calldata userData
        ) external payable returns (uint256 amountOut);

        function swapSingleTokenExactOut(
            address pool,
            address tokenIn,
            address tokenOut,
            uint256 exactAmountOut,
            uint256 maxAmountIn,
            uint256 deadline,
            bool wethIsEth,
            bytes calldata userData
        ) external payable returns (uint256 amountIn);

        function queryAddLiquidityUnbalanced(
            address pool,
            uint256[] memory exactAmountsIn,
            address sender,
            bytes memory userData
        ) external returns (uint256 bptAmountOut);

        function addLiquidityUnbalanced(
            address pool,
            uint256[] memory exactAmountsIn,
            uint256 minBptAmountOut,
            bool wethIsEth,
            bytes memory userData
        ) external payable returns (uint256 bptAmountOut);

        function queryAddLiquidityProportional(
            address pool,
            uint256 exactBptAmountOut,
            address sender,
            bytes memory userData
        ) external returns (uint256[] memory amountsIn);

        function addLiquidityProportional(
            address pool,
            uint256[] memory maxAmountsIn,
            uint256 exactBptAmountOut,
            bool wethIsEth,
            bytes memory userData
        ) external payable returns (uint256[] memory amountsIn);

        function queryRemoveLiquidityProportional(
            address pool,
            uint256 exactBptAmountIn,
            address sender,
            bytes memory userData
        ) external returns (uint256[] memory amountsOut);

        function removeLiquidityProportional(
            address pool,
            uint256 exactBptAmountIn,
            uint256[] memory minAmountsOut,
            bool wethIsEth,
            bytes memory userData
        ) external payable returns (uint256[] memory amountsOut);

        function queryRemoveLiquiditySingleTokenExactIn(
            address pool,
            uint256 exactBptAmountIn,
            address tokenOut,
            address sender,
            bytes memory userData
        ) external returns (uint256 amountOut);

        function removeLiquiditySingleTokenExactIn(
            address pool,
            uint256 exactBptAmountIn,
            address tokenOut,
            uint256 minAmountOut,
            bool wethIsEth,
            bytes memory userData
        ) external payable returns (uint256 amountOut);
    }
}

// ── Uniswap V2 style router (arbitrage venues) ───────────────────────

sol! {
    #[sol(rpc)]
    interface IUniswapV2Router02 {
        function getAmountsOut(uint256 amountIn, address[] calldata path)
            external view returns (uint256[] memory amounts);
        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);
    }
}
