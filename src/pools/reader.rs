//! Assembles the `Pool` view-model from parallel on-chain reads

use alloy::primitives::{Address, U256};
use futures::future::try_join_all;
use tracing::{debug, info};
use crate::{
    contracts::{IERC20, IVault},
    errors::{ScaffoldError, ScaffoldResult},
    pools::{contract_error, get_pool_token},
    types::{HooksConfig, Pool, PoolConfig, PoolToken},
    ConcreteProvider,
};

/// Reads everything the pool pages show in one round of concurrent calls.
///
/// `pool_config`/`hooks_config` are `None` and `pool_tokens` is empty when the
/// vault has no record of the pool.
pub async fn read_pool(
    provider: &ConcreteProvider,
    vault: Address,
    pool: Address,
    account: Option<Address>,
) -> ScaffoldResult<Pool> {
    debug!("Reading pool {} via vault {}", pool, vault);
    let bpt = IERC20::new(pool, provider);
    let vault_contract = IVault::new(vault, provider);

    let (name, symbol, decimals, total_supply, user_balance, registered) = tokio::try_join!(
        async { bpt.name().call().await.map_err(contract_error(pool, "name")) },
        async { bpt.symbol().call().await.map_err(contract_error(pool, "symbol")) },
        async { bpt.decimals().call().await.map_err(contract_error(pool, "decimals")) },
        async { bpt.totalSupply().call().await.map_err(contract_error(pool, "totalSupply")) },
        async {
            match account {
                Some(owner) => bpt
                    .balanceOf(owner)
                    .call()
                    .await
                    .map(|r| r._0)
                    .map_err(contract_error(pool, "balanceOf")),
                None => Ok(U256::ZERO),
            }
        },
        async {
            vault_contract
                .isPoolRegistered(pool)
                .call()
                .await
                .map(|r| r.registered)
                .map_err(contract_error(vault, "isPoolRegistered"))
        },
    )?;

    let (pool_config, hooks_config, pool_tokens) = if registered {
        let (vault_config, tokens) = read_vault_state(provider, vault, pool).await?;
        (Some(vault_config.0), Some(vault_config.1), tokens)
    } else {
        (None, None, Vec::new())
    };

    info!(
        "📖 {} ({}) | {} tokens | registered: {}",
        name._0, symbol._0, pool_tokens.len(), registered
    );

    Ok(Pool {
        address: pool,
        decimals: decimals._0,
        name: name._0,
        symbol: symbol._0,
        total_supply: total_supply._0,
        vault_address: vault,
        user_balance,
        pool_tokens,
        pool_config,
        hooks_config,
    })
}

async fn read_vault_state(
    provider: &ConcreteProvider,
    vault: Address,
    pool: Address,
) -> ScaffoldResult<((PoolConfig, HooksConfig), Vec<PoolToken>)> {
    let vault_contract = IVault::new(vault, provider);

    let (pool_config, hooks_config, token_info) = tokio::try_join!(
        async {
            vault_contract
                .getPoolConfig(pool)
                .call()
                .await
                .map_err(contract_error(vault, "getPoolConfig"))
        },
        async {
            vault_contract
                .getHooksConfig(pool)
                .call()
                .await
                .map_err(contract_error(vault, "getHooksConfig"))
        },
        async {
            vault_contract
                .getPoolTokenInfo(pool)
                .call()
                .await
                .map_err(contract_error(vault, "getPoolTokenInfo"))
        },
    )?;

    if token_info.tokens.len() != token_info.balancesRaw.len() {
        return Err(ScaffoldError::DataParsing {
            context: format!("pool {} token info", pool),
            source: anyhow::anyhow!(
                "{} tokens but {} balances",
                token_info.tokens.len(),
                token_info.balancesRaw.len()
            ),
        });
    }

    let tokens = try_join_all(
        token_info
            .tokens
            .iter()
            .zip(token_info.balancesRaw.iter())
            .map(|(token, balance)| get_pool_token(provider, *token, *balance)),
    )
    .await?;

    Ok((
        (pool_config.poolConfig.into(), hooks_config.hooksConfig.into()),
        tokens,
    ))
}
