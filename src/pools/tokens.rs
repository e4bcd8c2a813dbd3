//! ERC-20 metadata reads

use alloy::primitives::{Address, U256};
use tracing::debug;
use crate::{
    contracts::IERC20,
    errors::{ScaffoldError, ScaffoldResult},
    types::PoolToken,
    ConcreteProvider,
};

pub(crate) fn contract_error(contract: Address, what: &str) -> impl FnOnce(alloy::contract::Error) -> ScaffoldError {
    let message = format!("Failed to read {}", what);
    move |e| ScaffoldError::Contract {
        contract,
        message,
        source: e.into(),
    }
}

#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

pub async fn get_token_metadata(provider: &ConcreteProvider, token: Address) -> ScaffoldResult<TokenMetadata> {
    let erc20 = IERC20::new(token, provider);

    let (name, symbol, decimals) = tokio::try_join!(
        async { erc20.name().call().await.map_err(contract_error(token, "name")) },
        async { erc20.symbol().call().await.map_err(contract_error(token, "symbol")) },
        async { erc20.decimals().call().await.map_err(contract_error(token, "decimals")) },
    )?;

    debug!("Token {} is {} ({} decimals)", token, symbol._0, decimals._0);
    Ok(TokenMetadata {
        name: name._0,
        symbol: symbol._0,
        decimals: decimals._0,
    })
}

pub async fn get_pool_token(provider: &ConcreteProvider, token: Address, balance: U256) -> ScaffoldResult<PoolToken> {
    let metadata = get_token_metadata(provider, token).await?;
    Ok(PoolToken {
        address: token,
        balance,
        decimals: metadata.decimals,
        name: metadata.name,
        symbol: metadata.symbol,
    })
}

pub async fn get_token_balance(provider: &ConcreteProvider, token: Address, owner: Address) -> ScaffoldResult<U256> {
    IERC20::new(token, provider)
        .balanceOf(owner)
        .call()
        .await
        .map(|r| r._0)
        .map_err(contract_error(token, "balanceOf"))
}
