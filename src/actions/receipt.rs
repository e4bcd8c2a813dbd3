//! Transaction confirmation and settled-amount decoding from vault events

use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::PendingTransactionBuilder,
    rpc::types::{Log, TransactionReceipt},
    transports::BoxTransport,
};
use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};
use crate::{
    contracts::IVault,
    errors::{ScaffoldError, ScaffoldResult},
    types::{ActionReceipt, SettledAmounts},
};

pub type PendingTx = PendingTransactionBuilder<BoxTransport, Ethereum>;

/// Waits for the receipt, failing on timeout or revert.
pub async fn confirm(pending: PendingTx, operation: &str, timeout_secs: u64) -> ScaffoldResult<TransactionReceipt> {
    let tx_hash = *pending.tx_hash();
    info!("📡 {} sent: {}", operation, tx_hash);

    let receipt = tokio::select! {
        result = pending.get_receipt() => {
            result.map_err(|e| ScaffoldError::transaction(operation, e))?
        }
        _ = tokio::time::sleep(Duration::from_secs(timeout_secs)) => {
            return Err(ScaffoldError::Transaction {
                operation: operation.to_string(),
                message: format!("not confirmed after {} seconds ({})", timeout_secs, tx_hash),
            });
        }
    };

    if !receipt.status() {
        warn!("❌ {} reverted: {}", operation, tx_hash);
        return Err(ScaffoldError::Transaction {
            operation: operation.to_string(),
            message: format!("reverted on-chain ({})", tx_hash),
        });
    }

    info!("✅ {} confirmed in block {:?}", operation, receipt.block_number);
    Ok(receipt)
}

pub fn settled_swap(logs: &[Log], vault: Address, pool: Address) -> SettledAmounts {
    logs.iter()
        .filter(|log| log.address() == vault)
        .filter_map(|log| log.log_decode::<IVault::Swap>().ok())
        .map(|decoded| decoded.inner.data)
        .find(|event| event.pool == pool)
        .map(|event| SettledAmounts::Swap {
            amount_in: event.amountIn,
            amount_out: event.amountOut,
        })
        .unwrap_or(SettledAmounts::Unknown)
}

pub fn settled_join(logs: &[Log], vault: Address, pool: Address) -> SettledAmounts {
    logs.iter()
        .filter(|log| log.address() == vault)
        .filter_map(|log| log.log_decode::<IVault::LiquidityAdded>().ok())
        .map(|decoded| decoded.inner.data)
        .find(|event| event.pool == pool)
        .map(|event| SettledAmounts::Liquidity {
            amounts: event.amountsAddedRaw,
            total_supply: event.totalSupply,
        })
        .unwrap_or(SettledAmounts::Unknown)
}

pub fn settled_exit(logs: &[Log], vault: Address, pool: Address) -> SettledAmounts {
    logs.iter()
        .filter(|log| log.address() == vault)
        .filter_map(|log| log.log_decode::<IVault::LiquidityRemoved>().ok())
        .map(|decoded| decoded.inner.data)
        .find(|event| event.pool == pool)
        .map(|event| SettledAmounts::Liquidity {
            amounts: event.amountsRemovedRaw,
            total_supply: event.totalSupply,
        })
        .unwrap_or(SettledAmounts::Unknown)
}

pub fn action_receipt(action: &str, receipt: &TransactionReceipt, settled: SettledAmounts) -> ActionReceipt {
    ActionReceipt {
        action: action.to_string(),
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        settled,
        timestamp: Utc::now(),
    }
}
