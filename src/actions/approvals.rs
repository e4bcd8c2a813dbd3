//! Allowance checks and approval transactions
//!
//! Balancer v3 routers pull input tokens through Permit2, so each input token
//! needs an ERC-20 allowance to Permit2 and an unexpired Permit2 allowance to
//! the router. Exits burn BPT, which needs a plain ERC-20 allowance to the router.

use alloy::primitives::{Address, B256, U256, aliases::{U48, U160}, ruint::UintTryFrom};
use chrono::Utc;
use futures::future::try_join_all;
use tracing::info;
use crate::{
    actions::{ActionContext, confirm},
    contracts::{IERC20, IPermit2},
    errors::{ScaffoldError, ScaffoldResult},
    pools::contract_error,
    types::{ApprovalKind, ApprovalStep},
    ConcreteProvider,
};

/// Current on-chain allowances for one input token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenAllowances {
    pub erc20_to_permit2: U256,
    pub permit2_amount: U256,
    pub permit2_expiration: u64,
}

/// Steps still needed before the router can pull `amount` of `token`.
pub fn permit2_steps(
    token: Address,
    amount: U256,
    current: TokenAllowances,
    permit2: Address,
    router: Address,
    now: u64,
    expiration_secs: u64,
) -> Vec<ApprovalStep> {
    let mut steps = Vec::new();
    if amount.is_zero() {
        return steps;
    }
    if current.erc20_to_permit2 < amount {
        steps.push(ApprovalStep {
            token,
            spender: permit2,
            amount,
            kind: ApprovalKind::Erc20,
        });
    }
    if current.permit2_amount < amount || current.permit2_expiration <= now {
        steps.push(ApprovalStep {
            token,
            spender: router,
            amount,
            kind: ApprovalKind::Permit2 {
                permit2,
                expiration: now + expiration_secs,
            },
        });
    }
    steps
}

pub async fn read_token_allowances(
    provider: &ConcreteProvider,
    owner: Address,
    token: Address,
    permit2: Address,
    router: Address,
) -> ScaffoldResult<TokenAllowances> {
    let erc20 = IERC20::new(token, provider);
    let permit2_contract = IPermit2::new(permit2, provider);

    let (erc20_allowance, permit2_allowance) = tokio::try_join!(
        async {
            erc20
                .allowance(owner, permit2)
                .call()
                .await
                .map(|r| r._0)
                .map_err(contract_error(token, "allowance"))
        },
        async {
            permit2_contract
                .allowance(owner, token, router)
                .call()
                .await
                .map_err(contract_error(permit2, "Permit2 allowance"))
        },
    )?;

    Ok(TokenAllowances {
        erc20_to_permit2: erc20_allowance,
        permit2_amount: U256::from(permit2_allowance.amount),
        permit2_expiration: permit2_allowance.expiration.to::<u64>(),
    })
}

/// Plans approvals for every `(token, max amount in)` pair, in input order.
pub async fn plan_input_approvals(
    ctx: &ActionContext,
    owner: Address,
    inputs: &[(Address, U256)],
) -> ScaffoldResult<Vec<ApprovalStep>> {
    let provider = ctx.provider.as_ref();
    let needed: Vec<_> = inputs.iter().filter(|(_, amount)| !amount.is_zero()).collect();
    let allowances = try_join_all(
        needed
            .iter()
            .map(|(token, _)| read_token_allowances(provider, owner, *token, ctx.permit2, ctx.router)),
    )
    .await?;

    let now = Utc::now().timestamp().max(0) as u64;
    Ok(needed
        .iter()
        .zip(allowances)
        .flat_map(|((token, amount), current)| {
            permit2_steps(*token, *amount, current, ctx.permit2, ctx.router, now, ctx.permit2_expiration_secs)
        })
        .collect())
}

/// BPT allowance to the router for an exit.
pub async fn plan_bpt_approval(
    ctx: &ActionContext,
    owner: Address,
    pool: Address,
    bpt_amount: U256,
) -> ScaffoldResult<Option<ApprovalStep>> {
    let allowance = IERC20::new(pool, ctx.provider.as_ref())
        .allowance(owner, ctx.router)
        .call()
        .await
        .map_err(contract_error(pool, "BPT allowance"))?
        ._0;

    Ok((allowance < bpt_amount).then_some(ApprovalStep {
        token: pool,
        spender: ctx.router,
        amount: bpt_amount,
        kind: ApprovalKind::Erc20,
    }))
}

/// Sends one approval and waits for it to confirm.
pub async fn execute_approval(ctx: &ActionContext, step: &ApprovalStep) -> ScaffoldResult<B256> {
    let signer = ctx.signer()?;
    let receipt = match step.kind {
        ApprovalKind::Erc20 => {
            info!("🔓 Approving {} of {} for {}", step.amount, step.token, step.spender);
            let pending = IERC20::new(step.token, &signer)
                .approve(step.spender, step.amount)
                .send()
                .await
                .map_err(|e| ScaffoldError::transaction("approve", e))?;
            confirm(pending, "approve", ctx.confirmation_timeout_secs).await?
        }
        ApprovalKind::Permit2 { permit2, expiration } => {
            let amount = U160::uint_try_from(step.amount).map_err(|_| {
                ScaffoldError::invalid("approval amount", "does not fit Permit2's uint160 allowance")
            })?;
            let expiration = U48::uint_try_from(expiration)
                .map_err(|_| ScaffoldError::invalid("approval expiration", "does not fit uint48"))?;
            info!("🔓 Permit2: allowing router {} to pull {} of {}", step.spender, step.amount, step.token);
            let pending = IPermit2::new(permit2, &signer)
                .approve(step.token, step.spender, amount, expiration)
                .send()
                .await
                .map_err(|e| ScaffoldError::transaction("permit2 approve", e))?;
            confirm(pending, "permit2 approve", ctx.confirmation_timeout_secs).await?
        }
    };
    Ok(receipt.transaction_hash)
}

/// Approvals run strictly in order; each waits for the previous confirmation.
pub async fn execute_approvals(ctx: &ActionContext, steps: &[ApprovalStep]) -> ScaffoldResult<Vec<B256>> {
    let mut hashes = Vec::with_capacity(steps.len());
    for step in steps {
        hashes.push(execute_approval(ctx, step).await?);
    }
    Ok(hashes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const TOKEN: Address = address!("1111111111111111111111111111111111111111");
    const PERMIT2: Address = address!("2222222222222222222222222222222222222222");
    const ROUTER: Address = address!("3333333333333333333333333333333333333333");
    const NOW: u64 = 1_700_000_000;

    fn steps(amount: u64, current: TokenAllowances) -> Vec<ApprovalStep> {
        permit2_steps(TOKEN, U256::from(amount), current, PERMIT2, ROUTER, NOW, 3_600)
    }

    #[test]
    fn fresh_token_needs_both_approvals_in_order() {
        let planned = steps(100, TokenAllowances::default());
        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0].kind, ApprovalKind::Erc20);
        assert_eq!(planned[0].spender, PERMIT2);
        assert_eq!(
            planned[1].kind,
            ApprovalKind::Permit2 { permit2: PERMIT2, expiration: NOW + 3_600 }
        );
        assert_eq!(planned[1].spender, ROUTER);
    }

    #[test]
    fn sufficient_allowances_need_nothing() {
        let current = TokenAllowances {
            erc20_to_permit2: U256::MAX,
            permit2_amount: U256::from(100),
            permit2_expiration: NOW + 1,
        };
        assert!(steps(100, current).is_empty());
    }

    #[test]
    fn expired_permit2_allowance_is_renewed() {
        let current = TokenAllowances {
            erc20_to_permit2: U256::MAX,
            permit2_amount: U256::MAX,
            permit2_expiration: NOW,
        };
        let planned = steps(1, current);
        assert_eq!(planned.len(), 1);
        assert!(matches!(planned[0].kind, ApprovalKind::Permit2 { .. }));
    }

    #[test]
    fn zero_amount_needs_nothing() {
        assert!(steps(0, TokenAllowances::default()).is_empty());
    }
}
