//! Round-trip price comparison across two venues
//!
//! Buys `token_out` on one venue and sells it back on the other. Only a
//! strictly positive spread is traded; anything else fails with
//! `ScaffoldError::ArbitrageNotProfitable` before any swap is sent.

use alloy::primitives::{Address, U256};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, warn};
use crate::{
    arbitrage::DexVenue,
    errors::{ScaffoldError, ScaffoldResult},
    types::{ArbitrageExecuted, ArbitrageQuote},
    utils::apply_slippage_down,
};

const EVENT_CAPACITY: usize = 64;

pub struct ArbitrageBot {
    dex_a: Arc<dyn DexVenue>,
    dex_b: Arc<dyn DexVenue>,
    slippage_bps: u32,
    events: broadcast::Sender<ArbitrageExecuted>,
}

impl ArbitrageBot {
    pub fn new(dex_a: Arc<dyn DexVenue>, dex_b: Arc<dyn DexVenue>, slippage_bps: u32) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            dex_a,
            dex_b,
            slippage_bps,
            events,
        }
    }

    /// Receives every `ArbitrageExecuted` emitted after subscribing.
    pub fn subscribe(&self) -> broadcast::Receiver<ArbitrageExecuted> {
        self.events.subscribe()
    }

    fn legs(&self, dex_a_first: bool) -> (&dyn DexVenue, &dyn DexVenue) {
        if dex_a_first {
            (self.dex_a.as_ref(), self.dex_b.as_ref())
        } else {
            (self.dex_b.as_ref(), self.dex_a.as_ref())
        }
    }

    async fn round_trip(
        &self,
        dex_a_first: bool,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
    ) -> ScaffoldResult<ArbitrageQuote> {
        let (buy, sell) = self.legs(dex_a_first);
        let intermediate_amount = buy.quote(token_in, token_out, amount_in).await?;
        let final_amount = sell.quote(token_out, token_in, intermediate_amount).await?;
        Ok(ArbitrageQuote {
            token_in,
            token_out,
            amount_in,
            buy_venue: buy.name().to_string(),
            sell_venue: sell.name().to_string(),
            dex_a_first,
            intermediate_amount,
            final_amount,
        })
    }

    /// Quotes both directions and returns the better round trip.
    pub async fn compare(&self, token_in: Address, token_out: Address, amount_in: U256) -> ScaffoldResult<ArbitrageQuote> {
        if amount_in.is_zero() {
            return Err(ScaffoldError::invalid("amount", "must be greater than zero"));
        }
        let (a_then_b, b_then_a) = tokio::try_join!(
            self.round_trip(true, token_in, token_out, amount_in),
            self.round_trip(false, token_in, token_out, amount_in),
        )?;

        info!(
            "⚖️  {}→{}: {} | {}→{}: {} (in {})",
            a_then_b.buy_venue, a_then_b.sell_venue, a_then_b.final_amount,
            b_then_a.buy_venue, b_then_a.sell_venue, b_then_a.final_amount,
            amount_in
        );

        Ok(if b_then_a.final_amount > a_then_b.final_amount { b_then_a } else { a_then_b })
    }

    pub async fn execute_arbitrage(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
    ) -> ScaffoldResult<ArbitrageExecuted> {
        let quote = self.compare(token_in, token_out, amount_in).await?;
        if quote.profit().is_none() {
            warn!("Round trip returns {} for {} in", quote.final_amount, amount_in);
            return Err(ScaffoldError::ArbitrageNotProfitable);
        }

        let (buy, sell) = self.legs(quote.dex_a_first);

        let received = buy
            .swap(token_in, token_out, amount_in, apply_slippage_down(quote.intermediate_amount, self.slippage_bps))
            .await?;
        // second leg must return more than was spent
        let final_amount = sell
            .swap(token_out, token_in, received, amount_in + U256::from(1))
            .await?;

        let event = ArbitrageExecuted {
            id: uuid::Uuid::new_v4().to_string(),
            token_in,
            token_out,
            amount_in,
            profit: final_amount - amount_in,
            timestamp: Utc::now(),
        };
        info!(
            arbitrage_id = %event.id,
            profit = %event.profit,
            buy = %quote.buy_venue,
            sell = %quote.sell_venue,
            "ArbitrageExecuted"
        );
        // no subscribers is fine
        let _ = self.events.send(event.clone());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrage::{MockDex, RATE_ONE};
    use alloy::primitives::address;

    const WETH: Address = address!("1111111111111111111111111111111111111111");
    const DAI: Address = address!("2222222222222222222222222222222222222222");

    fn rate(milli: u64) -> U256 {
        U256::from(RATE_ONE) * U256::from(milli) / U256::from(1_000u64)
    }

    #[tokio::test]
    async fn compare_picks_the_better_direction() {
        let a = Arc::new(MockDex::new("A"));
        let b = Arc::new(MockDex::new("B"));
        a.set_rate(WETH, DAI, rate(2_000)).await;
        a.set_rate(DAI, WETH, rate(500)).await;
        b.set_rate(WETH, DAI, rate(2_200)).await;
        b.set_rate(DAI, WETH, rate(480)).await;

        let bot = ArbitrageBot::new(a, b, 50);
        let quote = bot.compare(WETH, DAI, U256::from(1_000u64)).await.unwrap();
        // B then A: 1000 * 2.2 * 0.5 = 1100; A then B: 1000 * 2.0 * 0.48 = 960
        assert_eq!(quote.buy_venue, "B");
        assert_eq!(quote.final_amount, U256::from(1_100u64));
        assert_eq!(quote.profit(), Some(U256::from(100u64)));
    }

    #[tokio::test]
    async fn same_named_venues_trade_the_quoted_direction() {
        let a = Arc::new(MockDex::new("uni"));
        let b = Arc::new(MockDex::new("uni"));
        a.set_rate(WETH, DAI, rate(2_000)).await;
        a.set_rate(DAI, WETH, rate(500)).await;
        b.set_rate(WETH, DAI, rate(2_200)).await;
        b.set_rate(DAI, WETH, rate(480)).await;
        let bot = ArbitrageBot::new(a.clone(), b.clone(), 50);

        let quote = bot.compare(WETH, DAI, U256::from(1_000u64)).await.unwrap();
        assert!(!quote.dex_a_first);

        let executed = bot.execute_arbitrage(WETH, DAI, U256::from(1_000u64)).await.unwrap();
        assert_eq!(executed.profit, U256::from(100u64));
        assert_eq!(a.swaps_executed(), 1);
        assert_eq!(b.swaps_executed(), 1);
    }

    #[tokio::test]
    async fn zero_amount_is_rejected() {
        let bot = ArbitrageBot::new(Arc::new(MockDex::new("A")), Arc::new(MockDex::new("B")), 50);
        assert!(bot.compare(WETH, DAI, U256::ZERO).await.is_err());
    }
}
