// In crates/strategies/src/decision.rs

//! The allocation decision tables, as pure functions over the latest price
//! and indicator values. Nothing here touches the indicator library.

use crate::types::{PriceFilterSettings, VolatilityMomentumSettings};
use rust_decimal::Decimal;

/// What a decision table asks for one ticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Set the ticker's weight to this value.
    Target(f64),
    /// Keep whatever weight the current run already holds for the ticker.
    Hold,
}

/// Price-filtered RSI/MACD table.
///
/// | condition                                  | decision            |
/// |--------------------------------------------|---------------------|
/// | close > price threshold                    | `Target(0)`         |
/// | RSI < oversold and MACD signal line > 0    | `Target(buy_weight)`|
/// | RSI > overbought                           | `Target(0)`         |
/// | otherwise                                  | `Hold`              |
pub fn price_filtered_rsi_macd(
    close: Decimal,
    rsi: f64,
    macd_signal: f64,
    settings: &PriceFilterSettings,
) -> Decision {
    if settings.exceeds_price_ceiling(close) {
        return Decision::Target(0.0);
    }

    if rsi < settings.rsi_oversold && macd_signal > 0.0 {
        Decision::Target(settings.buy_weight)
    } else if rsi > settings.rsi_overbought {
        Decision::Target(0.0)
    } else {
        Decision::Hold
    }
}

/// Volatility/momentum table: an equal share of the asset list when ATR and
/// the MACD histogram both clear their thresholds, zero otherwise.
pub fn volatility_momentum(atr: f64, histogram: f64, settings: &VolatilityMomentumSettings) -> f64 {
    if atr > settings.min_atr && histogram > settings.histogram_buy_threshold {
        settings.equal_weight()
    } else {
        0.0
    }
}
