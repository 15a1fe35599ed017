// In crates/strategies/src/types.rs

use crate::{Error, Result};
use core_types::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settings for the price-filtered RSI/MACD strategy.
///
/// Only tickers whose latest close is at or below `low_price_threshold` are
/// considered for a buy.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PriceFilterSettings {
    pub tickers: Vec<Symbol>,
    pub low_price_threshold: Decimal,

    pub rsi_period: u32,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,

    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,

    /// Fixed weight given on a buy signal. Not normalized across tickers.
    pub buy_weight: f64,
    /// Bars required before a ticker is evaluated at all.
    pub min_bars: usize,
}

impl Default for PriceFilterSettings {
    fn default() -> Self {
        Self {
            tickers: vec!["AAPL".into(), "AMD".into(), "NVDA".into()],
            low_price_threshold: Decimal::from(50),
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            buy_weight: 0.1,
            min_bars: 1,
        }
    }
}

impl PriceFilterSettings {
    pub fn validate(&self) -> Result<()> {
        if self.tickers.is_empty() {
            return Err(Error::InvalidParameters("tickers must not be empty".into()));
        }
        if self.rsi_period == 0 {
            return Err(Error::InvalidParameters("rsi_period must be positive".into()));
        }
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(Error::InvalidParameters(format!(
                "rsi_oversold ({}) must be below rsi_overbought ({})",
                self.rsi_oversold, self.rsi_overbought
            )));
        }
        if !(0.0..=1.0).contains(&self.buy_weight) {
            return Err(Error::InvalidParameters(format!(
                "buy_weight must be within [0, 1], got {}",
                self.buy_weight
            )));
        }
        validate_macd(self.macd_fast, self.macd_slow, self.macd_signal)
    }

    pub fn exceeds_price_ceiling(&self, close: Decimal) -> bool {
        close > self.low_price_threshold
    }
}

/// Settings for the volatility/momentum equal-weight strategy.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VolatilityMomentumSettings {
    pub assets: Vec<Symbol>,
    /// ATR must be strictly above this for an asset to be bought.
    pub min_atr: f64,
    /// The MACD histogram must be strictly above this for an asset to be bought.
    pub histogram_buy_threshold: f64,

    pub atr_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,

    pub min_bars: usize,
}

impl Default for VolatilityMomentumSettings {
    fn default() -> Self {
        Self {
            assets: vec!["PENNY1".into(), "PENNY2".into(), "PENNY3".into()],
            min_atr: 0.05,
            histogram_buy_threshold: 0.0,
            atr_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            min_bars: 30,
        }
    }
}

impl VolatilityMomentumSettings {
    pub fn validate(&self) -> Result<()> {
        if self.assets.is_empty() {
            return Err(Error::InvalidParameters("assets must not be empty".into()));
        }
        if self.atr_period == 0 {
            return Err(Error::InvalidParameters("atr_period must be positive".into()));
        }
        validate_macd(self.macd_fast, self.macd_slow, self.macd_signal)
    }

    /// The weight each qualifying asset receives: an equal share of the whole list.
    pub fn equal_weight(&self) -> f64 {
        1.0 / self.assets.len() as f64
    }
}

fn validate_macd(fast: u32, slow: u32, signal: u32) -> Result<()> {
    if fast == 0 || slow == 0 || signal == 0 {
        return Err(Error::InvalidParameters("MACD periods must be positive".into()));
    }
    if fast >= slow {
        return Err(Error::InvalidParameters(format!(
            "macd_fast ({fast}) must be shorter than macd_slow ({slow})"
        )));
    }
    Ok(())
}
