// In crates/strategies/src/price_filter.rs

use crate::decision::{self, Decision};
use crate::indicators;
use crate::types::PriceFilterSettings;
use crate::{Result, Strategy};
use core_types::{DataBundle, Interval, Symbol, TargetAllocation};

/// Buys oversold, low-priced tickers with a fixed weight.
///
/// A ticker is only looked at when its latest close is at or below the
/// configured price threshold. Below it, RSI and the MACD signal line decide
/// between buying, zeroing, or leaving the weight untouched.
#[derive(Debug, Clone)]
pub struct PriceFilteredRsiMacd {
    settings: PriceFilterSettings,
}

impl PriceFilteredRsiMacd {
    /// Creates a new instance after checking the settings.
    pub fn new(settings: PriceFilterSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &PriceFilterSettings {
        &self.settings
    }

    fn decide(&self, ticker: &Symbol, data: &DataBundle) -> Result<Option<Decision>> {
        let klines = data.series(ticker);
        let Some(latest) = klines.last() else {
            return Ok(None);
        };
        if klines.len() < self.settings.min_bars {
            return Ok(None);
        }

        // Above the ceiling the indicators are never computed.
        if self.settings.exceeds_price_ceiling(latest.close) {
            return Ok(Some(Decision::Target(0.0)));
        }

        let rsi = indicators::latest_rsi(klines, self.settings.rsi_period)
            .map_err(|e| e.for_symbol(ticker))?;
        let macd = indicators::latest_macd(
            klines,
            self.settings.macd_fast,
            self.settings.macd_slow,
            self.settings.macd_signal,
        )
        .map_err(|e| e.for_symbol(ticker))?;

        let decision = decision::price_filtered_rsi_macd(latest.close, rsi, macd.signal, &self.settings);
        tracing::debug!(%ticker, close = %latest.close, rsi, macd_signal = macd.signal, ?decision, "Evaluated ticker");
        Ok(Some(decision))
    }
}

impl Strategy for PriceFilteredRsiMacd {
    fn name(&self) -> &'static str {
        "PriceFilteredRsiMacd"
    }

    fn assets(&self) -> &[Symbol] {
        &self.settings.tickers
    }

    fn interval(&self) -> Interval {
        Interval::OneDay
    }

    fn run(&self, data: &DataBundle) -> Result<TargetAllocation> {
        let mut allocation = TargetAllocation::new();

        for ticker in &self.settings.tickers {
            let Some(decision) = self.decide(ticker, data)? else {
                continue;
            };
            let weight = match decision {
                Decision::Target(weight) => weight,
                // The map is rebuilt every run, so this is 0 unless the ticker is listed twice.
                Decision::Hold => allocation.weight(ticker.as_str()),
            };
            allocation.set(ticker.clone(), weight);
        }

        Ok(allocation)
    }
}
