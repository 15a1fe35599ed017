// In crates/strategies/src/volatility_momentum.rs

use crate::decision;
use crate::indicators;
use crate::types::VolatilityMomentumSettings;
use crate::{Result, Strategy};
use core_types::{DataBundle, Interval, Symbol, TargetAllocation};

/// Equal-weights every asset that is both volatile (ATR) and gaining momentum
/// (MACD histogram).
#[derive(Debug, Clone)]
pub struct VolatilityMomentum {
    settings: VolatilityMomentumSettings,
}

impl VolatilityMomentum {
    /// Creates a new instance after checking the settings.
    pub fn new(settings: VolatilityMomentumSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &VolatilityMomentumSettings {
        &self.settings
    }
}

impl Strategy for VolatilityMomentum {
    fn name(&self) -> &'static str {
        "VolatilityMomentum"
    }

    fn assets(&self) -> &[Symbol] {
        &self.settings.assets
    }

    fn interval(&self) -> Interval {
        Interval::OneDay
    }

    fn run(&self, data: &DataBundle) -> Result<TargetAllocation> {
        let mut allocation = TargetAllocation::new();

        for asset in &self.settings.assets {
            let klines = data.series(asset);
            if klines.len() < self.settings.min_bars {
                tracing::info!(%asset, bars = klines.len(), required = self.settings.min_bars, "Not enough data");
                continue;
            }

            let atr = indicators::latest_atr(klines, self.settings.atr_period)
                .map_err(|e| e.for_symbol(asset))?;
            let macd = indicators::latest_macd(
                klines,
                self.settings.macd_fast,
                self.settings.macd_slow,
                self.settings.macd_signal,
            )
            .map_err(|e| e.for_symbol(asset))?;

            let weight = decision::volatility_momentum(atr, macd.histogram, &self.settings);
            tracing::debug!(%asset, atr, histogram = macd.histogram, weight, "Evaluated asset");
            allocation.set(asset.clone(), weight);
        }

        tracing::info!(strategy = self.name(), allocations = %allocation, "Allocations");

        Ok(allocation)
    }
}
