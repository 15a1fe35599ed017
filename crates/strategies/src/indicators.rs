// In crates/strategies/src/indicators.rs

//! Thin adapter over the `ta` crate.
//!
//! Every call recomputes the indicator over the full series from a fresh
//! instance and returns only the value at the most recent bar.

use crate::{Error, Result};
use core_types::Kline;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use ta::indicators::{
    AverageTrueRange, MovingAverageConvergenceDivergence as Macd, RelativeStrengthIndex as Rsi,
};
use ta::{DataItem, Next};

/// The latest MACD line, signal line and histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Converts klines into `ta` data items. The library validates each bar
/// (low <= open/close <= high, non-negative volume).
pub fn to_data_items(klines: &[Kline]) -> Result<Vec<DataItem>> {
    klines
        .iter()
        .enumerate()
        .map(|(index, kline)| {
            DataItem::builder()
                .open(to_f64(kline.open, index)?)
                .high(to_f64(kline.high, index)?)
                .low(to_f64(kline.low, index)?)
                .close(to_f64(kline.close, index)?)
                .volume(to_f64(kline.volume, index)?)
                .build()
                .map_err(|err| Error::InvalidBar {
                    index,
                    reason: format!("{err:?}"),
                })
        })
        .collect()
}

pub fn latest_rsi(klines: &[Kline], period: u32) -> Result<f64> {
    let mut rsi = Rsi::new(period as usize).map_err(|err| library_error("RSI", err))?;
    let items = to_data_items(klines)?;
    items
        .iter()
        .map(|item| rsi.next(item))
        .last()
        .ok_or(Error::EmptySeries("RSI"))
}

pub fn latest_macd(klines: &[Kline], fast: u32, slow: u32, signal: u32) -> Result<MacdValue> {
    let mut macd = Macd::new(fast as usize, slow as usize, signal as usize)
        .map_err(|err| library_error("MACD", err))?;
    let items = to_data_items(klines)?;
    items
        .iter()
        .map(|item| macd.next(item))
        .last()
        .map(|output| MacdValue {
            macd: output.macd,
            signal: output.signal,
            histogram: output.histogram,
        })
        .ok_or(Error::EmptySeries("MACD"))
}

pub fn latest_atr(klines: &[Kline], period: u32) -> Result<f64> {
    let mut atr =
        AverageTrueRange::new(period as usize).map_err(|err| library_error("ATR", err))?;
    let items = to_data_items(klines)?;
    items
        .iter()
        .map(|item| atr.next(item))
        .last()
        .ok_or(Error::EmptySeries("ATR"))
}

fn to_f64(value: Decimal, index: usize) -> Result<f64> {
    value.to_f64().ok_or_else(|| Error::InvalidBar {
        index,
        reason: format!("{value} is not representable as f64"),
    })
}

fn library_error(indicator: &'static str, err: ta::errors::TaError) -> Error {
    Error::Indicator {
        indicator,
        reason: format!("{err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::prelude::FromPrimitive;

    fn bars(closes: &[f64], spread: f64) -> Vec<Kline> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| Kline {
                open_time: start + Duration::days(i as i64),
                open: Decimal::from_f64(*close).unwrap(),
                high: Decimal::from_f64(close + spread).unwrap(),
                low: Decimal::from_f64(close - spread).unwrap(),
                close: Decimal::from_f64(*close).unwrap(),
                volume: Decimal::from(1_000),
            })
            .collect()
    }

    #[test]
    fn rsi_saturates_on_a_steady_rise() {
        let closes: Vec<f64> = (0..40).map(|i| 10.0 + i as f64).collect();
        let rsi = latest_rsi(&bars(&closes, 0.5), 14).unwrap();
        assert!(rsi > 99.0, "rsi = {rsi}");
    }

    #[test]
    fn rsi_bottoms_out_on_a_steady_fall() {
        let closes: Vec<f64> = (0..40).map(|i| 50.0 - i as f64).collect();
        let rsi = latest_rsi(&bars(&closes, 0.5), 14).unwrap();
        assert!(rsi < 1.0, "rsi = {rsi}");
    }

    #[test]
    fn macd_histogram_is_line_minus_signal() {
        let closes: Vec<f64> = (0..40).map(|i| 1.0 + 0.005 * (i * i) as f64).collect();
        let macd = latest_macd(&bars(&closes, 0.1), 12, 26, 9).unwrap();
        assert!(macd.macd > 0.0);
        assert!(macd.histogram > 0.0);
        assert!((macd.histogram - (macd.macd - macd.signal)).abs() < 1e-9);
    }

    #[test]
    fn atr_tracks_the_bar_range_on_flat_prices() {
        let closes = vec![5.0; 30];
        let atr = latest_atr(&bars(&closes, 0.25), 14).unwrap();
        assert!((atr - 0.5).abs() < 1e-9, "atr = {atr}");
    }

    #[test]
    fn empty_series_is_an_error() {
        assert!(matches!(latest_rsi(&[], 14), Err(Error::EmptySeries("RSI"))));
        assert!(matches!(latest_atr(&[], 14), Err(Error::EmptySeries("ATR"))));
    }

    #[test]
    fn zero_period_is_rejected_by_the_library() {
        let closes = vec![5.0; 5];
        let result = latest_rsi(&bars(&closes, 0.1), 0);
        assert!(matches!(result, Err(Error::Indicator { indicator: "RSI", .. })));
    }

    #[test]
    fn malformed_bar_is_reported_with_its_index() {
        let mut klines = bars(&[5.0, 5.0, 5.0], 0.1);
        klines[2].low = Decimal::from(9);
        let result = to_data_items(&klines);
        assert!(matches!(result, Err(Error::InvalidBar { index: 2, .. })));
    }
}
