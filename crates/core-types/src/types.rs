// In crates/core-types/src/types.rs

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// A tradable asset identifier, e.g. "AAPL".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One OHLCV record for a single time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kline {
    #[serde(alias = "date")]
    pub open_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// The data interval a strategy asks its host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "4hour")]
    FourHours,
    #[serde(rename = "1day")]
    OneDay,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1min",
            Interval::FiveMinutes => "5min",
            Interval::OneHour => "1hour",
            Interval::FourHours => "4hour",
            Interval::OneDay => "1day",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1min" => Ok(Interval::OneMinute),
            "5min" => Ok(Interval::FiveMinutes),
            "1hour" => Ok(Interval::OneHour),
            "4hour" => Ok(Interval::FourHours),
            "1day" => Ok(Interval::OneDay),
            other => Err(Error::InvalidInterval(other.to_string())),
        }
    }
}

/// The market data handed to a strategy for one evaluation, keyed by series kind.
///
/// Only the `ohlcv` kind exists. Each series is chronological, newest bar last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataBundle {
    #[serde(default)]
    pub ohlcv: HashMap<Symbol, Vec<Kline>>,
}

impl DataBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the OHLCV series for `symbol`. A ticker the host sent no data for
    /// reads as an empty series.
    pub fn series(&self, symbol: &Symbol) -> &[Kline] {
        self.ohlcv.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert_series(&mut self, symbol: Symbol, klines: Vec<Kline>) {
        self.ohlcv.insert(symbol, klines);
    }
}

/// Target portfolio weights produced by one strategy run.
///
/// A ticker that is absent means "no change requested" for this run, which is
/// distinct from an explicit weight of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetAllocation {
    weights: BTreeMap<Symbol, f64>,
}

impl TargetAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, symbol: Symbol, weight: f64) {
        self.weights.insert(symbol, weight);
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.weights.get(symbol).copied()
    }

    /// The weight for `symbol`, reading an omitted ticker as 0.
    pub fn weight(&self, symbol: &str) -> f64 {
        self.get(symbol).unwrap_or(0.0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.weights.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights; the fraction of the portfolio the run wants invested.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, f64)> {
        self.weights.iter().map(|(symbol, weight)| (symbol, *weight))
    }
}

impl fmt::Display for TargetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (symbol, weight)) in self.weights.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}: {weight}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_series_reads_as_empty() {
        let bundle = DataBundle::new();
        assert!(bundle.series(&Symbol::from("AAPL")).is_empty());
    }

    #[test]
    fn bundle_parses_from_host_json() {
        let raw = r#"{
            "ohlcv": {
                "AAPL": [
                    {"date": "2024-01-02T00:00:00Z", "open": 44.0, "high": 46.5, "low": 43.5, "close": 45.0, "volume": 1200}
                ]
            }
        }"#;
        let bundle: DataBundle = serde_json::from_str(raw).unwrap();
        let series = bundle.series(&Symbol::from("AAPL"));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].close, dec!(45));
        assert_eq!(series[0].volume, dec!(1200));
    }

    #[test]
    fn omitted_ticker_has_zero_weight_but_is_absent() {
        let mut allocation = TargetAllocation::new();
        allocation.set(Symbol::from("PENNY1"), 0.5);

        assert_eq!(allocation.get("PENNY1"), Some(0.5));
        assert_eq!(allocation.get("PENNY2"), None);
        assert_eq!(allocation.weight("PENNY2"), 0.0);
        assert!(!allocation.contains("PENNY2"));
        assert_eq!(allocation.to_string(), "{PENNY1: 0.5}");
    }

    #[test]
    fn allocation_serializes_as_plain_map() {
        let mut allocation = TargetAllocation::new();
        allocation.set(Symbol::from("AMD"), 0.0);
        allocation.set(Symbol::from("AAPL"), 0.1);
        let json = serde_json::to_string(&allocation).unwrap();
        assert_eq!(json, r#"{"AAPL":0.1,"AMD":0.0}"#);
    }

    #[test]
    fn interval_round_trips_through_its_name() {
        assert_eq!("1day".parse::<Interval>(), Ok(Interval::OneDay));
        assert_eq!(Interval::OneDay.to_string(), "1day");
        assert_eq!(
            "1week".parse::<Interval>(),
            Err(Error::InvalidInterval("1week".to_string()))
        );
    }
}
