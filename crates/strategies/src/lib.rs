// In crates/strategies/src/lib.rs

use core_types::{DataBundle, Interval, Symbol, TargetAllocation};

pub mod decision;
pub mod error;
pub mod factory;
pub mod indicators;
pub mod price_filter;
pub mod types;
pub mod volatility_momentum;

pub use error::{Error, Result};
pub use factory::{create_strategies, create_strategy};

/// The universal interface for an allocation strategy.
///
/// A strategy declares the assets and data interval it needs once, at setup.
/// The host then calls `run` once per interval with fresh market data and
/// receives the target portfolio weights for that interval.
///
/// Strategies hold no state between runs: the same `DataBundle` always
/// produces the same `TargetAllocation`.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    /// The tickers this strategy evaluates, in evaluation order.
    fn assets(&self) -> &[Symbol];

    /// The data interval the host should supply.
    fn interval(&self) -> Interval;

    /// Evaluates one interval of market data.
    ///
    /// Tickers with too little data are left out of the result. Errors from
    /// the indicator library (e.g. a malformed bar) are returned to the caller.
    fn run(&self, data: &DataBundle) -> Result<TargetAllocation>;
}
