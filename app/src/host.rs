//! Drives the configured strategies over one data bundle, the way a
//! scheduling host would on each interval.

use anyhow::{Context, Result};
use core_types::{DataBundle, Interval, Symbol, StrategyConfig, TargetAllocation};
use serde::Serialize;
use std::path::Path;

/// The outcome of one strategy run.
#[derive(Debug, Serialize)]
pub struct StrategyReport {
    /// The configured name, e.g. "volatility_momentum".
    pub strategy: String,
    pub interval: Interval,
    pub allocation: TargetAllocation,
}

/// What a strategy asks its host for at setup.
#[derive(Debug, Serialize)]
pub struct AssetListing {
    pub strategy: String,
    pub interval: Interval,
    pub assets: Vec<Symbol>,
}

pub fn load_bundle(path: &Path) -> Result<DataBundle> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data bundle {}", path.display()))?;
    let bundle = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse data bundle {}", path.display()))?;
    Ok(bundle)
}

/// Keeps only the configs named `only`, or all of them when `only` is `None`.
pub fn select<'a>(configs: &'a [StrategyConfig], only: Option<&str>) -> Result<Vec<&'a StrategyConfig>> {
    let selected: Vec<_> = configs
        .iter()
        .filter(|config| only.is_none_or(|name| config.name == name))
        .collect();
    if selected.is_empty() {
        match only {
            Some(name) => anyhow::bail!("Strategy '{name}' is not configured."),
            None => anyhow::bail!("Cannot run: No strategies are configured in settings."),
        }
    }
    Ok(selected)
}

/// Runs every selected strategy once over `bundle`.
pub fn evaluate(configs: &[&StrategyConfig], bundle: &DataBundle) -> Result<Vec<StrategyReport>> {
    let mut reports = Vec::with_capacity(configs.len());
    for config in configs {
        let strategy = strategies::create_strategy(config)
            .with_context(|| format!("Failed to create strategy '{}'", config.name))?;
        tracing::info!(strategy = strategy.name(), assets = strategy.assets().len(), "Evaluating strategy");

        let allocation = strategy
            .run(bundle)
            .with_context(|| format!("Strategy '{}' failed", config.name))?;
        reports.push(StrategyReport {
            strategy: config.name.clone(),
            interval: strategy.interval(),
            allocation,
        });
    }
    Ok(reports)
}

pub fn list_assets(configs: &[&StrategyConfig]) -> Result<Vec<AssetListing>> {
    configs
        .iter()
        .map(|config| {
            let strategy = strategies::create_strategy(config)?;
            Ok(AssetListing {
                strategy: config.name.clone(),
                interval: strategy.interval(),
                assets: strategy.assets().to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configs() -> Vec<StrategyConfig> {
        vec![
            StrategyConfig::new("price_filtered_rsi_macd"),
            StrategyConfig::new("volatility_momentum"),
        ]
    }

    #[test]
    fn selects_a_single_strategy_by_name() {
        let configs = configs();
        let selected = select(&configs, Some("volatility_momentum")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "volatility_momentum");

        assert_eq!(select(&configs, None).unwrap().len(), 2);
        assert!(select(&configs, Some("missing")).is_err());
        assert!(select(&[], None).is_err());
    }

    #[test]
    fn empty_bundle_yields_empty_allocations() {
        let configs = configs();
        let selected = select(&configs, None).unwrap();
        let reports = evaluate(&selected, &DataBundle::new()).unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.allocation.is_empty()));
        assert!(reports.iter().all(|r| r.interval == Interval::OneDay));
    }

    #[test]
    fn lists_default_assets() {
        let configs = configs();
        let selected = select(&configs, None).unwrap();
        let listings = list_assets(&selected).unwrap();

        let names: Vec<&str> = listings[0].assets.iter().map(Symbol::as_str).collect();
        assert_eq!(names, ["AAPL", "AMD", "NVDA"]);
        assert_eq!(listings[1].assets.len(), 3);
    }
}
