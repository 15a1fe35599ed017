use crate::price_filter::PriceFilteredRsiMacd;
use crate::types::{PriceFilterSettings, VolatilityMomentumSettings};
use crate::volatility_momentum::VolatilityMomentum;
use crate::{Error, Result, Strategy};
use core_types::StrategyConfig;

pub const PRICE_FILTERED_RSI_MACD: &str = "price_filtered_rsi_macd";
pub const VOLATILITY_MOMENTUM: &str = "volatility_momentum";

/// Builds one strategy from its configured name and `params` table.
pub fn create_strategy(config: &StrategyConfig) -> Result<Box<dyn Strategy + Send + Sync>> {
    let strategy: Box<dyn Strategy + Send + Sync> = match config.name.as_str() {
        PRICE_FILTERED_RSI_MACD => {
            let settings: PriceFilterSettings = config.params.clone().try_into()?;
            Box::new(PriceFilteredRsiMacd::new(settings)?)
        }
        VOLATILITY_MOMENTUM => {
            let settings: VolatilityMomentumSettings = config.params.clone().try_into()?;
            Box::new(VolatilityMomentum::new(settings)?)
        }
        unknown => return Err(Error::UnknownStrategy(unknown.to_string())),
    };
    Ok(strategy)
}

pub fn create_strategies(configs: &[StrategyConfig]) -> Result<Vec<Box<dyn Strategy + Send + Sync>>> {
    configs.iter().map(create_strategy).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Interval;

    #[test]
    fn builds_both_strategies_from_default_params() {
        let configs = vec![
            StrategyConfig::new(PRICE_FILTERED_RSI_MACD),
            StrategyConfig::new(VOLATILITY_MOMENTUM),
        ];
        let strategies = create_strategies(&configs).unwrap();

        assert_eq!(strategies[0].name(), "PriceFilteredRsiMacd");
        assert_eq!(strategies[0].assets().len(), 3);
        assert_eq!(strategies[1].name(), "VolatilityMomentum");
        assert_eq!(strategies[1].assets()[0].as_str(), "PENNY1");
        assert!(strategies.iter().all(|s| s.interval() == Interval::OneDay));
    }

    #[test]
    fn passes_params_through() {
        let mut config = StrategyConfig::new(VOLATILITY_MOMENTUM);
        config.params = toml::from_str(r#"assets = ["ABC"]"#).unwrap();
        let strategy = create_strategy(&config).unwrap();
        assert_eq!(strategy.assets().len(), 1);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let result = create_strategy(&StrategyConfig::new("moon_shot"));
        assert!(matches!(result, Err(Error::UnknownStrategy(name)) if name == "moon_shot"));
    }

    #[test]
    fn malformed_params_are_an_error() {
        let mut config = StrategyConfig::new(PRICE_FILTERED_RSI_MACD);
        config.params = toml::from_str(r#"rsi_period = "fourteen""#).unwrap();
        assert!(matches!(create_strategy(&config), Err(Error::Settings(_))));
    }

    #[test]
    fn invalid_params_are_rejected() {
        let mut config = StrategyConfig::new(PRICE_FILTERED_RSI_MACD);
        config.params = toml::from_str("rsi_oversold = 80.0").unwrap();
        assert!(matches!(create_strategy(&config), Err(Error::InvalidParameters(_))));
    }
}
