use serde::Deserialize;
use toml::Value;

/// One configured strategy: its registered name and its parameter table.
#[derive(Deserialize, Debug, Clone)]
pub struct StrategyConfig {
    pub name: String,
    // This will hold the `params = { ... }` table from the TOML
    #[serde(default = "empty_params")]
    pub params: Value,
}

impl StrategyConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: empty_params(),
        }
    }
}

fn empty_params() -> Value {
    Value::Table(Default::default())
}
