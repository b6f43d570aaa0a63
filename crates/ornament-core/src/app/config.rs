//! DecoratorConfig - wrapper スタックの設定
//!
//! ```json
//! { "layers": [ { "kind": "timer" }, { "kind": "repeat", "times": 3 } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::wrappers::slow_down::DEFAULT_DELAY;

/// One wrapper layer. Listed outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerConfig {
    Timer,
    Debug,
    SlowDown {
        #[serde(default = "default_delay_millis")]
        millis: u64,
    },
    Repeat {
        times: u32,
    },
    Register,
}

fn default_delay_millis() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratorConfig {
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

impl DecoratorConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
