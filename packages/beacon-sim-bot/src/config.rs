use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::executor::Fee;

pub const ENV_SENDER: &str = "BEACON_SIM_SENDER";
pub const ENV_TARGET: &str = "BEACON_SIM_TARGET";
pub const ENV_GAS_MULTIPLIER: &str = "BEACON_SIM_GAS_MULTIPLIER";

/// Settings a submitter is connected with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmitterConfig {
    /// Address the transactions are signed and sent from
    pub sender_address: String,
    /// Contract receiving the rounds
    pub target_address: String,
    #[serde(default)]
    pub fee: Fee,
}

impl SubmitterConfig {
    pub fn new(sender_address: impl Into<String>, target_address: impl Into<String>) -> Self {
        Self {
            sender_address: sender_address.into(),
            target_address: target_address.into(),
            fee: Fee::Auto,
        }
    }

    pub fn from_json(raw: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Read `BEACON_SIM_SENDER`, `BEACON_SIM_TARGET` and the optional
    /// `BEACON_SIM_GAS_MULTIPLIER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ConfigError::Missing {
                field: key.to_string(),
            })
        };
        let sender_address = required(ENV_SENDER)?;
        let target_address = required(ENV_TARGET)?;
        let fee = match lookup(ENV_GAS_MULTIPLIER) {
            None => Fee::Auto,
            Some(raw) => {
                let factor = raw.parse::<f64>().map_err(|e| ConfigError::InvalidValue {
                    field: ENV_GAS_MULTIPLIER.to_string(),
                    reason: e.to_string(),
                })?;
                Fee::Multiplier(factor)
            }
        };
        Ok(Self {
            sender_address,
            target_address,
            fee,
        })
    }

    /// Check the settings and extract the identity a submitter acts under.
    pub fn validate(&self) -> Result<SubmitterIdentity, ConfigError> {
        let sender_address = validate_address("sender_address", &self.sender_address)?;
        let target_address = validate_address("target_address", &self.target_address)?;
        if let Fee::Multiplier(factor) = self.fee {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "fee".to_string(),
                    reason: format!("gas multiplier must be positive, got {}", factor),
                });
            }
        }
        Ok(SubmitterIdentity {
            sender_address,
            target_address,
        })
    }
}

fn validate_address(field: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Missing {
            field: field.to_string(),
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidAddress {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Who submits, and where to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitterIdentity {
    sender_address: String,
    target_address: String,
}

impl SubmitterIdentity {
    pub fn sender_address(&self) -> &str {
        &self.sender_address
    }

    pub fn target_address(&self) -> &str {
        &self.target_address
    }
}
