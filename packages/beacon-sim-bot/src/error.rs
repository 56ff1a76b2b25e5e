use cosmwasm_std::StdError;
use thiserror::Error;

/// Failure of a single round submission.
///
/// `E` is the error type of the injected executor, passed through untouched.
#[derive(Error, Debug)]
pub enum SubmitError<E>
where
    E: std::error::Error + 'static,
{
    #[error("no data source for round {round} available")]
    RoundUnavailable { round: u64 },

    #[error("failed to encode message: {0}")]
    Encode(#[from] StdError),

    #[error("transaction failed: {0}")]
    Transaction(#[source] E),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting: {field}")]
    Missing { field: String },

    #[error("invalid address for {field}: {value:?}")]
    InvalidAddress { field: String, value: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
