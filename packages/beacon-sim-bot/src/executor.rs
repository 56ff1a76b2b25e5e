use std::sync::Arc;

use async_trait::async_trait;
use beacon_sim_common::ExecuteResult;
use cosmwasm_std::Binary;
use serde::{Deserialize, Serialize};

/// How the fee of a transaction is chosen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Fee {
    /// Simulate, then pay the client's default gas price.
    #[default]
    Auto,
    /// Simulate and scale the estimated gas by this factor.
    Multiplier(f64),
}

/// Signs, broadcasts and waits for inclusion of a contract execution.
///
/// The signing key is owned by the implementation. Retries and timeouts, if
/// any, belong here too: callers treat `execute` as one atomic step.
#[async_trait]
pub trait TxExecutor: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn execute(
        &self,
        sender: &str,
        contract: &str,
        msg: Binary,
        fee: Fee,
    ) -> Result<ExecuteResult, Self::Error>;
}

#[async_trait]
impl<T: TxExecutor> TxExecutor for Arc<T> {
    type Error = T::Error;

    async fn execute(
        &self,
        sender: &str,
        contract: &str,
        msg: Binary,
        fee: Fee,
    ) -> Result<ExecuteResult, Self::Error> {
        (**self).execute(sender, contract, msg, fee).await
    }
}
