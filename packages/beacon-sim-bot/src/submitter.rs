use beacon_sim_common::{BeaconFixture, DrandExecuteMsg, ExecuteResult};
use cosmwasm_std::{to_json_binary, Binary};
use tracing::{debug, info, warn};

use crate::config::{SubmitterConfig, SubmitterIdentity};
use crate::error::{ConfigError, SubmitError};
use crate::executor::{Fee, TxExecutor};
use crate::payload::{RoundPayload, SignedRound, VerifiedRound};

/// Submits raw signed rounds to a signature-verifying target.
pub type Bot<C> = RoundSubmitter<C, SignedRound>;

/// Submits pre-verified rounds to a trusting gateway.
pub type MockBot<C> = RoundSubmitter<C, VerifiedRound>;

/// Feeds fixture rounds into one target contract.
///
/// The cursor starts at the first fixture round. `submit_next` moves it
/// forward before the submission is attempted, so a failed call still
/// consumes its round. Callers needing gap-free delivery retry with
/// `submit_round`.
pub struct RoundSubmitter<C, P> {
    identity: SubmitterIdentity,
    fee: Fee,
    client: C,
    payload: P,
    fixture: BeaconFixture,
    next_round: u64,
}

impl<C, P> RoundSubmitter<C, P>
where
    C: TxExecutor,
    P: RoundPayload,
{
    /// Validate `config` and bind it to `client`. Fails before any call is
    /// made if the config is incomplete.
    pub fn connect(config: &SubmitterConfig, client: C) -> Result<Self, ConfigError>
    where
        P: Default,
    {
        Self::with_payload(config, client, P::default())
    }

    pub fn with_payload(
        config: &SubmitterConfig,
        client: C,
        payload: P,
    ) -> Result<Self, ConfigError> {
        let identity = config.validate()?;
        let fixture = BeaconFixture::reference();
        info!(
            sender = identity.sender_address(),
            target = identity.target_address(),
            kind = P::KIND,
            "connected round submitter"
        );
        Ok(Self {
            identity,
            fee: config.fee,
            client,
            payload,
            next_round: fixture.first_round(),
            fixture,
        })
    }

    /// Serve rounds from `fixture` instead of the reference dataset. Resets
    /// the cursor to its first round.
    pub fn with_fixture(mut self, fixture: BeaconFixture) -> Self {
        self.next_round = fixture.first_round();
        self.fixture = fixture;
        self
    }

    /// Round the next `submit_next` call will submit.
    pub fn next_round(&self) -> u64 {
        self.next_round
    }

    pub fn identity(&self) -> &SubmitterIdentity {
        &self.identity
    }

    pub fn fixture(&self) -> &BeaconFixture {
        &self.fixture
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Submit the round under the cursor and advance the cursor.
    pub async fn submit_next(&mut self) -> Result<ExecuteResult, SubmitError<C::Error>> {
        let round = self.next_round;
        self.next_round = round.saturating_add(1);
        self.submit_round(round).await
    }

    /// Submit `round` without touching the cursor.
    pub async fn submit_round(&self, round: u64) -> Result<ExecuteResult, SubmitError<C::Error>> {
        let beacon = self
            .fixture
            .lookup(round)
            .ok_or(SubmitError::RoundUnavailable { round })?;
        let msg = to_json_binary(&self.payload.build(beacon))?;

        debug!(
            round,
            kind = P::KIND,
            target = self.identity.target_address(),
            "submitting beacon round"
        );
        self.execute(msg).await
    }

    async fn execute(&self, msg: Binary) -> Result<ExecuteResult, SubmitError<C::Error>> {
        let result = self
            .client
            .execute(
                self.identity.sender_address(),
                self.identity.target_address(),
                msg,
                self.fee,
            )
            .await
            .map_err(|err| {
                warn!(error = %err, target = self.identity.target_address(), "transaction failed");
                SubmitError::Transaction(err)
            })?;
        debug!(tx = %result.transaction_hash, height = result.height, "transaction included");
        Ok(result)
    }
}

impl<C: TxExecutor> RoundSubmitter<C, SignedRound> {
    /// Register the sender as a named data feeder with the target.
    pub async fn register(&self, moniker: &str) -> Result<ExecuteResult, SubmitError<C::Error>> {
        let msg = to_json_binary(&DrandExecuteMsg::RegisterBot {
            moniker: moniker.to_string(),
        })?;
        info!(moniker, target = self.identity.target_address(), "registering bot");
        self.execute(msg).await
    }
}
