//! Off-chain bots feeding the simulated beacon rounds into a contract under
//! test.
//!
//! A [`RoundSubmitter`] walks the [`BeaconFixture`](beacon_sim_common::BeaconFixture)
//! round by round and hands each beacon, encoded by a [`RoundPayload`], to an
//! injected [`TxExecutor`]. [`Bot`] submits raw signatures, [`MockBot`]
//! submits pre-verified randomness.

pub mod config;
pub mod error;
pub mod executor;
pub mod payload;
pub mod submitter;

pub use config::{SubmitterConfig, SubmitterIdentity};
pub use error::{ConfigError, SubmitError};
pub use executor::{Fee, TxExecutor};
pub use payload::{RoundPayload, SignedRound, VerifiedRound};
pub use submitter::{Bot, MockBot, RoundSubmitter};
