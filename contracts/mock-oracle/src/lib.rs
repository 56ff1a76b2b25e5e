//! Test-mode randomness oracle.
//!
//! Accepts beacon rounds from bots, either raw (`add_round`) or pre-verified
//! by a trusted gateway submitter (`add_verified_round`), and answers
//! randomness requests with `processed` or `queued`. Deliveries go out as IBC
//! packets on the configured channel. Signatures are not verified: the
//! randomness of a raw round is taken to be `sha256(signature)`.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
