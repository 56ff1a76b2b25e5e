use beacon_sim_common::{Beacon, DrandExecuteMsg, GatewayExecuteMsg};
use serde::Serialize;

/// Turns a beacon into the execute message a particular kind of target
/// accepts.
pub trait RoundPayload: Send + Sync {
    type Msg: Serialize;

    /// Message name, used in logs.
    const KIND: &'static str;

    fn build(&self, beacon: &Beacon) -> Self::Msg;
}

/// Raw round: signature and previous signature, the target derives the
/// randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedRound;

impl RoundPayload for SignedRound {
    type Msg = DrandExecuteMsg;

    const KIND: &'static str = "add_round";

    fn build(&self, beacon: &Beacon) -> DrandExecuteMsg {
        DrandExecuteMsg::AddRound {
            round: beacon.round,
            signature: beacon.signature.to_string(),
            previous_signature: beacon.previous_signature.to_string(),
        }
    }
}

/// Pre-verified round: randomness only, for gateways trusting the submitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifiedRound;

impl RoundPayload for VerifiedRound {
    type Msg = GatewayExecuteMsg;

    const KIND: &'static str = "add_verified_round";

    fn build(&self, beacon: &Beacon) -> GatewayExecuteMsg {
        GatewayExecuteMsg::AddVerifiedRound {
            round: beacon.round,
            randomness: beacon.randomness.to_string(),
        }
    }
}
