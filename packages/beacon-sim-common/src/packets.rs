use cosmwasm_schema::cw_serde;
use cosmwasm_std::Timestamp;

/// Prefix of the source id the simulation attaches to every round it serves.
pub const TEST_MODE_SOURCE_PREFIX: &str = "test-mode";

/// `test-mode:<round>`
pub fn source_id(round: u64) -> String {
    format!("{}:{}", TEST_MODE_SOURCE_PREFIX, round)
}

/// Answer to a randomness request, mirroring the acknowledgement the
/// requesting chain receives.
#[cw_serde]
pub enum RequestOutcome {
    /// The round was available and a delivery packet was sent right away.
    Processed { source_id: String },
    /// The round is not available yet. Delivery follows once it is submitted.
    Queued { source_id: String },
}

impl RequestOutcome {
    pub fn source_id(&self) -> &str {
        match self {
            RequestOutcome::Processed { source_id } | RequestOutcome::Queued { source_id } => {
                source_id
            }
        }
    }

    /// Short tag used as the `outcome` attribute value.
    pub fn tag(&self) -> &'static str {
        match self {
            RequestOutcome::Processed { .. } => "processed",
            RequestOutcome::Queued { .. } => "queued",
        }
    }
}

/// Payload of the packet carrying randomness back to the requester.
#[cw_serde]
pub struct DeliverBeaconPacket {
    pub job_id: String,
    pub source_id: String,
    /// Hex-encoded 32 byte randomness
    pub randomness: String,
    pub published: Timestamp,
}
