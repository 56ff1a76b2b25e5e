use cosmwasm_schema::cw_serde;

/// Execute messages accepted by a target that verifies raw beacon signatures.
#[cw_serde]
pub enum DrandExecuteMsg {
    /// Submit a beacon round. The target derives the randomness itself.
    AddRound {
        round: u64,
        /// Hex-encoded BLS signature
        signature: String,
        /// Hex-encoded signature of the previous round
        previous_signature: String,
    },
    /// Register the sender as a named data feeder.
    RegisterBot { moniker: String },
}

/// Execute messages accepted by a gateway that trusts its submitter to have
/// verified the beacon off-chain.
#[cw_serde]
pub enum GatewayExecuteMsg {
    AddVerifiedRound {
        round: u64,
        /// Hex-encoded 32 byte randomness
        randomness: String,
    },
}
