use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Timestamp;

use crate::state::{Bot, Config};

#[cw_serde]
pub struct InstantiateMsg {
    pub delivery_channel: String,
    pub trusted_gateway_submitter: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Add a raw round. Randomness is derived from the signature.
    AddRound {
        round: u64,
        signature: String,
        previous_signature: String,
    },
    /// Add a round verified off-chain (trusted submitter only).
    AddVerifiedRound { round: u64, randomness: String },
    RegisterBot { moniker: String },
    /// Ask for the next round of randomness. Stands in for the request packet
    /// a proxy would send.
    RequestBeacon { job_id: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(BeaconResponse)]
    Beacon { round: u64 },

    #[returns(u64)]
    LatestRound {},

    #[returns(BotResponse)]
    Bot { address: String },

    #[returns(Vec<String>)]
    JobsPending { round: u64 },
}

#[cw_serde]
pub struct QueriedBeacon {
    pub round: u64,
    pub published: Timestamp,
    pub verified: Timestamp,
    /// 32 bytes, hex encoded
    pub randomness: String,
}

#[cw_serde]
pub struct BeaconResponse {
    pub beacon: Option<QueriedBeacon>,
}

#[cw_serde]
pub struct BotResponse {
    pub bot: Option<Bot>,
}
