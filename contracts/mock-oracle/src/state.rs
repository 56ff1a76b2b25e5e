use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
pub const BEACONS: Map<u64, StoredBeacon> = Map::new("beacons");
pub const LATEST_ROUND: Item<u64> = Item::new("latest_round");
pub const BOTS: Map<&Addr, Bot> = Map::new("bots");
/// Marks which bot submitted which round. The value is the submission time.
pub const SUBMISSIONS: Map<(u64, &Addr), Timestamp> = Map::new("submissions");
/// Round the next randomness request is served from.
pub const NEXT_JOB_ROUND: Item<u64> = Item::new("next_job_round");
/// Job ids waiting for a round that has not been added yet.
pub const PENDING_JOBS: Map<u64, Vec<String>> = Map::new("pending_jobs");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Channel the delivery packets are sent on
    pub delivery_channel: String,
    /// The only address allowed to add pre-verified rounds
    pub trusted_gateway_submitter: Option<Addr>,
}

#[cw_serde]
pub struct StoredBeacon {
    pub round: u64,
    /// Publish time of the round according to the simulated network
    pub published: Timestamp,
    /// Block time at which the round was added
    pub verified: Timestamp,
    /// 32 bytes, hex encoded
    pub randomness: String,
    /// Hex encoded signature; `None` for pre-verified rounds
    pub signature: Option<String>,
}

#[cw_serde]
pub struct Bot {
    pub moniker: String,
    pub rounds_added: u64,
}
