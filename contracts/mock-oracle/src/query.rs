use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::msg::{BeaconResponse, BotResponse, QueriedBeacon};
use crate::state::{BEACONS, BOTS, CONFIG, LATEST_ROUND, PENDING_JOBS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_beacon(deps: Deps, round: u64) -> StdResult<Binary> {
    let beacon = BEACONS.may_load(deps.storage, round)?.map(|b| QueriedBeacon {
        round: b.round,
        published: b.published,
        verified: b.verified,
        randomness: b.randomness,
    });
    to_json_binary(&BeaconResponse { beacon })
}

pub fn query_latest_round(deps: Deps) -> StdResult<Binary> {
    let round = LATEST_ROUND.may_load(deps.storage)?.unwrap_or(0);
    to_json_binary(&round)
}

pub fn query_bot(deps: Deps, address: String) -> StdResult<Binary> {
    let address = deps.api.addr_validate(&address)?;
    let bot = BOTS.may_load(deps.storage, &address)?;
    to_json_binary(&BotResponse { bot })
}

pub fn query_jobs_pending(deps: Deps, round: u64) -> StdResult<Binary> {
    let jobs = PENDING_JOBS.may_load(deps.storage, round)?.unwrap_or_default();
    to_json_binary(&jobs)
}
