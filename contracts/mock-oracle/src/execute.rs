use beacon_sim_common::fixture::derive_randomness;
use beacon_sim_common::{source_id, BeaconFixture, DeliverBeaconPacket, RequestOutcome};
use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, IbcMsg, IbcTimeout, MessageInfo, Response, StdResult,
    Storage, Timestamp,
};

use crate::error::ContractError;
use crate::state::{
    Bot, Config, StoredBeacon, BEACONS, BOTS, CONFIG, LATEST_ROUND, NEXT_JOB_ROUND, PENDING_JOBS,
    SUBMISSIONS,
};

pub const MAX_MONIKER_LEN: usize = 20;
pub const MAX_JOB_ID_LEN: usize = 64;
/// Lifetime of a delivery packet before the relayer may time it out.
pub const DELIVERY_TIMEOUT_SECONDS: u64 = 3 * 3600;

/// Add a raw round. Anyone may submit; a registered bot gets credited.
///
/// The signature is not verified, but it must chain to the stored previous
/// round if there is one.
pub fn add_round(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    round: u64,
    signature_hex: String,
    previous_signature_hex: String,
) -> Result<Response, ContractError> {
    let fixture = BeaconFixture::reference();
    check_min_round(&fixture, round)?;

    let signature = decode_hex("signature", &signature_hex)?;
    let previous_signature = decode_hex("previous_signature", &previous_signature_hex)?;

    if SUBMISSIONS.has(deps.storage, (round, &info.sender)) {
        return Err(ContractError::SubmissionExists { round });
    }

    // round >= first fixture round, so round - 1 cannot underflow
    if let Some(previous) = BEACONS.may_load(deps.storage, round - 1)? {
        if let Some(stored) = previous.signature {
            if decode_hex("signature", &stored)? != previous_signature {
                return Err(ContractError::InvalidSignature { round });
            }
        }
    }

    SUBMISSIONS.save(deps.storage, (round, &info.sender), &env.block.time)?;
    if let Some(mut bot) = BOTS.may_load(deps.storage, &info.sender)? {
        bot.rounds_added += 1;
        BOTS.save(deps.storage, &info.sender, &bot)?;
    }

    let randomness = derive_randomness(&signature);
    let mut response = Response::new()
        .add_attribute("action", "add_round")
        .add_attribute("round", round.to_string())
        .add_attribute("randomness", hex::encode(randomness))
        .add_attribute("bot", info.sender.to_string());

    if BEACONS.has(deps.storage, round) {
        return Ok(response.add_attribute("already_stored", "true"));
    }

    let config = CONFIG.load(deps.storage)?;
    let deliveries = store_beacon(
        deps.storage,
        &env,
        &config,
        StoredBeacon {
            round,
            published: fixture.publish_time(round),
            verified: env.block.time,
            randomness: hex::encode(randomness),
            signature: Some(hex::encode(&signature)),
        },
    )?;
    response = response
        .add_event(beacon_event(round, &randomness, &info.sender.to_string(), deliveries.len()))
        .add_messages(deliveries);
    Ok(response)
}

/// Add a round whose randomness was verified off-chain. Only the trusted
/// gateway submitter may call this; re-adding a stored round is a no-op.
pub fn add_verified_round(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    round: u64,
    randomness_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.trusted_gateway_submitter.as_ref() != Some(&info.sender) {
        return Err(ContractError::UnauthorizedAddVerifiedRound);
    }

    let fixture = BeaconFixture::reference();
    check_min_round(&fixture, round)?;

    let randomness: [u8; 32] = decode_hex("randomness", &randomness_hex)?
        .try_into()
        .map_err(|bytes: Vec<u8>| ContractError::InvalidRandomnessLength { got: bytes.len() })?;

    let response = Response::new()
        .add_attribute("action", "add_verified_round")
        .add_attribute("round", round.to_string())
        .add_attribute("randomness", hex::encode(randomness));

    if BEACONS.has(deps.storage, round) {
        return Ok(response.add_attribute("already_stored", "true"));
    }

    let deliveries = store_beacon(
        deps.storage,
        &env,
        &config,
        StoredBeacon {
            round,
            published: fixture.publish_time(round),
            verified: env.block.time,
            randomness: hex::encode(randomness),
            signature: None,
        },
    )?;
    Ok(response
        .add_event(beacon_event(round, &randomness, &info.sender.to_string(), deliveries.len()))
        .add_messages(deliveries))
}

pub fn register_bot(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    moniker: String,
) -> Result<Response, ContractError> {
    if moniker.is_empty() {
        return Err(ContractError::MonikerEmpty);
    }
    if moniker.chars().count() > MAX_MONIKER_LEN {
        return Err(ContractError::MonikerTooLong {
            max: MAX_MONIKER_LEN,
        });
    }

    let rounds_added = BOTS
        .may_load(deps.storage, &info.sender)?
        .map(|bot| bot.rounds_added)
        .unwrap_or(0);
    BOTS.save(
        deps.storage,
        &info.sender,
        &Bot {
            moniker: moniker.clone(),
            rounds_added,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "register_bot")
        .add_attribute("bot", info.sender.to_string())
        .add_attribute("moniker", moniker))
}

/// Serve a randomness request from the next round in line.
///
/// Requests take consecutive rounds starting at the first fixture round. If
/// the round is already stored the job is delivered right away, otherwise it
/// waits until the round is added.
pub fn request_beacon(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    job_id: String,
) -> Result<Response, ContractError> {
    if job_id.chars().count() > MAX_JOB_ID_LEN {
        return Err(ContractError::JobIdTooLong {
            max: MAX_JOB_ID_LEN,
        });
    }

    let round = NEXT_JOB_ROUND.load(deps.storage)?;
    NEXT_JOB_ROUND.save(deps.storage, &(round + 1))?;

    let mut response = Response::new();
    let outcome = match BEACONS.may_load(deps.storage, round)? {
        Some(beacon) => {
            let config = CONFIG.load(deps.storage)?;
            let packet = delivery_packet(&config, &env, job_id.clone(), &beacon)?;
            response = response.add_message(packet);
            RequestOutcome::Processed {
                source_id: source_id(round),
            }
        }
        None => {
            PENDING_JOBS.update(deps.storage, round, |jobs| -> StdResult<_> {
                let mut jobs = jobs.unwrap_or_default();
                jobs.push(job_id.clone());
                Ok(jobs)
            })?;
            RequestOutcome::Queued {
                source_id: source_id(round),
            }
        }
    };

    Ok(response
        .set_data(to_json_binary(&outcome)?)
        .add_attribute("action", "request_beacon")
        .add_attribute("job_id", job_id)
        .add_attribute("requester", info.sender.to_string())
        .add_attribute("outcome", outcome.tag())
        .add_attribute("source_id", outcome.source_id()))
}

fn check_min_round(fixture: &BeaconFixture, round: u64) -> Result<(), ContractError> {
    let min_round = fixture.first_round();
    if round < min_round {
        return Err(ContractError::RoundTooLow { round, min_round });
    }
    Ok(())
}

fn decode_hex(field: &str, value: &str) -> Result<Vec<u8>, ContractError> {
    hex::decode(value).map_err(|_| ContractError::InvalidHex {
        field: field.to_string(),
    })
}

/// Persist a new round and release the jobs waiting for it.
fn store_beacon(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
    beacon: StoredBeacon,
) -> Result<Vec<IbcMsg>, ContractError> {
    BEACONS.save(storage, beacon.round, &beacon)?;

    let latest = LATEST_ROUND.may_load(storage)?.unwrap_or(0);
    if beacon.round > latest {
        LATEST_ROUND.save(storage, &beacon.round)?;
    }

    let jobs = PENDING_JOBS.may_load(storage, beacon.round)?.unwrap_or_default();
    PENDING_JOBS.remove(storage, beacon.round);

    let deliveries = jobs
        .into_iter()
        .map(|job_id| delivery_packet(config, env, job_id, &beacon))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(deliveries)
}

fn delivery_packet(
    config: &Config,
    env: &Env,
    job_id: String,
    beacon: &StoredBeacon,
) -> StdResult<IbcMsg> {
    let packet = DeliverBeaconPacket {
        job_id,
        source_id: source_id(beacon.round),
        randomness: beacon.randomness.clone(),
        published: beacon.published,
    };
    Ok(IbcMsg::SendPacket {
        channel_id: config.delivery_channel.clone(),
        data: to_json_binary(&packet)?,
        timeout: IbcTimeout::with_timestamp(timeout_at(env.block.time)),
    })
}

fn timeout_at(now: Timestamp) -> Timestamp {
    now.plus_seconds(DELIVERY_TIMEOUT_SECONDS)
}

fn beacon_event(round: u64, randomness: &[u8; 32], bot: &str, deliveries: usize) -> Event {
    Event::new("beacon_sim_round_added")
        .add_attribute("round", round.to_string())
        .add_attribute("randomness", hex::encode(randomness))
        .add_attribute("bot", bot)
        .add_attribute("deliveries", deliveries.to_string())
}
