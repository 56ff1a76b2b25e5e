use beacon_sim_common::GENESIS_ROUND;
use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG, LATEST_ROUND, NEXT_JOB_ROUND};

const CONTRACT_NAME: &str = "crates.io:beacon-sim-mock-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let trusted_gateway_submitter = msg
        .trusted_gateway_submitter
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let config = Config {
        admin: info.sender.clone(),
        delivery_channel: msg.delivery_channel,
        trusted_gateway_submitter,
    };

    CONFIG.save(deps.storage, &config)?;
    LATEST_ROUND.save(deps.storage, &0u64)?;
    NEXT_JOB_ROUND.save(deps.storage, &GENESIS_ROUND)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "mock-oracle")
        .add_attribute("admin", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddRound {
            round,
            signature,
            previous_signature,
        } => execute::add_round(deps, env, info, round, signature, previous_signature),
        ExecuteMsg::AddVerifiedRound { round, randomness } => {
            execute::add_verified_round(deps, env, info, round, randomness)
        }
        ExecuteMsg::RegisterBot { moniker } => execute::register_bot(deps, env, info, moniker),
        ExecuteMsg::RequestBeacon { job_id } => execute::request_beacon(deps, env, info, job_id),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Beacon { round } => query::query_beacon(deps, round),
        QueryMsg::LatestRound {} => query::query_latest_round(deps),
        QueryMsg::Bot { address } => query::query_bot(deps, address),
        QueryMsg::JobsPending { round } => query::query_jobs_pending(deps, round),
    }
}
