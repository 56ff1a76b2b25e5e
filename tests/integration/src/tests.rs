//! End-to-end scenarios: bots feed the mock oracle through the in-process
//! [`MockChain`], randomness is requested, packets are relayed and counted.
//!
//! Run:
//! ```bash
//! cargo test -p beacon-sim-integration-tests
//! ```

use std::sync::Arc;

use beacon_sim_bot::{Bot, MockBot, SubmitError, SubmitterConfig};
use beacon_sim_common::{ibc_packets_sent, DeliverBeaconPacket, GENESIS_ROUND};
use beacon_sim_integration_tests::{ChainError, MockChain};
use beacon_sim_mock_oracle::msg::{BeaconResponse, BotResponse, ExecuteMsg, QueryMsg};
use cosmwasm_std::from_json;

// ─── Constants ───

const DELIVERY_CHANNEL: &str = "channel-0";

/// Round 2183666 of the reference dataset
const ROUND_6_RANDOMNESS: &str = "768bd188a948f1f2959d15c657f159dd34bdf741b7d4b17a29b877eb36c04dcf";
const ROUND_6_PUBLISHED: u64 = 1660941000000000000;

// ─── Helpers ───

fn setup_chain() -> Arc<MockChain> {
    let chain = MockChain::new(DELIVERY_CHANNEL, None).unwrap();
    Arc::new(chain)
}

fn connect_bot(chain: &Arc<MockChain>, name: &str) -> Bot<Arc<MockChain>> {
    let config = SubmitterConfig::new(MockChain::addr_make(name), chain.oracle_address());
    Bot::connect(&config, chain.clone()).unwrap()
}

/// Stand-in for the proxy's request packet. Returns (outcome tag, source id).
fn request_randomness(chain: &MockChain, job_id: &str) -> (String, String) {
    let requester = MockChain::addr_make("proxy");
    let res = chain
        .execute_msg(
            &requester,
            ExecuteMsg::RequestBeacon {
                job_id: job_id.to_string(),
            },
        )
        .unwrap();
    (
        res.attribute("wasm", "outcome").unwrap().to_string(),
        res.attribute("wasm", "source_id").unwrap().to_string(),
    )
}

fn query_beacon(chain: &MockChain, round: u64) -> BeaconResponse {
    chain.query(QueryMsg::Beacon { round }).unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_bot_can_submit_to_oracle() {
    let chain = setup_chain();

    let before = query_beacon(&chain, 2183666);
    assert_eq!(before.beacon, None);

    let bot = connect_bot(&chain, "bot");
    let res = bot.submit_round(2183666).await.unwrap();
    assert_eq!(res.attribute("wasm", "round"), Some("2183666"));
    assert_eq!(ibc_packets_sent(&res.logs), 0);

    let after = query_beacon(&chain, 2183666).beacon.unwrap();
    assert_eq!(after.randomness, ROUND_6_RANDOMNESS);
    assert_eq!(after.published.nanos(), ROUND_6_PUBLISHED);
    // Verification time is a block time in nanoseconds
    assert_eq!(after.verified.nanos().to_string().len(), 19);
}

#[tokio::test]
async fn test_request_processed_then_queued() {
    let chain = setup_chain();
    let mut bot = connect_bot(&chain, "bot");

    // Round available before the request
    bot.submit_next().await.unwrap();
    let (outcome, source_id) = request_randomness(&chain, "eins");
    assert_eq!(outcome, "processed");
    assert_eq!(source_id, "test-mode:2183660");
    assert_eq!(chain.relay_all().unwrap().len(), 1);

    // Round not yet available
    let (outcome, source_id) = request_randomness(&chain, "zwei");
    assert_eq!(outcome, "queued");
    assert_eq!(source_id, "test-mode:2183661");
    assert!(chain.relay_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_queued_request_delivered_after_submission() {
    let chain = setup_chain();
    let mut bot = connect_bot(&chain, "bot");

    bot.submit_next().await.unwrap();
    let (outcome, _) = request_randomness(&chain, "job-1");
    assert_eq!(outcome, "processed");
    let delivered = chain.relay_all().unwrap();
    assert_eq!(delivered.len(), 1);
    let packet: DeliverBeaconPacket = from_json(&delivered[0].data).unwrap();
    assert_eq!(packet.job_id, "job-1");
    assert_eq!(packet.source_id, "test-mode:2183660");

    let (outcome, source_id) = request_randomness(&chain, "job-2");
    assert_eq!(outcome, "queued");
    assert_eq!(source_id, "test-mode:2183661");
    assert!(chain.relay_all().unwrap().is_empty());

    // Round incoming
    let res = bot.submit_next().await.unwrap();
    assert_eq!(ibc_packets_sent(&res.logs), 1);

    let delivered = chain.relay_all().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].channel_id, DELIVERY_CHANNEL);
    assert_eq!(delivered[0].sequence, 2);
    let packet: DeliverBeaconPacket = from_json(&delivered[0].data).unwrap();
    assert_eq!(packet.job_id, "job-2");
    assert_eq!(packet.source_id, "test-mode:2183661");
    assert_eq!(
        packet.randomness,
        "298403ad854a067cc64c9518a1bf1406425ad109269a49778b42d65c88919b1f"
    );
}

#[tokio::test]
async fn test_several_queued_jobs_count_as_several_packets() {
    let chain = setup_chain();
    let bot = connect_bot(&chain, "bot");

    // Requests take rounds 2183660, 2183661, 2183662; none is available yet
    for job in ["a", "b", "c"] {
        let (outcome, _) = request_randomness(&chain, job);
        assert_eq!(outcome, "queued");
    }

    let mut results = vec![];
    for round in [2183662, 2183660, 2183661] {
        results.push(bot.submit_round(round).await.unwrap());
    }
    let logs: Vec<_> = results.iter().flat_map(|r| r.logs.clone()).collect();
    assert_eq!(ibc_packets_sent(&logs), 3);
    assert_eq!(ibc_packets_sent(&results[0].logs), 1);
    assert_eq!(chain.relay_all().unwrap().len(), 3);
}

#[tokio::test]
async fn test_failed_submission_still_advances_cursor() {
    let chain = setup_chain();
    let mut bot = connect_bot(&chain, "bot");

    bot.submit_next().await.unwrap();
    // Another path already delivered 2183661 from the same bot
    bot.submit_round(2183661).await.unwrap();

    let err = bot.submit_next().await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Transaction(ChainError::Execution { .. })
    ));
    assert_eq!(bot.next_round(), GENESIS_ROUND + 2);

    bot.submit_next().await.unwrap();
    let stored = query_beacon(&chain, GENESIS_ROUND + 2).beacon.unwrap();
    assert_eq!(stored.round, GENESIS_ROUND + 2);
}

#[tokio::test]
async fn test_exhausted_fixture_makes_no_transaction() {
    let chain = setup_chain();
    let mut bot = connect_bot(&chain, "bot");

    for _ in 0..21 {
        bot.submit_next().await.unwrap();
    }
    let height = chain.height().unwrap();

    let err = bot.submit_next().await.unwrap_err();
    assert!(matches!(err, SubmitError::RoundUnavailable { round: 2183681 }));
    assert_eq!(chain.height().unwrap(), height);

    let latest: u64 = chain.query(QueryMsg::LatestRound {}).unwrap();
    assert_eq!(latest, 2183680);
}

#[tokio::test]
async fn test_registered_bot_gets_credited() {
    let chain = setup_chain();
    let mut bot = connect_bot(&chain, "bot");

    let res = bot.register("joe").await.unwrap();
    assert_eq!(res.attribute("wasm", "moniker"), Some("joe"));

    bot.submit_next().await.unwrap();
    bot.submit_next().await.unwrap();

    let registered: BotResponse = chain
        .query(QueryMsg::Bot {
            address: MockChain::addr_make("bot"),
        })
        .unwrap();
    assert_eq!(registered.bot.unwrap().rounds_added, 2);
}

#[tokio::test]
async fn test_independent_bots() {
    let chain = setup_chain();
    let mut first = connect_bot(&chain, "bot1");
    let mut second = connect_bot(&chain, "bot2");

    first.submit_next().await.unwrap();
    first.submit_next().await.unwrap();
    let res = second.submit_next().await.unwrap();
    assert_eq!(res.attribute("wasm", "already_stored"), Some("true"));

    assert_eq!(first.next_round(), GENESIS_ROUND + 2);
    assert_eq!(second.next_round(), GENESIS_ROUND + 1);
}

#[tokio::test]
async fn test_mock_bot_feeds_gateway() {
    let gateway = MockChain::addr_make("gateway");
    let chain = Arc::new(MockChain::new(DELIVERY_CHANNEL, Some(gateway.as_str())).unwrap());

    let config = SubmitterConfig::new(gateway, chain.oracle_address());
    let mut mock_bot = MockBot::connect(&config, chain.clone()).unwrap();

    let (outcome, _) = request_randomness(&chain, "job");
    assert_eq!(outcome, "queued");

    let res = mock_bot.submit_next().await.unwrap();
    assert_eq!(ibc_packets_sent(&res.logs), 1);
    assert_eq!(
        query_beacon(&chain, GENESIS_ROUND).beacon.unwrap().randomness,
        "cbc851305a9b82e38863a77e5bc61b8707554adb3920418a6903489b284f88c2"
    );
}

#[tokio::test]
async fn test_untrusted_mock_bot_rejected() {
    let chain = setup_chain();
    let config = SubmitterConfig::new(
        MockChain::addr_make("stranger"),
        chain.oracle_address(),
    );
    let mut mock_bot = MockBot::connect(&config, chain.clone()).unwrap();

    let err = mock_bot.submit_next().await.unwrap_err();
    assert!(err.to_string().contains("unauthorized"));
    assert_eq!(mock_bot.next_round(), GENESIS_ROUND + 1);
    assert_eq!(query_beacon(&chain, GENESIS_ROUND).beacon, None);
}

#[tokio::test]
async fn test_wrong_target_is_a_transaction_failure() {
    let chain = setup_chain();
    let config = SubmitterConfig::new(
        MockChain::addr_make("bot"),
        MockChain::addr_make("nobody"),
    );
    let bot = Bot::connect(&config, chain.clone()).unwrap();

    let err = bot.submit_round(GENESIS_ROUND).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Transaction(ChainError::UnknownContract { .. })
    ));
}
