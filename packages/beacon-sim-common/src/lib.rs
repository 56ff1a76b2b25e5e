pub mod fixture;
pub mod logs;
pub mod msg;
pub mod packets;

pub use fixture::{Beacon, BeaconFixture, FixtureError, GENESIS_ROUND};
pub use logs::{ibc_packets_sent, ExecuteResult, TxAttribute, TxEvent, TxLog};
pub use msg::{DrandExecuteMsg, GatewayExecuteMsg};
pub use packets::{source_id, DeliverBeaconPacket, RequestOutcome};
