//! Transaction logs as returned by a chain client, and the packet accounting
//! done on top of them.
//!
//! These types derive serde directly instead of using `cw_serde` so that logs
//! produced by real nodes, which carry extra fields, still parse.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Event type emitted by the IBC module for every outgoing packet.
pub const SEND_PACKET_EVENT: &str = "send_packet";

/// Attribute of [`SEND_PACKET_EVENT`] holding the packet sequence number.
pub const PACKET_SEQUENCE_ATTR: &str = "packet_sequence";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct TxAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub attributes: Vec<TxAttribute>,
}

impl TxEvent {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            attributes: vec![],
        }
    }

    pub fn add_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(TxAttribute {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Log of one message inside a transaction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct TxLog {
    #[serde(default)]
    pub msg_index: u32,
    #[serde(default)]
    pub events: Vec<TxEvent>,
}

/// Result of a state-changing call that made it into a block.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ExecuteResult {
    pub transaction_hash: String,
    pub height: u64,
    pub gas_used: u64,
    pub logs: Vec<TxLog>,
}

impl ExecuteResult {
    /// All events of all logs, in order.
    pub fn events(&self) -> impl Iterator<Item = &TxEvent> {
        self.logs.iter().flat_map(|log| log.events.iter())
    }

    /// First value of `key` among the events of type `event_type`.
    pub fn attribute(&self, event_type: &str, key: &str) -> Option<&str> {
        self.events()
            .filter(|e| e.ty == event_type)
            .find_map(|e| e.attribute(key))
    }
}

/// Number of packets sent according to `logs`.
///
/// Counts the `packet_sequence` attributes of all `send_packet` events. An
/// empty batch, or one without such events, yields 0.
pub fn ibc_packets_sent(logs: &[TxLog]) -> usize {
    logs.iter()
        .flat_map(|log| log.events.iter())
        .filter(|e| e.ty == SEND_PACKET_EVENT)
        .flat_map(|e| e.attributes.iter())
        .filter(|a| a.key == PACKET_SEQUENCE_ATTR)
        .count()
}
