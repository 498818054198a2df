//! Companion wire messages

use serde::{Deserialize, Serialize};

use crate::error::LarderResult;

/// A command sent from the wrist remote to the phone
///
/// Encoded as a single-field record: `{"action":"nextStep"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum CompanionMessage {
    /// Advance step playback by one
    NextStep,
}

impl CompanionMessage {
    pub fn encode(&self) -> LarderResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(json: &str) -> LarderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
