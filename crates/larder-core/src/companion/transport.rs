//! Pairing transport abstraction

use tokio::sync::mpsc;

use super::message::CompanionMessage;
use crate::error::LarderResult;

/// Activation outcome reported by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationEvent {
    Activated,
    Failed(String),
}

/// Where the transport reports activation outcomes
///
/// Transports may call this from any thread.
pub type ActivationSender = mpsc::UnboundedSender<ActivationEvent>;

/// Platform pairing and message facility
pub trait CompanionTransport {
    /// Whether this device can pair at all
    fn is_supported(&self) -> bool;

    /// Begin activation; the outcome arrives later on `events`
    fn activate(&self, events: ActivationSender);

    /// Whether a message sent now would be deliverable
    fn is_reachable(&self) -> bool;

    /// Hand a message to the platform. No reply, no delivery receipt.
    fn send(&self, message: &CompanionMessage) -> LarderResult<()>;
}
