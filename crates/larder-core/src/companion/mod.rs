//! Companion remote link
//!
//! A wrist remote sends one stateless command, `nextStep`, to the phone app
//! when the phone is reachable. Delivery is best-effort: no queue, no retry,
//! no reply. The phone applies received commands to step playback.

mod link;
pub mod loopback;
mod message;
mod transport;

pub use link::{CompanionLink, LinkState};
pub use message::CompanionMessage;
pub use transport::{ActivationEvent, ActivationSender, CompanionTransport};
