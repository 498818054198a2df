//! In-process paired transport
//!
//! Connects a remote-side `LoopbackTransport` to a phone-side `PhoneEndpoint`
//! inside one process. Messages travel JSON-encoded, activation is
//! acknowledged from a separate thread, and the phone side controls
//! reachability.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::message::CompanionMessage;
use super::transport::{ActivationEvent, ActivationSender, CompanionTransport};
use crate::error::{LarderError, LarderResult};

#[derive(Debug, Default)]
struct Shared {
    activated: AtomicBool,
    reachable: AtomicBool,
}

/// Remote-side half of a loopback pair
pub struct LoopbackTransport {
    shared: Arc<Shared>,
    outbox: mpsc::UnboundedSender<String>,
    supported: bool,
    activation_failure: Option<String>,
}

/// Phone-side half of a loopback pair
pub struct PhoneEndpoint {
    shared: Arc<Shared>,
    inbox: mpsc::UnboundedReceiver<String>,
}

/// Create a connected remote/phone pair. The phone starts reachable.
pub fn paired() -> (LoopbackTransport, PhoneEndpoint) {
    let shared = Arc::new(Shared::default());
    shared.reachable.store(true, Ordering::SeqCst);
    let (outbox, inbox) = mpsc::unbounded_channel();

    (
        LoopbackTransport {
            shared: Arc::clone(&shared),
            outbox,
            supported: true,
            activation_failure: None,
        },
        PhoneEndpoint { shared, inbox },
    )
}

impl LoopbackTransport {
    /// Report pairing as unsupported on this device
    pub fn unsupported(mut self) -> Self {
        self.supported = false;
        self
    }

    /// Make activation fail with `reason`
    pub fn failing_activation(mut self, reason: impl Into<String>) -> Self {
        self.activation_failure = Some(reason.into());
        self
    }
}

impl CompanionTransport for LoopbackTransport {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn activate(&self, events: ActivationSender) {
        let shared = Arc::clone(&self.shared);
        let failure = self.activation_failure.clone();

        std::thread::spawn(move || {
            let event = match failure {
                Some(reason) => ActivationEvent::Failed(reason),
                None => {
                    shared.activated.store(true, Ordering::SeqCst);
                    ActivationEvent::Activated
                }
            };
            // The link may already be gone
            let _ = events.send(event);
        });
    }

    fn is_reachable(&self) -> bool {
        self.shared.activated.load(Ordering::SeqCst) && self.shared.reachable.load(Ordering::SeqCst)
    }

    fn send(&self, message: &CompanionMessage) -> LarderResult<()> {
        let json = message.encode()?;
        self.outbox
            .send(json)
            .map_err(|_| LarderError::Link("phone endpoint closed".to_string()))
    }
}

impl PhoneEndpoint {
    /// Toggle whether the phone app is currently reachable
    pub fn set_reachable(&self, reachable: bool) {
        debug!("Phone endpoint reachable: {}", reachable);
        self.shared.reachable.store(reachable, Ordering::SeqCst);
    }

    /// Next pending message without waiting
    pub fn try_recv(&mut self) -> Option<CompanionMessage> {
        while let Ok(json) = self.inbox.try_recv() {
            if let Some(message) = Self::decode(&json) {
                return Some(message);
            }
        }
        None
    }

    /// Wait for the next message; `None` once the remote is dropped
    pub async fn recv(&mut self) -> Option<CompanionMessage> {
        while let Some(json) = self.inbox.recv().await {
            if let Some(message) = Self::decode(&json) {
                return Some(message);
            }
        }
        None
    }

    fn decode(json: &str) -> Option<CompanionMessage> {
        match CompanionMessage::decode(json) {
            Ok(message) => Some(message),
            Err(e) => {
                warn!("Dropping unreadable companion message {:?}: {}", json, e);
                None
            }
        }
    }
}
