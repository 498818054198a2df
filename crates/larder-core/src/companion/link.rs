//! Remote-side companion link

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::message::CompanionMessage;
use super::transport::{ActivationEvent, CompanionTransport};

/// Link lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Pairing is unavailable on this device; there is no session
    Unsupported,
    /// Session exists, waiting for the platform to acknowledge activation
    Activating,
    /// Activation acknowledged
    Active,
}

/// Fire-and-forget command link from the remote to the phone
///
/// Activation outcomes arrive over a channel from whatever thread the
/// transport uses and are applied only when the owner calls
/// `poll_activation` or awaits `activated`. The last-sent timestamp is
/// published through a watch channel for UI observers.
pub struct CompanionLink<T: CompanionTransport> {
    session: Option<T>,
    state: LinkState,
    activation: Option<mpsc::UnboundedReceiver<ActivationEvent>>,
    last_sent: watch::Sender<Option<DateTime<Utc>>>,
}

impl<T: CompanionTransport> CompanionLink<T> {
    /// Set up the link, activating the session when pairing is supported
    pub fn new(transport: T) -> Self {
        let (last_sent, _) = watch::channel(None);

        if !transport.is_supported() {
            info!("Companion pairing not supported on this device");
            return Self {
                session: None,
                state: LinkState::Unsupported,
                activation: None,
                last_sent,
            };
        }

        let (events, activation) = mpsc::unbounded_channel();
        transport.activate(events);
        info!("Companion session activating");

        Self {
            session: Some(transport),
            state: LinkState::Activating,
            activation: Some(activation),
            last_sent,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Apply any activation outcomes that have arrived, without waiting
    pub fn poll_activation(&mut self) -> LinkState {
        while let Some(event) = self
            .activation
            .as_mut()
            .and_then(|events| events.try_recv().ok())
        {
            self.handle_activation(event);
        }
        self.state
    }

    /// Wait until activation succeeds or the transport stops reporting
    pub async fn activated(&mut self) -> LinkState {
        while self.state == LinkState::Activating {
            let Some(events) = self.activation.as_mut() else {
                break;
            };
            match events.recv().await {
                Some(event) => self.handle_activation(event),
                None => break,
            }
        }
        self.state
    }

    fn handle_activation(&mut self, event: ActivationEvent) {
        match event {
            ActivationEvent::Activated => {
                if self.state == LinkState::Activating {
                    info!("Companion session active");
                    self.state = LinkState::Active;
                }
            }
            // The link stays unusable until the transport reports reachable
            ActivationEvent::Failed(reason) => {
                warn!("Companion activation failed: {}", reason);
            }
        }
    }

    /// Whether a send right now would be attempted
    pub fn is_reachable(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_reachable())
    }

    /// Ask the phone to advance to the next step
    ///
    /// Silently does nothing without a reachable session. Otherwise the
    /// message is handed to the transport, transport errors are dropped, and
    /// the last-sent timestamp moves forward. Returns whether a send was
    /// attempted.
    pub fn send_next_step(&self) -> bool {
        let Some(session) = self.session.as_ref() else {
            debug!("No companion session; next step not sent");
            return false;
        };
        if !session.is_reachable() {
            debug!("Companion unreachable; next step not sent");
            return false;
        }

        if let Err(e) = session.send(&CompanionMessage::NextStep) {
            debug!("Companion transport rejected next step: {}", e);
        }

        let now = Utc::now();
        self.last_sent.send_modify(|last| {
            let stamp = match *last {
                Some(previous) if now <= previous => previous + TimeDelta::nanoseconds(1),
                _ => now,
            };
            *last = Some(stamp);
        });
        true
    }

    /// When a send was last attempted
    pub fn last_sent_at(&self) -> Option<DateTime<Utc>> {
        *self.last_sent.borrow()
    }

    /// Observe last-sent updates from another context
    pub fn subscribe_last_sent(&self) -> watch::Receiver<Option<DateTime<Utc>>> {
        self.last_sent.subscribe()
    }
}
