//! Round actor: owns a [`Round`] and drives its timers from a tokio interval.

use super::{
    errors::RoundResult,
    messages::{RoundMessage, RoundNotification, RoundResponse},
    state::{Round, RoundEvent, RoundView},
};
use crate::selection::{PlayerInput, SelectionEvent, SelectionReason};
use std::collections::HashMap;
use tokio::{
    sync::{mpsc, oneshot},
    time::{Duration, Instant, MissedTickBehavior, interval},
};

/// Round actor handle for sending messages
#[derive(Clone, Debug)]
pub struct RoundHandle {
    sender: mpsc::Sender<RoundMessage>,
}

impl RoundHandle {
    pub fn new(sender: mpsc::Sender<RoundMessage>) -> Self {
        Self { sender }
    }

    /// Send a message to the round
    pub async fn send(&self, message: RoundMessage) -> Result<(), String> {
        self.sender
            .send(message)
            .await
            .map_err(|_| "Round is closed".to_string())
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> RoundMessage,
    ) -> Result<T, String> {
        let (response, rx) = oneshot::channel();
        self.send(build(response)).await?;
        rx.await
            .map_err(|_| "Round dropped the request".to_string())
    }

    pub async fn deal(&self) -> Result<RoundResponse, String> {
        self.request(|response| RoundMessage::Deal { response })
            .await
    }

    pub async fn select(&self, position: usize) -> Result<RoundResponse, String> {
        self.request(|response| RoundMessage::Select { position, response })
            .await
    }

    pub async fn tap(&self, position: usize) -> Result<RoundResponse, String> {
        self.request(|response| RoundMessage::Tap { position, response })
            .await
    }

    pub async fn drag_release(&self, position: usize, y: f32) -> Result<RoundResponse, String> {
        self.request(|response| RoundMessage::DragRelease {
            position,
            y,
            response,
        })
        .await
    }

    pub async fn input(&self, input: PlayerInput) -> Result<bool, String> {
        self.request(|response| RoundMessage::Input { input, response })
            .await
    }

    pub async fn set_overlay(&self, open: bool) -> Result<(), String> {
        self.send(RoundMessage::SetOverlay { open }).await
    }

    pub async fn view(&self) -> Result<RoundView, String> {
        self.request(|response| RoundMessage::GetView { response })
            .await
    }

    pub async fn reset_round(&self) -> Result<RoundResponse, String> {
        self.request(|response| RoundMessage::ResetRound { response })
            .await
    }

    pub async fn end_session(&self) -> Result<RoundResponse, String> {
        self.request(|response| RoundMessage::EndSession { response })
            .await
    }

    pub async fn close(&self) -> Result<RoundResponse, String> {
        self.request(|response| RoundMessage::Close { response })
            .await
    }

    pub async fn subscribe(
        &self,
        subscriber_id: u64,
        sender: mpsc::Sender<RoundNotification>,
    ) -> Result<(), String> {
        self.send(RoundMessage::Subscribe {
            subscriber_id,
            sender,
        })
        .await
    }

    pub async fn unsubscribe(&self, subscriber_id: u64) -> Result<(), String> {
        self.send(RoundMessage::Unsubscribe { subscriber_id }).await
    }
}

/// Actor managing a single player's round.
///
/// Every [`SelectionEvent`] the round produces, manual or automatic, is
/// moved into `outbox` exactly once. The network layer owns the receiver.
pub struct RoundActor {
    /// Round state and timers
    round: Round,

    /// Message inbox
    inbox: mpsc::Receiver<RoundMessage>,

    /// Selected cards, in order, for the network layer
    outbox: mpsc::Sender<SelectionEvent>,

    /// Is a blocking overlay open
    overlay_open: bool,

    /// Is the actor closed
    is_closed: bool,

    /// Clock origin for tap timestamps
    started: Instant,

    /// When timers were last advanced
    last_tick: Instant,

    /// Subscribers for round notifications
    subscribers: HashMap<u64, mpsc::Sender<RoundNotification>>,
}

impl RoundActor {
    /// Create a new round actor
    ///
    /// # Returns
    ///
    /// * `(RoundActor, RoundHandle)` - Actor and handle for sending messages
    pub fn new(round: Round, outbox: mpsc::Sender<SelectionEvent>) -> (Self, RoundHandle) {
        let (sender, inbox) = mpsc::channel(100);
        let now = Instant::now();

        let actor = Self {
            round,
            inbox,
            outbox,
            overlay_open: false,
            is_closed: false,
            started: now,
            last_tick: now,
            subscribers: HashMap::new(),
        };

        (actor, RoundHandle::new(sender))
    }

    /// Run the round actor event loop
    pub async fn run(mut self) {
        let tick_duration = self.round.config().tick_interval();
        log::info!("Round starting, tick every {:?}", tick_duration);

        let mut tick_interval = interval(tick_duration);
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                message = self.inbox.recv() => {
                    let Some(message) = message else {
                        log::debug!("All round handles dropped");
                        break;
                    };

                    self.handle_message(message).await;

                    if self.is_closed {
                        break;
                    }
                }

                _ = tick_interval.tick() => {
                    self.tick().await;
                }
            }
        }

        log::info!("Round closed after hand {}", self.round.hand_number());
    }

    async fn handle_message(&mut self, message: RoundMessage) {
        if message.changes_state() {
            self.tick().await;
        }

        match message {
            RoundMessage::Deal { response } => {
                let result = self.handle_deal();
                let _ = response.send(result);
            }

            RoundMessage::Select { position, response } => {
                let result = match self.round.select(position, SelectionReason::Manual) {
                    Ok(event) => self.deliver(event).await,
                    Err(e) => RoundResponse::Rejected(e),
                };
                let _ = response.send(result);
            }

            RoundMessage::Tap { position, response } => {
                let at = self.started.elapsed();
                let result = self.round.tap(position, at);
                let result = self.handle_gesture(result).await;
                let _ = response.send(result);
            }

            RoundMessage::DragRelease {
                position,
                y,
                response,
            } => {
                let result = self.round.drag_release(position, y);
                let result = self.handle_gesture(result).await;
                let _ = response.send(result);
            }

            RoundMessage::Input { input, response } => {
                let counted = self.round.player_action(&input);
                let _ = response.send(counted);
            }

            RoundMessage::SetOverlay { open } => {
                self.overlay_open = open;
                log::debug!("Overlay {}", if open { "opened" } else { "closed" });
            }

            RoundMessage::GetView { response } => {
                let _ = response.send(self.round.view());
            }

            RoundMessage::ResetRound { response } => {
                self.round.reset_round();
                let _ = response.send(RoundResponse::Success);
            }

            RoundMessage::EndSession { response } => {
                self.round.end_session();
                self.notify(RoundNotification::SessionEnded);
                let _ = response.send(RoundResponse::Success);
            }

            RoundMessage::Close { response } => {
                self.is_closed = true;
                let _ = response.send(RoundResponse::Success);
            }

            RoundMessage::Subscribe {
                subscriber_id,
                sender,
            } => {
                self.subscribers.insert(subscriber_id, sender);
                log::debug!("Subscriber {} attached to round", subscriber_id);
            }

            RoundMessage::Unsubscribe { subscriber_id } => {
                self.subscribers.remove(&subscriber_id);
                log::debug!("Subscriber {} detached from round", subscriber_id);
            }
        }
    }

    fn handle_deal(&mut self) -> RoundResponse {
        let dealt = self
            .round
            .deal()
            .map(|hand| hand.cards().cloned().collect::<Vec<_>>());
        match dealt {
            Ok(cards) => {
                let hand_number = self.round.hand_number();
                self.notify(RoundNotification::Dealt { hand_number });
                RoundResponse::Dealt { hand_number, cards }
            }
            Err(e) => {
                log::warn!("Deal failed: {}", e);
                RoundResponse::Rejected(e)
            }
        }
    }

    async fn handle_gesture(
        &mut self,
        result: RoundResult<Option<SelectionEvent>>,
    ) -> RoundResponse {
        match result {
            Ok(Some(event)) => self.deliver(event).await,
            Ok(None) => RoundResponse::Ignored,
            Err(e) => RoundResponse::Rejected(e),
        }
    }

    /// Notify subscribers, then move the event into the outbox.
    async fn deliver(&mut self, event: SelectionEvent) -> RoundResponse {
        let response = RoundResponse::from(&event);
        self.notify(RoundNotification::from(&event));
        if self.outbox.send(event).await.is_err() {
            log::error!("Selection outbox closed, selection not delivered");
        }
        response
    }

    /// Advance timers by the wall time since the last tick. Also called
    /// before every state-changing message, so time spent before a change
    /// is charged to the state that was in effect.
    async fn tick(&mut self) {
        let now = Instant::now();
        let dt: Duration = now.duration_since(self.last_tick);
        self.last_tick = now;

        for event in self.round.tick(dt, self.overlay_open) {
            match event {
                RoundEvent::Selected(selection) => {
                    self.deliver(selection).await;
                }
                RoundEvent::SessionExpired => self.notify(RoundNotification::SessionExpired),
                RoundEvent::Paused => self.notify(RoundNotification::Paused),
                RoundEvent::Resumed => self.notify(RoundNotification::Resumed),
                RoundEvent::KickWarning { remaining_secs } => {
                    self.notify(RoundNotification::KickWarning { remaining_secs });
                }
                RoundEvent::Kicked => self.notify(RoundNotification::Kicked),
            }
        }
    }

    /// Broadcast a notification to all subscribers
    fn notify(&mut self, notification: RoundNotification) {
        self.subscribers.retain(|subscriber_id, sender| {
            match sender.try_send(notification.clone()) {
                Ok(_) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    log::warn!(
                        "Subscriber {} channel full, dropping notification",
                        subscriber_id
                    );
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    log::debug!("Subscriber {} disconnected, removing", subscriber_id);
                    false
                }
            }
        });
    }
}
