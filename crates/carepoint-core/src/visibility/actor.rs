//! Actor wrapper that owns a `VisibilityController`
//!
//! Hosts with several threads (or several producers of scroll samples) send
//! commands over a channel; a single task applies them in order, drives the
//! animation clock and publishes snapshots on a watch channel.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::controller::{ScrollEvent, VisibilityController, VisibilitySnapshot};
use super::transition::TransitionEvent;

/// Commands accepted by the visibility actor
#[derive(Debug, Clone)]
pub enum VisibilityCommand {
    Scroll(ScrollEvent),
    Show,
    Hide,
    Attach,
    Detach,
    Shutdown,
}

/// Cloneable handle for talking to a running actor
#[derive(Debug, Clone)]
pub struct VisibilityHandle {
    tx: mpsc::UnboundedSender<VisibilityCommand>,
    snapshot: watch::Receiver<VisibilitySnapshot>,
}

impl VisibilityHandle {
    /// Send a command; returns false once the actor has stopped
    pub fn send(&self, command: VisibilityCommand) -> bool {
        if self.tx.send(command).is_err() {
            warn!("Failed to send visibility command: actor stopped");
            return false;
        }
        true
    }

    pub fn scroll_to(&self, y: f64) -> bool {
        self.send(VisibilityCommand::Scroll(ScrollEvent::at(y)))
    }

    pub fn show(&self) -> bool {
        self.send(VisibilityCommand::Show)
    }

    pub fn hide(&self) -> bool {
        self.send(VisibilityCommand::Hide)
    }

    pub fn shutdown(&self) -> bool {
        self.send(VisibilityCommand::Shutdown)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> VisibilitySnapshot {
        *self.snapshot.borrow()
    }

    /// Receiver notified on every published change
    pub fn subscribe(&self) -> watch::Receiver<VisibilitySnapshot> {
        self.snapshot.clone()
    }
}

pub struct VisibilityActor {
    controller: VisibilityController,
    commands: mpsc::UnboundedReceiver<VisibilityCommand>,
    snapshot_tx: watch::Sender<VisibilitySnapshot>,
    frame_interval: Duration,
    completions: Option<mpsc::UnboundedSender<TransitionEvent>>,
}

impl VisibilityActor {
    /// Create an actor and the handle that feeds it
    pub fn new(controller: VisibilityController, frame_interval: Duration) -> (Self, VisibilityHandle) {
        let (tx, commands) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot) = watch::channel(controller.snapshot());
        let actor = Self {
            controller,
            commands,
            snapshot_tx,
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            completions: None,
        };
        (actor, VisibilityHandle { tx, snapshot })
    }

    /// Forward completion events to `tx`
    pub fn with_completion_sender(mut self, tx: mpsc::UnboundedSender<TransitionEvent>) -> Self {
        self.completions = Some(tx);
        self
    }

    /// Spawn onto the current tokio runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Apply commands and advance animations until shutdown
    pub async fn run(mut self) {
        info!(
            frame_ms = self.frame_interval.as_millis() as u64,
            "Visibility actor started"
        );

        let mut frames = tokio::time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    match command {
                        Some(VisibilityCommand::Shutdown) | None => {
                            info!("Visibility actor shutting down");
                            break;
                        }
                        Some(command) => self.apply(command),
                    }
                }

                _ = frames.tick(), if self.controller.needs_update() => {
                    let now = Instant::now().into_std();
                    if let Some(event) = self.controller.tick(now) {
                        self.notify(event);
                    }
                    self.publish();
                }
            }
        }
    }

    fn apply(&mut self, command: VisibilityCommand) {
        let now = Instant::now().into_std();
        debug!(?command, "Applying visibility command");
        match command {
            VisibilityCommand::Scroll(event) => {
                self.controller.handle_scroll(event, now);
            }
            VisibilityCommand::Show => {
                self.controller.show(now);
            }
            VisibilityCommand::Hide => {
                self.controller.hide(now);
            }
            VisibilityCommand::Attach => self.controller.attach(),
            VisibilityCommand::Detach => self.controller.detach(),
            VisibilityCommand::Shutdown => {}
        }
        self.publish();
    }

    fn notify(&self, event: TransitionEvent) {
        if let Some(ref tx) = self.completions {
            if tx.send(event).is_err() {
                warn!("Failed to send transition event: receiver dropped");
            }
        }
    }

    fn publish(&self) {
        let snapshot = self.controller.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}
