//! Single-writer tokio runtime for native hosts
//!
//! One task owns the [`AppController`] and applies intents in arrival order.
//! Readers watch snapshots on a `watch` channel. Notice timers feed their
//! dismissals back through the intent queue, so they are serialized with
//! every other mutation.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::controller::{AppController, AppSnapshot, Effect, Intent};
use crate::error::{AppError, AppResult};
use crate::notice::NoticeId;
use crate::prompt::Prompt;

/// Cloneable handle to a running app task
#[derive(Debug, Clone)]
pub struct AppHandle {
    intents: mpsc::UnboundedSender<Intent>,
    snapshots: watch::Receiver<AppSnapshot>,
}

impl AppHandle {
    /// Queue an intent for the app task
    pub fn send(&self, intent: Intent) -> AppResult<()> {
        self.intents
            .send(intent)
            .map_err(|_| AppError::RuntimeClosed)
    }

    pub fn send_json(&self, json: &str) -> AppResult<()> {
        self.send(Intent::from_json(json)?)
    }

    /// A receiver that sees every published snapshot from now on
    pub fn subscribe(&self) -> watch::Receiver<AppSnapshot> {
        self.snapshots.clone()
    }

    pub fn latest(&self) -> AppSnapshot {
        self.snapshots.borrow().clone()
    }
}

/// Start the app task. It stops once every [`AppHandle`] is dropped.
pub fn spawn<P>(controller: AppController, prompt: P) -> (AppHandle, JoinHandle<()>)
where
    P: Prompt + Send + 'static,
{
    let (intent_tx, intent_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
    // Timers hold only a weak sender so they never keep the task alive
    let timer_tx = intent_tx.downgrade();

    let task = tokio::spawn(run(controller, prompt, intent_rx, timer_tx, snapshot_tx));
    info!("app runtime started");

    (
        AppHandle {
            intents: intent_tx,
            snapshots: snapshot_rx,
        },
        task,
    )
}

async fn run<P: Prompt>(
    mut controller: AppController,
    mut prompt: P,
    mut intents: mpsc::UnboundedReceiver<Intent>,
    timer_tx: mpsc::WeakUnboundedSender<Intent>,
    snapshots: watch::Sender<AppSnapshot>,
) {
    while let Some(intent) = intents.recv().await {
        match controller.handle(intent, &mut prompt) {
            Effect::None => {}
            Effect::ScheduleDismiss { id, after_ms } => {
                schedule_dismiss(timer_tx.clone(), id, Duration::from_millis(after_ms));
            }
        }
        snapshots.send_replace(controller.snapshot());
    }
    info!("app runtime stopped");
}

fn schedule_dismiss(tx: mpsc::WeakUnboundedSender<Intent>, id: NoticeId, after: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        let Some(tx) = tx.upgrade() else {
            debug!(id, "runtime gone before notice dismissal");
            return;
        };
        if tx.send(Intent::DismissNotice { id }).is_err() {
            debug!(id, "runtime gone before notice dismissal");
        }
    });
}
