use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::presence::{Collaborator, PresenceSimulator};

/// How often simulated collaborators move their cursors.
pub const PRESENCE_INTERVAL: Duration = Duration::from_secs(3);

/// Shared collaborator list read by the renderer and written by the task.
pub type SharedCollaborators = Arc<Mutex<Vec<Collaborator>>>;

/// Background task that periodically scatters collaborator cursors.
///
/// Runs until [`PresenceTask::shutdown`] is awaited.
pub struct PresenceTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl PresenceTask {
    /// Starts moving `collaborators` every [`PRESENCE_INTERVAL`].
    pub fn spawn(collaborators: SharedCollaborators, simulator: PresenceSimulator) -> Self {
        Self::spawn_with_interval(collaborators, simulator, PRESENCE_INTERVAL)
    }

    /// Starts moving `collaborators` every `period`.
    ///
    /// The first move happens one full period after spawning.
    pub fn spawn_with_interval(
        collaborators: SharedCollaborators,
        simulator: PresenceSimulator,
        period: Duration,
    ) -> Self {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_presence_loop(
            collaborators,
            simulator,
            period,
            cancel.clone(),
        ));

        Self { cancel, handle }
    }

    /// Stops the task and waits for it to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();

        if let Err(error) = self.handle.await {
            warn!(%error, "presence task ended abnormally");
        }
    }
}

async fn run_presence_loop(
    collaborators: SharedCollaborators,
    mut simulator: PresenceSimulator,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                if let Ok(mut guard) = collaborators.lock() {
                    simulator.scatter(&mut guard);
                } else {
                    warn!("collaborator list lock poisoned, skipping presence update");
                }
            }
        }
    }

    debug!("presence task stopped");
}
