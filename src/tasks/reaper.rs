//! Cache Reaper Task
//!
//! Background task that periodically sweeps expired entries out of the
//! response cache.

use std::sync::Weak;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::cache::CacheStore;

/// Handle to a running reaper task.
///
/// Dropping the handle also stops the task, since the shutdown channel
/// closes with it.
#[derive(Debug)]
pub(crate) struct ReaperHandle {
    shutdown: watch::Sender<()>,
    handle: JoinHandle<()>,
}

impl ReaperHandle {
    /// Returns true once the task has exited.
    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signals the task to stop and waits for it to exit.
    pub(crate) async fn stop(self) {
        // Fails only if the task already exited
        let _ = self.shutdown.send(());
        if let Err(e) = self.handle.await {
            warn!("Cache reaper ended abnormally: {}", e);
        }
    }
}

/// Spawns a task that sweeps `store` once every `period`, which must be
/// non-zero.
///
/// The first sweep runs one full period after spawning. The task holds only
/// a weak reference to the store and exits when the store has been dropped
/// or when the returned handle signals shutdown.
pub(crate) fn spawn_reaper(runtime: &Handle, store: Weak<CacheStore>, period: Duration) -> ReaperHandle {
    let (shutdown, mut shutdown_rx) = watch::channel(());

    let handle = runtime.spawn(async move {
        debug!("Starting cache reaper with period {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                // A signal or a dropped sender both mean stop
                _ = shutdown_rx.changed() => break,
            }

            let Some(live) = store.upgrade() else {
                break;
            };
            let removed = live.sweep().await;
            drop(live);

            if removed > 0 {
                debug!("Cache sweep: removed {} expired entries", removed);
            }
        }

        debug!("Cache reaper stopped");
    });

    ReaperHandle { shutdown, handle }
}
