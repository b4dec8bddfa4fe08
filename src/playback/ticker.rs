use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::{debug, trace, warn};

use crate::playback::{TickOutcome, Transport};

pub(crate) fn lock(transport: &Mutex<Transport>) -> MutexGuard<'_, Transport> {
    transport.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The single auto-advance task of a controller.
///
/// At most one task is alive at a time: arming aborts the previous one first.
/// Each task carries the generation it was armed under and exits on its first
/// tick after the transport moved to a newer one.
#[derive(Debug)]
pub(crate) struct AutoAdvance {
    runtime: Option<Handle>,
    task: Option<JoinHandle<()>>,
    speed_millis: Option<u64>,
}

impl AutoAdvance {
    pub(crate) fn new() -> Self {
        AutoAdvance {
            runtime: Handle::try_current().ok(),
            task: None,
            speed_millis: None,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub(crate) fn is_running_at(&self, speed_millis: u64) -> bool {
        self.speed_millis == Some(speed_millis) && self.is_running()
    }

    pub(crate) fn arm(&mut self, transport: &Arc<Mutex<Transport>>, speed_millis: u64) {
        self.disarm(transport);

        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            warn!("no tokio runtime, playback only advances on manual ticks");
            return;
        };
        let generation = lock(transport).next_generation();
        let transport = Arc::clone(transport);
        let period = Duration::from_millis(speed_millis);

        self.task = Some(runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut deck = lock(&transport);
                if deck.generation() != generation {
                    trace!(generation, "stale auto-advance tick dropped");
                    break;
                }
                match deck.tick() {
                    TickOutcome::Advanced => {}
                    TickOutcome::Finished => {
                        debug!(cursor = deck.state().cursor, "playback reached the end");
                        break;
                    }
                    TickOutcome::Idle => break,
                }
            }
        }));
        self.speed_millis = Some(speed_millis);
        debug!(generation, speed_millis, "auto-advance armed");
    }

    pub(crate) fn disarm(&mut self, transport: &Mutex<Transport>) {
        if let Some(task) = self.task.take() {
            let generation = lock(transport).next_generation();
            task.abort();
            debug!(generation, "auto-advance disarmed");
        }
        self.speed_millis = None;
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
