use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::{
    graph::Graph,
    playback::{
        DEFAULT_SPEED_MILLIS, PlaybackState, Progress, TickOutcome, Transport,
        ticker::{AutoAdvance, lock},
    },
    traversal::{Algorithm, Snapshot, Trace},
};

/// Drives a [`Transport`] and keeps exactly one auto-advance timer alive
/// while playback is running.
///
/// The timer needs a tokio runtime. A controller built outside one still
/// works; it just advances only when [`PlaybackController::tick`] is called.
///
/// ```
/// use std::sync::Arc;
/// use graphreel::{graph::generate_default, playback::PlaybackController, traversal::Algorithm};
///
/// let mut controller = PlaybackController::new();
/// controller.load(Algorithm::DepthFirst.run(Arc::new(generate_default())));
/// controller.step_forward();
/// controller.step_forward();
/// assert_eq!(controller.state().cursor, 2);
/// controller.jump_to_end();
/// assert!(controller.current().unwrap().is_completed());
/// ```
pub struct PlaybackController {
    transport: Arc<Mutex<Transport>>,
    ticker: AutoAdvance,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::with_speed(DEFAULT_SPEED_MILLIS)
    }

    pub fn with_speed(speed_millis: u64) -> Self {
        PlaybackController {
            transport: Arc::new(Mutex::new(Transport::new(speed_millis))),
            ticker: AutoAdvance::new(),
        }
    }

    /// Runs `op` on the transport, then arms, re-arms or disarms the timer to match.
    fn update<R>(&mut self, op: impl FnOnce(&mut Transport) -> R) -> R {
        let (result, should_tick, speed_millis) = {
            let mut transport = lock(&self.transport);
            let result = op(&mut transport);
            (
                result,
                transport.should_tick(),
                transport.state().speed_millis,
            )
        };
        if should_tick {
            if !self.ticker.is_running_at(speed_millis) {
                self.ticker.arm(&self.transport, speed_millis);
            }
        } else {
            self.ticker.disarm(&self.transport);
        }
        result
    }

    pub fn state(&self) -> PlaybackState {
        lock(&self.transport).state()
    }

    pub fn len(&self) -> usize {
        lock(&self.transport).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.transport).is_empty()
    }

    pub fn progress(&self) -> Progress {
        lock(&self.transport).progress()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<Snapshot> {
        lock(&self.transport).current().cloned()
    }

    pub fn snapshot(&self, index: usize) -> Option<Snapshot> {
        lock(&self.transport).trace()?.get(index).cloned()
    }

    pub fn trace(&self) -> Option<Trace> {
        lock(&self.transport).trace().cloned()
    }

    /// Receives every [`PlaybackState`] change, including auto-advance steps.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        lock(&self.transport).subscribe()
    }

    /// True while the auto-advance task is alive.
    pub fn is_auto_advancing(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn set_program(&mut self, graph: Arc<Graph>, algorithm: Algorithm) {
        self.update(|transport| transport.set_program(graph, algorithm))
    }

    pub fn load(&mut self, trace: Trace) {
        self.update(|transport| transport.load(trace))
    }

    /// Drops the trace and stops. A later `play` recomputes it from the program.
    pub fn reset(&mut self) {
        self.update(Transport::clear)
    }

    pub fn seek(&mut self, index: usize) {
        self.update(|transport| transport.seek(index))
    }

    pub fn step_forward(&mut self) {
        self.update(Transport::step_forward)
    }

    pub fn step_backward(&mut self) {
        self.update(Transport::step_backward)
    }

    pub fn jump_to_start(&mut self) {
        self.update(Transport::jump_to_start)
    }

    pub fn jump_to_end(&mut self) {
        self.update(Transport::jump_to_end)
    }

    pub fn play(&mut self) {
        self.update(Transport::play)
    }

    pub fn pause(&mut self) {
        self.update(Transport::pause)
    }

    pub fn toggle_play(&mut self) {
        self.update(Transport::toggle_play)
    }

    pub fn set_speed(&mut self, millis: u64) {
        self.update(|transport| transport.set_speed(millis))
    }

    /// Advances one step as the timer would.
    pub fn tick(&mut self) -> TickOutcome {
        self.update(Transport::tick)
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.ticker.disarm(&self.transport);
    }
}
