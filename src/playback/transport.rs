use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::{
    graph::Graph,
    playback::{PlaybackState, Progress},
    traversal::{Algorithm, Snapshot, Trace},
};

/// What the controller runs when asked to play with no trace loaded.
#[derive(Debug, Clone)]
pub struct Program {
    pub graph: Arc<Graph>,
    pub algorithm: Algorithm,
}

impl Program {
    pub fn run(&self) -> Trace {
        self.algorithm.run(Arc::clone(&self.graph))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved one step and playback continues.
    Advanced,
    /// The cursor reached the last snapshot; playback stopped.
    Finished,
    /// Nothing to do: not playing, or no trace.
    Idle,
}

/// Synchronous playback state machine: a trace, a cursor, a play flag and a speed.
///
/// Every operation clamps instead of failing, and leaves the state settled:
/// `playing` is only ever true while the cursor can still move forward.
pub struct Transport {
    trace: Option<Trace>,
    program: Option<Program>,
    state: PlaybackState,
    generation: u64,
    watchers: watch::Sender<PlaybackState>,
}

impl Transport {
    pub fn new(speed_millis: u64) -> Self {
        let state = PlaybackState {
            speed_millis: PlaybackState::clamp_speed(speed_millis),
            ..PlaybackState::default()
        };
        let (watchers, _) = watch::channel(state);
        Transport {
            trace: None,
            program: None,
            state,
            generation: 0,
            watchers,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.trace.as_ref()?.get(self.state.cursor)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            cursor: self.state.cursor,
            len: self.len(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.watchers.subscribe()
    }

    /// True while an auto-advance timer should be running.
    pub fn should_tick(&self) -> bool {
        self.state.playing && self.state.cursor + 1 < self.len()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidates every tick scheduled so far and returns the new generation.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Sets what `play` computes lazily, and drops the current trace.
    pub fn set_program(&mut self, graph: Arc<Graph>, algorithm: Algorithm) {
        self.program = Some(Program { graph, algorithm });
        self.clear();
    }

    /// Replaces the trace wholesale and rewinds.
    pub fn load(&mut self, trace: Trace) {
        self.trace = Some(trace);
        self.state.cursor = 0;
        self.state.playing = false;
        self.settle();
    }

    /// Drops the trace, rewinds and stops. The program is kept.
    pub fn clear(&mut self) {
        self.trace = None;
        self.state.cursor = 0;
        self.state.playing = false;
        self.settle();
    }

    pub fn seek(&mut self, index: usize) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.state.cursor = index.min(len - 1);
        self.settle();
    }

    pub fn step_forward(&mut self) {
        self.seek(self.state.cursor.saturating_add(1));
    }

    pub fn step_backward(&mut self) {
        self.seek(self.state.cursor.saturating_sub(1));
    }

    pub fn jump_to_start(&mut self) {
        self.seek(0);
    }

    pub fn jump_to_end(&mut self) {
        self.seek(usize::MAX);
        self.state.playing = false;
        self.settle();
    }

    /// Starts playback, first computing the trace from the program if none is loaded.
    ///
    /// Playing from the last snapshot, or with nothing to play, leaves playback stopped.
    pub fn play(&mut self) {
        if self.is_empty() {
            if let Some(program) = &self.program {
                debug!(algorithm = %program.algorithm, "computing trace on first play");
                let trace = program.run();
                self.load(trace);
            }
        }
        self.state.playing = true;
        self.settle();
    }

    pub fn pause(&mut self) {
        self.state.playing = false;
        self.settle();
    }

    pub fn toggle_play(&mut self) {
        if self.state.playing {
            self.pause()
        } else {
            self.play()
        }
    }

    pub fn set_speed(&mut self, millis: u64) {
        self.state.speed_millis = PlaybackState::clamp_speed(millis);
        self.settle();
    }

    /// One auto-advance step.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.playing || self.is_empty() {
            return TickOutcome::Idle;
        }
        self.step_forward();
        if self.state.playing {
            TickOutcome::Advanced
        } else {
            TickOutcome::Finished
        }
    }

    /// Drops `playing` once the cursor can no longer advance, then notifies watchers.
    fn settle(&mut self) {
        if self.state.playing && self.state.cursor + 1 >= self.len() {
            self.state.playing = false;
        }
        let state = self.state;
        self.watchers.send_if_modified(|published| {
            if *published == state {
                false
            } else {
                *published = state;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::generate_default,
        playback::{DEFAULT_SPEED_MILLIS, MAX_SPEED_MILLIS, MIN_SPEED_MILLIS},
    };

    fn loaded() -> Transport {
        let mut transport = Transport::new(DEFAULT_SPEED_MILLIS);
        transport.load(Algorithm::DepthFirst.run(Arc::new(generate_default())));
        transport
    }

    fn programmed() -> Transport {
        let mut transport = Transport::new(DEFAULT_SPEED_MILLIS);
        transport.set_program(Arc::new(generate_default()), Algorithm::BreadthFirst);
        transport
    }

    #[test]
    fn seek_clamps_into_range() {
        let mut transport = loaded();
        let last = transport.len() - 1;
        transport.seek(3);
        assert_eq!(transport.state().cursor, 3);
        transport.seek(10_000);
        assert_eq!(transport.state().cursor, last);
        transport.seek(0);
        assert_eq!(transport.state().cursor, 0);
    }

    #[test]
    fn seek_on_empty_trace_is_a_no_op() {
        let mut transport = Transport::new(DEFAULT_SPEED_MILLIS);
        transport.seek(5);
        transport.step_forward();
        transport.jump_to_end();
        assert_eq!(transport.state(), PlaybackState::default());
        assert!(transport.current().is_none());
    }

    #[test]
    fn steps_do_not_wrap() {
        let mut transport = loaded();
        transport.step_backward();
        assert_eq!(transport.state().cursor, 0);

        transport.jump_to_end();
        let last = transport.state().cursor;
        transport.step_forward();
        assert_eq!(transport.state().cursor, last);
        assert_eq!(last, transport.len() - 1);
    }

    #[test]
    fn jump_to_end_stops_playback() {
        let mut transport = loaded();
        transport.play();
        assert!(transport.state().playing);
        transport.jump_to_end();
        assert!(!transport.state().playing);
        assert!(transport.current().unwrap().is_completed());
    }

    #[test]
    fn jump_to_start_keeps_playing() {
        let mut transport = loaded();
        transport.seek(4);
        transport.play();
        transport.jump_to_start();
        assert_eq!(transport.state().cursor, 0);
        assert!(transport.state().playing);
    }

    #[test]
    fn play_computes_the_trace_lazily() {
        let mut transport = programmed();
        assert!(transport.is_empty());
        transport.play();
        assert!(!transport.is_empty());
        assert!(transport.state().playing);
        assert_eq!(transport.state().cursor, 0);
        assert_eq!(
            transport.trace().map(Trace::algorithm),
            Some(Algorithm::BreadthFirst)
        );
    }

    #[test]
    fn play_without_trace_or_program_stays_stopped() {
        let mut transport = Transport::new(DEFAULT_SPEED_MILLIS);
        transport.play();
        assert!(!transport.state().playing);
    }

    #[test]
    fn play_at_the_last_snapshot_stays_stopped() {
        let mut transport = loaded();
        transport.jump_to_end();
        transport.play();
        assert!(!transport.state().playing);
    }

    #[test]
    fn play_twice_is_idempotent() {
        let mut transport = loaded();
        transport.play();
        let once = transport.state();
        transport.play();
        assert_eq!(transport.state(), once);
    }

    #[test]
    fn toggle_alternates() {
        let mut transport = loaded();
        transport.toggle_play();
        assert!(transport.state().playing);
        transport.toggle_play();
        assert!(!transport.state().playing);
    }

    #[test]
    fn speed_is_clamped_on_set_and_construction() {
        let mut transport = Transport::new(1);
        assert_eq!(transport.state().speed_millis, MIN_SPEED_MILLIS);
        transport.set_speed(50);
        assert_eq!(transport.state().speed_millis, 100);
        transport.set_speed(5000);
        assert_eq!(transport.state().speed_millis, MAX_SPEED_MILLIS);
    }

    #[test]
    fn tick_advances_until_the_end() {
        let mut transport = loaded();
        let len = transport.len();
        assert_eq!(transport.tick(), TickOutcome::Idle);

        transport.play();
        for _ in 0..len - 2 {
            assert_eq!(transport.tick(), TickOutcome::Advanced);
        }
        assert_eq!(transport.tick(), TickOutcome::Finished);
        assert!(!transport.state().playing);
        assert_eq!(transport.state().cursor, len - 1);
        assert_eq!(transport.tick(), TickOutcome::Idle);
    }

    #[test]
    fn manual_step_onto_the_last_snapshot_stops_playback() {
        let mut transport = loaded();
        transport.seek(transport.len() - 2);
        transport.play();
        transport.step_forward();
        assert!(!transport.state().playing);
        assert!(!transport.should_tick());
    }

    #[test]
    fn load_replaces_and_rewinds() {
        let mut transport = loaded();
        transport.seek(5);
        transport.play();
        transport.load(Algorithm::BreadthFirst.run(Arc::new(generate_default())));
        assert_eq!(transport.state().cursor, 0);
        assert!(!transport.state().playing);
    }

    #[test]
    fn set_program_drops_the_trace() {
        let mut transport = loaded();
        transport.set_program(Arc::new(generate_default()), Algorithm::DepthFirst);
        assert!(transport.is_empty());
        assert!(transport.program().is_some());
    }

    #[test]
    fn watchers_see_every_change() {
        let mut transport = loaded();
        let mut updates = transport.subscribe();
        assert!(!updates.has_changed().unwrap());

        transport.step_forward();
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().cursor, 1);

        // clamped no-op publishes nothing
        transport.seek(1);
        assert!(!updates.has_changed().unwrap());
    }
}
