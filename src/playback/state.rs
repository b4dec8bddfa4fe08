use serde::Serialize;

/// Fastest auto-advance interval, in milliseconds.
pub const MIN_SPEED_MILLIS: u64 = 100;
/// Slowest auto-advance interval, in milliseconds.
pub const MAX_SPEED_MILLIS: u64 = 1000;
pub const DEFAULT_SPEED_MILLIS: u64 = 500;

/// Cursor, play flag and speed of a playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    pub cursor: usize,
    pub playing: bool,
    pub speed_millis: u64,
}

impl PlaybackState {
    pub fn clamp_speed(millis: u64) -> u64 {
        millis.clamp(MIN_SPEED_MILLIS, MAX_SPEED_MILLIS)
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState {
            cursor: 0,
            playing: false,
            speed_millis: DEFAULT_SPEED_MILLIS,
        }
    }
}

/// Position within a trace of a given length, for progress indicators and
/// enabling or disabling controls at the boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub cursor: usize,
    pub len: usize,
}

impl Progress {
    /// One-based step number shown to the user, 0 when there is no trace.
    pub fn step(&self) -> usize {
        if self.len == 0 { 0 } else { self.cursor + 1 }
    }

    pub fn percent(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.step() as f64 / self.len as f64 * 100.0
        }
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.len == 0 || self.cursor + 1 >= self.len
    }

    pub fn can_step_backward(&self) -> bool {
        !self.at_start()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.at_end()
    }

    pub fn can_jump_to_end(&self) -> bool {
        self.len > 0 && !self.at_end()
    }
}
