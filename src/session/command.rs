use crate::traversal::Algorithm;

/// Keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    ArrowRight,
    ArrowLeft,
    Home,
    End,
    Char(char),
}

/// Every playback or selection request a front end can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    TogglePlay,
    Reset,
    StepForward,
    StepBackward,
    JumpToStart,
    JumpToEnd,
    SetSpeed(u64),
    SelectAlgorithm(Algorithm),
}

impl Command {
    /// The keyboard map: Space toggles playback, arrows step, Home and End
    /// jump, `r` resets.
    ///
    /// ```
    /// use graphreel::session::{Command, Key};
    ///
    /// assert_eq!(Command::from_key(Key::Space), Some(Command::TogglePlay));
    /// assert_eq!(Command::from_key(Key::Char('R')), Some(Command::Reset));
    /// assert_eq!(Command::from_key(Key::Char('x')), None);
    /// ```
    pub fn from_key(key: Key) -> Option<Command> {
        match key {
            Key::Space => Some(Command::TogglePlay),
            Key::ArrowRight => Some(Command::StepForward),
            Key::ArrowLeft => Some(Command::StepBackward),
            Key::Home => Some(Command::JumpToStart),
            Key::End => Some(Command::JumpToEnd),
            Key::Char(c) if c.eq_ignore_ascii_case(&'r') => Some(Command::Reset),
            Key::Char(_) => None,
        }
    }
}
