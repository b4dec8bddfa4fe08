//! The owned top-level state of one visualizer: graph, builder, algorithm and
//! playback, plus the keyboard map that drives them.

mod command;
#[allow(clippy::module_inception)]
mod session;

pub use command::*;
pub use session::*;
