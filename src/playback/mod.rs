//! Stepping through a [`Trace`](crate::traversal::Trace): a cursor, a play
//! flag, a speed and the timer that advances the cursor while playing.

mod controller;
mod state;
mod ticker;
mod transport;

pub use controller::*;
pub use state::*;
pub use transport::*;
