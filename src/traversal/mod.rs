//! Traversal engines and the traces they produce.
//!
//! An engine runs once, synchronously, over an immutable [`Graph`](crate::graph::Graph)
//! and materializes every meaningful state transition as a [`Snapshot`]. The
//! resulting [`Trace`] can then be replayed in any direction without running
//! the algorithm again.

mod algorithm;
mod breadth_first;
mod depth_first;
mod engine;
mod info;
mod snapshot;
mod strategy;
mod trace;

pub use algorithm::*;
pub use breadth_first::*;
pub use depth_first::*;
pub use engine::*;
pub use info::*;
pub use snapshot::*;
pub use strategy::*;
pub use trace::*;
