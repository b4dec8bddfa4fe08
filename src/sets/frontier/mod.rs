//! Explicit traversal work-lists.
//!
//! Both frontiers hold each node id at most once: pushing an id that is
//! already waiting is a no-op. They differ only in which end `pop` takes from.

mod fifo_set;
mod frontier_set;
mod stack_set;

pub use fifo_set::*;
pub use frontier_set::*;
pub use stack_set::*;
