//! Working sets used by the traversal engines.
//!
//! # Submodules
//!
//! - [`frontier`]: the explicit work-lists, a LIFO [`frontier::StackSet`] and a
//!   FIFO [`frontier::FifoSet`], both refusing duplicate entries
//! - [`visited`]: visited-node tracking for duplicate detection

pub mod frontier;
pub mod visited;
