//! Counters describing one traversal run.
//!
//! The engines bump these as they go; the final [`TraceStats`] is attached to
//! the [`Trace`](crate::traversal::Trace) and printed by the command-line front end.

mod stats;
pub use stats::*;
