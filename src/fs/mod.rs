//! Reading graph descriptions from disk and writing traces out as JSON.

mod graph_file;
mod trace_export;

pub use graph_file::*;
pub use trace_export::*;
