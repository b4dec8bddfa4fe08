//! Graph model: node identity, the immutable [`Graph`], and the ways to make one.
//!
//! A graph comes from one of three places:
//!
//! - [`generate_default`]: the fixed nine-node example
//! - [`Preset`]: small hand-made graphs loaded into a builder
//! - [`GraphBuilder`]: user-entered labels and label pairs, finalized with a
//!   circular layout

mod builder;
#[allow(clippy::module_inception)]
mod graph;
pub mod layout;
mod node;
mod presets;

pub use builder::*;
pub use graph::*;
pub use node::*;
pub use presets::*;
