pub mod fs;
pub mod graph;
pub mod playback;
pub mod session;
pub mod sets;
pub mod statistics;
pub mod traversal;
