mod hashset;
mod visitor_set;

pub use hashset::*;
pub use visitor_set::*;
