pub mod scorers;
pub mod table;

pub use scorers::*;
pub use table::*;
