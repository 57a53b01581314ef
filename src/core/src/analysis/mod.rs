pub mod aggregator;
pub mod result;

pub use aggregator::*;
pub use result::*;
