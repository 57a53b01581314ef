pub mod collection;
pub mod player;

pub use collection::*;
pub use player::*;
