pub mod mutation;
pub mod slot;
pub mod squad;
pub mod validator;

pub use mutation::*;
pub use slot::*;
pub use squad::*;
pub use validator::*;
