pub mod role;
pub mod slots;

pub use role::*;
pub use slots::*;
