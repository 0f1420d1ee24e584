pub mod filesystem;
pub mod naming;

pub use filesystem::*;
pub use naming::*;
