pub mod build;
pub mod init;
pub mod lint;

pub use build::{build, BuildArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};
