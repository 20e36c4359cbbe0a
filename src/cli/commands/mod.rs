//! Subcommands of the `nineboard` binary

pub mod analyze;
pub mod play;
