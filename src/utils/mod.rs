//! Utility modules shared by the resolver and the CLI.

pub mod date;
pub mod path;
