//! Subcommand implementations.

pub mod check;
pub mod fmt;
pub mod new;
pub mod show;
