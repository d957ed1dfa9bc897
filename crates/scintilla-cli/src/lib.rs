//! Library surface of the Scintilla CLI: job configuration parsing and the
//! run driver. The binary in `main.rs` is a thin clap wrapper over these.

pub mod config;
pub mod runner;
