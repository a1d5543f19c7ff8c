//! # Encoder Module
//!
//! Builds the ffmpeg invocation and runs it as a foreground child process.

pub mod command;
pub mod filter;
pub mod runner;

pub use command::{build_command, validate_input, CommandSpec, DreamParams};
pub use filter::{format_decimal, FilterParams};
pub use runner::{check_exit_code, run};
