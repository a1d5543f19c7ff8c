//! # Video-Dreamifier
//!
//! Turn any clip into a blurred, slowed-down background video.
//!
//! The heavy lifting happens in `ffmpeg`. This crate validates the input,
//! assembles one ffmpeg command line with a fixed filter graph (motion
//! interpolation, slowdown, gaussian blur, downscale) and runs it in the
//! foreground, forwarding its exit code.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use video_dreamifier::{
//!     config::Config,
//!     encoder::{self, DreamParams, FilterParams},
//! };
//!
//! # fn main() -> video_dreamifier::Result<()> {
//! let config = Config::default();
//! let params = DreamParams {
//!     input: "clip.mp4".into(),
//!     output: "background.webm".into(),
//!     start: Some("00:00:10".to_string()),
//!     end: None,
//!     filter: FilterParams { slow: 4.0, blur: 12.0, width: 854 },
//! };
//!
//! encoder::validate_input(&params.input)?;
//! let spec = encoder::build_command(&params, &config.encoder);
//! println!("{}", spec);
//!
//! let code = encoder::run(&spec)?;
//! encoder::check_exit_code(code)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`encoder`] - Filter graph, command construction and the child-process runner
//! - [`config`] - TOML configuration for defaults and the output profile
//! - [`error`] - Error types and exit-code mapping

pub mod config;
pub mod encoder;
pub mod error;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    encoder::{CommandSpec, DreamParams, FilterParams},
    error::{DreamifierError, Result},
};
