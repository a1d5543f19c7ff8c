use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::config::{self, EncoderProfile};
use crate::encoder::filter::FilterParams;
use crate::error::{DreamifierError, Result};

/// Ordered token list for one encoder invocation
///
/// Built once by [`build_command`] and never changed afterwards. The first
/// token is the program, the rest are its arguments in the order ffmpeg's
/// argument grammar requires. Arguments are kept as `OsString` so paths
/// reach the encoder byte for byte, even when they are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a command from a program and its arguments
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program followed by every argument, lossily decoded for display
    pub fn tokens(&self) -> Vec<Cow<'_, str>> {
        std::iter::once(Cow::Borrowed(self.program.as_str()))
            .chain(self.args.iter().map(|arg| arg.to_string_lossy()))
            .collect()
    }

    /// Build the `std::process::Command` for this spec
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

/// Everything the caller controls about one run
#[derive(Debug, Clone, PartialEq)]
pub struct DreamParams {
    pub input: PathBuf,
    pub output: PathBuf,

    /// Trim start, passed through to `-ss` untouched
    pub start: Option<String>,

    /// Trim end, passed through to `-to` untouched
    pub end: Option<String>,

    pub filter: FilterParams,
}

impl DreamParams {
    /// Check the numeric parameters are in range
    pub fn validate(&self) -> Result<()> {
        config::validate_slow("slow", self.filter.slow)?;
        config::validate_blur("blur", self.filter.blur)?;
        config::validate_width("width", self.filter.width)?;
        Ok(())
    }
}

/// Fail with `InputNotFound` unless `input` is an existing file
pub fn validate_input<P: AsRef<Path>>(input: P) -> Result<()> {
    let input = input.as_ref();
    if !input.is_file() {
        return Err(DreamifierError::InputNotFound {
            path: input.display().to_string(),
        });
    }
    Ok(())
}

/// Assemble the encoder invocation for `params`
pub fn build_command(params: &DreamParams, profile: &EncoderProfile) -> CommandSpec {
    let mut args: Vec<OsString> = Vec::with_capacity(16);

    // Trim flags must precede -i so they seek the input
    if let Some(start) = non_empty(&params.start) {
        args.push(OsString::from("-ss"));
        args.push(OsString::from(start));
    }
    if let Some(end) = non_empty(&params.end) {
        args.push(OsString::from("-to"));
        args.push(OsString::from(end));
    }

    args.push(OsString::from("-i"));
    args.push(params.input.clone().into_os_string());

    let graph = params.filter.graph();
    debug!("Filter graph: {}", graph);

    for arg in [
        "-filter_complex",
        graph.as_str(),
        "-c:v",
        profile.video_codec.as_str(),
        "-b:v",
        profile.bitrate.as_str(),
        "-pix_fmt",
        profile.pixel_format.as_str(),
    ] {
        args.push(OsString::from(arg));
    }

    args.push(params.output.clone().into_os_string());

    CommandSpec::new(profile.program.clone(), args)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
