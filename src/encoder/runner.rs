use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};

use tracing::{debug, info};

use crate::encoder::command::CommandSpec;
use crate::error::{DreamifierError, Result};

/// Run `spec` in the foreground and return its exit code unchanged.
///
/// The child shares our stdin, stdout and stderr so ffmpeg's own progress
/// output and overwrite prompt reach the user. It stays in our process group.
/// Blocks until the child exits; there is no timeout.
pub fn run(spec: &CommandSpec) -> Result<i32> {
    let mut cmd = spec.to_command();
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!("Spawning {}", spec.program());

    let status = cmd.status().map_err(|e| match e.kind() {
        ErrorKind::NotFound => DreamifierError::ExternalToolMissing {
            program: spec.program().to_string(),
        },
        _ => DreamifierError::ExternalToolLaunch {
            program: spec.program().to_string(),
            source: e,
        },
    })?;

    let code = exit_code(status);
    info!("{} exited with code {}", spec.program(), code);
    Ok(code)
}

/// Turn a non-zero exit code into `ExternalToolFailure`
pub fn check_exit_code(code: i32) -> Result<()> {
    if code != 0 {
        return Err(DreamifierError::ExternalToolFailure { code });
    }
    Ok(())
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    // Shells report signal deaths as 128 + signal number
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_distinct_error() {
        let spec = CommandSpec::new("video-dreamifier-no-such-encoder", ["-version"]);

        match run(&spec).unwrap_err() {
            DreamifierError::ExternalToolMissing { program } => {
                assert_eq!(program, "video-dreamifier-no-such-encoder");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_success_returns_zero() {
        let spec = CommandSpec::new("sh", ["-c", "exit 0"]);
        assert_eq!(run(&spec).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_code_passed_through() {
        let spec = CommandSpec::new("sh", ["-c", "exit 3"]);
        assert_eq!(run(&spec).unwrap(), 3);

        let spec = CommandSpec::new("sh", ["-c", "exit 187"]);
        assert_eq!(run(&spec).unwrap(), 187);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_death_maps_to_shell_convention() {
        let spec = CommandSpec::new("sh", ["-c", "kill -TERM $$"]);
        assert_eq!(run(&spec).unwrap(), 128 + 15);
    }

    #[test]
    fn test_check_exit_code() {
        assert!(check_exit_code(0).is_ok());

        let err = check_exit_code(5).unwrap_err();
        assert!(matches!(err, DreamifierError::ExternalToolFailure { code: 5 }));
        assert_eq!(err.exit_code(), 5);
    }
}
