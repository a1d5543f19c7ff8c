use thiserror::Error;

/// Main error type for the Video-Dreamifier library
#[derive(Error, Debug)]
pub enum DreamifierError {
    #[error("Input file does not exist: {path}")]
    InputNotFound { path: String },

    #[error("FFmpeg failed with exit code {code}")]
    ExternalToolFailure { code: i32 },

    #[error("Encoder `{program}` not found on PATH")]
    ExternalToolMissing { program: String },

    #[error("Failed to launch encoder `{program}`: {source}")]
    ExternalToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}: {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using DreamifierError
pub type Result<T> = std::result::Result<T, DreamifierError>;

impl DreamifierError {
    /// Process exit status to terminate with when this error reaches `main`
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ExternalToolFailure { code } => *code,
            _ => 1,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ExternalToolMissing { program } => {
                format!(
                    "Could not find the encoder '{}'. Install FFmpeg or pass --ffmpeg with its path.",
                    program
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
