//! Error types for forwarding.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code when the entry point cannot be found (shell convention).
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Exit code when the entry point exists but cannot be started (shell convention).
pub const CANNOT_EXECUTE_EXIT_CODE: i32 = 126;

/// Exit code for any other startup failure.
pub const STARTUP_FAILED_EXIT_CODE: i32 = 1;

/// Failure to locate or start the delegated entry point.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The entry point is not on `PATH` or the given path is not executable.
    #[error("Entry point `{program}` not found: {source}")]
    EntryPointNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The entry point could not be spawned or exec'd.
    #[error("Failed to start entry point {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry point was started but its exit status could not be collected.
    #[error("Failed to wait for entry point {}: {source}", .program.display())]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised by injected entry points that have nothing to run.
    #[error("Entry point unavailable: {0}")]
    Unavailable(String),
}

impl StartupError {
    /// Process exit code to report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EntryPointNotFound { .. } | Self::Unavailable(_) => NOT_FOUND_EXIT_CODE,
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                NOT_FOUND_EXIT_CODE
            }
            Self::Spawn { .. } => CANNOT_EXECUTE_EXIT_CODE,
            Self::Wait { .. } => STARTUP_FAILED_EXIT_CODE,
        }
    }
}

/// Result type for forwarding operations.
pub type Result<T> = std::result::Result<T, StartupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let not_found = StartupError::EntryPointNotFound {
            program: "invokeai".to_string(),
            source: which::Error::CannotFindBinaryPath,
        };
        assert_eq!(not_found.exit_code(), 127);

        let spawn = StartupError::Spawn {
            program: PathBuf::from("/usr/bin/invokeai"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(spawn.exit_code(), 126);

        let missing_path = StartupError::Spawn {
            program: PathBuf::from("/opt/invokeai/bin/invokeai"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(missing_path.exit_code(), 127);

        let wait = StartupError::Wait {
            program: PathBuf::from("/usr/bin/invokeai"),
            source: io::Error::from(io::ErrorKind::Interrupted),
        };
        assert_eq!(wait.exit_code(), 1);

        assert_eq!(StartupError::Unavailable("stub".into()).exit_code(), 127);
    }

    #[test]
    fn test_display_names_program() {
        let err = StartupError::EntryPointNotFound {
            program: "invokeai".to_string(),
            source: which::Error::CannotFindBinaryPath,
        };
        assert!(err.to_string().contains("`invokeai`"));

        let err = StartupError::Spawn {
            program: PathBuf::from("/opt/invokeai/bin/invokeai"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/opt/invokeai/bin/invokeai"));
    }
}
