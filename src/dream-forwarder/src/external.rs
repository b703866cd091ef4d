//! Entry point backed by another executable.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::entry_point::EntryPoint;
use crate::error::{Result, STARTUP_FAILED_EXIT_CODE, StartupError};

/// How the program takes over from the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Launch {
    /// Spawn the program as a child and wait for it.
    #[default]
    Spawn,
    /// Replace the current process image with the program (Unix).
    ///
    /// Signals, pid and exit status then belong to the program itself.
    /// Falls back to [`Launch::Spawn`] on other platforms.
    Exec,
}

/// Runs an external program with inherited environment and stdio.
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: OsString,
    args: Vec<OsString>,
    launch: Launch,
}

impl ExternalCommand {
    /// Create an entry point for `program`, a name searched on `PATH` or a path.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            launch: Launch::default(),
        }
    }

    /// Append arguments passed verbatim to the program.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Choose how the program is launched.
    pub fn launch(mut self, launch: Launch) -> Self {
        self.launch = launch;
        self
    }

    /// The program as configured, before resolution.
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments that will be passed to the program.
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Locate a bare program name on `PATH`.
    ///
    /// Anything with a path separator is returned as is; launching it reports
    /// whether it exists and is executable.
    pub fn resolve(&self) -> Result<PathBuf> {
        let program = Path::new(&self.program);
        if program.components().count() > 1 {
            return Ok(program.to_path_buf());
        }

        which::which(program).map_err(|source| StartupError::EntryPointNotFound {
            program: self.program.to_string_lossy().into_owned(),
            source,
        })
    }
}

impl EntryPoint for ExternalCommand {
    fn run(&mut self) -> Result<i32> {
        let program = self.resolve()?;
        tracing::debug!(
            program = %program.display(),
            args = self.args.len(),
            launch = ?self.launch,
            "Delegating to entry point"
        );

        let mut command = Command::new(&program);
        command.args(&self.args);

        match self.launch {
            #[cfg(unix)]
            Launch::Exec => {
                use std::os::unix::process::CommandExt;

                // Only returns on failure.
                let source = command.exec();
                Err(StartupError::Spawn { program, source })
            }
            _ => spawn_and_wait(command, program),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        self.program.to_string_lossy()
    }
}

fn spawn_and_wait(mut command: Command, program: PathBuf) -> Result<i32> {
    let mut child = command.spawn().map_err(|source| StartupError::Spawn {
        program: program.clone(),
        source,
    })?;

    let status = child
        .wait()
        .map_err(|source| StartupError::Wait { program, source })?;

    let code = exit_code_of(status);
    tracing::debug!(%status, code, "Entry point finished");
    Ok(code)
}

/// Map a child's exit status to the code this process should exit with.
///
/// On Unix a child killed by a signal maps to `128 + signal`, as shells do.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    STARTUP_FAILED_EXIT_CODE
}
