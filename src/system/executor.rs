// src/system/executor.rs

use crate::models::{CommandSpec, split_env_entry};
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command cannot be empty.")]
    EmptyCommand,
    #[error("Environment entry '{0}' is not of the form KEY=VALUE.")]
    InvalidEnvEntry(String),
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, #[source] std::io::Error),
    #[error("Command '{command}' failed: {status}")]
    NonZeroExitStatus { command: String, status: ExitStatus },
}

impl ExecutionError {
    /// The child's exit code, when it ran and exited on its own.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::NonZeroExitStatus { status, .. } => status.code(),
            _ => None,
        }
    }
}

/// Runs a subprocess to completion and returns its stdout.
///
/// The child inherits this process's environment with `spec.env` applied on
/// top, and its working directory unless `spec.dir` is set and non-empty.
/// Stdin is closed. Stdout and stderr are buffered in memory in full and there
/// is no timeout, so this is only meant for commands with modest output that
/// are known to terminate.
///
/// Captured stderr is logged, never returned: on failure the caller gets the
/// spawn or exit error and the diagnostics go to the log.
pub fn run(spec: &CommandSpec) -> Result<Vec<u8>, ExecutionError> {
    let command_line = spec.display_line();
    log::info!("Execute command: {}", command_line);

    let (program, args) = spec.argv.split_first().ok_or(ExecutionError::EmptyCommand)?;
    let env_vars = spec
        .env
        .iter()
        .map(|entry| {
            split_env_entry(entry).ok_or_else(|| ExecutionError::InvalidEnvEntry(entry.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .envs(env_vars)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = spec.effective_dir() {
        command.current_dir(dunce::simplified(dir));
    }

    let output = match command.output() {
        Ok(output) => output,
        Err(e) => {
            let err = ExecutionError::CommandFailed(command_line, e);
            log_failure(&err, &[], &[]);
            return Err(err);
        }
    };

    if !output.status.success() {
        let err = ExecutionError::NonZeroExitStatus {
            command: command_line,
            status: output.status,
        };
        log_failure(&err, &output.stdout, &output.stderr);
        return Err(err);
    }

    log::info!("Subprocess output:\n{}", String::from_utf8_lossy(&output.stdout));
    Ok(output.stdout)
}

/// Positional form of [`run`]: `dir` may be empty to inherit the working
/// directory, and `env` holds `KEY=VALUE` entries.
pub fn run_command<C, E>(
    command: &[C],
    dir: &str,
    env: &[E],
) -> Result<Vec<u8>, ExecutionError>
where
    C: AsRef<str>,
    E: AsRef<str>,
{
    let mut spec = CommandSpec::new(to_owned_strings(command));
    if !dir.is_empty() {
        spec = spec.with_dir(Path::new(dir));
    }
    spec.env = to_owned_strings(env);
    run(&spec)
}

fn to_owned_strings<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let item: &str = item.as_ref();
            item.to_string()
        })
        .collect()
}

fn log_failure(err: &ExecutionError, stdout: &[u8], stderr: &[u8]) {
    log::error!("Command failed: {}", err);
    log::error!("Subprocess error:\n{}", String::from_utf8_lossy(stderr));
    log::info!("Subprocess output:\n{}", String::from_utf8_lossy(stdout));
}
