// src/cli/handlers/run.rs

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::{models::CommandSpec, system::executor};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Runs a command and prints its captured stdout."
)]
struct RunArgs {
    /// Working directory for the command. Overrides `dir` from --spec.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Extra environment entries (e.g., "KEY=VALUE"), appended after those from --spec.
    #[arg(long)]
    env: Vec<String>,

    /// A TOML file describing the command (argv or command, dir, env).
    #[arg(long)]
    spec: Option<PathBuf>,

    /// The program and its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    argv: Vec<String>,
}

pub fn handle(args: Vec<String>) -> Result<()> {
    let run_args = RunArgs::try_parse_from(&args)?;
    let spec = build_spec(run_args)?;

    let output = executor::run(&spec)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

/// Layers the command-line flags over the optional spec file.
fn build_spec(run_args: RunArgs) -> Result<CommandSpec> {
    let mut spec = match run_args.spec {
        Some(path) => {
            if !run_args.argv.is_empty() {
                return Err(anyhow!(
                    "Pass the command either in --spec or on the command line, not both."
                ));
            }
            CommandSpec::from_toml_file(&path)
                .with_context(|| format!("Failed to load command spec '{}'", path.display()))?
        }
        None => CommandSpec::new(run_args.argv),
    };

    if let Some(dir) = run_args.dir {
        spec.dir = Some(dir);
    }
    spec.env.extend(run_args.env);
    Ok(spec)
}
