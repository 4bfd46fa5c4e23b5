// src/bin/opkit.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use opkit::{
    cli::{Cli, handlers},
    system::executor,
};

// --- Command Definition and Registry ---

/// Defines an action, its aliases, and its handler function.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>) -> Result<()>,
}

static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "pformat",
        aliases: &["fmt"],
        handler: handlers::pformat::handle,
    },
    CommandDefinition {
        name: "rand-string",
        aliases: &["rand", "id"],
        handler: handlers::rand_string::handle,
    },
    CommandDefinition {
        name: "run",
        aliases: &["exec"],
        handler: handlers::run::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // Clap errors from the per-action parsers print their own usage.
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }

        eprintln!("\n{}: {:#}", "Error".red().bold(), e);

        // A child that exited non-zero hands its exit code on, like a shell would.
        let code = e
            .downcast_ref::<executor::ExecutionError>()
            .and_then(executor::ExecutionError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    match find_command(&cli.action) {
        Some(command) => (command.handler)(cli.args),
        None => {
            let known: Vec<&str> = COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect();
            Err(anyhow::anyhow!(
                "Unknown action '{}'. Available actions: {}",
                cli.action.cyan(),
                known.join(", ")
            ))
        }
    }
}
