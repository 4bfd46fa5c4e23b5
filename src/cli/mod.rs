// src/cli/mod.rs

use clap::Parser;

pub mod handlers;

/// opkit: helper routines for controllers and operators.
///
/// Actions:
///   rand-string <LENGTH> [--count N]      Print random DNS-label-safe identifiers.
///   run [--dir DIR] [--env K=V]... [--spec FILE] [--] ARGV...
///                                         Run a command and print its stdout.
///   pformat [INPUT]                       Pretty print JSON from INPUT or stdin.
///
/// Set RUST_LOG=info to see the executed commands and their captured output.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    verbatim_doc_comment,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The action to perform.
    pub action: String,

    /// Arguments passed to the action.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_args_are_passed_through() {
        let cli = Cli::try_parse_from(["opkit", "run", "--env", "A=1", "--", "ls", "-l"]).unwrap();
        assert_eq!(cli.action, "run");
        assert_eq!(cli.args, vec!["--env", "A=1", "--", "ls", "-l"]);
    }

    #[test]
    fn test_action_is_required() {
        assert!(Cli::try_parse_from(["opkit"]).is_err());
    }
}
