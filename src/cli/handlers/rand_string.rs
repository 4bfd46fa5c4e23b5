// src/cli/handlers/rand_string.rs

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use crate::core::id_generator;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Prints random DNS-label-safe identifiers ([0-9a-z])."
)]
struct RandStringArgs {
    /// The number of characters in each identifier.
    length: usize,

    /// How many identifiers to print, one per line.
    #[arg(long, short, default_value_t = 1)]
    count: usize,
}

pub fn handle(args: Vec<String>) -> Result<()> {
    let rand_args = RandStringArgs::try_parse_from(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..rand_args.count {
        writeln!(out, "{}", id_generator::rand_string(rand_args.length))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = RandStringArgs::try_parse_from(["8"]).unwrap();
        assert_eq!(args.length, 8);
        assert_eq!(args.count, 1);
    }

    #[test]
    fn test_parse_count() {
        let args = RandStringArgs::try_parse_from(["12", "--count", "3"]).unwrap();
        assert_eq!(args.length, 12);
        assert_eq!(args.count, 3);
    }

    #[test]
    fn test_length_is_required() {
        assert!(RandStringArgs::try_parse_from(Vec::<String>::new()).is_err());
        assert!(RandStringArgs::try_parse_from(["-1"]).is_err());
    }
}
