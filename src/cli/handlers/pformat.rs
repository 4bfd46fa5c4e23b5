// src/cli/handlers/pformat.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};

use crate::core::formatter;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Pretty prints JSON input; anything else is echoed unchanged."
)]
struct PformatArgs {
    /// The text to format. Read from stdin when omitted.
    input: Option<String>,
}

pub fn handle(args: Vec<String>) -> Result<()> {
    let pformat_args = PformatArgs::try_parse_from(&args)?;

    let input = match pformat_args.input {
        Some(input) => input,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            buffer
        }
    };

    let mut stdout = io::stdout().lock();
    write_rendered(&mut stdout, &render(&input))?;
    stdout.flush()?;
    Ok(())
}

/// Writes the rendered text followed by a newline, unless it already ends in one.
fn write_rendered(out: &mut impl Write, rendered: &str) -> io::Result<()> {
    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// JSON documents are re-indented through the formatter; other text is returned as-is.
fn render(input: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => formatter::pformat(&value),
        Err(e) => {
            log::debug!("Input is not JSON ({}), printing it verbatim", e);
            formatter::pformat(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_object() {
        assert_eq!(
            render(r#"{"kind":"TFJob","spec":{"replicas":2}}"#),
            "{\n  \"kind\": \"TFJob\",\n  \"spec\": {\n    \"replicas\": 2\n  }\n}"
        );
    }

    #[test]
    fn test_render_json_string_keeps_quotes() {
        assert_eq!(render(r#""plain""#), r#""plain""#);
    }

    #[test]
    fn test_render_plain_text_verbatim() {
        assert_eq!(render("not { json"), "not { json");
    }

    #[test]
    fn test_piped_text_keeps_a_single_trailing_newline() {
        let mut out = Vec::new();
        write_rendered(&mut out, &render("plain text from stdin\n")).unwrap();
        assert_eq!(out, b"plain text from stdin\n");
    }

    #[test]
    fn test_json_output_gets_a_trailing_newline() {
        let mut out = Vec::new();
        write_rendered(&mut out, &render("[1]\n")).unwrap();
        assert_eq!(out, b"[\n  1\n]\n");
    }
}
