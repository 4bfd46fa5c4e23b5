// src/core/spec_loader.rs

//! Builds [`CommandSpec`] values from shell-like command lines and TOML files.
//!
//! A spec file looks like this:
//!
//! ```toml
//! command = "kubectl apply -f manifest.yaml"   # or: argv = ["kubectl", "apply", ...]
//! dir = "/srv/deploy"
//! env = ["KUBECONFIG=/etc/kube/config"]
//! ```

use crate::models::CommandSpec;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    #[error("Failed to read spec file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML command spec: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("A command spec needs either 'argv' or 'command', not both.")]
    ConflictingCommand,
    #[error("A command spec needs either 'argv' or 'command'.")]
    MissingCommand,
}

/// The on-disk shape of a spec file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TomlCommandSpec {
    argv: Option<Vec<String>>,
    command: Option<String>,
    dir: Option<PathBuf>,
    #[serde(default)]
    env: Vec<String>,
}

impl CommandSpec {
    /// Splits a shell-like command line into argv using POSIX quoting rules.
    /// A blank line yields an empty argv, which the executor rejects.
    pub fn parse(command_line: &str) -> Result<Self, SpecError> {
        let trimmed = command_line.trim();
        let argv =
            shlex::split(trimmed).ok_or_else(|| SpecError::CommandParse(trimmed.to_string()))?;
        Ok(Self::new(argv))
    }

    /// Parses a spec from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SpecError> {
        let raw: TomlCommandSpec = toml::from_str(content)?;
        let mut spec = match (raw.argv, raw.command) {
            (Some(_), Some(_)) => return Err(SpecError::ConflictingCommand),
            (None, None) => return Err(SpecError::MissingCommand),
            (Some(argv), None) => Self::new(argv),
            (None, Some(line)) => Self::parse(&line)?,
        };
        spec.dir = raw.dir;
        spec.env = raw.env;
        Ok(spec)
    }

    /// Reads and parses a spec file.
    pub fn from_toml_file(path: &Path) -> Result<Self, SpecError> {
        log::debug!("Loading command spec from '{}'", path.display());
        let content = fs::read_to_string(path).map_err(|e| SpecError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_respects_quotes() {
        let spec = CommandSpec::parse(r#"  sh -c "echo 'hi there'"  "#).unwrap();
        assert_eq!(spec.argv, vec!["sh", "-c", "echo 'hi there'"]);
        assert!(spec.env.is_empty());
        assert_eq!(spec.dir, None);
    }

    #[test]
    fn test_parse_blank_line_gives_empty_argv() {
        assert!(CommandSpec::parse("   ").unwrap().argv.is_empty());
    }

    #[test]
    fn test_parse_unbalanced_quote_fails() {
        let result = CommandSpec::parse("echo \"unterminated");
        assert!(matches!(result, Err(SpecError::CommandParse(_))));
    }

    #[test]
    fn test_toml_with_argv() {
        let spec = CommandSpec::from_toml_str(
            r#"
            argv = ["go", "test", "./..."]
            dir = "/src/controller"
            env = ["GOFLAGS=-mod=vendor", "CGO_ENABLED=0"]
            "#,
        )
        .unwrap();

        assert_eq!(spec.argv, vec!["go", "test", "./..."]);
        assert_eq!(spec.effective_dir(), Some(Path::new("/src/controller")));
        assert_eq!(spec.env, vec!["GOFLAGS=-mod=vendor", "CGO_ENABLED=0"]);
    }

    #[test]
    fn test_toml_with_command_line() {
        let spec = CommandSpec::from_toml_str(r#"command = "git rev-parse --short HEAD""#).unwrap();
        assert_eq!(spec.argv, vec!["git", "rev-parse", "--short", "HEAD"]);
        assert_eq!(spec.dir, None);
    }

    #[test]
    fn test_toml_needs_exactly_one_command_form() {
        let both = CommandSpec::from_toml_str("argv = [\"ls\"]\ncommand = \"ls\"");
        assert!(matches!(both, Err(SpecError::ConflictingCommand)));

        let neither = CommandSpec::from_toml_str("dir = \"/tmp\"");
        assert!(matches!(neither, Err(SpecError::MissingCommand)));
    }

    #[test]
    fn test_toml_rejects_unknown_fields() {
        let result = CommandSpec::from_toml_str("argv = [\"ls\"]\ntimeout = 5");
        assert!(matches!(result, Err(SpecError::TomlParse(_))));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"argv = [\"echo\", \"hello\"]\nenv = [\"FOO=bar\"]\n")
            .unwrap();
        file.flush().unwrap();

        let spec = CommandSpec::from_toml_file(file.path()).unwrap();
        assert_eq!(spec, CommandSpec::new(["echo", "hello"]).with_env("FOO", "bar"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = CommandSpec::from_toml_file(Path::new("non_existent_spec_for_test.toml"));
        assert!(matches!(result, Err(SpecError::Io { .. })));
    }
}
