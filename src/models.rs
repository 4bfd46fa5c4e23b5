// src/models.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything needed to run one subprocess.
///
/// `argv[0]` names the program, the remaining elements are its arguments.
/// `env` holds extra `KEY=VALUE` entries applied on top of the inherited
/// environment, in order, so a later duplicate key wins.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub argv: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            dir: None,
            env: Vec::new(),
        }
    }

    /// Sets the working directory. An empty path means "inherit".
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Appends a `KEY=VALUE` entry built from its parts.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push(format!("{}={}", key, value));
        self
    }

    /// Appends a raw `KEY=VALUE` entry as given.
    pub fn with_env_entry(mut self, entry: impl Into<String>) -> Self {
        self.env.push(entry.into());
        self
    }

    /// The working directory override, if one was given and it is not empty.
    pub fn effective_dir(&self) -> Option<&Path> {
        self.dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// The command as a single line, for log and error messages.
    pub fn display_line(&self) -> String {
        self.argv.join(" ")
    }
}

/// Splits a raw `KEY=VALUE` entry. The key must be non-empty; the value may be.
pub fn split_env_entry(entry: &str) -> Option<(&str, &str)> {
    entry.split_once('=').filter(|(key, _)| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let spec = CommandSpec::new(["make", "build"])
            .with_dir("/srv/app")
            .with_env("GOOS", "linux")
            .with_env_entry("CGO_ENABLED=0");

        assert_eq!(spec.argv, vec!["make", "build"]);
        assert_eq!(spec.effective_dir(), Some(Path::new("/srv/app")));
        assert_eq!(spec.env, vec!["GOOS=linux", "CGO_ENABLED=0"]);
        assert_eq!(spec.display_line(), "make build");
    }

    #[test]
    fn test_empty_dir_means_inherit() {
        let spec = CommandSpec::new(["ls"]).with_dir("");
        assert_eq!(spec.effective_dir(), None);
        assert_eq!(CommandSpec::new(["ls"]).effective_dir(), None);
    }

    #[test]
    fn test_split_env_entry() {
        assert_eq!(split_env_entry("FOO=bar"), Some(("FOO", "bar")));
        assert_eq!(split_env_entry("FOO="), Some(("FOO", "")));
        assert_eq!(split_env_entry("URL=a=b"), Some(("URL", "a=b")));
        assert_eq!(split_env_entry("FOO"), None);
        assert_eq!(split_env_entry("=bar"), None);
    }
}
