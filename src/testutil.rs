//! Fluent fixture builders for tests.

use std::collections::HashMap;

/// Accumulates a CLI invocation (args, flags, env, stdin) and produces the
/// final argument list. Used by integration tests to keep command assembly
/// readable.
#[derive(Debug, Default)]
pub struct CommandBuilder {
    args: Vec<String>,
    flags: Vec<(String, Option<String>)>,
    env: HashMap<String, String>,
    stdin: Option<String>,
}

impl CommandBuilder {
    /// Start an empty invocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set positional arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Add a boolean flag (`--name`).
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.flags.push((name.into(), None));
        self
    }

    /// Add a valued flag (`--name value`).
    pub fn flag_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.push((name.into(), Some(value.into())));
        self
    }

    /// Add an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set stdin content.
    pub fn stdin(mut self, content: impl Into<String>) -> Self {
        self.stdin = Some(content.into());
        self
    }

    /// The complete argument list: positionals then flags.
    pub fn build_args(&self) -> Vec<String> {
        let mut result = self.args.clone();
        for (name, value) in &self.flags {
            result.push(format!("--{name}"));
            if let Some(value) = value {
                result.push(value.clone());
            }
        }
        result
    }

    /// The accumulated environment variables.
    pub fn env_vars(&self) -> &HashMap<String, String> {
        &self.env
    }

    /// The stdin content, if set.
    pub fn stdin_content(&self) -> Option<&str> {
        self.stdin.as_deref()
    }
}
