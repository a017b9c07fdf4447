// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External command lines and argument template expansion.
//!
//! Templates support two placeholders: `{config}` (the shared configuration
//! path) and `{package}` (the dotted test package of a suite). `{{` and `}}`
//! produce literal braces.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Values substituted into argument templates.
#[derive(Debug, Clone, Default)]
pub struct Vars<'a> {
    /// Shared configuration path, used by the formatter and the type checker.
    pub config: &'a str,
    /// Test package for a scoped suite run.
    pub package: Option<&'a str>,
}

impl<'a> Vars<'a> {
    pub fn new(config: &'a str) -> Self {
        Self {
            config,
            package: None,
        }
    }

    /// Same variables with `{package}` bound.
    pub fn with_package(&self, package: &'a str) -> Self {
        Self {
            config: self.config,
            package: Some(package),
        }
    }

    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "config" => Some(self.config),
            "package" => self.package,
            _ => None,
        }
    }
}

/// Expand placeholders in a single argument template.
pub fn expand(template: &str, vars: &Vars<'_>) -> Result<String> {
    let fail = |reason: String| Error::Placeholder {
        template: template.to_string(),
        reason,
    };

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(fail("unterminated `{`".to_string())),
                    }
                }
                match vars.lookup(&name) {
                    Some(value) => out.push_str(value),
                    None if name == "package" => {
                        return Err(fail("`{package}` is only available to test suites".to_string()));
                    }
                    None => return Err(fail(format!("unknown placeholder `{{{name}}}`"))),
                }
            }
            '}' => return Err(fail("unmatched `}`".to_string())),
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Expand every template in `templates`, in order.
pub fn expand_all(templates: &[String], vars: &Vars<'_>) -> Result<Vec<String>> {
    templates.iter().map(|t| expand(t, vars)).collect()
}

/// One fully expanded external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Alias that produced this step.
    pub alias: String,
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(alias: impl Into<String>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            alias: alias.into(),
            program: program.into(),
            args,
        }
    }

    /// Build a process for this command, run from `root` with inherited stdio.
    pub fn to_process(&self, root: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Characters that are safe to print unquoted in a POSIX shell.
fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ',' | ':' | '=' | '+' | '@' | '%')
}

/// Quote an argument for display so it can be pasted into a shell.
pub fn quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_plain) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
