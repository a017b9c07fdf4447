// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alias table and plan resolution.
//!
//! An alias is either a leaf that maps to exactly one external command line
//! or an aggregate that runs other aliases in order. Resolving an alias
//! flattens it depth-first into a [`Plan`].

use crate::command::{CommandLine, Vars, expand_all};
use crate::config::{AliasConfig, Config, SuiteConfig, ToolsConfig};
use crate::error::{Error, Result};

/// Aggregate alias running every suite.
pub const TEST: &str = "test";
/// Formatter alias.
pub const FORMAT: &str = "format";
/// Type checker alias.
pub const STATIC_ANALYSIS: &str = "static-analysis";

/// Suffix appended to a suite name to form its alias.
const SUITE_SUFFIX: &str = "-test";

/// Alias name for a suite (`unit` becomes `unit-test`).
pub fn suite_alias(suite: &str) -> String {
    format!("{suite}{SUITE_SUFFIX}")
}

/// What an alias does when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Invoke the test runner, scoped to `package` when set.
    Test { package: Option<String> },
    /// Invoke the formatter against the whole tree.
    Format,
    /// Invoke the type checker against the whole tree.
    StaticAnalysis,
    /// Invoke a user-defined command.
    Command { program: String, args: Vec<String> },
    /// Run other aliases in order, stopping at the first failure.
    Steps(Vec<String>),
}

/// Where an alias was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Builtin,
    Suite,
    User,
}

/// A named alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub description: String,
    pub origin: Origin,
    pub action: Action,
}

/// The flattened, ordered list of command lines an alias resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub alias: String,
    pub steps: Vec<CommandLine>,
}

/// All aliases available for a project.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: Vec<Alias>,
    tools: ToolsConfig,
}

impl AliasTable {
    /// Build the table from configuration, validating every alias.
    ///
    /// Order is `test`, the suite aliases, `format`, `static-analysis`, then
    /// user aliases in file order.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut aliases = Vec::with_capacity(config.suite.len() + config.alias.len() + 3);

        aliases.push(test_alias(&config.suite));
        for suite in &config.suite {
            aliases.push(suite_entry(suite)?);
        }
        aliases.push(Alias {
            name: FORMAT.to_string(),
            description: "Format sources in place".to_string(),
            origin: Origin::Builtin,
            action: Action::Format,
        });
        aliases.push(Alias {
            name: STATIC_ANALYSIS.to_string(),
            description: "Run the static type checker".to_string(),
            origin: Origin::Builtin,
            action: Action::StaticAnalysis,
        });
        for user in &config.alias {
            aliases.push(user_entry(user)?);
        }

        for (i, alias) in aliases.iter().enumerate() {
            if aliases[..i].iter().any(|a| a.name == alias.name) {
                return Err(Error::InvalidAlias {
                    name: alias.name.clone(),
                    reason: "defined more than once".to_string(),
                });
            }
        }

        let table = Self {
            aliases,
            tools: config.tools.clone(),
        };

        // Reject unknown steps and cycles up front, not only when run.
        for alias in &table.aliases {
            table.leaves(&alias.name)?;
        }

        tracing::debug!(count = table.aliases.len(), "built alias table");
        Ok(table)
    }

    /// Aliases in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.iter()
    }

    /// Look up an alias by name.
    pub fn get(&self, name: &str) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.name == name)
    }

    /// Names of every alias, in display order.
    pub fn names(&self) -> Vec<String> {
        self.aliases.iter().map(|a| a.name.clone()).collect()
    }

    /// Resolve an alias into the command lines it runs, in order.
    pub fn resolve(&self, name: &str, vars: &Vars<'_>) -> Result<Plan> {
        let steps = self
            .leaves(name)?
            .into_iter()
            .map(|leaf| self.command_line(leaf, vars))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(alias = name, steps = steps.len(), "resolved plan");
        Ok(Plan {
            alias: name.to_string(),
            steps,
        })
    }

    /// Flatten an alias into its leaf aliases, depth-first.
    fn leaves(&self, name: &str) -> Result<Vec<&Alias>> {
        let mut stack = Vec::new();
        let mut out = Vec::new();
        self.collect_leaves(name, &mut stack, &mut out)?;
        Ok(out)
    }

    fn collect_leaves<'a>(
        &'a self,
        name: &str,
        stack: &mut Vec<String>,
        out: &mut Vec<&'a Alias>,
    ) -> Result<()> {
        let alias = self.get(name).ok_or_else(|| Error::UnknownAlias {
            name: name.to_string(),
            known: self.names(),
        })?;

        if stack.iter().any(|s| s == name) {
            let mut path = stack.clone();
            path.push(name.to_string());
            return Err(Error::AliasCycle { path });
        }

        match &alias.action {
            Action::Steps(steps) => {
                stack.push(name.to_string());
                for step in steps {
                    self.collect_leaves(step, stack, out)?;
                }
                stack.pop();
            }
            _ => out.push(alias),
        }
        Ok(())
    }

    fn command_line(&self, alias: &Alias, vars: &Vars<'_>) -> Result<CommandLine> {
        let (program, args) = match &alias.action {
            Action::Test { package } => {
                let test = &self.tools.test;
                let args = match package {
                    Some(package) => {
                        let scoped = vars.with_package(package);
                        let mut args = expand_all(&test.args, &scoped)?;
                        args.extend(expand_all(&test.scope_args, &scoped)?);
                        args
                    }
                    None => expand_all(&test.args, vars)?,
                };
                (test.program.clone(), args)
            }
            Action::Format => {
                let format = &self.tools.format;
                (format.program.clone(), expand_all(&format.args, vars)?)
            }
            Action::StaticAnalysis => {
                let check = &self.tools.static_analysis;
                (check.program.clone(), expand_all(&check.args, vars)?)
            }
            Action::Command { program, args } => (program.clone(), expand_all(args, vars)?),
            Action::Steps(_) => {
                return Err(Error::InvalidAlias {
                    name: alias.name.clone(),
                    reason: "aggregate alias has no command line".to_string(),
                });
            }
        };
        Ok(CommandLine::new(alias.name.clone(), program, args))
    }
}

/// The aggregate `test` alias. Without suites it runs the test runner unscoped.
fn test_alias(suites: &[SuiteConfig]) -> Alias {
    if suites.is_empty() {
        return Alias {
            name: TEST.to_string(),
            description: "Run the test runner across the whole project".to_string(),
            origin: Origin::Builtin,
            action: Action::Test { package: None },
        };
    }

    let steps: Vec<String> = suites.iter().map(|s| suite_alias(&s.name)).collect();
    Alias {
        name: TEST.to_string(),
        description: format!("Run all test suites ({})", steps.join(", ")),
        origin: Origin::Builtin,
        action: Action::Steps(steps),
    }
}

fn suite_entry(suite: &SuiteConfig) -> Result<Alias> {
    let name = suite_alias(&suite.name);
    validate_name(&suite.name, &name)?;
    if suite.package.trim().is_empty() {
        return Err(Error::InvalidAlias {
            name,
            reason: "suite package is empty".to_string(),
        });
    }
    Ok(Alias {
        description: format!("Run the {} test suite ({})", suite.name, suite.package),
        name,
        origin: Origin::Suite,
        action: Action::Test {
            package: Some(suite.package.clone()),
        },
    })
}

fn user_entry(user: &AliasConfig) -> Result<Alias> {
    validate_name(&user.name, &user.name)?;
    let invalid = |reason: &str| Error::InvalidAlias {
        name: user.name.clone(),
        reason: reason.to_string(),
    };

    let action = match (&user.steps, &user.command) {
        (Some(_), Some(_)) => return Err(invalid("set either `steps` or `command`, not both")),
        (None, None) => return Err(invalid("one of `steps` or `command` is required")),
        (Some(steps), None) if steps.is_empty() => return Err(invalid("`steps` is empty")),
        (Some(steps), None) => Action::Steps(steps.clone()),
        (None, Some(command)) => match command.split_first() {
            Some((program, args)) if !program.trim().is_empty() => Action::Command {
                program: program.clone(),
                args: args.to_vec(),
            },
            _ => return Err(invalid("`command` needs a program")),
        },
    };

    let description = user.description.clone().unwrap_or_else(|| match &action {
        Action::Steps(steps) => format!("Run {}", steps.join(", ")),
        Action::Command { program, args } => {
            std::iter::once(program.as_str())
                .chain(args.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ")
        }
        _ => String::new(),
    });

    Ok(Alias {
        name: user.name.clone(),
        description,
        origin: Origin::User,
        action,
    })
}

fn validate_name(raw: &str, alias: &str) -> Result<()> {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return Err(Error::InvalidAlias {
            name: alias.to_string(),
            reason: "names must be non-empty and contain no whitespace".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
