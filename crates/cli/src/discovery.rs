// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task file discovery.
//!
//! Walks from the current directory up to the git root looking for crdtask.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::TASK_FILE;

/// What the upward walk found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Task file, if one was found (or given explicitly).
    pub task_file: Option<PathBuf>,
    /// First ancestor containing `.git`, when the walk reached it without
    /// finding a task file.
    pub git_root: Option<PathBuf>,
}

impl Discovery {
    /// Discovery result for an explicitly named task file.
    pub fn explicit(task_file: PathBuf) -> Self {
        Self {
            task_file: Some(task_file),
            git_root: None,
        }
    }

    /// Project root for a run: the task file's directory, else the git
    /// root, else `cwd`.
    ///
    /// Every tool runs from this directory so `./` means the repository root.
    pub fn root(&self, cwd: &Path) -> PathBuf {
        self.task_file
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .or(self.git_root.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf())
    }
}

/// Search for crdtask.toml from `start_dir` up to the git root.
pub fn discover(start_dir: &Path) -> Discovery {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(TASK_FILE);
        if config_path.is_file() {
            return Discovery {
                task_file: Some(config_path),
                git_root: None,
            };
        }

        // Stop at git root
        if current.join(".git").exists() {
            return Discovery {
                task_file: None,
                git_root: Some(current),
            };
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return Discovery::default(),
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
