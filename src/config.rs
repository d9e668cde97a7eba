//! Trash root resolution.
//!
//! The root is resolved once per process and handed to the manager. Order:
//! 1. an explicit directory (e.g. the `--trash-dir` flag),
//! 2. the `TRASH_DIR` environment variable,
//! 3. `$XDG_DATA_HOME/Trash`,
//! 4. `<home>/.local/share/Trash`, with the home directory from `directories`.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use directories::BaseDirs;

use crate::errors::TrashError;
use crate::models::TrashDirectory;

/// Environment variable that overrides the trash root.
pub const TRASH_DIR_ENV: &str = "TRASH_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashConfig {
    pub root: PathBuf,
}

impl TrashConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the root from the process environment.
    pub fn resolve(explicit: Option<PathBuf>) -> crate::Result<Self> {
        if let Some(root) = explicit {
            return Ok(Self::with_root(root));
        }
        let environ: HashMap<String, String> = env::vars().collect();
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::from_environ(&environ, home)
    }

    /// Resolves the root from an environment map and a home directory.
    pub fn from_environ(
        environ: &HashMap<String, String>,
        home: Option<PathBuf>,
    ) -> crate::Result<Self> {
        if let Some(root) = non_empty(environ, TRASH_DIR_ENV) {
            return Ok(Self::with_root(root));
        }
        if let Some(xdg_data_home) = non_empty(environ, "XDG_DATA_HOME") {
            return Ok(Self::with_root(PathBuf::from(xdg_data_home).join("Trash")));
        }
        let home = home.ok_or_else(|| TrashError::missing("home directory"))?;
        Ok(Self::with_root(home.join(".local/share/Trash")))
    }

    pub fn trash_directory(&self) -> TrashDirectory {
        TrashDirectory::new(self.root.clone())
    }
}

fn non_empty<'a>(environ: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    environ
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
