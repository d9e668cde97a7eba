//! Trash can management over a `files`/`info` directory pair.
//!
//! Items are moved into `<root>/files/<name>` and described by
//! `<root>/info/<name>.trashinfo`. [`TrashManager`] keeps both stores paired
//! across put, list, restore, delete and empty.

pub mod config;
pub mod errors;
pub mod fs;
pub mod helpers;
pub mod info;
pub mod manager;
pub mod models;

pub use config::{TrashConfig, TRASH_DIR_ENV};
pub use errors::{Result, TrashError};
pub use fs::{FileSystem, RealFileSystem};
pub use helpers::{
    build_unique_basename,
    format_trash_datetime,
    parse_trash_datetime,
    TRASHINFO_EXTENSION,
    TRASHINFO_TIME_FORMAT,
};
pub use manager::TrashManager;
pub use models::{CheckReport, TrashDirectory, TrashRecord};

/// Re-export a small stable API surface for front ends.
pub mod prelude {
    pub use crate::{
        config::TrashConfig,
        errors::{Result, TrashError},
        fs::{FileSystem, RealFileSystem},
        manager::TrashManager,
        models::*,
    };
}
