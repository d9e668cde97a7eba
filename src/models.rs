use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use crate::helpers::TRASHINFO_EXTENSION;

/// Location of a trash can and its two stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashDirectory {
    pub path: PathBuf,
    pub files_dir: PathBuf,
    pub info_dir: PathBuf,
}

impl TrashDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self {
            files_dir: path.join("files"),
            info_dir: path.join("info"),
            path,
        }
    }

    /// Where the content of `trash_name` lives.
    pub fn file_path(&self, trash_name: &str) -> PathBuf {
        self.files_dir.join(trash_name)
    }

    /// Where the record of `trash_name` lives.
    pub fn info_path(&self, trash_name: &str) -> PathBuf {
        self.info_dir.join(format!("{trash_name}{TRASHINFO_EXTENSION}"))
    }

    /// Recovers the trash name from a record path, `None` for foreign entries.
    pub fn trash_name_of_info(info_path: &Path) -> Option<String> {
        info_path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(TRASHINFO_EXTENSION))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

/// One trashed item as described by its metadata record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashRecord {
    pub trash_name: String,
    pub origin_path: PathBuf,
    pub deletion_date: NaiveDateTime,
}

impl TrashRecord {
    pub fn new(
        trash_name: impl Into<String>,
        origin_path: impl Into<PathBuf>,
        deletion_date: NaiveDateTime,
    ) -> Self {
        Self {
            trash_name: trash_name.into(),
            origin_path: origin_path.into(),
            deletion_date,
        }
    }
}

/// Result of comparing the content store with the metadata store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Content entries that have no record.
    pub orphaned_content: Vec<String>,
    /// Records whose content is gone.
    pub orphaned_records: Vec<String>,
    /// Records that could not be parsed.
    pub malformed_records: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_consistent(&self) -> bool {
        self.orphaned_content.is_empty()
            && self.orphaned_records.is_empty()
            && self.malformed_records.is_empty()
    }
}
