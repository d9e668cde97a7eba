//! Trash operations over the `files`/`info` directory pair.
//!
//! Every operation re-reads the stores from disk. Operations that touch both
//! stores do so in two steps without rollback: when the second step fails the
//! error is returned and the stores are left as they are.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::TrashConfig;
use crate::errors::TrashError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::helpers::{build_unique_basename, local_datetime};
use crate::models::{CheckReport, TrashDirectory, TrashRecord};

pub struct TrashManager<F: FileSystem = RealFileSystem> {
    dir: TrashDirectory,
    fs: F,
}

impl TrashManager<RealFileSystem> {
    pub fn new(config: &TrashConfig) -> Self {
        Self::with_filesystem(config, RealFileSystem)
    }
}

impl<F: FileSystem> TrashManager<F> {
    pub fn with_filesystem(config: &TrashConfig, fs: F) -> Self {
        Self {
            dir: config.trash_directory(),
            fs,
        }
    }

    pub fn directory(&self) -> &TrashDirectory {
        &self.dir
    }

    /// Moves `path` into the trash and records where it came from.
    ///
    /// Symlinks are not followed: a link to a directory is trashed as a link
    /// without `recursive`, and a dangling link is trashed rather than
    /// reported as `NotFound`.
    ///
    /// Returns the trash name the item is stored under. When the base name is
    /// already taken the first free `<name>.<n>` is used instead.
    pub fn put(&self, path: &Path, recursive: bool) -> crate::Result<String> {
        if !self.fs.exists(path) {
            return Err(TrashError::not_found(path));
        }
        if self.fs.is_dir(path) && !recursive {
            return Err(TrashError::RecursiveRequired(path.to_path_buf()));
        }
        if path.to_str().is_none() {
            return Err(TrashError::InvalidPath(format!(
                "{} is not valid UTF-8",
                path.display()
            )));
        }
        let base_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                TrashError::InvalidPath(format!("{} has no file name", path.display()))
            })?;

        self.fs.create_dir_all(&self.dir.files_dir)?;
        self.fs.create_dir_all(&self.dir.info_dir)?;

        let trash_name = self.free_trash_name(base_name);
        let target = self.dir.file_path(&trash_name);
        debug!(from = %path.display(), to = %target.display(), "moving into trash");
        self.fs.rename(path, &target)?;

        let record = TrashRecord::new(trash_name.as_str(), path, local_datetime(self.fs.now()));
        let info_path = self.dir.info_path(&trash_name);
        let written = record
            .to_trashinfo()
            .and_then(|contents| self.fs.write_to_string(&info_path, &contents));
        if let Err(err) = written {
            warn!(
                trash_name = %trash_name,
                "content moved to trash but its record could not be written"
            );
            return Err(err);
        }

        info!(trash_name = %trash_name, origin = %path.display(), "moved to trash");
        Ok(trash_name)
    }

    /// Returns every record in the metadata store, in directory order.
    pub fn list(&self) -> crate::Result<Vec<TrashRecord>> {
        let mut records = Vec::new();
        for info_path in self.info_entries()? {
            let Some(trash_name) = TrashDirectory::trash_name_of_info(&info_path) else {
                continue;
            };
            records.push(self.read_record(&trash_name, &info_path)?);
        }
        Ok(records)
    }

    /// Looks up the record for `trash_name`.
    pub fn get(&self, trash_name: &str) -> crate::Result<TrashRecord> {
        validate_trash_name(trash_name)?;
        let info_path = self.dir.info_path(trash_name);
        if !self.fs.exists(&info_path) {
            return Err(TrashError::not_found(trash_name));
        }
        self.read_record(trash_name, &info_path)
    }

    /// Moves `trash_name` back to its origin path and drops its record.
    ///
    /// The content is looked up before the destination, so a record whose
    /// content is gone fails with `NotFound` even when the origin is occupied.
    pub fn restore(&self, trash_name: &str, overwrite: bool) -> crate::Result<PathBuf> {
        let record = self.get(trash_name)?;
        let origin = record.origin_path.as_path();
        let content = self.dir.file_path(trash_name);
        if !self.fs.exists(&content) {
            return Err(TrashError::not_found(content));
        }

        if self.fs.exists(origin) {
            if !overwrite {
                return Err(TrashError::DestinationExists(origin.to_path_buf()));
            }
            // rename(2) replaces files in place but not directories.
            if self.fs.is_dir(origin) || self.fs.is_dir(&content) {
                debug!(path = %origin.display(), "removing restore destination");
                self.fs.remove_dir_all(origin)?;
            }
        }
        if let Some(parent) = origin.parent() {
            if !parent.as_os_str().is_empty() && !self.fs.exists(parent) {
                self.fs.create_dir_all(parent)?;
            }
        }

        debug!(from = %content.display(), to = %origin.display(), "moving out of trash");
        self.fs.rename(&content, origin)?;

        if let Err(err) = self.fs.remove_file(&self.dir.info_path(trash_name)) {
            warn!(
                trash_name = %trash_name,
                "item restored but its record could not be removed"
            );
            return Err(err);
        }

        info!(trash_name = %trash_name, origin = %origin.display(), "restored from trash");
        Ok(record.origin_path)
    }

    /// Permanently removes `trash_name` and its record.
    ///
    /// Without `recursive` only a single entry is removed, so a non-empty
    /// directory fails with an I/O error and stays in the trash.
    pub fn delete(&self, trash_name: &str, recursive: bool) -> crate::Result<()> {
        validate_trash_name(trash_name)?;
        let content = self.dir.file_path(trash_name);
        if !self.fs.exists(&content) {
            return Err(TrashError::not_found(trash_name));
        }

        if recursive {
            self.fs.remove_dir_all(&content)?;
        } else if self.fs.is_dir(&content) {
            self.fs.remove_dir(&content)?;
        } else {
            self.fs.remove_file(&content)?;
        }

        // A record that is already gone leaves nothing to unpair.
        let info_path = self.dir.info_path(trash_name);
        if self.fs.exists(&info_path) {
            if let Err(err) = self.fs.remove_file(&info_path) {
                warn!(
                    trash_name = %trash_name,
                    "content deleted but its record could not be removed"
                );
                return Err(err);
            }
        }

        info!(trash_name = %trash_name, "deleted from trash");
        Ok(())
    }

    /// Removes everything from both stores, content first.
    ///
    /// Returns the names removed from the content store. On failure the error
    /// is [`TrashError::Interrupted`], carrying the names removed so far.
    pub fn empty(&self) -> crate::Result<Vec<String>> {
        let mut removed = Vec::new();
        match self.empty_into(&mut removed) {
            Ok(()) => {
                info!(count = removed.len(), "emptied trash");
                Ok(removed)
            }
            Err(source) => {
                warn!(count = removed.len(), "emptying trash stopped partway");
                Err(TrashError::Interrupted {
                    removed,
                    source: Box::new(source),
                })
            }
        }
    }

    fn empty_into(&self, removed: &mut Vec<String>) -> crate::Result<()> {
        for entry in self.content_entries()? {
            debug!(path = %entry.display(), "removing content");
            self.fs.remove_dir_all(&entry)?;
            removed.push(entry_name(&entry));
        }
        for entry in self.info_entries()? {
            debug!(path = %entry.display(), "removing record");
            self.fs.remove_dir_all(&entry)?;
        }
        Ok(())
    }

    /// Compares both stores without modifying either of them.
    pub fn check(&self) -> crate::Result<CheckReport> {
        let content: BTreeSet<String> = self
            .content_entries()?
            .iter()
            .map(|entry| entry_name(entry))
            .collect();

        let mut report = CheckReport::default();
        let mut recorded = BTreeSet::new();
        for info_path in self.info_entries()? {
            let Some(trash_name) = TrashDirectory::trash_name_of_info(&info_path) else {
                continue;
            };
            match self.read_record(&trash_name, &info_path) {
                Ok(_) => {}
                Err(TrashError::MalformedRecord { path, .. }) => {
                    report.malformed_records.push(path)
                }
                Err(err) => return Err(err),
            }
            recorded.insert(trash_name);
        }

        report.orphaned_content = content.difference(&recorded).cloned().collect();
        report.orphaned_records = recorded.difference(&content).cloned().collect();
        report.malformed_records.sort();
        Ok(report)
    }

    fn free_trash_name(&self, base_name: &str) -> String {
        let taken = |name: &str| {
            self.fs.exists(&self.dir.file_path(name)) || self.fs.exists(&self.dir.info_path(name))
        };
        if !taken(base_name) {
            return base_name.to_string();
        }
        (1..)
            .map(|suffix| build_unique_basename(base_name, suffix))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base_name.to_string())
    }

    fn read_record(&self, trash_name: &str, info_path: &Path) -> crate::Result<TrashRecord> {
        let contents = self.fs.read_to_string(info_path)?;
        TrashRecord::from_trashinfo(trash_name, info_path, &contents)
    }

    fn content_entries(&self) -> crate::Result<Vec<PathBuf>> {
        self.entries_of(&self.dir.files_dir)
    }

    fn info_entries(&self) -> crate::Result<Vec<PathBuf>> {
        self.entries_of(&self.dir.info_dir)
    }

    /// A store that was never created lists as empty.
    fn entries_of(&self, store: &Path) -> crate::Result<Vec<PathBuf>> {
        if self.fs.exists(store) {
            self.fs.list_dir(store)
        } else {
            Ok(Vec::new())
        }
    }
}

fn entry_name(entry: &Path) -> String {
    entry
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Trash names address a single entry inside a store.
fn validate_trash_name(trash_name: &str) -> crate::Result<()> {
    if trash_name.is_empty() || trash_name == "." || trash_name == ".." || trash_name.contains('/')
    {
        return Err(TrashError::InvalidPath(format!(
            "{trash_name:?} is not a trash name"
        )));
    }
    Ok(())
}
