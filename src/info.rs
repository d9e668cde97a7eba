//! Reading and writing `.trashinfo` records.
//!
//! A record is a small ini-style document:
//!
//! ```text
//! [Trash Info]
//! Path=/tmp/a%20b.txt
//! DeletionDate=2024-05-01T12:30:00
//! ```
//!
//! `Path` is always percent-decoded. Records written by tools that store the
//! raw path are read differently: a literal `a%20b` comes back as `a b`.
//! Escapes that do not form a valid `%XX` pass through unchanged.

use std::path::{Path, PathBuf};

use crate::errors::TrashError;
use crate::helpers::{
    decode_trash_path,
    encode_trash_path,
    format_trash_datetime,
    parse_trash_datetime,
    TRASHINFO_SECTION,
};
use crate::models::TrashRecord;

const PATH_KEY: &str = "Path";
const DELETION_DATE_KEY: &str = "DeletionDate";

impl TrashRecord {
    /// Renders the record in trash info format.
    pub fn to_trashinfo(&self) -> crate::Result<String> {
        let origin = self.origin_path.to_str().ok_or_else(|| {
            TrashError::InvalidPath(format!(
                "{} is not valid UTF-8",
                self.origin_path.display()
            ))
        })?;
        Ok(format!(
            "[{TRASHINFO_SECTION}]\n{PATH_KEY}={}\n{DELETION_DATE_KEY}={}\n",
            encode_trash_path(origin),
            format_trash_datetime(&self.deletion_date),
        ))
    }

    /// Parses the contents of `info_path`, which records `trash_name`.
    pub fn from_trashinfo(
        trash_name: impl Into<String>,
        info_path: &Path,
        contents: &str,
    ) -> crate::Result<Self> {
        let mut in_section = false;
        let mut seen_section = false;
        let mut path = None;
        let mut deletion_date = None;

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_section = section.trim() == TRASHINFO_SECTION;
                seen_section |= in_section;
                continue;
            }
            if !in_section {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(TrashError::malformed(
                    info_path,
                    format!("expected key=value, got {line:?}"),
                ));
            };
            match key.trim() {
                PATH_KEY if path.is_none() => path = Some(value.trim().to_string()),
                DELETION_DATE_KEY if deletion_date.is_none() => {
                    deletion_date = Some(value.trim().to_string())
                }
                _ => {}
            }
        }

        if !seen_section {
            return Err(TrashError::malformed(
                info_path,
                format!("missing [{TRASHINFO_SECTION}] section"),
            ));
        }
        let path = path
            .ok_or_else(|| TrashError::malformed(info_path, "unable to parse Path"))?;
        let origin_path = decode_trash_path(&path)
            .map_err(|reason| TrashError::malformed(info_path, reason))?;
        let deletion_date = deletion_date
            .ok_or_else(|| TrashError::malformed(info_path, "missing DeletionDate"))?;
        let deletion_date = parse_trash_datetime(&deletion_date).ok_or_else(|| {
            TrashError::malformed(info_path, format!("invalid DeletionDate {deletion_date:?}"))
        })?;

        Ok(Self {
            trash_name: trash_name.into(),
            origin_path: PathBuf::from(origin_path),
            deletion_date,
        })
    }
}
