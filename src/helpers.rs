//! Shared helpers for trash info naming, timestamps and path encoding.

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use std::path::Path;
use std::time::SystemTime;

/// File extension used by trash info files.
pub const TRASHINFO_EXTENSION: &str = ".trashinfo";

/// Section header every trash info file starts with.
pub const TRASHINFO_SECTION: &str = "Trash Info";

/// Deletion date format used by trash info metadata.
pub const TRASHINFO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Builds a deterministic, namespaced filename for trash files.
pub fn build_unique_basename(file_name: &str, suffix: u64) -> String {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("item");
    format!("{base}.{suffix}")
}

/// Parses a deletion date string, e.g. `2024-05-01T12:30:00`.
pub fn parse_trash_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TRASHINFO_TIME_FORMAT).ok()
}

/// Converts a wall-clock time to local time truncated to whole seconds.
pub fn local_datetime(time: SystemTime) -> NaiveDateTime {
    let local = DateTime::<Local>::from(time).naive_local();
    local.with_nanosecond(0).unwrap_or(local)
}

/// Serializes a datetime into the trash info format.
pub fn format_trash_datetime(value: &NaiveDateTime) -> String {
    value.format(TRASHINFO_TIME_FORMAT).to_string()
}

/// Percent-encodes each component of a path, keeping `/` separators literal.
pub fn encode_trash_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Reverses [`encode_trash_path`]. Fails when the decoded bytes are not UTF-8.
pub fn decode_trash_path(value: &str) -> Result<String, String> {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    #[test]
    fn unique_basename_appends_suffix() {
        assert_eq!(build_unique_basename("a.txt", 1), "a.txt.1");
        assert_eq!(build_unique_basename("/tmp/dir", 3), "dir.3");
    }

    #[test]
    fn datetime_parses_record_format_only() {
        let parsed = parse_trash_datetime("2024-05-01T12:30:05").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(12, 30, 5)
                .unwrap()
        );
        assert!(parse_trash_datetime("2024-05-01 12:30:05").is_none());
        assert!(parse_trash_datetime("").is_none());
    }

    #[test]
    fn local_datetime_has_second_precision() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_750);
        assert_eq!(local_datetime(time).nanosecond(), 0);
    }

    #[test]
    fn path_encoding_keeps_separators() {
        assert_eq!(encode_trash_path("/tmp/a b%.txt"), "/tmp/a%20b%25.txt");
        assert_eq!(encode_trash_path("rel/x"), "rel/x");
        assert_eq!(decode_trash_path("/tmp/a%20b%25.txt").unwrap(), "/tmp/a b%.txt");
    }

    #[test]
    fn path_decoding_rejects_invalid_utf8() {
        assert!(decode_trash_path("/tmp/%FF").is_err());
    }
}
