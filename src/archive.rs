//! Builds the in-memory ZIP archive and decides its file name.

use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use std::path::PathBuf;

use log::info;
use time::OffsetDateTime;
use zip::{CompressionMethod, ZipWriter, result::ZipError, write::FileOptions};

use crate::error::{Error, Result};
use crate::parser::FileSet;

/// Bundle the selected files into a deflate ZIP held entirely in memory.
///
/// Entries are written in the selection's sorted order so identical inputs
/// produce byte-identical archives (the `zip` crate is built without its
/// `time` feature, so entry timestamps are a constant as well). A selected
/// name the parser never produced is a contract violation and fails the whole
/// build; nothing partial is returned.
pub fn build_archive(files: &FileSet, selection: &BTreeSet<String>) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for name in selection {
        let content = files
            .get(name)
            .ok_or_else(|| Error::ContractViolation(name.clone()))?;
        zip.start_file(name.as_str(), options)?;
        zip.write_all(content.as_bytes())
            .map_err(ZipError::from)?;
    }

    let cursor = zip.finish()?;
    let buffer = cursor.into_inner();
    info!(
        "built archive with {} entr(ies), {} byte(s)",
        selection.len(),
        buffer.len()
    );
    Ok(buffer)
}

/// Default archive name when the user leaves the name field empty.
pub fn default_archive_name() -> String {
    format!(
        "generated_zip_{}.zip",
        OffsetDateTime::now_utc().unix_timestamp()
    )
}

/// Apply the archive naming policy to a user-supplied name.
///
/// An empty (or all-whitespace) name falls back to [`default_archive_name`];
/// a name without the `.zip` suffix (case-insensitive) gets it appended.
pub fn archive_file_name(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        default_archive_name()
    } else if trimmed.to_ascii_lowercase().ends_with(".zip") {
        trimmed.to_string()
    } else {
        format!("{trimmed}.zip")
    }
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps an existing matching extension (case-insensitive); otherwise
/// replaces it. Used on the save-dialog result, which need not honor the
/// dialog's filter.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io::{Cursor, Read};
    use std::path::PathBuf;

    use super::{archive_file_name, build_archive, default_archive_name, ensure_extension};
    use crate::error::Error;
    use crate::parser::parse;

    fn selection(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn entry_content(buffer: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(buffer)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn build_archive_holds_exactly_the_selected_entries() {
        let files = parse("### File: `a.txt`\nhi\n### File: `b.txt`\nbye\n").unwrap();
        let buffer = build_archive(&files, &selection(&["a.txt"])).unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(buffer.as_slice())).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(entry_content(&buffer, "a.txt"), "hi\n");
    }

    // Names with path separators stay verbatim as entry paths.
    #[test]
    fn build_archive_preserves_path_like_names() {
        let files = parse("### File: `src/main.py`\nprint('hi')\n").unwrap();
        let buffer = build_archive(&files, &selection(&["src/main.py"])).unwrap();
        assert_eq!(entry_content(&buffer, "src/main.py"), "print('hi')\n");
    }

    #[test]
    fn build_archive_fails_fast_on_unknown_name() {
        let files = parse("### File: `a.txt`\nhi\n").unwrap();
        let err = build_archive(&files, &selection(&["missing.txt"])).unwrap_err();
        assert!(matches!(err, Error::ContractViolation(name) if name == "missing.txt"));
    }

    #[test]
    fn build_archive_of_empty_selection_is_a_valid_empty_zip() {
        let files = parse("### File: `a.txt`\nhi\n").unwrap();
        let buffer = build_archive(&files, &BTreeSet::new()).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(buffer.as_slice())).unwrap();
        assert_eq!(archive.len(), 0);
    }

    // Sorted iteration plus constant entry timestamps make the build idempotent.
    #[test]
    fn build_archive_is_byte_for_byte_idempotent() {
        let files = parse("### File: `a.txt`\nhi\n### File: `b.txt`\nbye\n").unwrap();
        let chosen = selection(&["a.txt", "b.txt"]);
        let first = build_archive(&files, &chosen).unwrap();
        let second = build_archive(&files, &chosen).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn archive_file_name_appends_suffix_case_insensitively() {
        assert_eq!(archive_file_name("bundle"), "bundle.zip");
        assert_eq!(archive_file_name("bundle.ZIP"), "bundle.ZIP");
        assert_eq!(archive_file_name("  bundle.zip  "), "bundle.zip");
    }

    #[test]
    fn archive_file_name_falls_back_to_generated_default() {
        let name = archive_file_name("   ");
        assert!(name.starts_with("generated_zip_"));
        assert!(name.ends_with(".zip"));
        assert!(default_archive_name().starts_with("generated_zip_"));
    }

    // Should leave an existing matching extension untouched, ignoring case.
    #[test]
    fn ensure_extension_preserves_matching_extension_case_insensitive() {
        let path = PathBuf::from("/tmp/bundle.ZIP");
        let result = ensure_extension(path.clone(), "zip");

        assert_eq!(result, path);
    }

    // Should replace an unmatched extension with the requested one.
    #[test]
    fn ensure_extension_replaces_when_different() {
        let path = PathBuf::from("bundle.txt");
        let result = ensure_extension(path, "zip");

        assert_eq!(result.extension().and_then(|e| e.to_str()), Some("zip"));
    }
}
