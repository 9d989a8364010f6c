//! Input boundary: loading a marked-up text blob from disk.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};

/// Read a file and decode it as UTF-8.
///
/// Decoding is strict: bytes that are not valid UTF-8 fail with a read error
/// instead of being replaced, since a silently mangled blob would parse into
/// silently mangled files.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| Error::Read {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let text = String::from_utf8(bytes).map_err(|_| Error::Read {
        path: path.to_path_buf(),
        reason: "not valid UTF-8".to_string(),
    })?;

    info!("read {} byte(s) from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_text_file;
    use crate::error::Error;

    #[test]
    fn read_text_file_returns_decoded_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("### File: `a.txt`\nhi\n".as_bytes()).unwrap();

        let text = read_text_file(file.path()).unwrap();
        assert_eq!(text, "### File: `a.txt`\nhi\n");
    }

    // Invalid UTF-8 must surface as a read error, not a lossy decode.
    #[test]
    fn read_text_file_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = read_text_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn read_text_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
