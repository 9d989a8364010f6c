//! Phosphor file-icon mapping for parsed file types.
//!
//! Parsed entries only carry a name, so unlike icon pickers that can consult
//! a MIME type this one works purely off the extracted type string.

/// Return a Phosphor icon for a file type as produced by
/// [`crate::selection::file_type`].
pub fn icon_for_type(file_type: &str) -> &'static str {
    match file_type.to_ascii_lowercase().as_str() {
        "png" => egui_phosphor::regular::FILE_PNG,
        "jpg" | "jpeg" => egui_phosphor::regular::FILE_JPG,
        "svg" => egui_phosphor::regular::FILE_SVG,
        "csv" => egui_phosphor::regular::FILE_CSV,
        "zip" | "gz" | "tar" | "7z" | "rar" | "xz" | "zst" | "bz2" => {
            egui_phosphor::regular::FILE_ARCHIVE
        }
        "json" | "xml" | "yaml" | "yml" | "toml" => egui_phosphor::regular::FILE_CODE,
        "ini" => egui_phosphor::regular::FILE_INI,
        "html" | "htm" => egui_phosphor::regular::FILE_HTML,
        "md" => egui_phosphor::regular::FILE_MD,
        "css" => egui_phosphor::regular::FILE_CSS,
        "js" => egui_phosphor::regular::FILE_JS,
        "jsx" => egui_phosphor::regular::FILE_JSX,
        "ts" => egui_phosphor::regular::FILE_TS,
        "tsx" => egui_phosphor::regular::FILE_TSX,
        "rs" => egui_phosphor::regular::FILE_RS,
        "py" => egui_phosphor::regular::FILE_PY,
        "c" | "h" => egui_phosphor::regular::FILE_C,
        "cpp" | "cc" | "cxx" | "hpp" => egui_phosphor::regular::FILE_CPP,
        "cs" => egui_phosphor::regular::FILE_C_SHARP,
        "sql" => egui_phosphor::regular::FILE_SQL,
        "vue" => egui_phosphor::regular::FILE_VUE,
        "txt" => egui_phosphor::regular::FILE_TXT,
        _ => egui_phosphor::regular::FILE,
    }
}

#[cfg(test)]
mod tests {
    use super::icon_for_type;

    #[test]
    fn icon_for_type_matches_known_extensions_case_insensitively() {
        assert_eq!(icon_for_type("py"), egui_phosphor::regular::FILE_PY);
        assert_eq!(icon_for_type("PY"), egui_phosphor::regular::FILE_PY);
        assert_eq!(icon_for_type("md"), egui_phosphor::regular::FILE_MD);
    }

    // Dotless names produce their whole name as the type; those fall through.
    #[test]
    fn icon_for_type_falls_back_to_generic_file() {
        assert_eq!(icon_for_type("README"), egui_phosphor::regular::FILE);
        assert_eq!(icon_for_type(""), egui_phosphor::regular::FILE);
    }
}
