//! Pure set helpers the UI composes into "select all" / "select by type".

use std::collections::BTreeSet;

/// Deduplicated file types for a list of names.
///
/// The type is the substring after the last `.`; a dotless name yields the
/// whole name as its type (`README` → `README`). The result is ordered so the
/// type checkboxes render in a stable order.
pub fn file_types<'a, I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(|n| file_type(n).to_string()).collect()
}

/// Type of a single name, per the same rule as [`file_types`].
pub fn file_type(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => name,
    }
}

/// Names whose extracted type equals `wanted`.
pub fn names_of_type<'a, I>(names: I, wanted: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|n| file_type(n) == wanted)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{file_type, file_types, names_of_type};

    #[test]
    fn file_types_deduplicates_and_keeps_dotless_names_whole() {
        let types = file_types(["a.py", "b.py", "c.txt", "README"]);
        let expected: Vec<&str> = vec!["README", "py", "txt"];
        assert_eq!(types.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    // Only the last dot counts for multi-dot names.
    #[test]
    fn file_type_uses_last_dot() {
        assert_eq!(file_type("archive.tar.gz"), "gz");
        assert_eq!(file_type("Makefile"), "Makefile");
        assert_eq!(file_type(""), "");
    }

    #[test]
    fn names_of_type_filters_exact_matches() {
        let names = ["a.py", "b.py", "c.txt", "README"];
        assert_eq!(names_of_type(names, "py"), vec!["a.py", "b.py"]);
        assert_eq!(names_of_type(names, "README"), vec!["README"]);
        assert!(names_of_type(names, "rs").is_empty());
    }
}
