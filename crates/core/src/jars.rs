//! Jar enumeration under `lib/`
//!
//! Only the file names are inspected; jar contents are never opened.
//! The list decides which TODO comments the generated `pom.xml` gets.

use globset::Glob;
use std::fs;
use std::path::Path;

/// List the jar files directly under `lib_dir` (non-recursive).
///
/// Matching is against the glob `*.jar`, case-sensitive. Names are
/// sorted so the enumeration order is stable across file systems,
/// which keeps the pom's TODO comment order deterministic.
///
/// An unreadable or missing directory yields an empty list.
pub fn list_jars(lib_dir: &Path) -> Vec<String> {
    let matcher = match Glob::new("*.jar") {
        Ok(glob) => glob.compile_matcher(),
        Err(_) => return Vec::new(),
    };

    let entries = match fs::read_dir(lib_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut jars: Vec<String> = entries
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| matcher.is_match(name))
        .collect();
    jars.sort();
    jars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_jar_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path();

        File::create(lib.join("commons-lang3-3.12.jar")).unwrap();
        File::create(lib.join("mysql-connector.jar")).unwrap();
        File::create(lib.join("readme.txt")).unwrap();
        File::create(lib.join("notes.jar.bak")).unwrap();

        let jars = list_jars(lib);

        assert_eq!(jars, vec!["commons-lang3-3.12.jar", "mysql-connector.jar"]);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path();

        File::create(lib.join("library.JAR")).unwrap();
        File::create(lib.join("library.jar")).unwrap();

        let jars = list_jars(lib);

        assert_eq!(jars, vec!["library.jar"]);
    }

    #[test]
    fn test_non_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path();

        fs::create_dir_all(lib.join("nested")).unwrap();
        File::create(lib.join("nested/deep.jar")).unwrap();
        File::create(lib.join("top.jar")).unwrap();

        let jars = list_jars(lib);

        assert_eq!(jars, vec!["top.jar"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        assert!(list_jars(Path::new("/no/such/lib")).is_empty());
    }

    #[test]
    fn test_result_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path();

        File::create(lib.join("zeta.jar")).unwrap();
        File::create(lib.join("alpha.jar")).unwrap();
        File::create(lib.join("mid.jar")).unwrap();

        let jars = list_jars(lib);

        assert_eq!(jars, vec!["alpha.jar", "mid.jar", "zeta.jar"]);
    }
}
