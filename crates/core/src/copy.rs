//! Best-effort recursive tree copy
//!
//! Mirrors a source directory into a target directory, preserving
//! relative structure and overwriting files that already exist at the
//! destination. Individual failures are logged and collected; they
//! never abort the rest of the walk.

use ignore::WalkBuilder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::log::LogSink;

/// One entry that could not be copied.
#[derive(Debug, Clone, Serialize)]
pub struct CopyFailure {
    /// Source path that failed.
    pub path: PathBuf,
    /// Rendered I/O error message.
    pub error: String,
}

/// Recursively copy `source` into `target`.
///
/// Directories are recreated with `create_dir_all`; files are copied
/// with replace semantics. Traversal order between siblings is
/// file-system dependent and not guaranteed.
///
/// Each failed entry emits a `Failed to copy: <path>` line on `sink`
/// and is recorded in the returned list; an empty list means every
/// entry was copied. This function itself never fails.
pub fn copy_tree(source: &Path, target: &Path, sink: &mut dyn LogSink) -> Vec<CopyFailure> {
    let mut failures = Vec::new();

    for result in build_walker(source) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                sink.line(&format!("Failed to copy: {err}"));
                failures.push(CopyFailure {
                    path: source.to_path_buf(),
                    error: err.to_string(),
                });
                continue;
            }
        };

        let src = entry.path();
        let rel = match src.strip_prefix(source) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let dest = target.join(rel);

        let outcome = if entry.file_type().map_or(false, |ft| ft.is_dir()) {
            fs::create_dir_all(&dest)
        } else {
            fs::copy(src, &dest).map(|_| ())
        };

        if let Err(err) = outcome {
            sink.line(&format!("Failed to copy: {}", src.display()));
            failures.push(CopyFailure {
                path: src.to_path_buf(),
                error: err.to_string(),
            });
        }
    }

    failures
}

/// Walker with all ignore filtering disabled.
///
/// The copy contract is "verbatim": hidden files and gitignored files
/// are copied like everything else. Parent directories are yielded
/// before their contents, so destinations exist before files land in
/// them.
fn build_walker(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.build()
}
