//! The conversion pipeline
//!
//! A linear, single-threaded sequence of stages gated by existence
//! checks: validate the input, create the Maven skeleton, copy `src/`,
//! copy `web/`, mirror `lib/`, generate `pom.xml`. Per-file copy
//! errors are best-effort (logged and accumulated in the report); only
//! skeleton creation and the pom write are fatal. Nothing is retried
//! and nothing is rolled back.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::copy::{copy_tree, CopyFailure};
use crate::jars::list_jars;
use crate::log::LogSink;
use crate::pom::render_pom;
use crate::project::{is_ant_project, MavenLayout};

/// Fatal conversion failures.
///
/// Per-file copy errors are not fatal; they are reported through
/// [`ConversionReport::failures`] instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is missing or lacks `nbproject/project.xml`. Raised
    /// before any filesystem mutation.
    #[error("invalid NetBeans Ant project folder: {0}")]
    InvalidProject(PathBuf),

    /// The output skeleton could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateLayout {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated `pom.xml` could not be written.
    #[error("failed to write {path}: {source}")]
    WritePom {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a conversion run.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    /// Root of the generated Maven project.
    pub output_dir: PathBuf,
    /// Jar names found directly under `lib/`, sorted.
    pub jars: Vec<String>,
    /// Per-file copy failures. Non-empty means partial success: the
    /// run completed but some entries did not make it across.
    pub failures: Vec<CopyFailure>,
}

impl ConversionReport {
    /// True when every file copy succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert a NetBeans Ant project into a Maven-layout sibling folder.
///
/// Creates `<name>-mavenized` next to `project_dir`, mirrors `src/`
/// into `src/main/java`, `web/` into `src/main/webapp`, `lib/` into
/// `lib/`, and writes a `pom.xml` with the fixed dependency set plus
/// TODO markers for unrecognized jars. Progress lines go to `sink` in
/// emission order.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use ant2maven_core::convert;
///
/// # fn main() -> Result<(), ant2maven_core::ConvertError> {
/// let mut lines: Vec<String> = Vec::new();
/// let report = convert(Path::new("legacy-shop"), &mut lines)?;
/// println!("converted into {}", report.output_dir.display());
/// # Ok(())
/// # }
/// ```
pub fn convert(
    project_dir: &Path,
    sink: &mut dyn LogSink,
) -> Result<ConversionReport, ConvertError> {
    if !is_ant_project(project_dir) {
        return Err(ConvertError::InvalidProject(project_dir.to_path_buf()));
    }
    let layout = MavenLayout::for_project(project_dir)
        .ok_or_else(|| ConvertError::InvalidProject(project_dir.to_path_buf()))?;

    layout
        .create_skeleton()
        .map_err(|source| ConvertError::CreateLayout {
            path: layout.root().to_path_buf(),
            source,
        })?;

    let mut failures = Vec::new();

    let src = project_dir.join("src");
    if src.exists() {
        failures.extend(copy_tree(&src, &layout.java_dir(), sink));
        sink.line("Copied Java source to src/main/java");
    }

    let web = project_dir.join("web");
    if web.exists() {
        failures.extend(copy_tree(&web, &layout.webapp_dir(), sink));
        sink.line("Copied Web resources to src/main/webapp");

        // The tree copy above already placed web.xml, but the original
        // tool re-copies this one file explicitly. Preserved as-is.
        let web_xml = web.join("WEB-INF/web.xml");
        if web_xml.exists() {
            match copy_web_xml(&web_xml, &layout) {
                Ok(()) => sink.line("Copied web.xml to src/main/webapp/WEB-INF/"),
                Err(err) => {
                    sink.line(&format!("Failed to copy: {}", web_xml.display()));
                    failures.push(CopyFailure {
                        path: web_xml,
                        error: err.to_string(),
                    });
                }
            }
        }
    }

    let lib = project_dir.join("lib");
    let mut jars = Vec::new();
    if lib.is_dir() {
        jars = list_jars(&lib);
        sink.line(&format!("Detected jars: {}", jars.join(", ")));
        failures.extend(copy_tree(&lib, &layout.lib_dir(), sink));
        sink.line("Copied lib folder to Maven project");
    }

    let pom_path = layout.pom_path();
    fs::write(&pom_path, render_pom(&jars)).map_err(|source| ConvertError::WritePom {
        path: pom_path,
        source,
    })?;
    sink.line("Generated pom.xml");

    let output_dir = layout
        .root()
        .canonicalize()
        .unwrap_or_else(|_| layout.root().to_path_buf());
    sink.line(&format!("Conversion completed at: {}", output_dir.display()));

    Ok(ConversionReport {
        output_dir,
        jars,
        failures,
    })
}

fn copy_web_xml(web_xml: &Path, layout: &MavenLayout) -> io::Result<()> {
    let web_inf = layout.web_inf_dir();
    fs::create_dir_all(&web_inf)?;
    fs::copy(web_xml, web_inf.join("web.xml"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn ant_project(root: &Path) {
        fs::create_dir_all(root.join("nbproject")).unwrap();
        File::create(root.join("nbproject/project.xml")).unwrap();
    }

    #[test]
    fn test_invalid_project_mutates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("plain");
        fs::create_dir_all(&project).unwrap();

        let mut sink: Vec<String> = Vec::new();
        let result = convert(&project, &mut sink);

        assert!(matches!(result, Err(ConvertError::InvalidProject(_))));
        assert!(sink.is_empty());
        // No -mavenized sibling appeared next to the input.
        assert!(!temp_dir.path().join("plain-mavenized").exists());
    }

    #[test]
    fn test_skeleton_exists_even_without_src_web_lib() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("bare");
        ant_project(&project);

        let mut sink: Vec<String> = Vec::new();
        let report = convert(&project, &mut sink).unwrap();

        let out = temp_dir.path().join("bare-mavenized");
        assert!(out.join("src/main/java").is_dir());
        assert!(out.join("src/main/webapp/WEB-INF").is_dir());
        assert!(out.join("lib").is_dir());
        assert!(out.join("pom.xml").is_file());
        // Empty java dir, nothing was copied into it
        assert_eq!(fs::read_dir(out.join("src/main/java")).unwrap().count(), 0);
        assert!(report.jars.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_log_lines_in_pipeline_order() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("app");
        ant_project(&project);
        fs::create_dir_all(project.join("src")).unwrap();
        fs::create_dir_all(project.join("web/WEB-INF")).unwrap();
        File::create(project.join("src/Main.java")).unwrap();
        let mut web_xml = File::create(project.join("web/WEB-INF/web.xml")).unwrap();
        web_xml.write_all(b"<web-app/>").unwrap();
        fs::create_dir_all(project.join("lib")).unwrap();
        File::create(project.join("lib/commons-io.jar")).unwrap();

        let mut sink: Vec<String> = Vec::new();
        convert(&project, &mut sink).unwrap();

        assert_eq!(sink[0], "Copied Java source to src/main/java");
        assert_eq!(sink[1], "Copied Web resources to src/main/webapp");
        assert_eq!(sink[2], "Copied web.xml to src/main/webapp/WEB-INF/");
        assert_eq!(sink[3], "Detected jars: commons-io.jar");
        assert_eq!(sink[4], "Copied lib folder to Maven project");
        assert_eq!(sink[5], "Generated pom.xml");
        assert!(sink[6].starts_with("Conversion completed at: "));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("app");
        ant_project(&project);

        let mut sink: Vec<String> = Vec::new();
        let report = convert(&project, &mut sink).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["output_dir"].as_str().unwrap().ends_with("app-mavenized"));
        assert_eq!(json["jars"].as_array().unwrap().len(), 0);
        assert_eq!(json["failures"].as_array().unwrap().len(), 0);
    }
}
