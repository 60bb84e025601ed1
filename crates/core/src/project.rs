//! Ant project validation and Maven output layout
//!
//! A NetBeans Ant project is identified solely by the presence of
//! `nbproject/project.xml`; the file's contents are never read. The
//! Maven output layout is derived from the input directory name and is
//! always a sibling of the input, never nested inside it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Marker file whose presence identifies a NetBeans Ant project.
const PROJECT_MARKER: &str = "nbproject/project.xml";

/// Check whether `path` looks like a NetBeans Ant project.
///
/// Returns true iff the directory exists and contains
/// `nbproject/project.xml`. Pure check, performs no mutation.
///
/// # Example
/// ```no_run
/// use ant2maven_core::project;
///
/// if !project::is_ant_project(std::path::Path::new("my-project")) {
///     eprintln!("not an Ant project");
/// }
/// ```
pub fn is_ant_project(path: &Path) -> bool {
    path.exists() && path.join(PROJECT_MARKER).exists()
}

/// The Maven-convention output layout derived from an input project.
///
/// The output root is `<inputName>-mavenized` next to the input. The
/// four fixed subdirectories (`src/main/java`, `src/main/webapp`,
/// `src/main/webapp/WEB-INF`, `lib`) are created unconditionally, so
/// they exist even when the corresponding input directory is absent.
#[derive(Debug, Clone)]
pub struct MavenLayout {
    root: PathBuf,
}

impl MavenLayout {
    /// Compute the layout for `project_dir`.
    ///
    /// Returns `None` when the path has no final component or no
    /// parent directory to place the sibling output in (e.g. `/`).
    pub fn for_project(project_dir: &Path) -> Option<Self> {
        let name = project_dir.file_name()?;
        let parent = project_dir.parent()?;

        let mut output_name = name.to_os_string();
        output_name.push("-mavenized");

        Some(Self {
            root: parent.join(output_name),
        })
    }

    /// Root of the generated Maven project.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `src/main/java` — destination for the input's `src/` tree.
    pub fn java_dir(&self) -> PathBuf {
        self.root.join("src/main/java")
    }

    /// `src/main/webapp` — destination for the input's `web/` tree.
    pub fn webapp_dir(&self) -> PathBuf {
        self.root.join("src/main/webapp")
    }

    /// `src/main/webapp/WEB-INF` — holds the deployment descriptor.
    pub fn web_inf_dir(&self) -> PathBuf {
        self.root.join("src/main/webapp/WEB-INF")
    }

    /// `lib` — verbatim mirror of the input's `lib/` folder.
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join("lib")
    }

    /// Path of the generated `pom.xml`.
    pub fn pom_path(&self) -> PathBuf {
        self.root.join("pom.xml")
    }

    /// Create the output root and the four fixed subdirectories.
    ///
    /// Uses `create_dir_all`, so re-running over an existing output is
    /// not an error.
    pub fn create_skeleton(&self) -> io::Result<()> {
        fs::create_dir_all(self.java_dir())?;
        fs::create_dir_all(self.web_inf_dir())?;
        fs::create_dir_all(self.lib_dir())?;
        Ok(())
    }
}
