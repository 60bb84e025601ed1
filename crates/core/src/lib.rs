//! ant2maven core library
//!
//! Converts a NetBeans Ant project folder into a Maven-convention
//! sibling folder: `src/` moves to `src/main/java`, `web/` to
//! `src/main/webapp`, `lib/` is mirrored verbatim, and a `pom.xml`
//! with a fixed dependency list (plus TODO markers for unrecognized
//! jars) is generated at the output root.
//!
//! The library performs no user interaction; progress is reported as
//! plain text lines through a caller-supplied [`LogSink`].

pub mod convert;
pub mod copy;
pub mod jars;
pub mod log;
pub mod pom;
pub mod project;

// Re-export commonly used types
pub use convert::{convert, ConversionReport, ConvertError};
pub use copy::CopyFailure;
pub use log::LogSink;
pub use project::{is_ant_project, MavenLayout};
