//! File descriptors supplied by the external scanner.

use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Category assigned to a source file by the scanner.
///
/// Analyzers declare the categories they support and the engine only runs
/// them on matching files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    Component,
    ApiRoute,
    Service,
    Type,
    Util,
    Middleware,
    Config,
    Other,
}

impl FileCategory {
    /// Returns the display name of the category (kebab-case, matching the
    /// serialized form).
    pub fn name(&self) -> &'static str {
        match self {
            FileCategory::Component => "component",
            FileCategory::ApiRoute => "api-route",
            FileCategory::Service => "service",
            FileCategory::Type => "type",
            FileCategory::Util => "util",
            FileCategory::Middleware => "middleware",
            FileCategory::Config => "config",
            FileCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable descriptor for one source file.
///
/// Produced by the external scanning collaborator; the engine never mutates
/// it and never does filesystem discovery of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the project root. Issues are attributed to this.
    pub relative_path: String,
    /// File extension without the leading dot (e.g. "ts", "tsx").
    pub extension: String,
    /// File size in bytes.
    pub size: u64,
    /// Last modification time.
    pub last_modified: SystemTime,
    /// Scanner-assigned category.
    pub category: FileCategory,
}
