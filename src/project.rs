//! Word sources drawn from project-configured folders.
//!
//! The project configuration is a JSON document listing folder paths:
//!
//! ```json
//! {"folders": [{"path": "src"}, {"path": "lib"}]}
//! ```
//!
//! Enumeration is deliberately forgiving: a missing config, an unreadable
//! folder, or an unreadable file costs that location its words and nothing
//! more. A completion request never fails because the project is in a bad
//! state.

use crate::host::WordSource;
use crate::words;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("failed to read project config {file}: {source}")]
    Read {
        file: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse project config {file}: {source}")]
    Parse {
        file: PathBuf,
        source: serde_json::Error,
    },
}

/// Parsed project configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
}

/// One configured folder
#[derive(Debug, Clone, Deserialize)]
pub struct FolderEntry {
    pub path: PathBuf,
}

/// Load and parse a project configuration file
pub fn load_project(path: &Path) -> Result<ProjectData, ProjectError> {
    let content = fs::read_to_string(path).map_err(|e| ProjectError::Read {
        file: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| ProjectError::Parse {
        file: path.to_path_buf(),
        source: e,
    })
}

/// A project file words can be pulled from
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.to_string_lossy().into_owned();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn label(&self) -> &str {
        &self.label
    }

    /// Words from the file matching `prefix`; empty if the file cannot be
    /// read
    fn extract_words(&self, prefix: &str) -> Vec<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => words::tokenize(&text, prefix),
            Err(e) => {
                log::warn!("skipping unreadable source {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }
}

/// Enumerate file sources for every configured folder, at most `max_files`
/// in total.
///
/// Listing is non-recursive and sorted by name so results are stable
/// across requests. Folders that cannot be listed are skipped with a
/// warning.
pub fn project_sources(project: &ProjectData, max_files: usize) -> Vec<FileSource> {
    let mut sources = Vec::new();

    for folder in &project.folders {
        if sources.len() >= max_files {
            break;
        }

        let entries = match fs::read_dir(&folder.path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("skipping unreadable folder {}: {e}", folder.path.display());
                continue;
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        for file in files {
            if sources.len() >= max_files {
                break;
            }
            sources.push(FileSource::new(file));
        }
    }

    sources
}
