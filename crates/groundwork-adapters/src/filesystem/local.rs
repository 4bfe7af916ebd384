//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use groundwork_core::application::{PipelineError, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PipelineError> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PipelineError> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), PipelineError> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<(), PipelineError> {
        for entry in walkdir::WalkDir::new(from) {
            let entry = entry.map_err(|e| PipelineError::Io {
                path: from.to_path_buf(),
                reason: format!("Failed to walk directory: {e}"),
            })?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .expect("walkdir yields paths under its root");
            let destination = to.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&destination)
                    .map_err(|e| map_io_error(&destination, e, "create directory"))?;
            } else {
                std::fs::copy(entry.path(), &destination)
                    .map_err(|e| map_io_error(entry.path(), e, "copy file"))?;
            }
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), PipelineError> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PipelineError> {
        let entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PipelineError {
    PipelineError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}
