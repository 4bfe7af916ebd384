//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use groundwork_core::application::{PipelineError, ports::Filesystem};

/// In-memory filesystem for testing.
///
/// Directories are implicit: a path is a directory when any file lives under
/// it. That is enough for the pipeline, which never creates empty
/// directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn seed(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), contents.into());
    }

    /// Read a file's content without going through the port (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// List all file paths.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files.read().unwrap().keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PipelineError> {
        self.read_file(path).ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PipelineError> {
        self.seed(path, contents);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), PipelineError> {
        let contents = self.read_to_string(from)?;
        self.seed(to, contents);
        Ok(())
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<(), PipelineError> {
        let sources: Vec<(PathBuf, String)> = {
            let files = self.files.read().unwrap();
            files
                .iter()
                .filter(|(p, _)| p.starts_with(from))
                .map(|(p, c)| (p.clone(), c.clone()))
                .collect()
        };
        if sources.is_empty() {
            return Err(not_found(from));
        }
        for (path, contents) in sources {
            let relative = path
                .strip_prefix(from)
                .expect("filtered on starts_with above");
            self.seed(to.join(relative), contents);
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), PipelineError> {
        self.files
            .write()
            .unwrap()
            .retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap();
        files.contains_key(path) || files.keys().any(|p| p.starts_with(path))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PipelineError> {
        let files = self.files.read().unwrap();
        let mut names: Vec<String> = files
            .keys()
            .filter_map(|p| p.strip_prefix(path).ok())
            .filter_map(|rel| rel.components().next())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.dedup();
        if names.is_empty() {
            return Err(not_found(path));
        }
        Ok(names)
    }
}

fn not_found(path: &Path) -> PipelineError {
    PipelineError::Io {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_files_are_readable() {
        let fs = MemoryFilesystem::new();
        fs.seed("pyproject.toml", "[project]");
        assert_eq!(
            fs.read_to_string(Path::new("pyproject.toml")).unwrap(),
            "[project]"
        );
    }

    #[test]
    fn list_dir_yields_immediate_children_only() {
        let fs = MemoryFilesystem::new();
        fs.seed("data/licenses/MIT", "");
        fs.seed("data/licenses/Apache-2.0", "");
        fs.seed("data/AGENTS_README.md", "");

        let names = fs.list_dir(Path::new("data/licenses")).unwrap();
        assert_eq!(names, vec!["Apache-2.0", "MIT"]);
    }

    #[test]
    fn copy_dir_preserves_relative_layout() {
        let fs = MemoryFilesystem::new();
        fs.seed("data/.claude/settings.json", "{}");
        fs.seed("data/.claude/commands/review.md", "review");

        fs.copy_dir(Path::new("data/.claude"), Path::new(".claude"))
            .unwrap();
        assert_eq!(
            fs.read_file(Path::new(".claude/commands/review.md"))
                .as_deref(),
            Some("review")
        );
    }

    #[test]
    fn remove_dir_all_drops_the_subtree() {
        let fs = MemoryFilesystem::new();
        fs.seed("data/AGENTS_README.md", "");
        fs.seed("pyproject.toml", "");

        fs.remove_dir_all(Path::new("data")).unwrap();
        assert!(!fs.exists(Path::new("data")));
        assert!(fs.exists(Path::new("pyproject.toml")));
    }

    #[test]
    fn missing_paths_surface_as_io_errors() {
        let fs = MemoryFilesystem::new();
        assert!(matches!(
            fs.read_to_string(Path::new("nope")),
            Err(PipelineError::Io { .. })
        ));
        assert!(matches!(
            fs.list_dir(Path::new("nope")),
            Err(PipelineError::Io { .. })
        ));
    }
}
