use crate::errors::CogsError;
use std::path::{Path, PathBuf};

/// Hidden directory holding the manifest, configuration and cached copies.
pub const PROJECT_DIR: &str = ".cogs";
pub const SHEET_MANIFEST: &str = "sheet.tsv";
pub const FIELD_MANIFEST: &str = "field.tsv";
pub const CONFIG_FILE: &str = "config.tsv";

/// Titles that collide with the project's own tables.
pub const RESERVED_TITLES: &[&str] = &["user", "config", "sheet", "field"];

/// Explicit project context. Every operation resolves its files against
/// `root` rather than the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cogs_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    pub fn sheet_manifest_path(&self) -> PathBuf {
        self.cogs_dir().join(SHEET_MANIFEST)
    }

    pub fn field_manifest_path(&self) -> PathBuf {
        self.cogs_dir().join(FIELD_MANIFEST)
    }

    pub fn config_path(&self) -> PathBuf {
        self.cogs_dir().join(CONFIG_FILE)
    }

    /// Location of the locally cached copy of a sheet. The title is not
    /// checked here; callers that read or delete go through
    /// [`crate::security::unsafe_title_reason`] first.
    pub fn cached_copy_path(&self, title: &str) -> PathBuf {
        self.cogs_dir().join(format!("{title}.tsv"))
    }

    /// Source paths are stored as given; relative ones are read from the root.
    pub fn resolve_source(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    pub fn is_initialized(&self) -> bool {
        self.cogs_dir().is_dir()
    }

    pub fn validate(&self) -> Result<(), CogsError> {
        if !self.is_initialized() {
            return Err(CogsError::project(format!(
                "a COGS project has not been initialized in '{}'",
                self.root.display()
            )));
        }

        let missing: Vec<&str> = [CONFIG_FILE, SHEET_MANIFEST, FIELD_MANIFEST]
            .into_iter()
            .filter(|name| !self.cogs_dir().join(name).is_file())
            .collect();
        if !missing.is_empty() {
            return Err(CogsError::project(format!(
                "COGS directory '{}' is missing {}",
                self.cogs_dir().display(),
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::fs;

    #[test]
    fn uninitialized_directory_fails_validation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let project = Project::at(dir.path());
        assert!(!project.is_initialized());
        let err = project.validate().expect_err("not a project");
        assert_eq!(err.kind(), ErrorKind::Project);
    }

    #[test]
    fn validation_lists_every_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let project = Project::at(dir.path());
        fs::create_dir(project.cogs_dir()).expect("mkdir");
        fs::write(project.config_path(), "").expect("config");

        let err = project.validate().expect_err("incomplete");
        assert!(err.message().ends_with("is missing sheet.tsv, field.tsv"));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_source_paths_are_kept() {
        let project = Project::at("/work/project");
        assert_eq!(
            project.resolve_source("tables/data.csv"),
            PathBuf::from("/work/project/tables/data.csv")
        );
        assert_eq!(
            project.resolve_source("/tmp/data.csv"),
            PathBuf::from("/tmp/data.csv")
        );
    }
}
