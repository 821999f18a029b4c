#![allow(dead_code)]
use cogs::Project;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SHEET_HEADER: &str = "ID\tTitle\tPath\tDescription\n";
pub const FIELD_HEADER: &str = "Field\tLabel\tDatatype\tDescription\n";

/// An initialized project in a temp directory.
pub struct TestProject {
    dir: TempDir,
    pub project: Project,
}

impl TestProject {
    pub fn new() -> Self {
        Self::with_config(&[
            ("COGS", "https://github.com/ontodev/cogs"),
            ("Title", "Test Project"),
            ("Google Sheet ID", "1TestSheetId"),
            ("Credentials", "credentials.json"),
        ])
    }

    pub fn with_config(entries: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let project = Project::at(dir.path());
        fs::create_dir(project.cogs_dir()).expect("create .cogs");

        let config: String = entries
            .iter()
            .map(|(key, value)| format!("{key}\t{value}\n"))
            .collect();
        fs::write(project.config_path(), config).expect("write config");
        fs::write(project.sheet_manifest_path(), SHEET_HEADER).expect("write sheet.tsv");
        fs::write(project.field_manifest_path(), FIELD_HEADER).expect("write field.tsv");

        Self { dir, project }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a source table relative to the project root.
    pub fn write_source(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create source dir");
        }
        fs::write(&path, contents).expect("write source");
        path
    }

    /// Write the cached copy of a sheet with the given tab-separated header.
    pub fn write_cache(&self, title: &str, header: &[&str]) -> PathBuf {
        let path = self.project.cached_copy_path(title);
        fs::write(&path, format!("{}\n", header.join("\t"))).expect("write cache");
        path
    }

    pub fn sheet_manifest(&self) -> String {
        fs::read_to_string(self.project.sheet_manifest_path()).expect("read sheet.tsv")
    }

    pub fn field_manifest(&self) -> String {
        fs::read_to_string(self.project.field_manifest_path()).expect("read field.tsv")
    }

    pub fn set_sheet_manifest(&self, contents: &str) {
        fs::write(self.project.sheet_manifest_path(), contents).expect("write sheet.tsv");
    }

    pub fn set_field_manifest(&self, contents: &str) {
        fs::write(self.project.field_manifest_path(), contents).expect("write field.tsv");
    }
}
