//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a temporary directory populated with `(path, content)` pairs.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = Self::new();
        for (path, content) in files {
            dir.add_file(path, content);
        }
        dir
    }

    /// The project layout used across the filter tests.
    pub fn sample_project() -> Self {
        Self::with_files(&[
            ("main.go", "package main"),
            ("README.md", "# Test Project"),
            ("go.mod", "module test"),
            (".gitignore", "*.log"),
            ("src/app.go", "package src"),
            ("src/utils.js", "// utils"),
            ("src/styles.css", "body {}"),
            ("tests/main_test.go", "package tests"),
            ("tests/app_test.js", "// test"),
            ("docs/api.md", "# API"),
            ("docs/guide.txt", "Guide"),
            ("logs/app.log", "log entry"),
            ("logs/error.log", "error"),
            ("node_modules/package/index.js", "// package"),
            ("build/output.bin", "binary"),
            ("temp/cache.tmp", "cache"),
            (".vscode/settings.json", "{}"),
            ("hidden/.secret", "secret"),
        ])
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
