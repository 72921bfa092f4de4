//! Test support utilities for travis-encrypt integration tests.
//!
//! Shared pieces: the temp-dir `Test` environment plus command, assertion,
//! and fixture helpers.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory holding the .travis.yml under edit
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        Self { dir }
    }

    /// Create a test environment with a seeded .travis.yml.
    pub fn with_yml(contents: &str) -> Self {
        let t = Self::new();
        t.write_yml(contents);
        t
    }

    /// Path of the .travis.yml inside the test directory.
    pub fn yml_path(&self) -> PathBuf {
        self.dir.path().join(".travis.yml")
    }

    /// Seed the .travis.yml with the given contents.
    pub fn write_yml(&self, contents: &str) -> PathBuf {
        let path = self.yml_path();
        std::fs::write(&path, contents).expect("failed to seed .travis.yml");
        path
    }

    /// Read the .travis.yml back.
    pub fn read_yml(&self) -> String {
        std::fs::read_to_string(self.yml_path()).expect("failed to read .travis.yml")
    }

    /// Write an arbitrary file inside the test directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }
}
