#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the role-report binary.
#[macro_export]
macro_rules! role_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("role-report"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file with raw bytes in the temp directory.
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Tags a directory with a role description.
    pub fn create_role(&self, dir: &str, role: &str) {
        let relative = if dir.is_empty() {
            "role.txt".to_string()
        } else {
            format!("{dir}/role.txt")
        };
        self.create_file(&relative, role);
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Creates a role-report config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".role-report.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Small frontend tree with tagged and untagged directories.
pub fn frontend_fixture() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.create_role("src", "Application entry point");
    fixture.create_file("src/App.jsx", "import React from 'react';\n");
    fixture.create_file(
        "src/main.jsx",
        "// role: mounts the app\nimport App from './App';\n",
    );
    fixture.create_role("src/mobxStores", "MobX state stores");
    fixture.create_file("src/mobxStores/authStore.jsx", "export default {};\n");
    fixture.create_file("src/components/Untagged.jsx", "export {};\n");
    fixture.create_role("src/components/Nav", "Navigation bar");
    fixture.create_file("src/components/Nav/Nav.css", "// role: nav styles\nnav{}");
    fixture.create_role(".git-hooks", "Never reported");
    fixture
}
