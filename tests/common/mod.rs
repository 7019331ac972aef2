//! Common test utilities for DevStudio integration tests

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway home: `skills/` source collection plus `home/.claude` config root
pub struct TestEnv {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Working directory for the binary
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        Self { temp, path }
    }

    pub fn source_dir(&self) -> PathBuf {
        self.path.join("skills")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.path.join("home").join(".claude")
    }

    pub fn target_dir(&self) -> PathBuf {
        self.config_dir().join("skills")
    }

    pub fn installed(&self, name: &str) -> PathBuf {
        self.target_dir().join(name)
    }

    /// Create a skill directory in the source collection
    pub fn add_skill(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.source_dir().join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create skill directory");
        for (file, content) in files {
            std::fs::write(dir.join(file), content).expect("Failed to write skill file");
        }
        dir
    }

    /// Write a file relative to the working directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read file")
    }

    /// `devstudio` running in this environment, never touching the real home
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("devstudio").expect("devstudio binary not built");
        cmd.current_dir(&self.path)
            .env("DEVSTUDIO_SOURCE", self.source_dir())
            .env("DEVSTUDIO_CONFIG_DIR", self.config_dir())
            .env("HOME", self.path.join("home"))
            .env_remove("DEVSTUDIO_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Relative path -> contents for every entry under `root` (directories map to empty)
#[allow(dead_code)]
pub fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut tree = BTreeMap::new();
    if !root.exists() {
        return tree;
    }
    for entry in walkdir::WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.expect("Failed to walk directory");
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("walked path outside root")
            .to_string_lossy()
            .replace('\\', "/");
        let content = if entry.file_type().is_file() {
            std::fs::read(entry.path()).expect("Failed to read file")
        } else {
            Vec::new()
        };
        tree.insert(rel, content);
    }
    tree
}
