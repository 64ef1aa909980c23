//! Discovery of interview YAML files under a directory tree.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const INTERVIEW_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Recursive walker for interview files, skipping `.github` trees.
pub struct InterviewWalker {
    root: PathBuf,
}

impl InterviewWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Collect all interview files below the root, sorted for deterministic
    /// report order.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && Self::should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(path: &Path) -> bool {
        if path
            .components()
            .any(|c| c.as_os_str() == ".github")
        {
            return false;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => INTERVIEW_EXTENSIONS.contains(&ext),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_yaml_files_and_skips_github_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.yml"), "question: Hi\n").unwrap();
        fs::write(dir.path().join("b.yaml"), "question: Bye\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not yaml").unwrap();
        fs::create_dir_all(dir.path().join(".github/workflows")).unwrap();
        fs::write(dir.path().join(".github/workflows/ci.yml"), "on: push\n").unwrap();

        let found = InterviewWalker::new(dir.path()).walk().unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.yml", "b.yaml"]);
    }
}
