#![allow(dead_code)]

use std::fs;
use std::path::Path;
use svcs_core::identity::StaticIdentity;
use svcs_engine::commands::commit::{commit, CommitOutcome};
use svcs_store::Repository;
use tempfile::TempDir;

pub fn setup_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    (dir, repo)
}

pub fn write_file(repo: &Repository, relative: &str, content: &str) {
    let path = repo.root().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn read_file(repo: &Repository, relative: &str) -> String {
    fs::read_to_string(repo.root().join(relative)).unwrap()
}

pub fn alice() -> StaticIdentity {
    StaticIdentity::new("alice")
}

pub fn commit_as_alice(repo: &Repository, message: &str) -> CommitOutcome {
    commit(repo, &alice(), Some(message)).unwrap()
}

pub fn snapshot_count(repo: &Repository) -> usize {
    repo.snapshots().list().unwrap().len()
}

pub fn log_len(repo: &Repository) -> usize {
    repo.log().list().unwrap().len()
}

pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
