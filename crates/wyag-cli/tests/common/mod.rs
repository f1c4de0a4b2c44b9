//! Shared harness for wyag end-to-end tests: binary discovery, a process
//! runner, and fixture-object construction helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use bstr::BString;
use wyag_hash::ObjectId;
use wyag_loose::LooseObjectStore;
use wyag_object::{Kvlm, Object, ObjectType, Tree, TreeEntry};

/// Captured output from one invocation of the binary.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Locate the compiled `wyag` binary next to the test executable.
pub fn wyag_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    path.push("wyag");
    path
}

/// Run `wyag` in `dir` with the given arguments.
pub fn wyag(dir: &Path, args: &[&str]) -> CommandResult {
    let output = Command::new(wyag_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run wyag");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Run `wyag` and require a zero exit, returning stdout.
pub fn wyag_ok(dir: &Path, args: &[&str]) -> String {
    let result = wyag(dir, args);
    assert_eq!(
        result.exit_code, 0,
        "wyag {:?} failed: {}",
        args, result.stderr
    );
    result.stdout
}

/// The object store of the repository rooted at `dir`.
pub fn object_store(dir: &Path) -> LooseObjectStore {
    LooseObjectStore::open(dir.join(".git/objects"))
}

pub fn write_blob(store: &LooseObjectStore, data: &[u8]) -> ObjectId {
    store.write_payload(ObjectType::Blob, data).unwrap()
}

pub fn write_tree(store: &LooseObjectStore, entries: &[(&str, &str, ObjectId)]) -> ObjectId {
    let tree = Tree {
        entries: entries
            .iter()
            .map(|(mode, path, oid)| TreeEntry {
                mode: BString::from(*mode),
                path: BString::from(*path),
                oid: *oid,
            })
            .collect(),
    };
    store.write(&Object::Tree(tree)).unwrap()
}

pub fn write_commit(
    store: &LooseObjectStore,
    tree: ObjectId,
    parents: &[ObjectId],
    msg: &str,
) -> ObjectId {
    let mut kvlm = Kvlm::new();
    kvlm.append("tree", tree.to_hex());
    for parent in parents {
        kvlm.append("parent", parent.to_hex());
    }
    kvlm.append("author", "dummy name <dummy@example.com> 1600000000 +0000");
    kvlm.append(
        "committer",
        "dummy name <dummy@example.com> 1600000000 +0000",
    );
    kvlm.append("", msg);
    store
        .write_payload(ObjectType::Commit, &kvlm.serialize())
        .unwrap()
}

/// Point a branch at a commit by writing the ref file directly.
pub fn set_branch(dir: &Path, name: &str, oid: &ObjectId) {
    let path = dir.join(".git/refs/heads").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, format!("{}\n", oid.to_hex())).unwrap();
}
