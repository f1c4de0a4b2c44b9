//! Materialize a tree into an empty directory.

use std::fs;
use std::path::Path;

use bstr::ByteSlice;
use wyag_object::{Object, Tree};

use crate::{RepoError, Repository};

impl Repository {
    /// Write the contents of `tree` under `dest`.
    ///
    /// `dest` must not exist (it is created) or must be an existing empty
    /// directory. Blobs land as regular files (0644), subtrees as
    /// directories (0755). Executable bits and symlinks are not
    /// materialized.
    pub fn checkout(&self, tree: &Tree, dest: &Path) -> Result<(), RepoError> {
        if !dest.exists() {
            fs::create_dir(dest)?;
            set_dir_mode(dest)?;
        } else if !dest.is_dir() {
            return Err(RepoError::DestinationNotADirectory(dest.to_path_buf()));
        } else if fs::read_dir(dest)?.next().is_some() {
            return Err(RepoError::DestinationNotEmpty(dest.to_path_buf()));
        }

        self.checkout_into(tree, dest)
    }

    fn checkout_into(&self, tree: &Tree, dest: &Path) -> Result<(), RepoError> {
        for entry in tree.iter() {
            let target = dest.join(entry.path.to_os_str_lossy());
            match self.objects().read(&entry.oid)? {
                Object::Blob(blob) => {
                    fs::write(&target, &blob.data)?;
                    set_file_mode(&target)?;
                }
                Object::Tree(subtree) => {
                    fs::create_dir(&target)?;
                    set_dir_mode(&target)?;
                    self.checkout_into(&subtree, &target)?;
                }
                other => {
                    return Err(RepoError::UncheckoutableObject(other.object_type()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(unix)]
fn set_file_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn set_dir_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_dir_mode(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use bstr::BString;
    use wyag_object::{Blob, TreeEntry};

    use crate::Repository;

    use super::*;

    fn repo_with_tree() -> (tempfile::TempDir, Repository, Tree) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path().join("repo")).unwrap();

        let blob = repo
            .objects()
            .write(&Object::Blob(Blob {
                data: b"hoge\n".to_vec(),
            }))
            .unwrap();
        let empty = repo
            .objects()
            .write(&Object::Blob(Blob { data: Vec::new() }))
            .unwrap();

        let subtree = Tree {
            entries: vec![TreeEntry {
                mode: BString::from("100644"),
                path: BString::from("a"),
                oid: empty,
            }],
        };
        let subtree_oid = repo.objects().write(&Object::Tree(subtree)).unwrap();

        let root = Tree {
            entries: vec![
                TreeEntry {
                    mode: BString::from("100644"),
                    path: BString::from("a"),
                    oid: blob,
                },
                TreeEntry {
                    mode: BString::from("40000"),
                    path: BString::from("d"),
                    oid: subtree_oid,
                },
            ],
        };
        (dir, repo, root)
    }

    #[test]
    fn materializes_files_and_directories() {
        let (dir, repo, tree) = repo_with_tree();
        let dest = dir.path().join("out");
        repo.checkout(&tree, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("a")).unwrap(), "hoge\n");
        assert!(dest.join("d").is_dir());
        assert_eq!(fs::read_to_string(dest.join("d/a")).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn sets_file_and_directory_modes() {
        use std::os::unix::fs::PermissionsExt;
        let (dir, repo, tree) = repo_with_tree();
        let dest = dir.path().join("out");
        repo.checkout(&tree, &dest).unwrap();

        let file_mode = fs::metadata(dest.join("a")).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o644);
        let dir_mode = fs::metadata(dest.join("d")).unwrap().permissions().mode();
        assert_eq!(dir_mode & 0o777, 0o755);
    }

    #[test]
    fn existing_empty_directory_is_accepted() {
        let (dir, repo, tree) = repo_with_tree();
        let dest = dir.path().join("out");
        fs::create_dir(&dest).unwrap();
        repo.checkout(&tree, &dest).unwrap();
        assert!(dest.join("a").is_file());
    }

    #[test]
    fn non_empty_destination_is_rejected() {
        let (dir, repo, tree) = repo_with_tree();
        let dest = dir.path().join("out");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("occupied"), "x").unwrap();
        assert!(matches!(
            repo.checkout(&tree, &dest),
            Err(RepoError::DestinationNotEmpty(_))
        ));
    }

    #[test]
    fn file_destination_is_rejected() {
        let (dir, repo, tree) = repo_with_tree();
        let dest = dir.path().join("out");
        fs::write(&dest, "x").unwrap();
        assert!(matches!(
            repo.checkout(&tree, &dest),
            Err(RepoError::DestinationNotADirectory(_))
        ));
    }
}
