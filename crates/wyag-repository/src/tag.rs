//! Tag creation: the one write path that authors a new object.

use wyag_hash::ObjectId;
use wyag_object::{ObjectType, Tag};

use crate::{RepoError, Repository};

impl Repository {
    /// Create `refs/tags/<name>` pointing at `target`.
    ///
    /// A lightweight tag is just the ref. An annotated tag first reads the
    /// target to learn its type, stores a tag object carrying the fixed
    /// identity and message, and points the ref at that object instead.
    /// An existing tag of the same name is overwritten.
    pub fn create_tag(
        &self,
        name: &str,
        target: &ObjectId,
        annotated: bool,
    ) -> Result<(), RepoError> {
        let ref_name = format!("refs/tags/{name}");

        if !annotated {
            self.refs().create(&ref_name, target)?;
            return Ok(());
        }

        let target_type = self.objects().read(target)?.object_type();
        let tag = Tag::annotated(name, *target, target_type);
        let tag_oid = self
            .objects()
            .write_payload(ObjectType::Tag, &tag.serialize_payload())?;
        self.refs().create(&ref_name, &tag_oid)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wyag_loose::LooseError;
    use wyag_object::{Blob, Object};

    use super::*;

    fn repo_with_blob() -> (tempfile::TempDir, Repository, ObjectId) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let oid = repo
            .objects()
            .write(&Object::Blob(Blob {
                data: b"hoge\n".to_vec(),
            }))
            .unwrap();
        (dir, repo, oid)
    }

    #[test]
    fn lightweight_tag_points_at_target() {
        let (_dir, repo, oid) = repo_with_blob();
        repo.create_tag("hoge", &oid, false).unwrap();
        assert_eq!(repo.refs().resolve("refs/tags/hoge").unwrap(), oid);
    }

    #[test]
    fn lightweight_tag_does_not_author_an_object() {
        let (_dir, repo, oid) = repo_with_blob();
        repo.create_tag("hoge", &oid, false).unwrap();
        // The only object in the store is still the blob itself.
        let resolved = repo.refs().resolve("refs/tags/hoge").unwrap();
        assert!(matches!(
            repo.objects().read(&resolved),
            Ok(Object::Blob(_))
        ));
    }

    #[test]
    fn annotated_tag_stores_a_tag_object() {
        let (_dir, repo, oid) = repo_with_blob();
        repo.create_tag("piyo", &oid, true).unwrap();

        let tag_oid = repo.refs().resolve("refs/tags/piyo").unwrap();
        assert_ne!(tag_oid, oid);

        match repo.objects().read(&tag_oid).unwrap() {
            Object::Tag(tag) => {
                assert_eq!(tag.name().unwrap(), "piyo");
                assert_eq!(tag.target().unwrap(), oid);
                assert_eq!(tag.target_type().unwrap(), ObjectType::Blob);
                assert_eq!(tag.message().unwrap(), "Dummy commit message.\n");
            }
            other => panic!("expected tag object, got {}", other.object_type()),
        }
    }

    #[test]
    fn annotated_tag_of_missing_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let ghost = ObjectId::from_hex("2262de0c121f22df8e78f5a37d6e114fd322c0b0").unwrap();
        assert!(matches!(
            repo.create_tag("nope", &ghost, true),
            Err(RepoError::Loose(LooseError::NotFound(_)))
        ));
    }

    #[test]
    fn retagging_overwrites_the_ref() {
        let (_dir, repo, oid) = repo_with_blob();
        repo.create_tag("v", &oid, false).unwrap();
        let other = repo
            .objects()
            .write(&Object::Blob(Blob {
                data: b"other\n".to_vec(),
            }))
            .unwrap();
        repo.create_tag("v", &other, false).unwrap();
        assert_eq!(repo.refs().resolve("refs/tags/v").unwrap(), other);
    }
}
