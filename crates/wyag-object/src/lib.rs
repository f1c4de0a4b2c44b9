//! Object model for the wyag object store.
//!
//! The four object kinds share one framed envelope
//! (`"<type> <size>\0<payload>"`) but differ in payload format: blobs are
//! opaque bytes, trees are a binary record sequence, and commits and tags
//! share the KVLM text format. This crate provides the payload codecs, the
//! [`Object`] sum type over all four kinds, and id computation.

mod blob;
mod commit;
pub mod envelope;
pub mod kvlm;
mod tag;
mod tree;

pub use blob::Blob;
pub use commit::Commit;
pub use kvlm::Kvlm;
pub use tag::Tag;
pub use tree::{Tree, TreeEntry};

use bstr::BString;
use wyag_hash::{hasher::Hasher, HashError, ObjectId};

/// Errors produced by object decoding and encoding.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("unknown object type: {0}")]
    UnknownType(BString),

    #[error("malformed object envelope: {0}")]
    InvalidEnvelope(String),

    #[error("object size mismatch: header declares {declared} bytes, payload has {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("malformed commit/tag data at offset {offset}: {reason}")]
    MalformedKvlm { offset: usize, reason: String },

    #[error("malformed tree entry at offset {offset}: {reason}")]
    InvalidTreeEntry { offset: usize, reason: String },

    #[error("invalid {kind}: missing '{field}' header")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("invalid {kind}: bad '{field}' value: {reason}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Hash(#[from] HashError),
}

/// The four kinds of stored objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
    Tag,
}

impl ObjectType {
    /// Parse from the type token in an envelope header.
    pub fn from_bytes(s: &[u8]) -> Result<Self, ObjectError> {
        match s {
            b"blob" => Ok(Self::Blob),
            b"tree" => Ok(Self::Tree),
            b"commit" => Ok(Self::Commit),
            b"tag" => Ok(Self::Tag),
            _ => Err(ObjectError::UnknownType(BString::from(s))),
        }
    }

    /// The canonical byte form used in envelopes and KVLM `type` headers.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::Blob => b"blob",
            Self::Tree => b"tree",
            Self::Commit => b"commit",
            Self::Tag => b"tag",
        }
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
            Self::Tag => "tag",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ObjectType {
    type Err = ObjectError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

/// A decoded object of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
    Tag(Tag),
}

impl Object {
    /// Decode a full framed envelope (header + payload).
    pub fn parse(data: &[u8]) -> Result<Self, ObjectError> {
        let (obj_type, payload) = envelope::split(data)?;
        Self::parse_payload(obj_type, payload)
    }

    /// Decode a bare payload with a known type.
    pub fn parse_payload(obj_type: ObjectType, payload: &[u8]) -> Result<Self, ObjectError> {
        match obj_type {
            ObjectType::Blob => Ok(Self::Blob(Blob::parse(payload))),
            ObjectType::Tree => Ok(Self::Tree(Tree::parse(payload)?)),
            ObjectType::Commit => Ok(Self::Commit(Commit::parse(payload)?)),
            ObjectType::Tag => Ok(Self::Tag(Tag::parse(payload)?)),
        }
    }

    /// Encode to the framed envelope form (the bytes that get hashed and
    /// compressed).
    pub fn serialize(&self) -> Vec<u8> {
        envelope::frame(self.object_type(), &self.serialize_payload())
    }

    /// Encode just the payload (no envelope header).
    pub fn serialize_payload(&self) -> Vec<u8> {
        match self {
            Self::Blob(b) => b.data.clone(),
            Self::Tree(t) => t.serialize_payload(),
            Self::Commit(c) => c.serialize_payload(),
            Self::Tag(t) => t.serialize_payload(),
        }
    }

    /// The kind tag of this object.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Blob(_) => ObjectType::Blob,
            Self::Tree(_) => ObjectType::Tree,
            Self::Commit(_) => ObjectType::Commit,
            Self::Tag(_) => ObjectType::Tag,
        }
    }

    /// The content address: SHA-1 over the framed envelope.
    pub fn id(&self) -> Result<ObjectId, ObjectError> {
        let payload = self.serialize_payload();
        Ok(Hasher::hash_object(self.object_type().as_str(), &payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_parses_all_four() {
        assert_eq!(ObjectType::from_bytes(b"blob").unwrap(), ObjectType::Blob);
        assert_eq!(ObjectType::from_bytes(b"tree").unwrap(), ObjectType::Tree);
        assert_eq!(
            ObjectType::from_bytes(b"commit").unwrap(),
            ObjectType::Commit
        );
        assert_eq!(ObjectType::from_bytes(b"tag").unwrap(), ObjectType::Tag);
    }

    #[test]
    fn object_type_rejects_unknown() {
        assert!(matches!(
            ObjectType::from_bytes(b"banana"),
            Err(ObjectError::UnknownType(_))
        ));
    }

    #[test]
    fn object_type_display_and_from_str() {
        assert_eq!(ObjectType::Commit.to_string(), "commit");
        assert_eq!("tree".parse::<ObjectType>().unwrap(), ObjectType::Tree);
        assert!("banana".parse::<ObjectType>().is_err());
    }

    #[test]
    fn blob_id_matches_upstream() {
        let obj = Object::Blob(Blob {
            data: b"hoge\n".to_vec(),
        });
        assert_eq!(
            obj.id().unwrap().to_hex(),
            "2262de0c121f22df8e78f5a37d6e114fd322c0b0"
        );
    }

    #[test]
    fn parse_then_serialize_is_identity_on_envelope() {
        let data = b"blob 5\0hoge\n";
        let obj = Object::parse(data).unwrap();
        assert_eq!(obj.serialize(), data);
    }
}
