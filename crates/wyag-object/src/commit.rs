use bstr::BStr;
use wyag_hash::ObjectId;

use crate::{Kvlm, ObjectError};

/// A commit: a KVLM payload with recognized headers.
///
/// The raw KVLM is kept as the source of truth so unrecognized headers
/// (e.g. `gpgsig`, `encoding`) and exact ordering survive a round trip;
/// the accessors give typed views of the headers the rest of the system
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub kvlm: Kvlm,
}

impl Commit {
    pub fn parse(payload: &[u8]) -> Result<Self, ObjectError> {
        Ok(Self {
            kvlm: Kvlm::parse(payload)?,
        })
    }

    pub fn serialize_payload(&self) -> Vec<u8> {
        self.kvlm.serialize()
    }

    /// The root tree this commit snapshots. Every commit has exactly one.
    pub fn tree(&self) -> Result<ObjectId, ObjectError> {
        let value = self.kvlm.first(b"tree").ok_or(ObjectError::MissingField {
            kind: "commit",
            field: "tree",
        })?;
        parse_oid_field("commit", "tree", value)
    }

    /// Parent commits in header order; empty for a root commit.
    pub fn parents(&self) -> Result<Vec<ObjectId>, ObjectError> {
        self.kvlm
            .get(b"parent")
            .iter()
            .map(|v| parse_oid_field("commit", "parent", v.as_ref()))
            .collect()
    }

    /// The commit message.
    pub fn message(&self) -> Option<&BStr> {
        self.kvlm.message()
    }
}

pub(crate) fn parse_oid_field(
    kind: &'static str,
    field: &'static str,
    value: &BStr,
) -> Result<ObjectId, ObjectError> {
    let hex = std::str::from_utf8(value.as_ref()).map_err(|_| ObjectError::InvalidField {
        kind,
        field,
        reason: "not valid UTF-8".into(),
    })?;
    ObjectId::from_hex(hex).map_err(|e| ObjectError::InvalidField {
        kind,
        field,
        reason: e.to_string(),
    })
}
