use bstr::{BStr, BString};
use wyag_hash::ObjectId;

use crate::commit::parse_oid_field;
use crate::{Kvlm, ObjectError, ObjectType};

/// The fixed tagger identity. User configuration is not read yet.
const DUMMY_TAGGER: &str = "dummy name <dummy@example.com>";

/// The fixed annotated-tag message.
const DUMMY_MESSAGE: &str = "Dummy commit message.\n";

/// An annotated tag: a KVLM payload naming a target object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kvlm: Kvlm,
}

impl Tag {
    pub fn parse(payload: &[u8]) -> Result<Self, ObjectError> {
        Ok(Self {
            kvlm: Kvlm::parse(payload)?,
        })
    }

    pub fn serialize_payload(&self) -> Vec<u8> {
        self.kvlm.serialize()
    }

    /// Build a new annotated tag for `target`, with the fixed identity and
    /// message. Header order is `tag`, `tagger`, `object`, `type`.
    pub fn annotated(name: &str, target: ObjectId, target_type: ObjectType) -> Self {
        let mut kvlm = Kvlm::new();
        kvlm.append("tag", name);
        kvlm.append("tagger", DUMMY_TAGGER);
        kvlm.append("object", target.to_hex());
        kvlm.append("type", BString::from(target_type.as_bytes()));
        kvlm.append("", DUMMY_MESSAGE);
        Self { kvlm }
    }

    /// The object this tag points at.
    pub fn target(&self) -> Result<ObjectId, ObjectError> {
        let value = self.kvlm.first(b"object").ok_or(ObjectError::MissingField {
            kind: "tag",
            field: "object",
        })?;
        parse_oid_field("tag", "object", value)
    }

    /// The declared type of the target object.
    pub fn target_type(&self) -> Result<ObjectType, ObjectError> {
        let value = self.kvlm.first(b"type").ok_or(ObjectError::MissingField {
            kind: "tag",
            field: "type",
        })?;
        ObjectType::from_bytes(value.as_ref())
    }

    /// The tag name.
    pub fn name(&self) -> Option<&BStr> {
        self.kvlm.first(b"tag")
    }

    /// The tag message.
    pub fn message(&self) -> Option<&BStr> {
        self.kvlm.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "7a7dd58919381869a1e39be3d0c7f45978a3a04f";

    #[test]
    fn annotated_layout_matches_fixture() {
        let tag = Tag::annotated("piyo", ObjectId::from_hex(TARGET).unwrap(), ObjectType::Commit);
        let expected = format!(
            "tag piyo\ntagger {DUMMY_TAGGER}\nobject {TARGET}\ntype commit\n\n{DUMMY_MESSAGE}"
        );
        assert_eq!(tag.serialize_payload(), expected.as_bytes());
    }

    #[test]
    fn parse_reads_back_the_fields() {
        let tag = Tag::annotated("piyo", ObjectId::from_hex(TARGET).unwrap(), ObjectType::Commit);
        let reparsed = Tag::parse(&tag.serialize_payload()).unwrap();
        assert_eq!(reparsed.name().unwrap(), "piyo");
        assert_eq!(reparsed.target().unwrap().to_hex(), TARGET);
        assert_eq!(reparsed.target_type().unwrap(), ObjectType::Commit);
        assert_eq!(reparsed.message().unwrap(), DUMMY_MESSAGE);
        assert_eq!(reparsed, tag);
    }

    #[test]
    fn missing_object_surfaces_on_access() {
        let tag = Tag::parse(b"tag orphan\n\nmsg\n").unwrap();
        assert!(matches!(
            tag.target(),
            Err(ObjectError::MissingField {
                kind: "tag",
                field: "object"
            })
        ));
    }

    #[test]
    fn bad_type_header_is_rejected_on_access() {
        let raw = format!("object {TARGET}\ntype banana\ntag t\n\nm\n");
        let tag = Tag::parse(raw.as_bytes()).unwrap();
        assert!(matches!(tag.target_type(), Err(ObjectError::UnknownType(_))));
    }
}
