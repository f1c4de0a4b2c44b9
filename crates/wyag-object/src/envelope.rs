//! The framed envelope shared by all object kinds.
//!
//! On-disk (before compression) every object is
//! `"<type> <decimal-size>\0<payload>"`. The declared size must equal the
//! payload length exactly; anything else is a corrupt object.

use crate::{ObjectError, ObjectType};

/// Parse an envelope header. Returns `(type, declared_size, header_len)`
/// where `header_len` includes the NUL terminator.
pub fn parse_header(data: &[u8]) -> Result<(ObjectType, usize, usize), ObjectError> {
    let nul = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| ObjectError::InvalidEnvelope("missing NUL terminator".into()))?;

    let header = &data[..nul];
    let spc = header
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| ObjectError::InvalidEnvelope("missing space in header".into()))?;

    let obj_type = ObjectType::from_bytes(&header[..spc])?;

    let size_str = std::str::from_utf8(&header[spc + 1..])
        .map_err(|_| ObjectError::InvalidEnvelope("non-ASCII size field".into()))?;
    let declared: usize = size_str
        .parse()
        .map_err(|_| ObjectError::InvalidEnvelope(format!("bad size field: {size_str:?}")))?;

    Ok((obj_type, declared, nul + 1))
}

/// Split a full envelope into its type and payload, enforcing the exact
/// size match.
pub fn split(data: &[u8]) -> Result<(ObjectType, &[u8]), ObjectError> {
    let (obj_type, declared, header_len) = parse_header(data)?;
    let payload = &data[header_len..];
    if payload.len() != declared {
        return Err(ObjectError::SizeMismatch {
            declared,
            actual: payload.len(),
        });
    }
    Ok((obj_type, payload))
}

/// Build the framed envelope for a payload.
pub fn frame(obj_type: ObjectType, payload: &[u8]) -> Vec<u8> {
    let header = format!("{} {}\0", obj_type, payload.len());
    let mut out = Vec::with_capacity(header.len() + payload.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_well_formed() {
        let (ty, payload) = split(b"blob 5\0hoge\n").unwrap();
        assert_eq!(ty, ObjectType::Blob);
        assert_eq!(payload, b"hoge\n");
    }

    #[test]
    fn frame_then_split_roundtrips() {
        let framed = frame(ObjectType::Tree, b"abc");
        assert_eq!(framed, b"tree 3\0abc");
        let (ty, payload) = split(&framed).unwrap();
        assert_eq!(ty, ObjectType::Tree);
        assert_eq!(payload, b"abc");
    }

    #[test]
    fn size_must_match_exactly() {
        assert!(matches!(
            split(b"blob 4\0hoge\n"),
            Err(ObjectError::SizeMismatch {
                declared: 4,
                actual: 5
            })
        ));
        assert!(matches!(
            split(b"blob 6\0hoge\n"),
            Err(ObjectError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn missing_nul_is_rejected() {
        assert!(matches!(
            split(b"blob 5"),
            Err(ObjectError::InvalidEnvelope(_))
        ));
    }

    #[test]
    fn missing_space_is_rejected() {
        assert!(matches!(
            split(b"blob5\0"),
            Err(ObjectError::InvalidEnvelope(_))
        ));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(matches!(
            split(b"banana 0\0"),
            Err(ObjectError::UnknownType(_))
        ));
    }

    #[test]
    fn garbage_size_is_rejected() {
        assert!(matches!(
            split(b"blob five\0hoge\n"),
            Err(ObjectError::InvalidEnvelope(_))
        ));
    }

    #[test]
    fn empty_payload() {
        let (ty, payload) = split(b"blob 0\0").unwrap();
        assert_eq!(ty, ObjectType::Blob);
        assert!(payload.is_empty());
    }
}
