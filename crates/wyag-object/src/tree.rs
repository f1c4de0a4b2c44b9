use bstr::BString;
use wyag_hash::ObjectId;

use crate::ObjectError;

/// One record of a tree: `<mode> SP <path> NUL <20 raw id bytes>`.
///
/// The mode is kept verbatim as the stored octal ASCII (5 or 6 digits,
/// no leading zero on disk) so a decode/encode pass reproduces the exact
/// input bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: BString,
    pub path: BString,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// The display form of the mode, left-zero-padded to six digits
    /// (`40000` prints as `040000`).
    pub fn mode_padded(&self) -> BString {
        let mut out = Vec::with_capacity(6);
        if self.mode.len() == 5 {
            out.push(b'0');
        }
        out.extend_from_slice(&self.mode);
        BString::from(out)
    }

    /// Whether this entry names a subtree.
    pub fn is_tree(&self) -> bool {
        self.mode.as_slice() == b"40000" || self.mode.as_slice() == b"040000"
    }
}

/// A directory listing: an ordered sequence of entries.
///
/// Order is whatever the payload stored; it is never re-sorted, so
/// decode and encode are exact inverses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    /// Decode the binary record sequence.
    pub fn parse(payload: &[u8]) -> Result<Self, ObjectError> {
        let mut entries = Vec::new();
        let mut pos = 0;

        while pos < payload.len() {
            let spc = payload[pos..]
                .iter()
                .position(|&b| b == b' ')
                .ok_or_else(|| ObjectError::InvalidTreeEntry {
                    offset: pos,
                    reason: "missing space after mode".into(),
                })?
                + pos;

            let mode = &payload[pos..spc];
            if mode.len() != 5 && mode.len() != 6 {
                return Err(ObjectError::InvalidTreeEntry {
                    offset: pos,
                    reason: format!("mode must be 5 or 6 octal digits, got {}", mode.len()),
                });
            }
            if !mode.iter().all(|b| (b'0'..=b'7').contains(b)) {
                return Err(ObjectError::InvalidTreeEntry {
                    offset: pos,
                    reason: "mode contains a non-octal digit".into(),
                });
            }

            let path_start = spc + 1;
            let nul = payload[path_start..]
                .iter()
                .position(|&b| b == 0)
                .ok_or_else(|| ObjectError::InvalidTreeEntry {
                    offset: path_start,
                    reason: "missing NUL after path".into(),
                })?
                + path_start;

            let oid_start = nul + 1;
            if oid_start + 20 > payload.len() {
                return Err(ObjectError::InvalidTreeEntry {
                    offset: oid_start,
                    reason: "truncated object id".into(),
                });
            }
            let oid = ObjectId::from_bytes(&payload[oid_start..oid_start + 20])?;

            entries.push(TreeEntry {
                mode: BString::from(mode),
                path: BString::from(&payload[path_start..nul]),
                oid,
            });
            pos = oid_start + 20;
        }

        Ok(Self { entries })
    }

    /// Encode back to the binary form, entries in stored order.
    pub fn serialize_payload(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for entry in &self.entries {
            out.extend_from_slice(&entry.mode);
            out.push(b' ');
            out.extend_from_slice(&entry.path);
            out.push(0);
            out.extend_from_slice(entry.oid.as_bytes());
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
