//! Short-hash resolution: expand a hex prefix to the ids it matches.
//!
//! The fan-out layout makes this a single-directory scan: the first two
//! hex characters pick `objects/XX/` and the rest prefix-matches the
//! 38-character filenames inside.

use std::fs;

use wyag_hash::ObjectId;

use crate::{LooseError, LooseObjectStore};

impl LooseObjectStore {
    /// Find every object whose hex id extends `prefix` (case-insensitive).
    ///
    /// The caller enforces the prefix length window; anything shorter than
    /// two characters cannot select a fan-out directory and matches
    /// nothing. Results come back sorted so ambiguity reports are stable.
    pub fn find_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>, LooseError> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.len() < 2 || !prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(Vec::new());
        }

        let fanout_dir = self.objects_dir.join(&prefix[..2]);
        let entries = match fs::read_dir(&fanout_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LooseError::Io(e)),
        };

        let rest = &prefix[2..];
        let mut matches = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.len() != 38 || !name.starts_with(rest) {
                continue;
            }
            let hex = format!("{}{}", &prefix[..2], name);
            if let Ok(oid) = ObjectId::from_hex(&hex) {
                matches.push(oid);
            }
        }

        matches.sort();
        Ok(matches)
    }
}
