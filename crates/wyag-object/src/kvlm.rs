//! The key/value-list-with-message format shared by commits and tags.
//!
//! A payload is a run of `key SP value LF` header lines, a blank line, and
//! a free-form message. Values may span physical lines: each continuation
//! line starts with a single space, stripped on decode and re-inserted on
//! encode. Keys repeat (`parent` does), and both the per-key value order
//! and the global first-appearance key order are significant: commits
//! re-encode byte-identically only if both survive the round trip.

use std::collections::HashMap;

use bstr::{BStr, BString, ByteSlice};

use crate::ObjectError;

/// The message is stored under the empty key.
const MESSAGE_KEY: &[u8] = b"";

/// An insertion-ordered multimap plus a trailing message.
///
/// Backed by a key list in first-appearance order and a map from key to its
/// values in append order. A plain map would lose the ordering and make
/// re-encoding non-deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kvlm {
    keys: Vec<BString>,
    values: HashMap<BString, Vec<BString>>,
}

impl Kvlm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`, registering the key on first use.
    pub fn append(&mut self, key: impl Into<BString>, value: impl Into<BString>) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.entry(key).or_default().push(value.into());
    }

    /// All values recorded under `key`, in append order.
    pub fn get(&self, key: &[u8]) -> &[BString] {
        self.values
            .get(BStr::new(key))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The first value recorded under `key`.
    pub fn first(&self, key: &[u8]) -> Option<&BStr> {
        self.get(key).first().map(|v| v.as_bstr())
    }

    /// The trailing message, if one was recorded.
    pub fn message(&self) -> Option<&BStr> {
        self.first(MESSAGE_KEY)
    }

    /// Keys in first-appearance order (the message key included if present).
    pub fn keys(&self) -> impl Iterator<Item = &BStr> {
        self.keys.iter().map(|k| k.as_bstr())
    }

    /// Decode a KVLM payload.
    ///
    /// Runs a cursor over the bytes: each iteration consumes one logical
    /// header line (which may span folded physical lines), until the cursor
    /// lands on a blank line, after which everything is the message.
    pub fn parse(raw: &[u8]) -> Result<Self, ObjectError> {
        let mut kvlm = Self::new();
        let mut pos = 0;

        while pos < raw.len() {
            // Cursor on a newline: the headers are done and the rest is
            // the message.
            if raw[pos] == b'\n' {
                kvlm.append(BString::from(MESSAGE_KEY), BString::from(&raw[pos + 1..]));
                return Ok(kvlm);
            }

            let spc = raw[pos..].iter().position(|&b| b == b' ').map(|i| pos + i);
            let nl = raw[pos..].iter().position(|&b| b == b'\n').map(|i| pos + i);
            let key_end = match (spc, nl) {
                (Some(s), Some(n)) if s < n => s,
                (Some(s), None) => s,
                _ => {
                    return Err(ObjectError::MalformedKvlm {
                        offset: pos,
                        reason: "header line without a key/value separator".into(),
                    })
                }
            };

            // The value ends at the first newline not followed by a space.
            let mut end = pos;
            loop {
                match raw[end + 1..].iter().position(|&b| b == b'\n') {
                    Some(off) => end = end + 1 + off,
                    None => {
                        return Err(ObjectError::MalformedKvlm {
                            offset: pos,
                            reason: "unterminated header value".into(),
                        })
                    }
                }
                if end + 1 >= raw.len() || raw[end + 1] != b' ' {
                    break;
                }
            }

            let key = BString::from(&raw[pos..key_end]);
            let value = BString::from(raw[key_end + 1..end].replace(b"\n ", b"\n"));
            kvlm.append(key, value);
            pos = end + 1;
        }

        // Headers only, no blank line: nothing recorded under the message
        // key. Commits and tags always carry one.
        Ok(kvlm)
    }

    /// Encode back to the payload form.
    ///
    /// Headers are emitted in key insertion order with values re-folded
    /// (`LF` becomes `LF SP`), then the blank separator and the message.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for key in &self.keys {
            if key.is_empty() {
                continue;
            }
            for value in self.get(key) {
                out.extend_from_slice(key);
                out.push(b' ');
                out.extend_from_slice(&value.replace(b"\n", b"\n "));
                out.push(b'\n');
            }
        }
        out.push(b'\n');
        if let Some(message) = self.message() {
            out.extend_from_slice(message);
        }
        out
    }
}
