//! Object identity for the wyag object store.
//!
//! Provides the [`ObjectId`] type (a SHA-1 digest), hex encoding/decoding,
//! and a streaming [`hasher::Hasher`] used to compute ids over framed
//! object envelopes.

mod error;
pub mod hasher;
pub mod hex;
mod oid;

pub use error::HashError;
pub use oid::ObjectId;
