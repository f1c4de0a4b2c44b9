//! Symbolic-name resolution and commit-graph traversal.
//!
//! Resolution turns what a user typed (`HEAD`, a short or full hex id, a
//! branch or tag name, optionally peeled with `name^{type}`) into an
//! object. Traversal walks parent edges to render the history as a DOT
//! graph.

mod log;
mod resolve;

pub use log::write_log;
pub use resolve::{find, find_candidates, parse_query, resolve_name};

use wyag_hash::ObjectId;
use wyag_object::ObjectType;

/// Errors from name resolution and graph walking.
#[derive(Debug, thiserror::Error)]
pub enum RevWalkError {
    #[error("no such reference: {0}")]
    NoSuchName(String),

    #[error("ambiguous reference {name}: candidates are {}", candidate_list(.candidates))]
    Ambiguous {
        name: String,
        candidates: Vec<ObjectId>,
    },

    #[error("found no object of type {wanted} for {name}")]
    PeelFailed { name: String, wanted: ObjectType },

    #[error("invalid peel target in {0:?}")]
    InvalidPeelTarget(String),

    #[error("object {0} is not a commit")]
    NotACommit(ObjectId),

    #[error(transparent)]
    Loose(#[from] wyag_loose::LooseError),

    #[error(transparent)]
    Ref(#[from] wyag_ref::RefError),

    #[error(transparent)]
    Object(#[from] wyag_object::ObjectError),

    #[error(transparent)]
    Hash(#[from] wyag_hash::HashError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn candidate_list(candidates: &[ObjectId]) -> String {
    candidates
        .iter()
        .map(|oid| oid.to_hex())
        .collect::<Vec<_>>()
        .join(", ")
}
