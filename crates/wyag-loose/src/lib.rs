//! Loose object storage: read and write zlib-compressed objects.
//!
//! Each object lives at `objects/XX/YYYY...` where `XX` is the first hex
//! byte of its id and `YYYY...` the remaining 38 characters. The file
//! content is the zlib-compressed framed envelope, never the bare payload.

mod prefix;
mod read;
mod write;

use std::path::{Path, PathBuf};

use wyag_hash::{HashError, ObjectId};
use wyag_object::ObjectError;

/// Interface to an `objects/` directory.
pub struct LooseObjectStore {
    objects_dir: PathBuf,
    compression: flate2::Compression,
}

impl LooseObjectStore {
    /// Open the store rooted at `objects_dir`. The directory need not
    /// exist yet; writes create the fan-out subdirectories on demand.
    pub fn open(objects_dir: impl AsRef<Path>) -> Self {
        Self {
            objects_dir: objects_dir.as_ref().to_path_buf(),
            compression: flate2::Compression::default(),
        }
    }

    /// The file path for an object id.
    pub fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.objects_dir.join(oid.loose_path())
    }

    /// Whether an object exists.
    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.object_path(oid).is_file()
    }
}

/// Errors from loose object operations.
#[derive(Debug, thiserror::Error)]
pub enum LooseError {
    #[error("no such object: {0}")]
    NotFound(ObjectId),

    #[error("corrupt object {oid}: {reason}")]
    Corrupt { oid: String, reason: String },

    #[error("cannot decompress object {oid}: {source}")]
    Decompress {
        oid: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Object(#[from] ObjectError),

    #[error(transparent)]
    Hash(#[from] HashError),
}
