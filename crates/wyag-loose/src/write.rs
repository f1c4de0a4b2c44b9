use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use wyag_hash::hasher::Hasher;
use wyag_hash::ObjectId;
use wyag_object::{envelope, Object, ObjectType};

use crate::{LooseError, LooseObjectStore};

impl LooseObjectStore {
    /// Store an object. Returns its id.
    ///
    /// No-op if the object already exists; the file lands via temp file +
    /// rename so readers never observe a half-written object under its
    /// final name.
    pub fn write(&self, obj: &Object) -> Result<ObjectId, LooseError> {
        self.write_payload(obj.object_type(), &obj.serialize_payload())
    }

    /// Store a bare payload under a known type. Returns the id.
    pub fn write_payload(
        &self,
        obj_type: ObjectType,
        payload: &[u8],
    ) -> Result<ObjectId, LooseError> {
        let framed = envelope::frame(obj_type, payload);

        let oid = {
            let mut hasher = Hasher::new();
            hasher.update(&framed);
            hasher.finalize()?
        };

        if self.contains(&oid) {
            return Ok(oid);
        }

        let final_path = self.object_path(&oid);
        if let Some(parent) = final_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.write_to_temp(&framed)?;
        finalize_object(&tmp_path, &final_path)?;

        Ok(oid)
    }

    /// Compress the framed bytes into a temp file inside the objects dir
    /// (same filesystem, so the rename is atomic).
    fn write_to_temp(&self, framed: &[u8]) -> Result<std::path::PathBuf, LooseError> {
        let tmp_path = self.objects_dir.join(format!(
            "tmp_obj_{}",
            std::process::id()
                ^ std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .subsec_nanos()
        ));

        let file = fs::File::create(&tmp_path)?;
        let mut encoder = ZlibEncoder::new(file, self.compression);
        encoder.write_all(framed)?;
        encoder.finish()?;

        // Objects are immutable once written.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o444))?;
        }

        Ok(tmp_path)
    }
}

/// Move a temp file to its final name, tolerating a concurrent writer
/// that already produced the same content-addressed file.
fn finalize_object(tmp: &Path, final_path: &Path) -> Result<(), LooseError> {
    match fs::rename(tmp, final_path) {
        Ok(()) => Ok(()),
        Err(_) if final_path.exists() => {
            let _ = fs::remove_file(tmp);
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(tmp);
            Err(LooseError::Io(e))
        }
    }
}
