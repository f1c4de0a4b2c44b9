use std::fs;
use std::io::Read;

use flate2::read::ZlibDecoder;
use wyag_hash::ObjectId;
use wyag_object::{envelope, Object, ObjectType};

use crate::{LooseError, LooseObjectStore};

impl LooseObjectStore {
    /// Read and decode an object.
    ///
    /// A missing file is [`LooseError::NotFound`]; a file that exists but
    /// cannot be decompressed or violates the envelope is corrupt.
    pub fn read(&self, oid: &ObjectId) -> Result<Object, LooseError> {
        let decompressed = self.read_envelope(oid)?;
        Ok(Object::parse(&decompressed)?)
    }

    /// Read just the type and declared size, decompressing only the
    /// leading bytes.
    pub fn read_header(&self, oid: &ObjectId) -> Result<(ObjectType, usize), LooseError> {
        let compressed = self.read_compressed(oid)?;

        // Envelope headers fit well within 64 bytes ("commit 4294967295\0"
        // is 18); decompress until the NUL shows up.
        let mut decoder = ZlibDecoder::new(&compressed[..]);
        let mut buf = [0u8; 64];
        let mut filled = 0;
        loop {
            if filled >= buf.len() {
                return Err(LooseError::Corrupt {
                    oid: oid.to_hex(),
                    reason: "envelope header exceeds 64 bytes".into(),
                });
            }
            let n = decoder
                .read(&mut buf[filled..])
                .map_err(|e| LooseError::Decompress {
                    oid: oid.to_hex(),
                    source: e,
                })?;
            if n == 0 {
                return Err(LooseError::Corrupt {
                    oid: oid.to_hex(),
                    reason: "unexpected EOF before header terminator".into(),
                });
            }
            filled += n;
            if buf[..filled].contains(&0) {
                break;
            }
        }

        let (obj_type, size, _header_len) = envelope::parse_header(&buf[..filled])?;
        Ok((obj_type, size))
    }

    /// Read the raw decompressed envelope bytes.
    pub fn read_envelope(&self, oid: &ObjectId) -> Result<Vec<u8>, LooseError> {
        let compressed = self.read_compressed(oid)?;
        let mut decoder = ZlibDecoder::new(&compressed[..]);
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| LooseError::Decompress {
                oid: oid.to_hex(),
                source: e,
            })?;
        Ok(decompressed)
    }

    fn read_compressed(&self, oid: &ObjectId) -> Result<Vec<u8>, LooseError> {
        match fs::read(self.object_path(oid)) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LooseError::NotFound(*oid)),
            Err(e) => Err(LooseError::Io(e)),
        }
    }
}
