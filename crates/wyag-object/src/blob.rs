/// An opaque byte payload: file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
}

impl Blob {
    /// Blob decoding is total: the payload is the data.
    pub fn parse(payload: &[u8]) -> Self {
        Self {
            data: payload.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_identity() {
        let blob = Blob::parse(b"hoge\n");
        assert_eq!(blob.data, b"hoge\n");
    }
}
