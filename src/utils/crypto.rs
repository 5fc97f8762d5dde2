use ring::digest::{Context, SHA256};

/// Digest collaborator used to derive coinstring checksums.
///
/// Implementations must return at least four bytes; only the first four are
/// used. Any `Fn(&[u8]) -> Vec<u8>` closure is accepted as a hasher.
pub trait ChecksumHash {
    fn checksum_hash(&self, data: &[u8]) -> Vec<u8>;
}

impl<F> ChecksumHash for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn checksum_hash(&self, data: &[u8]) -> Vec<u8> {
        self(data)
    }
}

/// SHA-256 applied twice, the Bitcoin checksum digest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleSha256;

impl ChecksumHash for DoubleSha256 {
    fn checksum_hash(&self, data: &[u8]) -> Vec<u8> {
        double_sha256_digest(data)
    }
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn double_sha256_digest(data: &[u8]) -> Vec<u8> {
    let first_sha = sha256_digest(data);
    sha256_digest(first_sha.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(sha256_digest(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_sha256_known_vector() {
        assert_eq!(
            hex::encode(double_sha256_digest(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_closure_as_hasher() {
        let hasher = |data: &[u8]| data.iter().rev().copied().collect::<Vec<u8>>();
        assert_eq!(hasher.checksum_hash(&[1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(
            DoubleSha256.checksum_hash(b"hello"),
            double_sha256_digest(b"hello")
        );
    }
}
