use crate::codec::base58;
use crate::codec::versioned::VersionedCodec;
use crate::error::{CoinstringError, Result};
use crate::utils::{has_compression_flag, ChecksumHash, DoubleSha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const CHECKSUM_LEN: usize = 4;

/// Smallest decodable frame: one version byte plus the checksum
pub const MIN_ENCODED_LEN: usize = 1 + CHECKSUM_LEN;

/// Payload recovered from a coinstring, with its version byte.
///
/// The bytes may be a private key: this value wipes its own buffer on drop
/// and `Debug` never prints it. Copies made by the caller are not covered.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Decoded {
    version: u8,
    bytes: Vec<u8>,
}

impl Decoded {
    pub fn new(version: u8, bytes: Vec<u8>) -> Self {
        Self { version, bytes }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Payload bytes, without version byte or checksum
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True for a 32-byte key followed by the `0x01` compression marker
    pub fn has_compression_flag(&self) -> bool {
        has_compression_flag(&self.bytes)
    }

    /// Take ownership of the payload bytes
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

impl std::fmt::Debug for Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoded")
            .field("version", &self.version)
            .field("length", &self.bytes.len())
            .finish()
    }
}

/// Versioned, checksummed Base58 codec.
///
/// `H` computes the checksum digest; double SHA-256 unless another hasher
/// is injected with [`Coinstring::with_hasher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Coinstring<H = DoubleSha256> {
    hasher: H,
}

impl Coinstring<DoubleSha256> {
    pub fn new() -> Self {
        Self {
            hasher: DoubleSha256,
        }
    }
}

impl<H: ChecksumHash> Coinstring<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Encode `payload` under `version`: Base58(version ‖ payload ‖ checksum)
    pub fn encode(&self, version: u8, payload: impl AsRef<[u8]>) -> String {
        let payload = payload.as_ref();
        let mut frame = Vec::with_capacity(MIN_ENCODED_LEN + payload.len());
        frame.push(version);
        frame.extend_from_slice(payload);
        let checksum = self.checksum(&frame);
        frame.extend_from_slice(&checksum);
        let encoded = base58::encode(&frame);
        frame.zeroize();
        encoded
    }

    /// Decode `text` and require its version byte to equal `version`.
    ///
    /// # Errors
    /// - `InvalidCharacter`: `text` has a symbol outside the Base58 alphabet.
    /// - `TooShort`: fewer than five decoded bytes.
    /// - `ChecksumMismatch`: trailing four bytes disagree with the frame's checksum.
    /// - `VersionMismatch`: checksum is valid but the version byte differs.
    pub fn decode(&self, version: u8, text: &str) -> Result<Decoded> {
        let decoded = self.decode_any(text)?;
        if decoded.version() != version {
            log::debug!(
                "Rejecting coinstring with version {:#04x}, expected {version:#04x}",
                decoded.version()
            );
            return Err(CoinstringError::VersionMismatch {
                expected: version,
                actual: decoded.version(),
            });
        }
        Ok(decoded)
    }

    /// Decode `text`, trusting whatever version byte it carries.
    ///
    /// Only the checksum is verified; callers that need a specific version
    /// should use [`Coinstring::decode`].
    pub fn decode_any(&self, text: &str) -> Result<Decoded> {
        let mut raw = base58::decode(text).inspect_err(|e| {
            log::debug!("Base58 decoding failed: {e}");
        })?;
        if raw.len() < MIN_ENCODED_LEN {
            let length = raw.len();
            log::debug!("Decoded coinstring is only {length} bytes");
            raw.zeroize();
            return Err(CoinstringError::TooShort { length });
        }

        let split = raw.len() - CHECKSUM_LEN;
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(&raw[split..]);
        let expected = self.checksum(&raw[..split]);
        if expected != actual {
            log::debug!("Coinstring checksum mismatch");
            raw.zeroize();
            return Err(CoinstringError::ChecksumMismatch { expected, actual });
        }

        raw.truncate(split);
        let version = raw.remove(0);
        Ok(Decoded::new(version, raw))
    }

    /// True when `text` decodes under `version`; never fails
    pub fn validate(&self, version: u8, text: &str) -> bool {
        self.decode(version, text).is_ok()
    }

    /// First four bytes of the checksum digest of `frame`
    pub fn checksum(&self, frame: &[u8]) -> [u8; CHECKSUM_LEN] {
        let digest = self.hasher.checksum_hash(frame);
        let mut checksum = [0u8; CHECKSUM_LEN];
        if digest.len() < CHECKSUM_LEN {
            log::warn!(
                "Checksum hash returned {} bytes, padding to {CHECKSUM_LEN}",
                digest.len()
            );
        }
        let available = digest.len().min(CHECKSUM_LEN);
        checksum[..available].copy_from_slice(&digest[..available]);
        checksum
    }
}

impl<H: ChecksumHash + Clone> Coinstring<H> {
    /// Fix `version` once, yielding a reusable codec for that namespace
    pub fn for_version(&self, version: u8) -> VersionedCodec<H> {
        VersionedCodec::new(version, self.clone())
    }
}
