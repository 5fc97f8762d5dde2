use crate::codec::coinstring::{Coinstring, Decoded};
use crate::error::Result;
use crate::utils::{ChecksumHash, DoubleSha256};

/// A [`Coinstring`] codec with its version byte fixed.
///
/// Built once per namespace (e.g. `0x00` for Bitcoin addresses, `0x80` for
/// Bitcoin WIF keys) and reused; it is immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct VersionedCodec<H = DoubleSha256> {
    version: u8,
    codec: Coinstring<H>,
}

impl<H: ChecksumHash> VersionedCodec<H> {
    pub fn new(version: u8, codec: Coinstring<H>) -> Self {
        Self { version, codec }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn encode(&self, payload: impl AsRef<[u8]>) -> String {
        self.codec.encode(self.version, payload)
    }

    pub fn decode(&self, text: &str) -> Result<Decoded> {
        self.codec.decode(self.version, text)
    }

    pub fn validate(&self, text: &str) -> bool {
        self.codec.validate(self.version, text)
    }
}
