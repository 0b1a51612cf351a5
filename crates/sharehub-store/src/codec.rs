//! Reversible obfuscation of numeric ids.
//!
//! An encoded id is the kind tag followed by the big-endian id, XORed with a
//! keystream derived from the salt, in unpadded URL-safe base64. Decoding a
//! value under the wrong kind or salt fails.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_service::{IdCodec, IdKind};

const PAYLOAD_LEN: usize = 9;

/// Salted id codec.
#[derive(Clone)]
pub struct SaltedIdCodec {
    key: [u8; 32],
}

impl SaltedIdCodec {
    /// Create a codec for a salt.
    pub fn new(salt: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"sharehub-id:");
        hasher.update(salt.as_bytes());
        Self {
            key: hasher.finalize().into(),
        }
    }

    fn apply(&self, payload: &mut [u8; PAYLOAD_LEN]) {
        for (byte, key) in payload.iter_mut().zip(self.key.iter()) {
            *byte ^= key;
        }
    }
}

impl std::fmt::Debug for SaltedIdCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltedIdCodec").finish_non_exhaustive()
    }
}

impl IdCodec for SaltedIdCodec {
    fn encode(&self, id: i64, kind: IdKind) -> String {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[0] = kind.tag();
        payload[1..].copy_from_slice(&id.to_be_bytes());
        self.apply(&mut payload);
        URL_SAFE_NO_PAD.encode(payload)
    }

    fn decode(&self, raw: &str, kind: IdKind) -> AppResult<i64> {
        let invalid = || AppError::not_found(format!("Invalid id '{raw}'"));

        let bytes = URL_SAFE_NO_PAD.decode(raw).map_err(|_| invalid())?;
        let mut payload: [u8; PAYLOAD_LEN] = bytes.try_into().map_err(|_| invalid())?;
        self.apply(&mut payload);

        if payload[0] != kind.tag() {
            return Err(invalid());
        }
        let mut id = [0u8; 8];
        id.copy_from_slice(&payload[1..]);
        Ok(i64::from_be_bytes(id))
    }
}
