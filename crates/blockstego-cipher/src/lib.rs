//! # Password based payload encryption
//!
//! Turns a password and a fresh random salt into a 256 bit key with
//! PBKDF2-HMAC-SHA256 and seals the data with XChaCha20Poly1305.
//!
//! The resulting envelope is laid out as
//!
//! ```text
//! salt (16) || nonce (24) || ciphertext || poly1305 tag (16)
//! ```
//!
//! The salt travels in front of everything else, without it even the right
//! password cannot recover the key.
//!
//! ```rust
//! use blockstego_cipher::{decrypt_with, encrypt_with, KdfParams};
//!
//! let params = KdfParams::with_iterations(1_000);
//! let envelope = encrypt_with(b"meet me at noon", "hunter42", &params).unwrap();
//! let plain = decrypt_with(&envelope, "hunter42", &params).unwrap();
//! assert_eq!(plain, b"meet me at noon");
//! ```

use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{Key as AeadKey, KeyInit, XChaCha20Poly1305, XNonce};
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

pub mod error;

pub use crate::error::CipherError;

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 24;
pub const TAG_LEN: usize = 16;
pub const KEY_LEN: usize = 32;

/// Bytes an envelope adds on top of the plaintext
pub const ENVELOPE_OVERHEAD: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 390_000;

pub type Result<T> = std::result::Result<T, CipherError>;
pub type Key = [u8; KEY_LEN];

/// Key derivation parameters.
///
/// The iteration count is not stored inside the envelope, both sides have to agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Custom iteration count, at least 1
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// encrypt data with password, using the default key derivation parameters
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    encrypt_with(plaintext, password, &KdfParams::default())
}

/// decrypt an envelope with password, using the default key derivation parameters
pub fn decrypt(envelope: &[u8], password: &str) -> Result<Vec<u8>> {
    decrypt_with(envelope, password, &KdfParams::default())
}

/// encrypt data with password, it uses PBKDF2-HMAC-SHA256 for key derivation and XChaCha20Poly1305 for encryption
pub fn encrypt_with(plaintext: &[u8], password: &str, params: &KdfParams) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let key = derive_key(password.as_bytes(), &salt, params);

    let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
    debug_assert_eq!(nonce.len(), NONCE_LEN);

    let encryptor = XChaCha20Poly1305::new(AeadKey::from_slice(&key[..]));
    let cipher_data = encryptor
        .encrypt(&nonce, plaintext)
        .map_err(CipherError::EncryptionError)?;

    let mut envelope = Vec::with_capacity(SALT_LEN + NONCE_LEN + cipher_data.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&cipher_data);

    salt.zeroize();

    Ok(envelope)
}

/// decrypt an envelope with password, see [`encrypt_with`]
pub fn decrypt_with(envelope: &[u8], password: &str, params: &KdfParams) -> Result<Vec<u8>> {
    if envelope.len() < SALT_LEN {
        return Err(CipherError::MalformedInput(envelope.len()));
    }
    let (salt, token) = envelope.split_at(SALT_LEN);
    if token.len() < NONCE_LEN + TAG_LEN {
        debug!("token of {} bytes cannot carry nonce and tag", token.len());
        return Err(CipherError::WrongPasswordOrCorrupted);
    }
    let (nonce, cipher_data) = token.split_at(NONCE_LEN);
    let key = derive_key(password.as_bytes(), salt, params);

    let decryptor = XChaCha20Poly1305::new(AeadKey::from_slice(&key[..]));
    decryptor
        .decrypt(XNonce::from_slice(nonce), cipher_data)
        .map_err(|_| CipherError::WrongPasswordOrCorrupted)
}

/// derive a 256 bit key, the returned key is wiped when dropped
pub fn derive_key(password: &[u8], salt: &[u8], params: &KdfParams) -> Zeroizing<Key> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, params.iterations(), &mut key[..]);

    key
}
