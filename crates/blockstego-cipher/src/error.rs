pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The envelope is too short to even carry the salt
    #[error("Malformed ciphertext envelope: {0} bytes is shorter than the salt")]
    MalformedInput(usize),

    /// Integrity check failed. A wrong password and tampered bytes look the same on purpose.
    #[error("Incorrect password or corrupted data")]
    WrongPasswordOrCorrupted,

    #[error("Encryption error")]
    EncryptionError(Chacha20Poly1305Error),
}
