//! Encrypted records of what was hidden, for keeping a history.
//!
//! A record holds two envelopes of the same format that ends up in the
//! images: the message sealed under the password, and the password sealed
//! under itself. Without the password neither can be read.

use blockstego_cipher::KdfParams;

use crate::result::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    message: Vec<u8>,
    password: Vec<u8>,
}

/// The plain content of an [`AuditRecord`]
#[derive(Clone, PartialEq, Eq)]
pub struct OpenedRecord {
    pub message: String,
    pub password: String,
}

impl std::fmt::Debug for OpenedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenedRecord")
            .field("message_len", &self.message.len())
            .field("password", &"*".repeat(self.password.len()))
            .finish()
    }
}

impl AuditRecord {
    /// Seals with the default key derivation parameters
    pub fn seal(message: &str, password: &str) -> Result<Self> {
        Self::seal_with(message, password, &KdfParams::default())
    }

    pub fn seal_with(message: &str, password: &str, kdf: &KdfParams) -> Result<Self> {
        Ok(Self {
            message: blockstego_cipher::encrypt_with(message.as_bytes(), password, kdf)?,
            password: blockstego_cipher::encrypt_with(password.as_bytes(), password, kdf)?,
        })
    }

    /// Restores a record from stored envelopes
    pub fn from_envelopes(message: Vec<u8>, password: Vec<u8>) -> Self {
        Self { message, password }
    }

    pub fn message_envelope(&self) -> &[u8] {
        &self.message
    }

    pub fn password_envelope(&self) -> &[u8] {
        &self.password
    }

    pub fn open(&self, password: &str) -> Result<OpenedRecord> {
        self.open_with(password, &KdfParams::default())
    }

    pub fn open_with(&self, password: &str, kdf: &KdfParams) -> Result<OpenedRecord> {
        let message = blockstego_cipher::decrypt_with(&self.message, password, kdf)?;
        let stored_password = blockstego_cipher::decrypt_with(&self.password, password, kdf)?;

        Ok(OpenedRecord {
            message: into_text(message)?,
            password: into_text(stored_password)?,
        })
    }
}

fn into_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| crate::StegoError::WrongPasswordOrCorruptedImage)
}
