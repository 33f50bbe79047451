use thiserror::Error;

pub use blockstego_cipher::CipherError;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a ciphertext envelope that is too short to carry a salt
    #[error("Malformed ciphertext envelope")]
    MalformedInput,

    /// Represents a payload that needs more blocks than the carrier offers
    #[error(
        "Capacity Error: the payload needs {required} bits but the image only carries {capacity} bits"
    )]
    PayloadTooLarge { required: usize, capacity: usize },

    /// Represents an image that cannot even hold a length header, or declares more data than it can carry
    #[error("No hidden data found")]
    NoHiddenData,

    /// Represents any failure of decryption. On purpose it never tells apart a wrong password from a corrupted image
    #[error("Incorrect password or corrupted image")]
    WrongPasswordOrCorruptedImage,

    /// Represents a bit string with a length that is not a multiple of 8, or symbols other than `0` and `1`
    #[error("Invalid bit string: {0}")]
    InvalidBitString(String),

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents channels of different dimensions that cannot be merged back into one image
    #[error("Color channels do not share the same dimensions")]
    ChannelMismatch,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(#[source] CipherError),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password")]
    MissingPassword,
}

impl From<CipherError> for StegoError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::MalformedInput(_) => StegoError::MalformedInput,
            CipherError::WrongPasswordOrCorrupted => StegoError::WrongPasswordOrCorruptedImage,
            e @ CipherError::EncryptionError(_) => StegoError::EncryptionError(e),
        }
    }
}
