mod password;

pub use password::*;

use std::path::Path;

use crate::{Result, StegoError};

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| {
        log::error!("Error reading {path:?}: {source}");
        StegoError::ReadError { source }
    })
}

pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).map_err(|source| {
        log::error!("Error writing {path:?}: {source}");
        StegoError::WriteError { source }
    })
}
