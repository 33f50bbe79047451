use std::path::Path;

use crate::{CodecOptions, StegoError};

/// Returns the message, and writes it to `output_file` if given
pub fn unveil(
    secret_media: &Path,
    output_file: Option<&Path>,
    password: Option<String>,
    options: CodecOptions,
) -> Result<String, StegoError> {
    let api = crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .using_password(password);

    match output_file {
        Some(output_file) => api.into_output_file(output_file).execute(),
        None => api.execute(),
    }
}
