use std::path::Path;

use crate::{CodecOptions, StegoError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: Option<String>,
    password: Option<String>,
    options: CodecOptions,
) -> Result<(), StegoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .using_password(password)
        .use_message(message)
        .execute()
}
