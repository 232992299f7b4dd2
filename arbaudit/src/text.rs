//! BOM-aware text reading shared by the locale reader and the line scanner.

use std::{fs::File, io::Read, path::Path};

use crate::error::Error;

/// Reads a whole file into a `String`.
///
/// A UTF-8 BOM is stripped and UTF-16 input carrying a BOM is transcoded;
/// anything else passes through as UTF-8.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::read_error(path, e))?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder
        .read_to_string(&mut decoded)
        .map_err(|e| Error::read_error(path, e))?;

    tracing::debug!(path = %path.display(), bytes = decoded.len(), "read text file");
    Ok(decoded)
}
