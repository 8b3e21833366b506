use crate::constants::GZIP_MAGIC_BYTES;
use crate::types::RawCorpus;
use crate::Error;
use flate2::read::GzDecoder;
use log::debug;
use std::io::Read;

/// Turns fetched bytes into text.
///
/// Gzip-compressed payloads are decompressed first. Invalid UTF-8 sequences are
/// replaced with U+FFFD rather than rejected.
pub fn decode_corpus(bytes: &[u8]) -> Result<RawCorpus, Error> {
    if bytes.starts_with(&GZIP_MAGIC_BYTES) {
        let mut decoder = GzDecoder::new(bytes);
        let mut decompressed = Vec::new();

        decoder.read_to_end(&mut decompressed).map_err(|e| {
            Error::DecodeError(format!("Failed to decompress gzip payload: {}", e))
        })?;

        debug!(
            "Decompressed {} bytes into {} bytes",
            bytes.len(),
            decompressed.len()
        );

        return Ok(String::from_utf8_lossy(&decompressed).into_owned());
    }

    Ok(String::from_utf8_lossy(bytes).into_owned())
}
