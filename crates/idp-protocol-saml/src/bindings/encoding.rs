//! Base64 and raw DEFLATE primitives shared by both bindings.

use std::io::Write;

use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::{SamlError, SamlResult};

/// Upper bound on an inflated message (64 KB).
pub const MAX_INFLATED_SIZE: usize = 64 * 1024;

const INFLATE_CHUNK: usize = 4 * 1024;

/// Decodes standard (RFC 4648, padded, non URL-safe) base64.
pub fn decode_base64(encoded: &str) -> SamlResult<Vec<u8>> {
    Ok(base64::engine::general_purpose::STANDARD.decode(encoded)?)
}

/// Encodes bytes as standard base64 without line wrapping.
#[must_use]
pub fn encode_base64(data: impl AsRef<[u8]>) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Compresses data using DEFLATE (raw, no zlib header).
pub fn deflate(data: &[u8]) -> SamlResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| SamlError::Deflate(format!("compression error: {e}")))?;
    encoder
        .finish()
        .map_err(|e| SamlError::Deflate(format!("compression finish error: {e}")))
}

/// Decompresses raw DEFLATE data.
///
/// The stream must run to its final block: input that runs out early is an
/// error, as is output growing past [`MAX_INFLATED_SIZE`].
pub fn inflate(data: &[u8]) -> SamlResult<Vec<u8>> {
    let mut inflater = Decompress::new(false);
    let mut output = Vec::with_capacity(INFLATE_CHUNK);

    loop {
        if output.capacity() - output.len() < INFLATE_CHUNK {
            output.reserve(INFLATE_CHUNK);
        }

        let consumed_before = inflater.total_in();
        let produced_before = inflater.total_out();
        let remaining = &data[consumed_before as usize..];

        let status = inflater
            .decompress_vec(remaining, &mut output, FlushDecompress::None)
            .map_err(|e| SamlError::Deflate(format!("decompression error: {e}")))?;

        if output.len() > MAX_INFLATED_SIZE {
            return Err(SamlError::Deflate(format!(
                "inflated message exceeds {MAX_INFLATED_SIZE} bytes"
            )));
        }

        match status {
            Status::StreamEnd => return Ok(output),
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() == consumed_before
                    && inflater.total_out() == produced_before;
                if stalled {
                    return Err(SamlError::Deflate(
                        "unexpected end of compressed stream".to_string(),
                    ));
                }
            }
        }
    }
}
