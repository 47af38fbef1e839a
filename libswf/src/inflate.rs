use std::io;

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::{Error, Result};

const CHUNK: usize = 32 * 1024;

/// Inflates a zlib-wrapped deflate stream in full. Input that ends before
/// the end-of-stream marker (and adler32 trailer) is an error, not a short
/// result.
pub fn inflate(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decompress = Decompress::new(true);
    let mut body = Vec::with_capacity(compressed.len().saturating_mul(2));

    loop {
        if body.len() == body.capacity() {
            body.reserve(body.capacity().max(CHUNK));
        }

        let consumed = decompress.total_in() as usize;
        let produced = decompress.total_out();

        let status = decompress
            .decompress_vec(&compressed[consumed..], &mut body, FlushDecompress::None)
            .map_err(|e| Error::Decompress(e.into()))?;

        match status {
            Status::StreamEnd => return Ok(body),
            Status::Ok | Status::BufError => {
                // there was room for output, so no progress means no more input
                if decompress.total_in() as usize == consumed && decompress.total_out() == produced
                {
                    return Err(Error::Decompress(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "zlib stream ended early",
                    )));
                }
            }
        }
    }
}
