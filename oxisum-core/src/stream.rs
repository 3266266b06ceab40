//! Streaming digest computation over readers and files.
//!
//! Large inputs are folded through a single [`Crc64`] accumulator in
//! fixed-size chunks, so files never have to fit in memory. Chunk
//! boundaries cannot affect the digest; any chunk size ≥ 1 produces the
//! same value as a whole-buffer [`Crc64::compute`].

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::crc64::Crc64;
use crate::error::{OxiSumError, Result};

/// Default chunk size for streamed reads (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Compute the CRC-64 of everything a reader yields.
///
/// Reads `chunk_size` bytes at a time until the source is exhausted. An
/// empty source yields the initial-accumulator digest (`0`). A zero
/// `chunk_size` is rejected before the source is touched. `Interrupted`
/// reads are retried; any other read error is propagated as-is, with no
/// partial digest returned.
pub fn digest_reader<R: Read>(mut reader: R, chunk_size: usize) -> Result<u64> {
    if chunk_size == 0 {
        return Err(OxiSumError::invalid_chunk_size(chunk_size));
    }

    let mut buf = vec![0u8; chunk_size];
    let mut crc = Crc64::new();

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => crc.update(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(crc.finalize())
}

/// Compute the CRC-64 of a file's contents, streamed in chunks.
///
/// The chunk size is validated before the file is opened, so a zero
/// `chunk_size` never performs any I/O.
pub fn digest_file<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<u64> {
    if chunk_size == 0 {
        return Err(OxiSumError::invalid_chunk_size(chunk_size));
    }

    let file = File::open(path)?;
    digest_reader(file, chunk_size)
}
