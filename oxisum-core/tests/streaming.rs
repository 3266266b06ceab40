//! Large-file streaming tests for the CRC-64 engine.

use std::io::Write;

use oxisum_core::crc64::Crc64;
use oxisum_core::stream::{DEFAULT_CHUNK_SIZE, digest_file};
use tempfile::NamedTempFile;

/// Deterministic pseudo-random bytes, reproducible across runs.
fn patterned_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

#[test]
fn test_large_file_streamed_matches_in_memory() {
    // 10 MiB: thousands of 64 KiB chunks, none aligned to the content
    let data = patterned_data(10 * 1024 * 1024);
    let expected = Crc64::compute(&data);

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let streamed = digest_file(file.path(), DEFAULT_CHUNK_SIZE).unwrap();
    assert_eq!(streamed, expected);
}

#[test]
fn test_odd_chunk_size_matches_default() {
    let data = patterned_data(256 * 1024 + 7);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let with_default = digest_file(file.path(), DEFAULT_CHUNK_SIZE).unwrap();
    let with_odd = digest_file(file.path(), 4099).unwrap();
    assert_eq!(with_default, with_odd);
    assert_eq!(with_default, Crc64::compute(&data));
}

#[test]
fn test_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let digest = digest_file(file.path(), DEFAULT_CHUNK_SIZE).unwrap();
    assert_eq!(digest, 0);
}
