//! # OxiSum Core
//!
//! Core components for the OxiSum checksum tool.
//!
//! This crate provides a table-driven CRC-64/ECMA-182 implementation
//! (forward form, zero seed, no final XOR) and the plumbing around it:
//!
//! - [`crc64`]: the lookup tables, the [`Crc64`] accumulator, and digest
//!   formatting
//! - [`stream`]: chunked digesting of readers and files
//! - [`error`]: error types
//!
//! The lookup tables are compile-time constants and the accumulator is a
//! plain value, so any number of digests can run concurrently without
//! locking. The core performs no output of its own; it returns results and
//! errors to the caller.
//!
//! ## Example
//!
//! ```rust
//! use oxisum_core::crc64::{Crc64, format_digest};
//!
//! let digest = Crc64::compute(b"123456789");
//! assert_eq!(format_digest(digest), "6c40df5f0b497347");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod crc64;
pub mod error;
pub mod stream;

// Re-exports for convenience
pub use crc64::{Crc64, format_digest};
pub use error::{OxiSumError, Result};
pub use stream::{DEFAULT_CHUNK_SIZE, digest_file, digest_reader};
