//! OxiSum CLI - The Oxidized Checksummer
//!
//! Prints CRC-64/ECMA-182 digests of files or literal strings, one line
//! per input, in argument order.

use clap::Parser;
use oxisum_core::{Crc64, DEFAULT_CHUNK_SIZE, Result, digest_file, format_digest};

#[derive(Parser)]
#[command(name = "oxisum")]
#[command(
    author,
    version,
    about = "The Oxidized Checksummer - CRC-64 digests for files and strings"
)]
#[command(long_about = "
OxiSum computes CRC-64/ECMA-182 digests (forward form, zero seed) and
prints one line per input: the 16-character hex digest followed by the
input itself. Files are streamed in chunks, so size does not matter.

Examples:
  oxisum data.bin
  oxisum *.iso
  oxisum --string 123456789
  oxisum --chunk-size 1048576 big.img
")]
struct Cli {
    /// Inputs to digest: file paths, or literal strings with --string
    #[arg(required = true, value_name = "TOKEN")]
    tokens: Vec<String>,

    /// Treat each TOKEN as a literal string instead of a file path
    #[arg(short, long)]
    string: bool,

    /// Chunk size in bytes for streamed file reads
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE, value_name = "BYTES")]
    chunk_size: usize,
}

fn digest_token(cli: &Cli, token: &str) -> Result<u64> {
    if cli.string {
        Ok(Crc64::compute(token.as_bytes()))
    } else {
        digest_file(token, cli.chunk_size)
    }
}

fn main() {
    let cli = Cli::parse();

    // A failing input is reported and skipped; the rest still run.
    let mut failures = 0usize;
    for token in &cli.tokens {
        match digest_token(&cli, token) {
            Ok(digest) => println!("{}  {}", format_digest(digest), token),
            Err(e) => {
                eprintln!("oxisum: {}: {}", token, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
