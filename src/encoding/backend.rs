//! Encoder backend trait and shared types.
//!
//! The [`EncoderBackend`] trait is the only way generated pixels leave the
//! process. The production implementation is
//! [`PngBackend`](super::png_backend::PngBackend), built on the `image` crate's
//! pure-Rust PNG codec.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding failed: {0}")]
    Encode(String),
    #[error("Buffer is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Trait for image encoders.
pub trait EncoderBackend: Sync {
    /// Encode an RGBA8 buffer of `width × height` pixels into a file at `path`.
    fn encode_rgba(
        &self,
        path: &Path,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(), EncodeError>;

    /// Encode an RGBA8 buffer into memory.
    fn encode_rgba_to_vec(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, EncodeError>;
}

/// Reject buffers whose length does not match `width * height * 4`.
pub fn check_rgba_len(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(EncodeError::BufferSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
