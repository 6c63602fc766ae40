//! Encoding generated canvases to image files.
//!
//! | Piece | Role |
//! |---|---|
//! | [`EncoderBackend`] | Trait: RGBA buffer → file or bytes |
//! | [`PngBackend`] | `image` crate PNG codec |
//! | [`write_png`] / [`encode_png`] | Canvas-level helpers used by the CLI and batch mode |

pub mod backend;
pub mod png_backend;

pub use backend::{EncodeError, EncoderBackend};
pub use png_backend::PngBackend;

use crate::identicon::raster::Canvas;
use std::path::Path;

/// Write a canvas to `path` through `backend`.
pub fn write_png(
    backend: &impl EncoderBackend,
    canvas: &Canvas,
    path: &Path,
) -> Result<(), EncodeError> {
    log::debug!("encoding {}px identicon to {}", canvas.size(), path.display());
    backend.encode_rgba(path, canvas.pixels(), canvas.size(), canvas.size())
}

/// Encode a canvas into an in-memory PNG.
pub fn encode_png(backend: &impl EncoderBackend, canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
    backend.encode_rgba_to_vec(canvas.pixels(), canvas.size(), canvas.size())
}
