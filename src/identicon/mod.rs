//! Identicon derivation and rasterization.
//!
//! | Step | Module |
//! |---|---|
//! | **Fold** digest bytes into integers | [`fold`] |
//! | **Color**: hue from the digest tail, fixed gray background | [`color`] |
//! | **Pattern**: 15 parity bits → mirrored 5×5 grid | [`pattern`] |
//! | **Geometry**: margins and cell size | [`geometry`] |
//! | **Raster**: clipped, stroke-expanded fills on an RGBA canvas | [`raster`] |
//!
//! [`Generator`] ties them together. Derivation ([`Generator::inspect`]) and
//! painting ([`Identicon::render`]) are separate so the derived values can be
//! shown or tested without touching pixels.

pub mod color;
pub mod fold;
pub mod geometry;
pub mod pattern;
pub mod raster;

use crate::digest::{DigestProvider, RustCryptoDigest};
use crate::options::{HashAlgorithm, Options};
use color::{BACKGROUND, HUE_TAIL_BYTES, Rgb};
use geometry::Geometry;
use pattern::{PATTERN_BYTES, Pattern};
use raster::Canvas;
use thiserror::Error;

/// Shortest digest the derivation can work with.
pub const MIN_DIGEST_LEN: usize = if PATTERN_BYTES > HUE_TAIL_BYTES {
    PATTERN_BYTES
} else {
    HUE_TAIL_BYTES
};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    #[error("Hash failure: {0}")]
    HashFailure(String),
}

/// Everything derived from one input, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Identicon {
    pub algorithm: HashAlgorithm,
    pub digest: Vec<u8>,
    pub foreground: Rgb,
    pub pattern: Pattern,
    pub geometry: Geometry,
    pub transparent: bool,
    /// Stroke width for foreground cells, when stroking.
    pub stroke: Option<u32>,
}

impl Identicon {
    /// Paint onto a fresh canvas: gray background unless transparent, then
    /// every "on" cell in pattern order.
    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.geometry.size);

        if !self.transparent {
            canvas.fill(BACKGROUND);
        }

        if self.geometry.is_degenerate() {
            log::debug!(
                "{}px canvas leaves no room for cells, painting background only",
                self.geometry.size
            );
            return canvas;
        }

        for (row, col) in self.pattern.painted_cells() {
            canvas.paint_rect(
                self.geometry.cell_rect(row, col),
                self.foreground,
                self.stroke,
            );
        }
        canvas
    }

    /// Lowercase hex of the digest.
    pub fn digest_hex(&self) -> String {
        crate::digest::to_hex(&self.digest)
    }
}

/// Identicon generator over an injected [`DigestProvider`].
#[derive(Debug, Clone, Default)]
pub struct Generator<D = RustCryptoDigest> {
    digest: D,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DigestProvider> Generator<D> {
    pub fn with_digest(digest: D) -> Self {
        Self { digest }
    }

    /// Validate options, hash the input and derive colors, pattern and layout.
    pub fn inspect(&self, options: &Options) -> Result<Identicon, GenerateError> {
        options.validate()?;

        let digest = self.digest.digest(
            options.text().as_bytes(),
            options.salt_bytes(),
            options.hash_algorithm,
        );
        if digest.len() < MIN_DIGEST_LEN {
            return Err(GenerateError::HashFailure(format!(
                "{} digest is {} bytes, need at least {}",
                options.hash_algorithm,
                digest.len(),
                MIN_DIGEST_LEN
            )));
        }

        let identicon = Identicon {
            algorithm: options.hash_algorithm,
            foreground: color::foreground(&digest),
            pattern: Pattern::from_digest(&digest),
            geometry: Geometry::new(options.size, options.margin),
            transparent: options.transparent,
            stroke: options.stroke_width(),
            digest,
        };
        log::debug!(
            "{} {} → foreground {}, {} cells on, cell {}px",
            identicon.algorithm,
            identicon.digest_hex(),
            identicon.foreground,
            identicon.pattern.count_on(),
            identicon.geometry.cell
        );
        Ok(identicon)
    }

    /// Derive and paint. Returns a `size * size * 4` RGBA buffer.
    pub fn generate(&self, options: &Options) -> Result<Canvas, GenerateError> {
        Ok(self.inspect(options)?.render())
    }
}

/// [`Generator::generate`] with the RustCrypto digest provider.
pub fn generate(options: &Options) -> Result<Canvas, GenerateError> {
    Generator::new().generate(options)
}

/// [`Generator::inspect`] with the RustCrypto digest provider.
pub fn inspect(options: &Options) -> Result<Identicon, GenerateError> {
    Generator::new().inspect(options)
}
