//! # Identicon
//!
//! Deterministic avatars from strings. A string (plus an optional salt) is
//! hashed, and the digest decides the color and the on/off state of a
//! horizontally symmetric 5×5 grid, which is painted into an RGBA buffer and
//! written out as a PNG.
//!
//! ```
//! use identicon::{Options, generate};
//!
//! let canvas = generate(&Options::new("alice@example.com")).unwrap();
//! assert_eq!(canvas.pixels().len(), 64 * 64 * 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Options ─→ DigestProvider ─→ digest ─┬─→ color::foreground ─┐
//!                                      └─→ Pattern ───────────┴─→ Canvas ─→ EncoderBackend ─→ .png
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`options`] | Generation options, hash algorithm selector, input limits |
//! | [`digest`] | [`DigestProvider`](digest::DigestProvider) trait and RustCrypto implementation |
//! | [`identicon`] | Folding, color, pattern, geometry and rasterization; the `generate` entry point |
//! | [`encoding`] | [`EncoderBackend`](encoding::EncoderBackend) trait and the `image`-backed PNG encoder |
//! | [`config`] | `config.toml` loading and validation for the command line |
//! | [`args`] | Resolution of the `[ALGORITHM] TEXT [SALT] OUTPUT` positionals |
//! | [`batch`] | Parallel generation of many identicons with a JSON manifest |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `env_logger` setup for the binary |
//!
//! # Design Decisions
//!
//! ## Bit-Compatible Pictures
//!
//! The folding, HSL conversion, mirroring and stroke rules reproduce the
//! established identicon format, so an input produces the same picture here as
//! it always has. This includes its quirks: the hue is taken from the last
//! seven digest bytes and is not bounded to `[0, 1)`, and the palette only ever
//! uses the two extreme values of a sextant.
//!
//! ## Injected Backends
//!
//! Hashing and encoding sit behind traits chosen when a
//! [`Generator`](identicon::Generator) or backend is constructed. Tests swap in
//! fixed digests and recording encoders; nothing is selected at compile time.
//!
//! ## Pure Generation
//!
//! A generation call owns its digest and its canvas and touches nothing else.
//! Concurrent calls need no coordination, which is what lets the batch mode
//! hand entries straight to rayon.

pub mod args;
pub mod batch;
pub mod config;
pub mod digest;
pub mod encoding;
pub mod identicon;
pub mod logging;
pub mod options;
pub mod output;

pub use identicon::raster::Canvas;
pub use identicon::{GenerateError, Generator, Identicon, generate, inspect};
pub use options::{HashAlgorithm, Limits, Options};
