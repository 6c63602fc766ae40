//! Generation options.
//!
//! [`Options`] is the single input of a generation call. It is built from
//! defaults and then overridden field by field, either directly or through the
//! chained `with_*` setters:
//!
//! ```
//! use identicon::options::{HashAlgorithm, Options};
//!
//! let options = Options::new("alice@example.com")
//!     .with_size(128)
//!     .with_hash_algorithm(HashAlgorithm::Sha256);
//! assert_eq!(options.text(), "alice@example.com");
//! ```
//!
//! ## Input limits
//!
//! `text` and `salt` are bounded by [`Limits`]. Oversized values keep their
//! first `max` bytes, backing off to the previous UTF-8 character boundary.
//! The length is clamped, never taken modulo the limit.

use crate::identicon::GenerateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hash function used to derive the identicon from its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Lowercase name as accepted on the command line and in `config.toml`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hash algorithm '{0}' (expected md5, sha1, sha256 or sha512)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for HashAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Upper bounds applied to caller-supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum `text` length in bytes.
    pub max_text_len: usize,
    /// Maximum `salt` length in bytes.
    pub max_salt_len: usize,
    /// Largest accepted image side, in pixels.
    pub max_size: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_text_len: 4096,
            max_salt_len: 1024,
            max_size: 4096,
        }
    }
}

/// Everything a generation call needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    text: String,
    salt: String,
    /// Side length of the square output, in pixels.
    pub size: u32,
    /// Fraction of `size` reserved as margin on each side, in `[0, 0.5)`.
    pub margin: f64,
    /// Leave background pixels fully transparent instead of painting them gray.
    pub transparent: bool,
    /// Grow foreground cells by `stroke_size` pixels on every side.
    pub stroke: bool,
    pub stroke_size: u32,
    pub hash_algorithm: HashAlgorithm,
    limits: Limits,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            text: String::new(),
            salt: String::new(),
            size: 64,
            margin: 0.08,
            transparent: true,
            stroke: true,
            stroke_size: 1,
            hash_algorithm: HashAlgorithm::Md5,
            limits: Limits::default(),
        }
    }
}

impl Options {
    /// Default options for the given input text.
    pub fn new(text: &str) -> Self {
        let mut options = Self::default();
        options.set_text(text);
        options
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Replace the input text, truncating it to `limits.max_text_len` bytes.
    pub fn set_text(&mut self, text: &str) {
        self.text = truncate_to(text, self.limits.max_text_len, "text");
    }

    /// Replace the salt, truncating it to `limits.max_salt_len` bytes.
    /// An empty salt means "no salt".
    pub fn set_salt(&mut self, salt: &str) {
        self.salt = truncate_to(salt, self.limits.max_salt_len, "salt");
    }

    /// Replace the limits. Text and salt already set are re-truncated.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
        let text = std::mem::take(&mut self.text);
        let salt = std::mem::take(&mut self.salt);
        self.set_text(&text);
        self.set_salt(&salt);
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_salt(mut self, salt: &str) -> Self {
        self.set_salt(salt);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.set_limits(limits);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_stroke(mut self, stroke: bool) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_stroke_size(mut self, stroke_size: u32) -> Self {
        self.stroke_size = stroke_size;
        self
    }

    pub fn with_hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = hash_algorithm;
        self
    }

    /// Salt bytes to append to the message, or `None` when the salt is empty.
    pub fn salt_bytes(&self) -> Option<&[u8]> {
        (!self.salt.is_empty()).then_some(self.salt.as_bytes())
    }

    /// Stroke width to apply to foreground cells, if stroking is enabled.
    pub fn stroke_width(&self) -> Option<u32> {
        self.stroke.then_some(self.stroke_size)
    }

    /// Check that size and margin describe a drawable canvas.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.size == 0 {
            return Err(GenerateError::InvalidOptions(
                "size must be greater than zero".into(),
            ));
        }
        if self.size > self.limits.max_size {
            return Err(GenerateError::InvalidOptions(format!(
                "size {} exceeds the maximum of {}",
                self.size, self.limits.max_size
            )));
        }
        if !self.margin.is_finite() || !(0.0..0.5).contains(&self.margin) {
            return Err(GenerateError::InvalidOptions(format!(
                "margin must be in [0, 0.5), got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

fn truncate_to(value: &str, max: usize, field: &str) -> String {
    if value.len() <= max {
        return value.to_string();
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    log::warn!(
        "{field} is {} bytes, truncated to {end} (limit {max})",
        value.len()
    );
    value[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_defaults() {
        let options = Options::default();
        assert_eq!(options.size, 64);
        assert_eq!(options.margin, 0.08);
        assert!(options.transparent);
        assert!(options.stroke);
        assert_eq!(options.stroke_size, 1);
        assert_eq!(options.hash_algorithm, HashAlgorithm::Md5);
        assert_eq!(options.text(), "");
        assert_eq!(options.salt(), "");
        assert!(options.salt_bytes().is_none());
    }

    #[test]
    fn long_text_is_truncated_not_wrapped() {
        let limits = Limits {
            max_text_len: 8,
            ..Limits::default()
        };
        let options = Options::default()
            .with_limits(limits)
            .with_text("0123456789abcdef-and-more");
        assert_eq!(options.text(), "01234567");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let limits = Limits {
            max_salt_len: 4,
            ..Limits::default()
        };
        // "é" is two bytes; byte 4 falls inside the third "é".
        let options = Options::default().with_limits(limits).with_salt("ééé");
        assert_eq!(options.salt(), "éé");
    }

    #[test]
    fn shrinking_limits_retruncates_existing_values() {
        let options = Options::new("abcdef").with_limits(Limits {
            max_text_len: 3,
            ..Limits::default()
        });
        assert_eq!(options.text(), "abc");
    }

    #[test]
    fn text_at_exact_limit_is_kept() {
        let limits = Limits {
            max_text_len: 4,
            ..Limits::default()
        };
        let options = Options::default().with_limits(limits).with_text("abcd");
        assert_eq!(options.text(), "abcd");
    }

    #[test]
    fn stroke_width_follows_flag() {
        let options = Options::default().with_stroke_size(3);
        assert_eq!(options.stroke_width(), Some(3));
        assert_eq!(options.with_stroke(false).stroke_width(), None);
    }

    #[test]
    fn validate_rejects_zero_size() {
        let err = Options::default().with_size(0).validate().unwrap_err();
        assert!(matches!(err, GenerateError::InvalidOptions(_)));
    }

    #[test]
    fn validate_rejects_oversized_canvas() {
        let options = Options::default().with_size(Limits::default().max_size + 1);
        assert!(options.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_margins() {
        for margin in [-0.1, 0.5, 0.75, f64::NAN, f64::INFINITY] {
            let options = Options::default().with_margin(margin);
            assert!(options.validate().is_err(), "margin {margin} accepted");
        }
        assert!(Options::default().with_margin(0.0).validate().is_ok());
        assert!(Options::default().with_margin(0.49).validate().is_ok());
    }

    #[test]
    fn algorithm_names_round_trip() {
        for alg in HashAlgorithm::ALL {
            assert_eq!(alg.name().parse::<HashAlgorithm>().unwrap(), alg);
        }
        assert_eq!("SHA256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert!("crc32".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn unknown_algorithm_message_lists_choices() {
        let err = "sha265".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("sha265".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown hash algorithm 'sha265' (expected md5, sha1, sha256 or sha512)"
        );
    }

    #[test]
    fn algorithm_deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            hash: HashAlgorithm,
        }
        let parsed: Wrapper = toml::from_str(r#"hash = "sha512""#).unwrap();
        assert_eq!(parsed.hash, HashAlgorithm::Sha512);
    }
}
