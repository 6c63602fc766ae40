//! Positional argument resolution for `[ALGORITHM] TEXT [SALT] [OUTPUT]`.
//!
//! The command line keeps the historical shape `prog [algorithm] text [salt]
//! output.png`, where both the algorithm and the salt are optional. clap hands
//! over the raw positionals; this module decides which is which.
//!
//! | Count | Meaning |
//! |---|---|
//! | 1 | `TEXT` |
//! | 2 | `ALGORITHM TEXT` |
//! | 3 | `ALGORITHM TEXT SALT` |
//!
//! An unknown `ALGORITHM` token falls back to MD5 with a warning; it is never
//! reinterpreted as text. A salt therefore always needs an explicit algorithm.
//!
//! When an output path is expected it is always the last positional and is
//! split off before applying the table.

use crate::options::HashAlgorithm;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("expected {expected} arguments, got {actual}")]
    Count { expected: &'static str, actual: usize },
}

/// Resolved positionals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positionals {
    /// `None` when no algorithm token was given.
    pub algorithm: Option<HashAlgorithm>,
    pub text: String,
    pub salt: String,
}

/// Resolve `[ALGORITHM] TEXT [SALT] OUTPUT`.
pub fn resolve_with_output(args: &[String]) -> Result<(Positionals, PathBuf), ArgsError> {
    match args.split_last() {
        Some((output, rest)) if (1..=3).contains(&rest.len()) => {
            Ok((resolve(rest)?, PathBuf::from(output)))
        }
        _ => Err(ArgsError::Count {
            expected: "2 to 4",
            actual: args.len(),
        }),
    }
}

/// Resolve `[ALGORITHM] TEXT [SALT]`.
pub fn resolve(args: &[String]) -> Result<Positionals, ArgsError> {
    let (algorithm, text, salt) = match args {
        [text] => (None, text, None),
        [alg, text] => (Some(algorithm_or_md5(alg)), text, None),
        [alg, text, salt] => (Some(algorithm_or_md5(alg)), text, Some(salt)),
        _ => {
            return Err(ArgsError::Count {
                expected: "1 to 3",
                actual: args.len(),
            });
        }
    };
    Ok(Positionals {
        algorithm,
        text: text.clone(),
        salt: salt.cloned().unwrap_or_default(),
    })
}

fn algorithm_or_md5(token: &str) -> HashAlgorithm {
    token.parse().unwrap_or_else(|err| {
        log::warn!("{err}, using md5");
        HashAlgorithm::Md5
    })
}
