//! Batch generation.
//!
//! Reads a list of inputs, one per line (`text` or `text<TAB>salt`), and writes
//! one PNG per distinct input into an output directory, plus a `manifest.json`
//! describing what was generated.
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── manifest.json
//! ├── ad2b41613c8702b5372bbdc9a8107040.png   # named by digest hex
//! └── 43d9476ceb16b7b59042be2cdff9a061.png
//! ```
//!
//! ## Parallel Processing
//!
//! Every identicon is independent, so entries are generated in parallel using
//! [rayon](https://docs.rs/rayon). The manifest keeps input order.

use crate::digest::DigestProvider;
use crate::encoding::{EncodeError, EncoderBackend, write_png};
use crate::identicon::color::Rgb;
use crate::identicon::{GenerateError, Generator};
use crate::options::{HashAlgorithm, Options};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Generation failed for {text:?}: {source}")]
    Generate {
        text: String,
        #[source]
        source: GenerateError,
    },
    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),
}

/// One input line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchEntry {
    pub text: String,
    pub salt: String,
}

/// Parse a batch list. Blank lines are skipped, a single tab separates text
/// from salt, and repeated inputs are kept only once.
pub fn parse_list(content: &str) -> Vec<BatchEntry> {
    let mut seen = HashSet::new();
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('\t') {
            Some((text, salt)) => BatchEntry {
                text: text.to_string(),
                salt: salt.to_string(),
            },
            None => BatchEntry {
                text: line.to_string(),
                salt: String::new(),
            },
        })
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// What happened to one entry, sent to the progress printer.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEvent {
    /// 0-based position in the input list.
    pub index: usize,
    pub text: String,
    pub file: String,
    pub foreground: Rgb,
}

/// `manifest.json` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub salt: String,
    /// File name relative to the output directory.
    pub file: String,
    /// `#rrggbb`
    pub foreground: String,
}

/// `manifest.json` contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchManifest {
    pub algorithm: HashAlgorithm,
    pub size: u32,
    pub entries: Vec<ManifestEntry>,
}

/// Generate every entry into `output_dir` and write the manifest.
///
/// `base` supplies everything except text and salt, and its limits decide
/// truncation. Entries that are equal once truncated are generated once. The
/// first failure aborts the batch; files already written stay on disk.
pub fn run_batch<D: DigestProvider>(
    generator: &Generator<D>,
    backend: &impl EncoderBackend,
    base: &Options,
    entries: &[BatchEntry],
    output_dir: &Path,
    events: Option<Sender<BatchEvent>>,
) -> Result<BatchManifest, BatchError> {
    std::fs::create_dir_all(output_dir)?;

    // Dedupe after truncation: distinct long lines can collapse to one input.
    let mut seen = HashSet::new();
    let jobs: Vec<Options> = entries
        .iter()
        .map(|entry| base.clone().with_text(&entry.text).with_salt(&entry.salt))
        .filter(|options| seen.insert((options.text().to_string(), options.salt().to_string())))
        .collect();
    if jobs.len() < entries.len() {
        log::info!(
            "skipping {} entries identical to another after truncation",
            entries.len() - jobs.len()
        );
    }

    let manifest_entries = jobs
        .par_iter()
        .enumerate()
        .map(|(index, options)| {
            let identicon = generator
                .inspect(options)
                .map_err(|source| BatchError::Generate {
                    text: options.text().to_string(),
                    source,
                })?;

            let file = format!("{}.png", identicon.digest_hex());
            write_png(backend, &identicon.render(), &output_dir.join(&file))?;

            if let Some(tx) = &events {
                tx.send(BatchEvent {
                    index,
                    text: options.text().to_string(),
                    file: file.clone(),
                    foreground: identicon.foreground,
                })
                .ok();
            }

            Ok(ManifestEntry {
                text: options.text().to_string(),
                salt: options.salt().to_string(),
                file,
                foreground: identicon.foreground.to_string(),
            })
        })
        .collect::<Result<Vec<_>, BatchError>>()?;

    let manifest = BatchManifest {
        algorithm: base.hash_algorithm,
        size: base.size,
        entries: manifest_entries,
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(manifest_path(output_dir), json)?;
    Ok(manifest)
}

pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILE)
}
