//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! alice → alice.png
//!     md5 ad2b41613c8702b5372bbdc9a8107040
//!     Foreground: #8c8cd8, 9 cells, 256px
//! ```
//!
//! ## Inspect
//!
//! ```text
//! Digest:     md5 ad2b41613c8702b5372bbdc9a8107040
//! Foreground: #8c8cd8
//! Layout:     64px, margin 5px, cell 10px, offset 7px
//! Pattern:
//!     .....
//!     .#.#.
//!     #...#
//!     #...#
//!     #.#.#
//! ```
//!
//! ## Batch
//!
//! ```text
//! 001 alice → ad2b41613c8702b5372bbdc9a8107040.png (#8c8cd8)
//! 002 bob → 43d9476ceb16b7b59042be2cdff9a061.png (#d8d88c)
//!
//! Generated 2 identicons → out/manifest.json
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure and do no I/O.

use crate::batch::{BatchEvent, BatchManifest};
use crate::identicon::Identicon;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Shorten long inputs for display; the full text lives in the manifest.
fn display_text(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_CHARS - 1).collect();
        format!("{head}…")
    }
}

pub fn format_generate_output(text: &str, identicon: &Identicon, output: &Path) -> Vec<String> {
    vec![
        format!("{} → {}", display_text(text), output.display()),
        format!(
            "{}{} {}",
            indent(1),
            identicon.algorithm,
            identicon.digest_hex()
        ),
        format!(
            "{}Foreground: {}, {} cells, {}px",
            indent(1),
            identicon.foreground,
            identicon.pattern.count_on(),
            identicon.geometry.size
        ),
    ]
}

pub fn print_generate_output(text: &str, identicon: &Identicon, output: &Path) {
    for line in format_generate_output(text, identicon, output) {
        println!("{}", line);
    }
}

pub fn format_inspect_output(identicon: &Identicon) -> Vec<String> {
    let g = &identicon.geometry;
    let mut lines = vec![
        format!(
            "Digest:     {} {}",
            identicon.algorithm,
            identicon.digest_hex()
        ),
        format!("Foreground: {}", identicon.foreground),
        format!(
            "Layout:     {}px, margin {}px, cell {}px, offset {}px",
            g.size, g.base_margin, g.cell, g.outer_margin
        ),
        "Pattern:".to_string(),
    ];
    lines.extend(
        identicon
            .pattern
            .to_string()
            .lines()
            .map(|row| format!("{}{}", indent(1), row)),
    );
    lines
}

pub fn print_inspect_output(identicon: &Identicon) {
    for line in format_inspect_output(identicon) {
        println!("{}", line);
    }
}

/// One progress line per generated entry.
pub fn format_batch_event(event: &BatchEvent) -> String {
    format!(
        "{} {} → {} ({})",
        format_index(event.index + 1),
        display_text(&event.text),
        event.file,
        event.foreground
    )
}

pub fn format_batch_summary(manifest: &BatchManifest, manifest_path: &Path) -> Vec<String> {
    let noun = if manifest.entries.len() == 1 {
        "identicon"
    } else {
        "identicons"
    };
    vec![
        String::new(),
        format!(
            "Generated {} {} → {}",
            manifest.entries.len(),
            noun,
            manifest_path.display()
        ),
    ]
}

pub fn print_batch_summary(manifest: &BatchManifest, manifest_path: &Path) {
    for line in format_batch_summary(manifest, manifest_path) {
        println!("{}", line);
    }
}
