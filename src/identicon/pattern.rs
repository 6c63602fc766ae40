//! The 5×5 on/off grid.
//!
//! Fifteen digest bytes decide fifteen cells: an even byte turns its cell on.
//! The first five fill the center column top to bottom, the next five fill
//! columns 1 and 3, the last five fill columns 0 and 4, so the grid is always
//! mirror-symmetric around the center column.
//!
//! ```text
//!  index → cells
//!  0..5   (row i,    col 2)
//!  5..10  (row i-5,  cols 1 & 3)
//!  10..15 (row i-10, cols 0 & 4)
//! ```

use super::fold::fold;
use std::fmt;

/// Side of the grid, in cells.
pub const GRID: usize = 5;
/// Digest bytes consumed by the pattern.
pub const PATTERN_BYTES: usize = 15;

/// Horizontally symmetric 5×5 grid of on/off cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    bits: [bool; PATTERN_BYTES],
}

/// Row and columns driven by pattern bit `index`.
fn placement(index: usize) -> (usize, &'static [usize]) {
    match index {
        0..5 => (index, &[2]),
        5..10 => (index - 5, &[1, 3]),
        _ => (index - 10, &[0, 4]),
    }
}

impl Pattern {
    /// Derive the pattern from the first [`PATTERN_BYTES`] digest bytes.
    ///
    /// Missing bytes (a digest shorter than the pattern) leave their cells off;
    /// the generator rejects such digests before getting here.
    pub fn from_digest(digest: &[u8]) -> Self {
        let mut bits = [false; PATTERN_BYTES];
        for (bit, byte) in bits.iter_mut().zip(digest.chunks(1)) {
            *bit = fold(byte) % 2 == 0;
        }
        Self { bits }
    }

    /// The full grid, indexed `[row][col]`.
    pub fn cells(&self) -> [[bool; GRID]; GRID] {
        let mut cells = [[false; GRID]; GRID];
        for (row, col) in self.painted_cells() {
            cells[row][col] = true;
        }
        cells
    }

    /// `(row, col)` of every "on" cell, in paint order.
    pub fn painted_cells(&self) -> Vec<(usize, usize)> {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, on)| *on)
            .flat_map(|(index, _)| {
                let (row, cols) = placement(index);
                cols.iter().map(move |&col| (row, col))
            })
            .collect()
    }

    /// Number of cells switched on.
    pub fn count_on(&self) -> usize {
        self.painted_cells().len()
    }
}

impl fmt::Display for Pattern {
    /// One line per row, `#` for on and `.` for off.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &on in row {
                f.write_str(if on { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{DigestProvider, RustCryptoDigest};
    use crate::options::HashAlgorithm;

    fn md5(text: &str) -> Vec<u8> {
        RustCryptoDigest::new().digest(text.as_bytes(), None, HashAlgorithm::Md5)
    }

    #[test]
    fn even_bytes_switch_cells_on() {
        let mut digest = [1u8; 16];
        digest[0] = 0x00;
        digest[7] = 0xfe;
        let pattern = Pattern::from_digest(&digest);
        assert_eq!(pattern.painted_cells(), vec![(0, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn all_odd_digest_is_blank() {
        let pattern = Pattern::from_digest(&[0x11; 16]);
        assert_eq!(pattern.count_on(), 0);
        assert_eq!(pattern.to_string(), ["....."; 5].join("\n"));
    }

    #[test]
    fn all_even_digest_is_full() {
        let pattern = Pattern::from_digest(&[0x22; 16]);
        assert_eq!(pattern.count_on(), GRID * GRID);
    }

    #[test]
    fn only_first_fifteen_bytes_matter() {
        let mut a = [0x11u8; 64];
        let b = a;
        a[15..].fill(0x00);
        assert_eq!(Pattern::from_digest(&a), Pattern::from_digest(&b));
    }

    #[test]
    fn known_pattern() {
        let pattern = Pattern::from_digest(&md5("identicon"));
        assert_eq!(pattern.to_string(), ".....\n.#.#.\n#...#\n#...#\n#.#.#");
    }

    #[test]
    fn grid_is_mirror_symmetric() {
        for text in ["a", "b", "identicon", "alice@example.com", "", "🦀"] {
            let cells = Pattern::from_digest(&md5(text)).cells();
            for row in cells {
                assert_eq!(row[0], row[4], "text {text:?}");
                assert_eq!(row[1], row[3], "text {text:?}");
            }
        }
    }

    #[test]
    fn paint_order_walks_center_then_outwards() {
        let pattern = Pattern::from_digest(&[0x22; 16]);
        let cells = pattern.painted_cells();
        assert_eq!(cells[0], (0, 2));
        assert_eq!(cells[4], (4, 2));
        assert_eq!(&cells[5..7], &[(0, 1), (0, 3)]);
        assert_eq!(&cells[15..17], &[(0, 0), (0, 4)]);
    }
}
