//! RGBA canvas and rectangle fills.
//!
//! The canvas is a flat `size * size * 4` byte buffer, row-major, channel
//! order R, G, B, A, zero-filled on creation. Painting is the only mutation:
//! every written pixel is fully opaque, every untouched pixel stays `0,0,0,0`.
//! Writes outside the canvas are dropped, so callers never need to pre-clip.

use super::color::Rgb;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Owned square RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas of `size × size` pixels.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize * 4;
        Self {
            size,
            pixels: vec![0; len],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let idx = self.index(x, y);
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(px)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size as usize + x as usize) * 4
    }

    /// Fill `rect` with an opaque `color`.
    ///
    /// With `stroke = Some(w)` each axis is grown by `w` on both sides, but only
    /// when the grown span still starts inside the canvas and its end stays
    /// within `size - 2w`; otherwise that axis keeps its original span. Pixels
    /// at or beyond `size` on either axis are skipped.
    pub fn paint_rect(&mut self, rect: Rect, color: Rgb, stroke: Option<u32>) {
        let (x, width) = match stroke {
            Some(w) => expand_axis(rect.x, rect.width, w, self.size),
            None => (rect.x, rect.width),
        };
        let (y, height) = match stroke {
            Some(w) => expand_axis(rect.y, rect.height, w, self.size),
            None => (rect.y, rect.height),
        };

        let x_end = x.saturating_add(width).min(self.size);
        let y_end = y.saturating_add(height).min(self.size);
        if x >= x_end || y >= y_end {
            return;
        }

        let rgba = color.to_rgba();
        for row in y..y_end {
            let start = self.index(x, row);
            let end = self.index(x_end, row);
            for px in self.pixels[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Fill the whole canvas.
    pub fn fill(&mut self, color: Rgb) {
        let full = Rect {
            x: 0,
            y: 0,
            width: self.size,
            height: self.size,
        };
        self.paint_rect(full, color, None);
    }
}

/// Grow one axis of a rectangle by `stroke` on each side if it fits.
fn expand_axis(start: u32, len: u32, stroke: u32, size: u32) -> (u32, u32) {
    let limit = size.saturating_sub(stroke.saturating_mul(2));
    if start >= stroke && start.saturating_add(len) <= limit {
        (start - stroke, len + stroke * 2)
    } else {
        (start, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn painted(canvas: &Canvas) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..canvas.size() {
            for x in 0..canvas.size() {
                if canvas.pixel(x, y).unwrap()[3] != 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn new_canvas_is_transparent_black() {
        let canvas = Canvas::new(8);
        assert_eq!(canvas.pixels().len(), 8 * 8 * 4);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn paint_writes_opaque_rgba() {
        let mut canvas = Canvas::new(4);
        canvas.paint_rect(
            Rect {
                x: 1,
                y: 2,
                width: 2,
                height: 1,
            },
            Rgb::new(1, 2, 3),
            None,
        );
        assert_eq!(canvas.pixel(1, 2), Some([1, 2, 3, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([1, 2, 3, 255]));
        assert_eq!(canvas.pixel(3, 2), Some([0, 0, 0, 0]));
        assert_eq!(painted(&canvas), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn writes_past_the_edge_are_clipped() {
        let mut canvas = Canvas::new(4);
        canvas.paint_rect(
            Rect {
                x: 2,
                y: 3,
                width: 10,
                height: 10,
            },
            RED,
            None,
        );
        assert_eq!(painted(&canvas), vec![(2, 3), (3, 3)]);
        assert_eq!(canvas.pixels().len(), 4 * 4 * 4);
    }

    #[test]
    fn rect_entirely_outside_is_noop() {
        let mut canvas = Canvas::new(4);
        canvas.paint_rect(
            Rect {
                x: 4,
                y: 0,
                width: 3,
                height: 3,
            },
            RED,
            None,
        );
        assert!(painted(&canvas).is_empty());
    }

    #[test]
    fn stroke_grows_interior_rect() {
        let mut canvas = Canvas::new(10);
        canvas.paint_rect(
            Rect {
                x: 3,
                y: 3,
                width: 2,
                height: 2,
            },
            RED,
            Some(1),
        );
        let px = painted(&canvas);
        assert_eq!(px.len(), 16);
        assert_eq!(px.first(), Some(&(2, 2)));
        assert_eq!(px.last(), Some(&(5, 5)));
    }

    #[test]
    fn stroke_skips_axis_touching_the_start_edge() {
        let mut canvas = Canvas::new(10);
        canvas.paint_rect(
            Rect {
                x: 0,
                y: 4,
                width: 2,
                height: 2,
            },
            RED,
            Some(1),
        );
        // x stays 0..2, y grows to 3..7
        let px = painted(&canvas);
        assert_eq!(px.len(), 2 * 4);
        assert!(px.iter().all(|&(x, y)| x < 2 && (3..7).contains(&y)));
    }

    #[test]
    fn stroke_skips_axis_near_the_far_edge() {
        assert_eq!(expand_axis(7, 2, 1, 10), (7, 2));
        assert_eq!(expand_axis(6, 2, 1, 10), (5, 4));
    }

    #[test]
    fn oversized_stroke_never_underflows() {
        assert_eq!(expand_axis(3, 2, 50, 10), (3, 2));
        assert_eq!(expand_axis(0, 0, u32::MAX, 10), (0, 0));
    }

    #[test]
    fn later_paints_overwrite() {
        let mut canvas = Canvas::new(2);
        canvas.fill(Rgb::new(9, 9, 9));
        canvas.paint_rect(
            Rect {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            },
            RED,
            None,
        );
        assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(1, 1), Some([9, 9, 9, 255]));
    }
}
