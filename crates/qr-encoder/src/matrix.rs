//! The module grid: function patterns (finder, timing, alignment, format,
//! version) and the mutable data region they leave behind.

use crate::ecc_level::ErrorCorrectionLevel;
use crate::error::QrError;
use crate::format_info;
use crate::mask::Mask;
use crate::version::Version;
use crate::version_tables;

/// A single module's state while the symbol is being assembled.
///
/// `Unset` only ever appears transiently, during construction, between
/// drawing the function patterns and placing data codewords; a fully built
/// [`Matrix`] has no `Unset` cells left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    Unset,
    Light,
    Dark,
}

impl Cell {
    fn from_bool(dark: bool) -> Self {
        if dark {
            Cell::Dark
        } else {
            Cell::Light
        }
    }

    pub(crate) fn is_dark(self) -> bool {
        matches!(self, Cell::Dark)
    }
}

pub(crate) struct Matrix {
    pub(crate) size: i32,
    cells: Vec<Cell>,
    is_function: Vec<bool>,
}

impl Matrix {
    pub(crate) fn new(version: Version) -> Self {
        let size = version.size();
        let area = (size * size) as usize;
        let mut m = Matrix {
            size,
            cells: vec![Cell::Unset; area],
            is_function: vec![false; area],
        };
        m.draw_function_patterns(version);
        m
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!((0..self.size).contains(&x) && (0..self.size).contains(&y));
        (y * self.size + x) as usize
    }

    pub(crate) fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)].is_dark()
    }

    pub(crate) fn is_function(&self, x: i32, y: i32) -> bool {
        self.is_function[self.index(x, y)]
    }

    fn set_function(&mut self, x: i32, y: i32, dark: bool) {
        let i = self.index(x, y);
        self.cells[i] = Cell::from_bool(dark);
        self.is_function[i] = true;
    }

    /// Sets a data-region module. Panics (via debug assertion) if called on a
    /// function module; codeword placement must never overwrite one.
    pub(crate) fn set_data(&mut self, x: i32, y: i32, dark: bool) {
        let i = self.index(x, y);
        debug_assert!(!self.is_function[i], "attempted to overwrite a function module");
        self.cells[i] = Cell::from_bool(dark);
    }

    pub(crate) fn flip(&mut self, x: i32, y: i32) {
        let i = self.index(x, y);
        self.cells[i] = Cell::from_bool(!self.cells[i].is_dark());
    }

    fn draw_function_patterns(&mut self, version: Version) {
        for i in 0..self.size {
            self.set_function(6, i, i % 2 == 0);
            self.set_function(i, 6, i % 2 == 0);
        }

        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(self.size - 4, 3);
        self.draw_finder_pattern(3, self.size - 4);

        let positions = version_tables::alignment_pattern_positions(version);
        let num_align = positions.len();
        for (i, &cx) in positions.iter().enumerate() {
            for (j, &cy) in positions.iter().enumerate() {
                // Skip the three corners that overlap the finder patterns.
                let corner = (i == 0 && j == 0)
                    || (i == 0 && j == num_align - 1)
                    || (i == num_align - 1 && j == 0);
                if !corner {
                    self.draw_alignment_pattern(cx, cy);
                }
            }
        }

        self.draw_format_bits(ErrorCorrectionLevel::Low, Mask::new(0).expect("0 is valid"));
        self.draw_version(version);
    }

    fn draw_finder_pattern(&mut self, cx: i32, cy: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let x = cx + dx;
                let y = cy + dy;
                if (0..self.size).contains(&x) && (0..self.size).contains(&y) {
                    let dist = dx.abs().max(dy.abs());
                    let dark = dist != 2 && dist != 4;
                    self.set_function(x, y, dark);
                }
            }
        }
    }

    fn draw_alignment_pattern(&mut self, cx: i32, cy: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                let dark = dx.abs().max(dy.abs()) != 1;
                self.set_function(cx + dx, cy + dy, dark);
            }
        }
    }

    /// Stamps the 15-bit format information (twice, redundantly) for the
    /// given error correction level and mask. Called once with placeholder
    /// values during construction to reserve the bit positions as function
    /// modules, and again with the real, selected values once masking has run.
    pub(crate) fn draw_format_bits(&mut self, ecl: ErrorCorrectionLevel, mask: Mask) {
        let bits = format_info::format_info_bits(ecl, mask);
        let get_bit = |i: u32| (bits >> i) & 1 != 0;

        for i in 0..6 {
            self.set_function(8, i, get_bit(i));
        }
        self.set_function(8, 7, get_bit(6));
        self.set_function(8, 8, get_bit(7));
        self.set_function(7, 8, get_bit(8));
        for i in 9..15 {
            self.set_function(14 - i, 8, get_bit(i));
        }

        for i in 0..8 {
            self.set_function(self.size - 1 - i, 8, get_bit(i));
        }
        for i in 8..15 {
            self.set_function(8, self.size - 15 + i, get_bit(i));
        }
        self.set_function(8, self.size - 8, true);
    }

    fn draw_version(&mut self, version: Version) {
        if version.value() < 7 {
            return;
        }
        let bits = format_info::version_info_bits(version);
        for i in 0..18 {
            let bit = (bits >> i) & 1 != 0;
            let a = self.size - 11 + i % 3;
            let b = i / 3;
            self.set_function(a, b, bit);
            self.set_function(b, a, bit);
        }
    }
}

/// Validates the two parameters a rendering layer supplies: the quiet-zone
/// width and the number of pixels (or other output units) each module is
/// scaled to. Out-of-range values are caller error, the same as the
/// original Python implementation's `ValueError` on a negative `box_size` or
/// `border`.
pub(crate) fn validate_render_params(box_size: i32, border: i32) -> Result<(), QrError> {
    if border < 0 {
        Err(QrError::InvalidInput("border must not be negative"))
    } else if box_size < 1 {
        Err(QrError::InvalidInput("box_size must be at least 1"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn timing_pattern_alternates_starting_dark() {
        let m = Matrix::new(Version::new(1).unwrap());
        assert!(m.get(6, 0));
        assert!(!m.get(6, 1));
    }

    #[test]
    fn dark_module_is_always_set() {
        let version = Version::new(1).unwrap();
        let m = Matrix::new(version);
        assert!(m.get(8, m.size - 8));
    }

    #[test]
    fn version_one_has_no_version_info_region() {
        // Below version 7 the bottom-left/top-right 6x3 blocks stay part of the data region.
        let m = Matrix::new(Version::new(1).unwrap());
        assert!(!m.is_function(0, m.size - 9));
    }

    #[test]
    fn reject_negative_quiet_zone() {
        assert!(validate_render_params(1, -1).is_err());
    }

    #[test]
    fn reject_non_positive_box_size() {
        assert!(validate_render_params(0, 4).is_err());
    }
}
