//! The top-level encoder: turns text or pre-built segments into a finished,
//! masked [`QrCode`] symbol.

use log::debug;

use crate::bit_buffer::BitBuffer;
use crate::ecc_level::ErrorCorrectionLevel;
use crate::error::QrError;
use crate::mask::Mask;
use crate::mask_selector;
use crate::matrix::{self, Matrix};
use crate::placer;
use crate::rs_codec;
use crate::segment::Segment;
use crate::version::Version;
use crate::version_tables;

/// A finished QR Code Model 2 symbol: a fixed-size grid of dark/light
/// modules, ready to be rendered by a caller-supplied drawing layer.
///
/// Construction always picks the smallest version (within the requested
/// range) that fits the data at the requested error correction level, unless
/// a specific version is pinned via [`QrCode::encode_segments_advanced`].
pub struct QrCode {
    version: Version,
    ecl: ErrorCorrectionLevel,
    mask: Mask,
    matrix: Matrix,
}

impl QrCode {
    /// Encodes `text`, auto-selecting mode, version, and mask.
    ///
    /// Mode selection only ever picks one mode for the entire string (see
    /// [`Segment::make_segments`]); mixed-mode optimization is out of scope.
    pub fn encode_text(text: &str, ecl: ErrorCorrectionLevel) -> Result<Self, QrError> {
        let segs = Segment::make_segments(text);
        Self::encode_segments(&segs, ecl)
    }

    /// Encodes raw bytes in byte mode.
    pub fn encode_binary(data: &[u8], ecl: ErrorCorrectionLevel) -> Result<Self, QrError> {
        let segs = vec![Segment::make_bytes(data)];
        Self::encode_segments(&segs, ecl)
    }

    /// Encodes a caller-assembled segment list, trying versions
    /// `1..=40` and boosting the error correction level when it fits for
    /// free at the chosen version.
    pub fn encode_segments(segs: &[Segment], ecl: ErrorCorrectionLevel) -> Result<Self, QrError> {
        Self::encode_segments_advanced(segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes a segment list with full control over the version range, a
    /// pinned mask (or `None` for auto-selection), and whether to opportunistically
    /// boost the error correction level.
    ///
    /// Returns [`QrError::DataTooLong`] if no version in `[min_version,
    /// max_version]` has enough capacity.
    pub fn encode_segments_advanced(
        segs: &[Segment],
        mut ecl: ErrorCorrectionLevel,
        min_version: Version,
        max_version: Version,
        mask: Option<Mask>,
        boost_ecl: bool,
    ) -> Result<Self, QrError> {
        let version = Self::fit_version(segs, ecl, min_version, max_version)?;

        if boost_ecl {
            for candidate in [
                ErrorCorrectionLevel::Medium,
                ErrorCorrectionLevel::Quartile,
                ErrorCorrectionLevel::High,
            ] {
                if candidate <= ecl {
                    continue;
                }
                let needed = Segment::total_bits(segs, version)
                    .ok_or(QrError::InternalInvariant("segment length overflowed its field"))?;
                if needed <= version_tables::bit_capacity(version, candidate) {
                    ecl = candidate;
                }
            }
        }

        let data = Self::assemble_bitstream(segs, version, ecl)?;
        let codewords = rs_codec::encode_and_interleave(&data, version, ecl);

        let mut matrix = Matrix::new(version);
        placer::draw_codewords(&mut matrix, &codewords);

        let chosen_mask = match mask {
            Some(m) => {
                placer::apply_mask(&mut matrix, m);
                matrix.draw_format_bits(ecl, m);
                m
            }
            None => mask_selector::select_and_apply(&mut matrix, ecl),
        };

        debug!(
            "encoded {} segment(s) at version {} / ecl {:?} / mask {}",
            segs.len(),
            version.value(),
            ecl,
            chosen_mask.value()
        );

        Ok(QrCode {
            version,
            ecl,
            mask: chosen_mask,
            matrix,
        })
    }

    /// Finds the smallest version in `[min_version, max_version]` whose
    /// capacity at `ecl` holds `segs`.
    fn fit_version(
        segs: &[Segment],
        ecl: ErrorCorrectionLevel,
        min_version: Version,
        max_version: Version,
    ) -> Result<Version, QrError> {
        let mut version = min_version;
        loop {
            let capacity = version_tables::bit_capacity(version, ecl);
            if let Some(needed) = Segment::total_bits(segs, version) {
                if needed <= capacity {
                    return Ok(version);
                }
            }
            if version == max_version {
                let bits_needed = Segment::total_bits(segs, max_version).unwrap_or(usize::MAX);
                return Err(QrError::DataTooLong {
                    bits_needed,
                    bits_available: version_tables::bit_capacity(max_version, ecl),
                });
            }
            version = Version::new(version.value() + 1).expect("max_version bounds the loop");
        }
    }

    /// Concatenates every segment's header and payload, appends a terminator
    /// (up to 4 bits), pads to a byte boundary, then pads with alternating
    /// `0xEC`/`0x11` bytes until the version's data capacity is filled.
    fn assemble_bitstream(
        segs: &[Segment],
        version: Version,
        ecl: ErrorCorrectionLevel,
    ) -> Result<Vec<u8>, QrError> {
        let capacity_bits = version_tables::bit_capacity(version, ecl);
        let mut bits = BitBuffer::new();
        for seg in segs {
            bits.put(u32::from(seg.mode().indicator_bits()), 4);
            bits.put(seg.char_count() as u32, seg.mode().char_count_bits(version));
            for i in 0..seg.bits().len() {
                bits.push(seg.bits().get(i));
            }
        }
        debug_assert!(bits.len() <= capacity_bits, "fit_version should have rejected this");

        let terminator_len = (capacity_bits - bits.len()).min(4);
        bits.put(0, terminator_len as u8);
        while bits.len() % 8 != 0 {
            bits.push(false);
        }

        let mut pad_alternator = [0xECu8, 0x11u8].into_iter().cycle();
        while bits.len() < capacity_bits {
            bits.put(u32::from(pad_alternator.next().unwrap()), 8);
        }

        Ok(bits.bytes().to_vec())
    }

    /// The version of this symbol.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The error correction level actually used (may be higher than
    /// requested, if it was boosted for free).
    pub fn error_correction_level(&self) -> ErrorCorrectionLevel {
        self.ecl
    }

    /// The mask pattern selected for this symbol.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// The symbol's side length in modules, not including any quiet zone.
    pub fn size(&self) -> i32 {
        self.matrix.size
    }

    /// Whether the module at `(x, y)` is dark. `(0, 0)` is the top-left
    /// corner; out-of-range coordinates are always light.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        if (0..self.matrix.size).contains(&x) && (0..self.matrix.size).contains(&y) {
            self.matrix.get(x, y)
        } else {
            false
        }
    }

    /// Renders the symbol as a rectangular grid of booleans (`true` = dark),
    /// surrounded by `border` modules of light quiet zone on every side.
    ///
    /// Returns [`QrError::InvalidInput`] if `border` is negative.
    pub fn to_grid(&self, border: i32) -> Result<Vec<Vec<bool>>, QrError> {
        matrix::validate_render_params(1, border)?;
        let size = self.matrix.size;
        let total = size + border * 2;
        let grid = (0..total)
            .map(|y| {
                (0..total)
                    .map(|x| self.get_module(x - border, y - border))
                    .collect()
            })
            .collect();
        Ok(grid)
    }

    /// Renders the symbol the way a pixel-based drawing layer would consume
    /// it: each module becomes a `box_size x box_size` block of uniform
    /// color, with `border` modules of quiet zone (scaled the same way)
    /// added on every side before the scaling is applied — matching the
    /// original implementation's border-by-padding-rows approach rather than
    /// reindexing coordinates.
    ///
    /// Returns [`QrError::InvalidInput`] if `box_size` is less than 1 or
    /// `border` is negative.
    pub fn to_image_grid(&self, box_size: i32, border: i32) -> Result<Vec<Vec<bool>>, QrError> {
        matrix::validate_render_params(box_size, border)?;
        let modules = self.to_grid(border)?;
        let grid = modules
            .iter()
            .flat_map(|row| std::iter::repeat(row).take(box_size as usize))
            .map(|row| {
                row.iter()
                    .flat_map(|&dark| std::iter::repeat(dark).take(box_size as usize))
                    .collect()
            })
            .collect();
        Ok(grid)
    }
}
