//! Static, per-version layout tables: error-correction block shape, data
//! capacity, and alignment-pattern positions.
//!
//! `ECC_CODEWORDS_PER_BLOCK` and `NUM_ERROR_CORRECTION_BLOCKS` jointly encode
//! the same information as the standard's per-version RS block table (counts,
//! total codewords, and data codewords per block): the number of blocks and
//! the ECC length per block determine the data/ECC split of each block once
//! the total raw codeword count for the version is known, via
//! [`num_data_codewords`]. This is the same two-table shape the reference
//! `qrcodegen` encoder uses in place of a literal `count, total, data` triple
//! table.

use crate::ecc_level::ErrorCorrectionLevel;
use crate::version::Version;

// Indexed by [ecc_level.table_index()][version.value()]; index 0 is unused padding.
#[rustfmt::skip]
static ECC_CODEWORDS_PER_BLOCK: [[i16; 41]; 4] = [
    [-1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30], // Low
    [-1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28], // Medium
    [-1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30], // Quartile
    [-1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30], // High
];

#[rustfmt::skip]
static NUM_ERROR_CORRECTION_BLOCKS: [[i16; 41]; 4] = [
    [-1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25], // Low
    [-1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49], // Medium
    [-1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68], // Quartile
    [-1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81], // High
];

fn table_get(table: &[[i16; 41]; 4], version: Version, ecl: ErrorCorrectionLevel) -> usize {
    table[ecl.table_index()][usize::from(version.value())] as usize
}

/// Number of ECC codewords contributed by each block at `(version, ecl)`.
pub(crate) fn ecc_codewords_per_block(version: Version, ecl: ErrorCorrectionLevel) -> usize {
    table_get(&ECC_CODEWORDS_PER_BLOCK, version, ecl)
}

/// Number of RS blocks the codeword stream is split into at `(version, ecl)`.
pub(crate) fn num_error_correction_blocks(version: Version, ecl: ErrorCorrectionLevel) -> usize {
    table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ecl)
}

/// Total number of data bits storable at the given version, before any ECC
/// level is applied: all modules minus function patterns and remainder bits
/// excluded. Always a multiple of 8. The result is in `[208, 29648]`.
pub(crate) fn num_raw_data_modules(version: Version) -> usize {
    let ver = usize::from(version.value());
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let num_align = ver / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if ver >= 7 {
            result -= 36;
        }
    }
    debug_assert!((208..=29648).contains(&result));
    result
}

/// Number of 8-bit *data* codewords (excluding ECC) available at `(version, ecl)`.
pub(crate) fn num_data_codewords(version: Version, ecl: ErrorCorrectionLevel) -> usize {
    num_raw_data_modules(version) / 8
        - ecc_codewords_per_block(version, ecl) * num_error_correction_blocks(version, ecl)
}

/// Bit capacity of the data region at `(version, ecl)`: `8 * num_data_codewords`.
pub(crate) fn bit_capacity(version: Version, ecl: ErrorCorrectionLevel) -> usize {
    num_data_codewords(version, ecl) * 8
}

/// Ascending alignment-pattern center coordinates for `version`, used on both
/// axes (the full set of centers is the cross product, minus the three corners
/// that collide with finder patterns). Empty for version 1.
pub(crate) fn alignment_pattern_positions(version: Version) -> Vec<i32> {
    let ver = i32::from(version.value());
    if ver == 1 {
        return vec![];
    }
    let num_align = ver / 7 + 2;
    let step = if ver == 32 {
        26
    } else {
        (ver * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };
    let size = version.size();
    let mut result: Vec<i32> = (0..num_align - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn compute_known_capacities() {
        let v1 = Version::new(1).unwrap();
        // Version 1-M holds 16 data codewords = 128 bits per the standard's Annex.
        assert_eq!(16, num_data_codewords(v1, ErrorCorrectionLevel::Medium));
    }

    #[test]
    fn version_one_has_no_alignment_patterns() {
        assert!(alignment_pattern_positions(Version::new(1).unwrap()).is_empty());
    }

    #[test]
    fn higher_versions_have_ascending_alignment_centers() {
        let positions = alignment_pattern_positions(Version::new(7).unwrap());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(6, positions[0]);
    }
}
