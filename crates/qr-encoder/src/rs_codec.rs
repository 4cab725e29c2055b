//! Reed-Solomon error correction: splitting the data codeword stream into
//! blocks, computing each block's ECC codewords, and interleaving the result
//! the way a QR Code reader expects to read it back out.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::ecc_level::ErrorCorrectionLevel;
use crate::gf256::Polynomial;
use crate::version::Version;
use crate::version_tables;

/// Generator polynomials are pure functions of `ecc_len`, which across the
/// handful of RS block shapes a real symbol uses repeats a lot (once per
/// block within a build, and again on every repeated build); cache them
/// instead of re-deriving the same polynomial from scratch each time.
fn generator_cache() -> &'static Mutex<HashMap<usize, Polynomial>> {
    static CACHE: OnceLock<Mutex<HashMap<usize, Polynomial>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn cached_generator(ecc_len: usize) -> Polynomial {
    let mut cache = generator_cache().lock().expect("generator cache lock poisoned");
    cache
        .entry(ecc_len)
        .or_insert_with(|| Polynomial::generator(ecc_len))
        .clone()
}

/// One data block and the number of ECC codewords it is due, before the ECC
/// bytes themselves have been computed.
struct BlockShape {
    data: Vec<u8>,
    ecc_len: usize,
}

/// Splits `data` into the RS blocks prescribed for `(version, ecl)`.
///
/// The standard allows two block sizes within a single symbol differing by
/// exactly one data codeword ("short" and "long" blocks); this is derived
/// from the total codeword count and the number of blocks rather than read
/// from a literal per-version table, since the two are equivalent.
fn split_into_blocks(data: &[u8], version: Version, ecl: ErrorCorrectionLevel) -> Vec<BlockShape> {
    let num_blocks = version_tables::num_error_correction_blocks(version, ecl);
    let ecc_len = version_tables::ecc_codewords_per_block(version, ecl);
    let raw_codewords = version_tables::num_raw_data_modules(version) / 8;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;
    let short_block_len = raw_codewords / num_blocks - ecc_len;

    let mut blocks = Vec::with_capacity(num_blocks);
    let mut offset = 0;
    for i in 0..num_blocks {
        let len = if i < num_short_blocks {
            short_block_len
        } else {
            short_block_len + 1
        };
        blocks.push(BlockShape {
            data: data[offset..offset + len].to_vec(),
            ecc_len,
        });
        offset += len;
    }
    debug_assert_eq!(offset, data.len());
    blocks
}

/// Computes the ECC codewords for one data block: `data` padded with
/// `ecc_len` zeros, reduced modulo the degree-`ecc_len` generator polynomial.
fn block_ecc(data: &[u8], ecc_len: usize) -> Vec<u8> {
    let generator = cached_generator(ecc_len);
    let dividend = Polynomial::shifted(data, ecc_len);
    let remainder = dividend.rem(&generator);
    let mut ecc = vec![0u8; ecc_len];
    let pad = ecc_len - remainder.len();
    ecc[pad..].copy_from_slice(remainder.coeffs());
    ecc
}

/// Splits `data` (the assembled, padded data codewords) into RS blocks,
/// appends each block's ECC codewords, and interleaves data and ECC blocks
/// column-major: all blocks' byte 0, then all blocks' byte 1, and so on, data
/// first then ECC, as the standard's module-placement order requires.
///
/// `data.len()` must equal `version_tables::num_data_codewords(version, ecl)`.
pub(crate) fn encode_and_interleave(
    data: &[u8],
    version: Version,
    ecl: ErrorCorrectionLevel,
) -> Vec<u8> {
    debug_assert_eq!(data.len(), version_tables::num_data_codewords(version, ecl));
    let blocks = split_into_blocks(data, version, ecl);
    let eccs: Vec<Vec<u8>> = blocks.iter().map(|b| block_ecc(&b.data, b.ecc_len)).collect();

    let max_data_len = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    let max_ecc_len = blocks.iter().map(|b| b.ecc_len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(version_tables::num_raw_data_modules(version) / 8);

    for i in 0..max_data_len {
        for block in &blocks {
            if i < block.data.len() {
                out.push(block.data[i]);
            }
        }
    }
    for i in 0..max_ecc_len {
        for ecc in &eccs {
            if i < ecc.len() {
                out.push(ecc[i]);
            }
        }
    }
    out
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn interleave_to_the_expected_raw_codeword_count() {
        let version = Version::new(5).unwrap();
        let ecl = ErrorCorrectionLevel::Quartile;
        let data = vec![0u8; version_tables::num_data_codewords(version, ecl)];
        let out = encode_and_interleave(&data, version, ecl);
        assert_eq!(version_tables::num_raw_data_modules(version) / 8, out.len());
    }

    #[test]
    fn single_block_version_needs_no_interleaving_reorder() {
        let version = Version::new(1).unwrap();
        let ecl = ErrorCorrectionLevel::Low;
        let data: Vec<u8> = (0..version_tables::num_data_codewords(version, ecl) as u8).collect();
        let out = encode_and_interleave(&data, version, ecl);
        assert_eq!(&data[..], &out[..data.len()]);
    }

    #[test]
    fn generator_cache_returns_the_same_polynomial_on_repeat_lookups() {
        assert_eq!(cached_generator(10), cached_generator(10));
        assert_eq!(Polynomial::generator(18), cached_generator(18));
    }
}
