//! BCH-encoded format and version information: the 15-bit error-correction-
//! level-and-mask field every symbol carries twice, and the 18-bit version
//! field carried by symbols of version 7 and above.

use crate::ecc_level::ErrorCorrectionLevel;
use crate::mask::Mask;
use crate::version::Version;

const FORMAT_GENERATOR: u32 = 0x537;
const FORMAT_MASK: u32 = 0x5412;
const VERSION_GENERATOR: u32 = 0x1F25;

/// BCH(15,5) format information: 5 data bits (2 ECC level + 3 mask) followed
/// by 10 error-correction bits, XORed with a fixed mask so an all-zero
/// symbol never produces an all-zero format field.
pub(crate) fn format_info_bits(ecl: ErrorCorrectionLevel, mask: Mask) -> u32 {
    let data = (u32::from(ecl.format_bits()) << 3) | u32::from(mask.value());
    let rem = bch_remainder(data, FORMAT_GENERATOR, 10);
    ((data << 10) | rem) ^ FORMAT_MASK
}

/// BCH(18,6) version information: the 6-bit version number followed by 12
/// error-correction bits. Only meaningful for versions 7 and above; callers
/// are expected not to stamp it otherwise.
pub(crate) fn version_info_bits(version: Version) -> u32 {
    let data = u32::from(version.value());
    let rem = bch_remainder(data, VERSION_GENERATOR, 12);
    (data << 12) | rem
}

/// Computes `data << ecc_bits` modulo `generator` over GF(2) (polynomial
/// division with XOR subtraction), the remainder being the BCH parity bits.
fn bch_remainder(data: u32, generator: u32, ecc_bits: u32) -> u32 {
    let mut value = data << ecc_bits;
    let generator_degree = 31 - generator.leading_zeros();
    while value != 0 && 31 - value.leading_zeros() >= generator_degree {
        let shift = (31 - value.leading_zeros()) - generator_degree;
        value ^= generator << shift;
    }
    value
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn format_bits_never_collide_with_the_all_zero_pattern() {
        let bits = format_info_bits(ErrorCorrectionLevel::Low, Mask::new(0).unwrap());
        assert_ne!(0, bits);
    }

    #[test]
    fn format_bits_fit_in_fifteen_bits() {
        for ecl in [
            ErrorCorrectionLevel::Low,
            ErrorCorrectionLevel::Medium,
            ErrorCorrectionLevel::Quartile,
            ErrorCorrectionLevel::High,
        ] {
            for m in 0..8u8 {
                let bits = format_info_bits(ecl, Mask::new(m).unwrap());
                assert!(bits < (1 << 15));
            }
        }
    }

    #[test]
    fn version_bits_fit_in_eighteen_bits() {
        for v in 7..=40u8 {
            let bits = version_info_bits(Version::new(v).unwrap());
            assert!(bits < (1 << 18));
        }
    }

    #[test]
    fn version_bits_round_trip_the_version_number_in_the_high_six_bits() {
        let version = Version::new(23).unwrap();
        let bits = version_info_bits(version);
        assert_eq!(23, bits >> 12);
    }
}
