use crate::version::Version;

/// Describes how a segment's data bits are interpreted.
///
/// Kanji mode is part of the standard but out of scope here; ECI indicators
/// and structured append are likewise unsupported (see the crate's module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits `0`-`9` only, packed 3-per-10-bits.
    Numeric,
    /// The 45-character alphanumeric set, packed 2-per-11-bits.
    Alphanumeric,
    /// Arbitrary bytes, 8 bits verbatim per byte.
    Byte,
}

impl Mode {
    // The 4-bit mode indicator per Table 2 of the standard.
    pub(crate) fn indicator_bits(self) -> u32 {
        use Mode::*;
        match self {
            Numeric => 0b0001,
            Alphanumeric => 0b0010,
            Byte => 0b0100,
        }
    }

    // Width of the character-count indicator field at the given version, per Table 3.
    // Versions 1-9, 10-26, and 27-40 use progressively wider fields.
    pub(crate) fn char_count_bits(self, ver: Version) -> u8 {
        use Mode::*;
        let widths = match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
        };
        let band = match ver.value() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        widths[band]
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn pick_the_right_band_for_char_count_width() {
        let v1 = Version::new(1).unwrap();
        let v10 = Version::new(10).unwrap();
        let v27 = Version::new(27).unwrap();
        assert_eq!(10, Mode::Numeric.char_count_bits(v1));
        assert_eq!(12, Mode::Numeric.char_count_bits(v10));
        assert_eq!(14, Mode::Numeric.char_count_bits(v27));
        assert_eq!(8, Mode::Byte.char_count_bits(v1));
        assert_eq!(16, Mode::Byte.char_count_bits(v10));
    }

    #[test]
    fn map_to_standard_indicator_bits() {
        assert_eq!(0b0001, Mode::Numeric.indicator_bits());
        assert_eq!(0b0010, Mode::Alphanumeric.indicator_bits());
        assert_eq!(0b0100, Mode::Byte.indicator_bits());
    }
}
