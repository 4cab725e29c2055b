use crate::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::mode::Mode;
use crate::version::Version;
use crate::{ALPHANUMERIC_NUM, NUMBER_LENGTH};

/// A segment of character or binary data in a QR Code symbol.
///
/// Instances are immutable. The mid-level way to create one is a static
/// factory function such as [`Segment::make_numeric`]; `make_segments` picks
/// the best single mode for a whole string automatically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    // Length of the unencoded data: characters for numeric/alphanumeric, bytes for byte mode.
    char_count: usize,
    // The payload bits only, not including the mode indicator or character-count field.
    bits: BitBuffer,
}

impl Segment {
    /// Builds a segment representing `data` verbatim in byte mode.
    ///
    /// Every byte slice is acceptable; no validation is performed.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bits = BitBuffer::new();
        for &b in data {
            bits.put(u32::from(b), 8);
        }
        Segment {
            mode: Mode::Byte,
            char_count: data.len(),
            bits,
        }
    }

    /// Builds a segment representing `text` in numeric mode: groups of three
    /// decimal digits become 10 bits, a trailing pair becomes 7 bits, and a
    /// trailing single digit becomes 4 bits.
    ///
    /// Returns [`QrError::UnencodableInMode`] if `text` contains a non-digit.
    pub fn make_numeric(text: &str) -> Result<Self, QrError> {
        if !Self::is_numeric(text) {
            return Err(QrError::UnencodableInMode { mode: Mode::Numeric });
        }
        let mut bits = BitBuffer::new();
        let digits: Vec<u8> = text.bytes().map(|b| b - b'0').collect();
        for chunk in digits.chunks(3) {
            let value = chunk.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d));
            bits.put(value, NUMBER_LENGTH[chunk.len()]);
        }
        Ok(Segment {
            mode: Mode::Numeric,
            char_count: text.len(),
            bits,
        })
    }

    /// Builds a segment representing `text` in alphanumeric mode: pairs of
    /// characters become 11 bits (`45*v1 + v2`), a trailing single character
    /// becomes 6 bits.
    ///
    /// Returns [`QrError::UnencodableInMode`] if `text` contains a character
    /// outside the 45-character alphanumeric set.
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        if !Self::is_alphanumeric(text) {
            return Err(QrError::UnencodableInMode {
                mode: Mode::Alphanumeric,
            });
        }
        let values: Vec<u32> = text
            .chars()
            .map(|c| ALPHANUMERIC_NUM.find(c).unwrap() as u32)
            .collect();
        let mut bits = BitBuffer::new();
        for pair in values.chunks(2) {
            if pair.len() == 2 {
                bits.put(pair[0] * 45 + pair[1], 11);
            } else {
                bits.put(pair[0], 6);
            }
        }
        Ok(Segment {
            mode: Mode::Alphanumeric,
            char_count: text.len(),
            bits,
        })
    }

    /// Picks the best single mode for `text` — numeric, then alphanumeric,
    /// then byte — and returns the resulting one-element (or empty, for an
    /// empty string) segment list.
    pub fn make_segments(text: &str) -> Vec<Self> {
        if text.is_empty() {
            return vec![];
        }
        let seg = if Self::is_numeric(text) {
            Self::make_numeric(text).expect("just checked is_numeric")
        } else if Self::is_alphanumeric(text) {
            Self::make_alphanumeric(text).expect("just checked is_alphanumeric")
        } else {
            Self::make_bytes(text.as_bytes())
        };
        vec![seg]
    }

    /// The mode indicator of this segment.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The character-count field value (not the bit length of the payload).
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// The payload bits, not including the mode indicator or length field.
    pub fn bits(&self) -> &BitBuffer {
        &self.bits
    }

    /// Bits required to encode `segs` at `version`: `sum(4 + cc_width + payload_bits)`.
    ///
    /// Returns `None` if a segment's character count overflows its length
    /// field's bit width at this version.
    pub fn total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut total = 0usize;
        for seg in segs {
            let cc_bits = seg.mode.char_count_bits(version);
            if seg.char_count >= (1usize << cc_bits) {
                return None;
            }
            total = total.checked_add(4 + usize::from(cc_bits))?;
            total = total.checked_add(seg.bits.len())?;
        }
        Some(total)
    }

    /// True iff every character of `text` is a decimal digit.
    pub fn is_numeric(text: &str) -> bool {
        text.bytes().all(|b| b.is_ascii_digit())
    }

    /// True iff every character of `text` is in the 45-character alphanumeric set.
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_NUM.contains(c))
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn pack_numeric_groups_of_three_into_ten_bits() {
        let seg = Segment::make_numeric("123").unwrap();
        assert_eq!(10, seg.bits().len());
        assert_eq!(0b0001111011, (0..10).fold(0u32, |acc, i| (acc << 1) | seg.bits().get(i) as u32));
    }

    #[test]
    fn pack_trailing_pair_into_seven_bits_and_single_into_four() {
        let two = Segment::make_numeric("45").unwrap();
        assert_eq!(7, two.bits().len());
        let one = Segment::make_numeric("5").unwrap();
        assert_eq!(4, one.bits().len());
    }

    #[test]
    fn reject_non_digits_in_numeric_mode() {
        assert!(matches!(
            Segment::make_numeric("12a"),
            Err(QrError::UnencodableInMode { mode: Mode::Numeric })
        ));
    }

    #[test]
    fn pack_alphanumeric_pairs_into_eleven_bits() {
        let seg = Segment::make_alphanumeric("AC").unwrap();
        // A=10, C=12 -> 45*10+12 = 462
        let value = (0..11).fold(0u32, |acc, i| (acc << 1) | seg.bits().get(i) as u32);
        assert_eq!(462, value);
    }

    #[test]
    fn reject_lowercase_in_alphanumeric_mode() {
        assert!(Segment::make_alphanumeric("abc").is_err());
    }

    #[test]
    fn pick_numeric_before_alphanumeric_before_byte() {
        assert_eq!(Mode::Numeric, Segment::make_segments("123")[0].mode());
        assert_eq!(Mode::Alphanumeric, Segment::make_segments("AB12")[0].mode());
        assert_eq!(Mode::Byte, Segment::make_segments("ab12")[0].mode());
    }

    #[test]
    fn make_segments_of_empty_text_is_empty() {
        assert!(Segment::make_segments("").is_empty());
    }
}
