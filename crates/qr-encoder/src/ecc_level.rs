/// The error correction level of a QR Code symbol (L, M, Q, H in the standard).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ErrorCorrectionLevel {
    /// L: the QR Code can tolerate about 7% erroneous codewords.
    Low,
    /// M: the QR Code can tolerate about 15% erroneous codewords.
    Medium,
    /// Q: the QR Code can tolerate about 25% erroneous codewords.
    Quartile,
    /// H: the QR Code can tolerate about 30% erroneous codewords.
    High,
}

impl ErrorCorrectionLevel {
    // Index into the RS block tables; unrelated to the bits stored in format info.
    pub(crate) fn table_index(self) -> usize {
        use ErrorCorrectionLevel::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    // The 2-bit value packed into format info per the standard: L=1, M=0, Q=3, H=2.
    pub(crate) fn format_bits(self) -> u8 {
        use ErrorCorrectionLevel::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn map_to_standard_format_bits() {
        assert_eq!(1, ErrorCorrectionLevel::Low.format_bits());
        assert_eq!(0, ErrorCorrectionLevel::Medium.format_bits());
        assert_eq!(3, ErrorCorrectionLevel::Quartile.format_bits());
        assert_eq!(2, ErrorCorrectionLevel::High.format_bits());
    }
}
