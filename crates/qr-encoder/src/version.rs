use crate::error::QrError;

/// A QR Code version number, in the range `[1, 40]`.
///
/// The version determines the symbol's side length: `4 * version + 17` modules.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported by the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported by the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// Returns [`QrError::InvalidVersion`] if `ver` is outside `[1, 40]`.
    pub fn new(ver: u8) -> Result<Self, QrError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&ver) {
            Ok(Self(ver))
        } else {
            Err(QrError::InvalidVersion(ver))
        }
    }

    /// Returns the value, which is in the range `[1, 40]`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the symbol's side length in modules: `4 * version + 17`.
    pub fn size(self) -> i32 {
        i32::from(self.0) * 4 + 17
    }
}
