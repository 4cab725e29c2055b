use thiserror::Error;

use crate::mode::Mode;

/// Errors surfaced by the encoder.
///
/// Every variant is reported at the boundary where it arises; there is no
/// silent recovery and no retry policy (see the crate's concurrency notes).
/// Ways to resolve a [`DataTooLong`](QrError::DataTooLong):
///
/// - Decrease the error correction level if it was greater than [`Low`](crate::ErrorCorrectionLevel::Low).
/// - Split the text into multiple segments that switch modes to reduce the bit cost.
/// - Shorten the payload.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum QrError {
    /// A version number outside `[1, 40]` was requested.
    #[error("invalid version number: {0} (must be 1..=40)")]
    InvalidVersion(u8),

    /// A mask pattern index outside `[0, 7]` was requested.
    #[error("invalid mask pattern: {0} (must be 0..=7)")]
    InvalidMask(u8),

    /// `box_size` or `border` was supplied as negative (or otherwise out of range).
    #[error("invalid box size/border: {0}")]
    InvalidInput(&'static str),

    /// The payload cannot be represented in the requested mode.
    #[error("data cannot be represented in {mode:?} mode")]
    UnencodableInMode {
        /// The mode that was requested.
        mode: Mode,
    },

    /// The assembled bitstream does not fit any version in the allowed range.
    #[error("data length = {bits_needed} bits, max capacity = {bits_available} bits")]
    DataTooLong {
        /// Bits required by the assembled segments.
        bits_needed: usize,
        /// Bits available at the largest version tried.
        bits_available: usize,
    },

    /// An unreachable condition was hit; this indicates a bug in the encoder, not user error.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}
