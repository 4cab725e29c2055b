//! Generates QR Code Model 2 symbols (ISO/IEC 18004) from text strings and
//! byte arrays.
//!
//! The pipeline is the standard's own: pick a mode and pack a bitstream,
//! pad it to the chosen version's capacity, split it into Reed-Solomon
//! blocks and compute their error-correction codewords, place the
//! interleaved result into the module grid in zig-zag order around the
//! finder, timing and alignment patterns, then try all eight mask patterns
//! and keep whichever minimizes the Annex C penalty score.
//!
//! # Features
//!
//! - Encodes all 40 versions and all 4 error correction levels
//! - Automatic version selection within a caller-supplied range
//! - Automatic or manually pinned mask pattern
//! - Automatic error-correction-level boosting when it's free
//! - Numeric, alphanumeric, and byte segment modes (no Kanji, no ECI)
//!
//! # Examples
//!
//! ```
//! use qr_encoder::{ErrorCorrectionLevel, QrCode};
//!
//! let qr = QrCode::encode_text("Hello, world!", ErrorCorrectionLevel::Medium).unwrap();
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let _dark = qr.get_module(x, y);
//!     }
//! }
//! ```
//!
//! Manual version and mask:
//!
//! ```
//! use qr_encoder::{ErrorCorrectionLevel, Mask, QrCode, Segment, Version};
//!
//! let text = "3141592653589793238462643383";
//! let segs = Segment::make_segments(text);
//! let v5 = Version::new(5).unwrap();
//! let qr = QrCode::encode_segments_advanced(
//!     &segs,
//!     ErrorCorrectionLevel::High,
//!     v5,
//!     v5,
//!     Some(Mask::new(2).unwrap()),
//!     false,
//! )
//! .unwrap();
//! assert_eq!(v5, qr.version());
//! ```

// The set of all legal characters in alphanumeric mode, where each
// character's index in the string is the value it encodes to.
pub(crate) static ALPHANUMERIC_NUM: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

// Bit width of the packed value for a trailing group of 1, 2, or 3 numeric digits.
pub(crate) static NUMBER_LENGTH: [u8; 4] = [0, 4, 7, 10];

mod bit_buffer;
mod ecc_level;
mod error;
mod finder_penalty;
mod format_info;
mod gf256;
mod mask;
mod mask_selector;
mod matrix;
mod mode;
mod placer;
mod qr_code;
mod rs_codec;
mod segment;
mod version;
mod version_tables;

pub use bit_buffer::BitBuffer;
pub use ecc_level::ErrorCorrectionLevel;
pub use error::QrError;
pub use mask::Mask;
pub use mode::Mode;
pub use qr_code::QrCode;
pub use segment::Segment;
pub use version::Version;
