//! End-to-end encoding scenarios and the crate's black-box invariants.

use qr_encoder::{ErrorCorrectionLevel, Mask, QrCode, QrError, Segment, Version};

fn init_logging() {
    let _ = env_logger::try_init();
}

#[test]
fn s1_hello_world_picks_version_one_at_quartile() {
    init_logging();
    let qr = QrCode::encode_text("HELLO WORLD", ErrorCorrectionLevel::Quartile).unwrap();
    assert_eq!(1, qr.version().value());
    assert_eq!(21, qr.size());
    assert!(qr.mask().value() <= 7);
}

#[test]
fn s2_short_numeric_payload_picks_version_one_at_low() {
    init_logging();
    let qr = QrCode::encode_text("12345", ErrorCorrectionLevel::Low).unwrap();
    assert_eq!(1, qr.version().value());
}

#[test]
fn s3_version_forty_accepts_its_exact_byte_capacity_and_rejects_one_more() {
    init_logging();
    let fits = vec![0x41u8; 2953];
    let qr = QrCode::encode_binary(&fits, ErrorCorrectionLevel::Low).unwrap();
    assert_eq!(40, qr.version().value());

    let overflows = vec![0x41u8; 2954];
    let result = QrCode::encode_binary(&overflows, ErrorCorrectionLevel::Low);
    assert!(matches!(result, Err(QrError::DataTooLong { .. })));
}

#[test]
fn s4_multibyte_utf8_with_pinned_mask_is_deterministic() {
    init_logging();
    let text = "信息论"; // 9 UTF-8 bytes, falls outside numeric/alphanumeric
    let mask = Mask::new(3).unwrap();
    let segs = Segment::make_segments(text);
    let qr = QrCode::encode_segments_advanced(
        &segs,
        ErrorCorrectionLevel::Medium,
        Version::MIN,
        Version::MAX,
        Some(mask),
        false,
    )
    .unwrap();
    assert_eq!(21, qr.size());
    assert_eq!(mask, qr.mask());

    let qr_again = QrCode::encode_segments_advanced(
        &Segment::make_segments(text),
        ErrorCorrectionLevel::Medium,
        Version::MIN,
        Version::MAX,
        Some(mask),
        false,
    )
    .unwrap();
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            assert_eq!(qr.get_module(x, y), qr_again.get_module(x, y));
        }
    }
}

#[test]
fn s5_empty_payload_still_produces_a_valid_symbol() {
    init_logging();
    let qr = QrCode::encode_text("", ErrorCorrectionLevel::Low).unwrap();
    assert_eq!(1, qr.version().value());
    assert_eq!(21, qr.size());
}

#[test]
fn s6_two_segments_in_order_grow_the_chosen_version_together() {
    init_logging();
    let mut segs = Segment::make_segments("ABC");
    segs.extend(Segment::make_segments("xyz"));
    let qr = QrCode::encode_segments(&segs, ErrorCorrectionLevel::Low).unwrap();
    assert!(qr.version().value() >= 1);
}

#[test]
fn symbol_side_is_four_times_version_plus_seventeen() {
    init_logging();
    for v in [1u8, 7, 13, 27, 40] {
        let version = Version::new(v).unwrap();
        let qr = QrCode::encode_segments_advanced(
            &[],
            ErrorCorrectionLevel::Low,
            version,
            version,
            None,
            false,
        )
        .unwrap();
        assert_eq!(i32::from(v) * 4 + 17, qr.size());
    }
}

#[test]
fn finder_patterns_are_identical_regardless_of_payload() {
    init_logging();
    let a = QrCode::encode_text("AAAAAAAAAA", ErrorCorrectionLevel::Medium).unwrap();
    let b = QrCode::encode_text("1234567890", ErrorCorrectionLevel::Medium).unwrap();
    assert_eq!(a.size(), b.size());
    for y in 0..7 {
        for x in 0..7 {
            assert_eq!(a.get_module(x, y), b.get_module(x, y));
        }
    }
}

#[test]
fn timing_patterns_alternate_dark_and_light() {
    init_logging();
    let qr = QrCode::encode_text("TIMING", ErrorCorrectionLevel::Low).unwrap();
    for i in 8..qr.size() - 8 {
        assert_eq!(i % 2 == 0, qr.get_module(i, 6));
        assert_eq!(i % 2 == 0, qr.get_module(6, i));
    }
}

#[test]
fn the_dark_module_is_always_set() {
    init_logging();
    let qr = QrCode::encode_text("DARK MODULE", ErrorCorrectionLevel::High).unwrap();
    assert!(qr.get_module(8, qr.size() - 8));
}

#[test]
fn building_twice_from_the_same_input_is_deterministic() {
    init_logging();
    let first = QrCode::encode_text("REPEATABLE", ErrorCorrectionLevel::Quartile).unwrap();
    let second = QrCode::encode_text("REPEATABLE", ErrorCorrectionLevel::Quartile).unwrap();
    assert_eq!(first.version(), second.version());
    assert_eq!(first.mask(), second.mask());
    for y in 0..first.size() {
        for x in 0..first.size() {
            assert_eq!(first.get_module(x, y), second.get_module(x, y));
        }
    }
}
