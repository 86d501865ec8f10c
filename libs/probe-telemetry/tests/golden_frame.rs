//! Golden Frame Tests
//!
//! Pins the bit layout against a frame captured from a real probe:
//! - Field values and temperatures of the captured frame
//! - Byte-exact write-back of the first two fields
//! - Overflow spill between adjacent fields on the unchecked path

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use probe_telemetry::{
    decode, encode, encode_partial, physical_value, CodecError, FieldSet, PackedBuffer,
    ProbeStatus, FIELD_COUNT,
};

const CAPTURED: [u8; 13] = [
    0x37, 0xc3, 0x64, 0x74, 0x8c, 0x8a, 0xf1, 0x30, 0x10, 0x06, 0xc2, 0x20, 0x18,
];

// ============================================================================
// Decode
// ============================================================================

#[test]
fn test_captured_frame_fields() {
    let fields = decode(&PackedBuffer::new(CAPTURED));
    let expected = [823, 806, 797, 789, 783, 776, 776, 772];

    for (index, raw) in expected.into_iter().enumerate() {
        assert_eq!(fields.get(index), Some(raw), "Failed for field {}", index + 1);
    }
}

#[test]
fn test_captured_frame_first_reading() {
    let fields = decode(&PackedBuffer::new(CAPTURED));
    let raw = fields.get(0).unwrap();

    assert_eq!(raw, 823);
    assert_eq!(format!("{} {:.6}", raw, physical_value(raw)), "823 21.150000");
}

#[test]
fn test_captured_frame_reencodes_exactly() {
    let buffer = PackedBuffer::new(CAPTURED);
    assert_eq!(encode(&decode(&buffer)).into_bytes(), CAPTURED);
}

// ============================================================================
// Encode
// ============================================================================

#[test]
fn test_write_back_bytes() {
    let buffer = encode_partial(&[(0, 823), (1, 5)]).unwrap();

    assert_eq!(
        buffer.into_bytes(),
        [0x37, 0xa3, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );

    let fields = decode(&buffer);
    assert_eq!(fields.get(0), Some(823));
    assert_eq!(fields.get(1), Some(5));
}

#[test]
fn test_write_back_matches_full_encode() {
    let partial = encode_partial(&[(0, 823), (1, 5)]).unwrap();
    let full = encode(&FieldSet::try_from([823, 5, 0, 0, 0, 0, 0, 0]).unwrap());
    assert_eq!(partial, full);
}

#[test]
fn test_write_back_rejects_out_of_range() {
    assert!(matches!(
        encode_partial(&[(0, 8192)]),
        Err(CodecError::FieldOverflow { index: 0, .. })
    ));
    assert!(matches!(
        encode_partial(&[(FIELD_COUNT, 1)]),
        Err(CodecError::FieldIndex { .. })
    ));
}

// ============================================================================
// Overflow Hazard
// ============================================================================

#[test]
fn test_unchecked_overflow_corrupts_next_field() {
    let mut buffer = PackedBuffer::zeroed();
    buffer.write_field_raw(0, 8192).unwrap();

    let fields = decode(&buffer);
    assert_eq!(fields.get(0), Some(0));
    assert_eq!(fields.get(1), Some(1));
    assert_eq!(buffer.as_bytes()[1], 0b0010_0000);
}

#[test]
fn test_unchecked_overflow_keeps_low_bits() {
    let mut buffer = PackedBuffer::zeroed();
    buffer.write_field_raw(2, 8192 + 823).unwrap();

    let fields = decode(&buffer);
    assert_eq!(fields.get(2), Some(823));
    assert_eq!(fields.get(3), Some(1));
}

// ============================================================================
// Status Frame
// ============================================================================

#[test]
fn test_status_frame_carries_captured_buffer() {
    let mut frame = vec![0x01, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00];
    frame.extend_from_slice(&CAPTURED);

    let status = ProbeStatus::parse(&frame).unwrap();
    assert_eq!(status.min_sequence, 1);
    assert_eq!(status.max_sequence, 16);
    assert_eq!(status.temperatures.into_bytes(), CAPTURED);
}
