//! Text report
//!
//! Two blocks, matching the reference dump byte for byte:
//!
//! ```text
//! 823 21.150000          <- raw count and temperature, fields 1..8
//! ...
//! =====
//!
//! t1: 0x337              <- field 1 decoded from the written-back buffer
//! 0x37 0xa3 0x0 ... 0x0  <- the 13 bytes, each followed by a space
//! ```

use std::fmt::Write;

use probe_telemetry::{physical_value, FieldSet, PackedBuffer, Result, PACKED_LEN};

/// Frame captured from a probe, decoded when no sample is configured
pub const SAMPLE_FRAME: [u8; PACKED_LEN] = [
    0x37, 0xc3, 0x64, 0x74, 0x8c, 0x8a, 0xf1, 0x30, 0x10, 0x06, 0xc2, 0x20, 0x18,
];

pub fn render_readings(fields: &FieldSet) -> String {
    let mut out = String::new();
    for raw in fields.iter() {
        let _ = writeln!(out, "{} {:.6}", raw, physical_value(raw));
    }
    out.push_str("=====\n\n");
    out
}

pub fn render_write_back(buffer: &PackedBuffer) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "t1: {:#x}", buffer.read_field(0)?);
    for byte in buffer.as_bytes() {
        let _ = write!(out, "{:#x} ", byte);
    }
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use probe_telemetry::{decode, encode_partial};

    #[test]
    fn test_render_readings_sample_frame() {
        let fields = decode(&PackedBuffer::new(SAMPLE_FRAME));
        assert_eq!(
            render_readings(&fields),
            "823 21.150000\n\
             806 20.300000\n\
             797 19.850000\n\
             789 19.450000\n\
             783 19.150000\n\
             776 18.800000\n\
             776 18.800000\n\
             772 18.600000\n\
             =====\n\n"
        );
    }

    #[test]
    fn test_render_write_back() {
        let buffer = encode_partial(&[(0, 823), (1, 5)]).unwrap();
        assert_eq!(
            render_write_back(&buffer).unwrap(),
            "t1: 0x337\n0x37 0xa3 0x0 0x0 0x0 0x0 0x0 0x0 0x0 0x0 0x0 0x0 0x0 \n"
        );
    }

    #[test]
    fn test_render_readings_extremes() {
        let fields = decode(&PackedBuffer::new([0xFF; PACKED_LEN]));
        let report = render_readings(&fields);
        assert!(report.starts_with("8191 389.550000\n"));

        let report = render_readings(&decode(&PackedBuffer::zeroed()));
        assert!(report.starts_with("0 -20.000000\n"));
    }
}
