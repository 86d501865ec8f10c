//! probe-telemetry - Packed temperature frames for wireless cooking probes
//!
//! A probe reports eight temperatures in 13 bytes: eight 13-bit raw counts
//! packed LSB-first with no padding. This crate decodes and encodes that
//! layout with explicit bit arithmetic and turns counts into degrees.
//!
//! # Example
//!
//! ```rust
//! use probe_telemetry::{decode, encode_partial, physical_value, PackedBuffer};
//!
//! let buffer = PackedBuffer::new([
//!     0x37, 0xc3, 0x64, 0x74, 0x8c, 0x8a, 0xf1, 0x30, 0x10, 0x06, 0xc2, 0x20, 0x18,
//! ]);
//! let fields = decode(&buffer);
//! assert_eq!(fields.get(0), Some(823));
//! assert!((physical_value(823) - 21.15).abs() < 1e-9);
//!
//! // Write two fields back into a zeroed buffer
//! let encoded = encode_partial(&[(0, 823), (1, 5)]).unwrap();
//! assert_eq!(encoded.as_bytes()[..2], [0x37, 0xa3]);
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `bits` | LSB-first bit span extract/insert over byte slices |
//! | `packed` | `PackedBuffer`, `FieldSet`, `decode`/`encode` |
//! | `scale` | Raw count to Celsius/Fahrenheit |
//! | `status` | Status characteristic payload parsing |
//! | `history` | Rolling CSV history of readings |

pub mod bits;
pub mod error;
pub mod history;
pub mod packed;
pub mod scale;
pub mod status;

// Re-exports for convenience
pub use error::{CodecError, Result};
pub use history::{Reading, TemperatureHistory, BATCH_SIZE};
pub use packed::{
    decode, encode, encode_partial, FieldSet, PackedBuffer, FIELD_COUNT, FIELD_MAX, FIELD_WIDTH,
    PACKED_LEN,
};
pub use scale::{celsius_to_fahrenheit, physical_value, Temperatures, OFFSET, SCALE};
pub use status::{ProbeStatus, STATUS_MIN_LEN};
