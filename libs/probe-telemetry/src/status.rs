//! Probe status frame
//!
//! Layout of the status characteristic payload:
//!
//! | Bytes  | Content                                  |
//! |--------|------------------------------------------|
//! | 0..4   | Minimum logged sequence number (u32, LE) |
//! | 4..8   | Maximum logged sequence number (u32, LE) |
//! | 8..21  | Packed temperature buffer (8 x 13 bits)  |
//!
//! Anything after byte 21 belongs to later protocol revisions and is ignored.

use crate::error::{CodecError, Result};
use crate::packed::{decode, FieldSet, PackedBuffer, PACKED_LEN};
use crate::scale::{physical_value, Temperatures};
use tracing::debug;

const SEQUENCE_LEN: usize = 4;
const TEMPERATURES_START: usize = 2 * SEQUENCE_LEN;

/// Minimum status payload length
pub const STATUS_MIN_LEN: usize = TEMPERATURES_START + PACKED_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStatus {
    pub min_sequence: u32,
    pub max_sequence: u32,
    pub temperatures: PackedBuffer,
}

impl ProbeStatus {
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < STATUS_MIN_LEN {
            return Err(CodecError::Truncated {
                expected: STATUS_MIN_LEN,
                actual: data.len(),
            });
        }

        let min_sequence = read_u32_le(&data[0..SEQUENCE_LEN]);
        let max_sequence = read_u32_le(&data[SEQUENCE_LEN..TEMPERATURES_START]);
        let temperatures = PackedBuffer::try_from(&data[TEMPERATURES_START..STATUS_MIN_LEN])?;

        debug!(
            "Probe status: min {} max {} temps {:02X?}",
            min_sequence,
            max_sequence,
            temperatures.as_bytes()
        );

        Ok(Self {
            min_sequence,
            max_sequence,
            temperatures,
        })
    }

    pub fn fields(&self) -> FieldSet {
        decode(&self.temperatures)
    }

    pub fn celsius(&self) -> Temperatures {
        Temperatures::from(&self.fields())
    }

    /// Reading of the first sensor (T1), in degrees Celsius
    pub fn core_temperature(&self) -> f64 {
        physical_value(self.fields().as_array()[0])
    }
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    let mut raw = [0u8; SEQUENCE_LEN];
    raw.copy_from_slice(bytes);
    u32::from_le_bytes(raw)
}
