//! Packed temperature buffer
//!
//! Eight unsigned 13-bit fields packed back to back into 13 bytes with no
//! padding. Field `i` occupies bits `[13 * i, 13 * i + 13)`, where bit 0 is
//! the least-significant bit of byte 0 and bit order increases within each
//! byte and then across bytes.
//!
//! ```text
//! byte:      0         1         2         3            12
//! bit:   76543210  76543210  76543210  76543210 ... 76543210
//! field: 00000000  11100000  11111111  22222211 ... 77777777
//! ```

use crate::bits::{extract_bits, insert_bits, or_bits};
use crate::error::{CodecError, Result};
use tracing::{trace, warn};

/// Number of fields in a packed buffer
pub const FIELD_COUNT: usize = 8;

/// Width of every field in bits
pub const FIELD_WIDTH: u8 = 13;

/// Largest value a field can hold
pub const FIELD_MAX: u16 = 0x1FFF;

/// Packed buffer length in bytes (8 * 13 bits = 104 bits)
pub const PACKED_LEN: usize = 13;

#[inline]
fn field_offset(index: usize) -> u16 {
    (index * FIELD_WIDTH as usize) as u16
}

#[inline]
fn check_index(index: usize) -> Result<()> {
    if index < FIELD_COUNT {
        Ok(())
    } else {
        Err(CodecError::field_index(index))
    }
}

/// 13-byte storage for eight packed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedBuffer([u8; PACKED_LEN]);

impl PackedBuffer {
    pub const fn new(bytes: [u8; PACKED_LEN]) -> Self {
        Self(bytes)
    }

    /// All-zero buffer, the starting point of the encode path
    pub const fn zeroed() -> Self {
        Self([0u8; PACKED_LEN])
    }

    pub fn as_bytes(&self) -> &[u8; PACKED_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; PACKED_LEN] {
        self.0
    }

    /// Read the raw 13-bit value of field `index` (0-based)
    pub fn read_field(&self, index: usize) -> Result<u16> {
        check_index(index)?;
        Ok(extract_bits(&self.0, field_offset(index), FIELD_WIDTH) as u16)
    }

    /// Write field `index`, rejecting values that do not fit in 13 bits
    ///
    /// The target span is cleared first, so rewriting a field never leaves
    /// stale bits behind. Neighbouring fields are untouched.
    pub fn write_field(&mut self, index: usize, value: u16) -> Result<()> {
        check_index(index)?;
        if value > FIELD_MAX {
            return Err(CodecError::field_overflow(index, value as u32));
        }

        insert_bits(&mut self.0, field_offset(index), FIELD_WIDTH, value as u64);
        trace!(index, value, "field written");
        Ok(())
    }

    /// Write field `index` without a range check
    ///
    /// Clears the 13-bit span and ORs the whole of `value` in at the field
    /// offset. Bits above bit 12 land in the following field(s); bits past
    /// the last byte are dropped. Writing `8192` to field 0 leaves field 0 at
    /// zero and sets the lowest bit of field 1.
    pub fn write_field_raw(&mut self, index: usize, value: u32) -> Result<()> {
        check_index(index)?;
        if value > FIELD_MAX as u32 {
            warn!(
                index,
                value, "Field value exceeds 13 bits, spilling into the next field"
            );
        }

        let offset = field_offset(index);
        insert_bits(&mut self.0, offset, FIELD_WIDTH, 0);
        or_bits(&mut self.0, offset, value as u64);
        Ok(())
    }

    /// Decode all eight fields
    pub fn decode(&self) -> FieldSet {
        decode(self)
    }
}

impl From<[u8; PACKED_LEN]> for PackedBuffer {
    fn from(bytes: [u8; PACKED_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PackedBuffer {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: [u8; PACKED_LEN] = bytes.try_into().map_err(|_| CodecError::Length {
            expected: PACKED_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for PackedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Eight raw field values, each guaranteed to fit in 13 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldSet([u16; FIELD_COUNT]);

impl FieldSet {
    pub fn get(&self, index: usize) -> Option<u16> {
        self.0.get(index).copied()
    }

    pub fn as_array(&self) -> &[u16; FIELD_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }

    /// Replace field `index`, enforcing the 13-bit range
    pub fn set(&mut self, index: usize, value: u16) -> Result<()> {
        check_index(index)?;
        if value > FIELD_MAX {
            return Err(CodecError::field_overflow(index, value as u32));
        }
        self.0[index] = value;
        Ok(())
    }
}

impl TryFrom<[u16; FIELD_COUNT]> for FieldSet {
    type Error = CodecError;

    fn try_from(values: [u16; FIELD_COUNT]) -> Result<Self> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, &v)| v > FIELD_MAX) {
            return Err(CodecError::field_overflow(index, value as u32));
        }
        Ok(Self(values))
    }
}

impl From<FieldSet> for [u16; FIELD_COUNT] {
    fn from(fields: FieldSet) -> Self {
        fields.0
    }
}

/// Unpack all eight fields from a buffer; total over every 13-byte input
pub fn decode(buffer: &PackedBuffer) -> FieldSet {
    let mut fields = [0u16; FIELD_COUNT];
    for (index, field) in fields.iter_mut().enumerate() {
        *field = extract_bits(buffer.as_bytes(), field_offset(index), FIELD_WIDTH) as u16;
    }
    FieldSet(fields)
}

/// Pack a complete field set into a fresh buffer
pub fn encode(fields: &FieldSet) -> PackedBuffer {
    let mut buffer = PackedBuffer::zeroed();
    for (index, value) in fields.iter().enumerate() {
        insert_bits(&mut buffer.0, field_offset(index), FIELD_WIDTH, value as u64);
    }
    buffer
}

/// Start from a zeroed buffer and apply `(index, value)` writes in order
///
/// Fields not named keep their zero value. A later write to the same index
/// replaces an earlier one.
pub fn encode_partial(writes: &[(usize, u16)]) -> Result<PackedBuffer> {
    let mut buffer = PackedBuffer::zeroed();
    for &(index, value) in writes {
        buffer.write_field(index, value)?;
    }
    Ok(buffer)
}
