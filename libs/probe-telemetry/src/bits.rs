//! Bit-level operations over byte arrays
//!
//! Every function here uses LSB-first bit ordering: bit 0 is the
//! least-significant bit of byte 0, bit 8 the least-significant bit of
//! byte 1, and so on. Multi-bit spans are assembled little-endian, so the
//! first bit read becomes bit 0 of the result.

/// Extract multi-bit value from byte array (LSB-first bit ordering)
///
/// # Arguments
/// * `bytes` - Source byte array
/// * `start_bit` - Starting bit position (0-indexed)
/// * `bit_length` - Number of bits to extract (1-64)
///
/// Bits that fall past the end of `bytes` read as zero.
pub fn extract_bits(bytes: &[u8], start_bit: u16, bit_length: u8) -> u64 {
    debug_assert!(bit_length <= 64, "Bit length out of range: {}", bit_length);
    debug_assert!(bit_length > 0, "Bit length must be greater than 0");

    let mut result = 0u64;

    for i in 0..bit_length {
        let bit_position = start_bit + i as u16;
        let byte_index = (bit_position / 8) as usize;
        let bit_index = (bit_position % 8) as u8;

        if byte_index < bytes.len() {
            let bit = (bytes[byte_index] >> bit_index) & 0x01;
            result |= (bit as u64) << i;
        }
    }

    result
}

/// Insert bits into byte array
///
/// Clears the `bit_length` bits starting at `start_bit` and writes the low
/// `bit_length` bits of `value` into them. Higher bits of `value` are
/// ignored. Uses LSB-first bit ordering to match [`extract_bits`].
pub fn insert_bits(bytes: &mut [u8], start_bit: u16, bit_length: u8, value: u64) {
    debug_assert!(bit_length <= 64, "Bit length out of range: {}", bit_length);
    debug_assert!(bit_length > 0, "Bit length must be greater than 0");

    for i in 0..bit_length {
        let bit_position = start_bit + i as u16;
        let byte_index = (bit_position / 8) as usize;
        let bit_index = (bit_position % 8) as u8;

        if byte_index < bytes.len() {
            let bit_value = ((value >> i) & 0x01) as u8;

            bytes[byte_index] &= !(1 << bit_index);
            bytes[byte_index] |= bit_value << bit_index;
        }
    }
}

/// OR every set bit of `value` into the array starting at `start_bit`
///
/// Unlike [`insert_bits`] there is no width limit: the whole value is
/// shifted into place, so bits above a field's width land in whatever
/// follows it. Bits shifted past the end of `bytes` are dropped.
pub fn or_bits(bytes: &mut [u8], start_bit: u16, value: u64) {
    let total_bits = bytes.len() * 8;

    for i in 0..u64::BITS as u16 {
        if (value >> i) & 0x01 == 0 {
            continue;
        }

        let bit_position = start_bit as usize + i as usize;
        if bit_position >= total_bits {
            break;
        }

        bytes[bit_position / 8] |= 1 << (bit_position % 8);
    }
}
