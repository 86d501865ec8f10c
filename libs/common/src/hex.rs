//! Hex helpers
//! Uppercase encoding for log lines and lenient decoding for configured byte blobs

use crate::error::{Error, Result};

/// Uppercase hex for frame dumps in log lines, e.g. `37C36474`
pub fn encode_upper(data: &[u8]) -> String {
    ::hex::encode_upper(data)
}

/// Decode a byte blob written either as one hex string or as separate bytes
///
/// Accepted forms:
/// - `"37c36474"` (contiguous, optional `0x` prefix)
/// - `"0x37 0xc3 0x64 0x74"` or `"37, c3, 64, 74"` (one byte per token,
///   leading zero optional, so the `0x0` style of a byte dump parses)
pub fn decode_blob(input: &str) -> Result<Vec<u8>> {
    let tokens: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => Ok(Vec::new()),
        [single] => Ok(::hex::decode(strip_prefix(single))?),
        many => many
            .iter()
            .map(|token| {
                let digits = strip_prefix(token);
                if digits.is_empty() || digits.len() > 2 {
                    return Err(Error::Parse(format!("invalid byte token '{}'", token)));
                }
                u8::from_str_radix(digits, 16)
                    .map_err(|e| Error::Parse(format!("invalid byte token '{}': {}", token, e)))
            })
            .collect(),
    }
}

fn strip_prefix(token: &str) -> &str {
    token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
}
