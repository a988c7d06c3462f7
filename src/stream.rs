use crate::bits::{Width, Word};
use crate::error::DecodeError;

/// Read one little-endian instruction word from the start of `bytes`.
///
/// Never reads a partial word; `bytes` is left untouched.
pub fn read_word(bytes: &[u8], width: Width) -> Result<Word, DecodeError> {
    let insufficient = DecodeError::InsufficientData {
        needed: width.bytes(),
        available: bytes.len(),
    };
    match (width, bytes) {
        (Width::W16, [b0, b1, ..]) => Ok(Word::short(u16::from_le_bytes([*b0, *b1]))),
        (Width::W32, [b0, b1, b2, b3, ..]) => Ok(Word::long(u32::from_le_bytes([*b0, *b1, *b2, *b3]))),
        _ => Err(insufficient),
    }
}
