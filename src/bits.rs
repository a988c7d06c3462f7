//! Instruction words and bit-field extraction.

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Encoded instruction width; the discriminant is the size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Width {
    W16 = 2,
    W32 = 4,
}

impl Width {
    pub const fn bytes(self) -> usize {
        self as usize
    }

    pub const fn bits(self) -> u32 {
        self as u32 * 8
    }
}

/// Raw instruction bits as read from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    bits: u32,
    width: Width,
}

impl Word {
    /// `None` if `bits` does not fit in `width`.
    pub fn new(bits: u32, width: Width) -> Option<Self> {
        match width {
            Width::W16 => u16::try_from(bits).ok().map(Self::short),
            Width::W32 => Some(Self::long(bits)),
        }
    }

    pub fn short(bits: u16) -> Self {
        Self { bits: u32::from(bits), width: Width::W16 }
    }

    pub fn long(bits: u32) -> Self {
        Self { bits, width: Width::W32 }
    }

    pub fn bits(self) -> u32 {
        self.bits
    }

    pub fn width(self) -> Width {
        self.width
    }

    /// Bit 0 of the first byte: set for 32-bit formats, clear for 16-bit ones.
    pub fn is_long_form(self) -> bool {
        self.bits & 1 != 0
    }

    pub fn field(self, field: Field) -> u32 {
        debug_assert!(
            field.offset + field.width <= self.width.bits(),
            "{field:?} exceeds a {:?} word",
            self.width
        );
        extract(self.bits, field.offset, field.width)
    }

    pub fn assemble(self, fragments: &[Fragment]) -> u32 {
        assemble(self.bits, fragments)
    }
}

/// A contiguous bit range inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: u32,
    pub width: u32,
}

impl Field {
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }
}

/// One piece of a fragmented field: `width` bits at `offset`, placed at
/// bit `shift` of the reassembled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub field: Field,
    pub shift: u32,
}

impl Fragment {
    pub const fn new(offset: u32, width: u32, shift: u32) -> Self {
        Self { field: Field::new(offset, width), shift }
    }
}

/// Total width in bits of a reassembled fragmented field.
pub fn fragments_width(fragments: &[Fragment]) -> u32 {
    fragments.iter().map(|f| f.field.width).sum()
}

/// `(word >> offset) & ((1 << width) - 1)`.
///
/// The caller guarantees `0 < width` and `offset + width <= 32`.
pub fn extract(word: u32, offset: u32, width: u32) -> u32 {
    let start = offset as usize;
    let end = start + width as usize;
    word.view_bits::<Lsb0>()[start..end].load_le::<u32>()
}

/// Reassemble a fragmented field, fragment by fragment, in table order.
pub fn assemble(word: u32, fragments: &[Fragment]) -> u32 {
    fragments.iter().fold(0, |acc, frag| {
        acc | (extract(word, frag.field.offset, frag.field.width) << frag.shift)
    })
}
