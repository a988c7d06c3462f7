use crate::bits::Width;
use crate::register::RegClass;

/// Why a single decode attempt failed.
///
/// Every variant is local to one attempt: the caller can retry at another
/// address or give up on the stream.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("insufficient data: need {needed} bytes, have {available}")]
    InsufficientData { needed: usize, available: usize },
    #[error("no table match for {width:?} word {word:#010x}")]
    NoTableMatch { word: u32, width: Width },
    #[error("register index {index} out of range for class {class:?}")]
    InvalidRegisterIndex { class: RegClass, index: u32 },
    #[error("operand slot {slot} is not declared as a register")]
    OperandDescriptorMismatch { slot: usize },
    #[error("width selector contradicts a {expected:?} format")]
    WidthMismatch { expected: Width },
}

/// Why a decoder could not be assembled from its parts.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("{role} table holds {found:?} words, expected {expected:?}")]
    WidthMismatch { role: &'static str, expected: Width, found: Width },
}
