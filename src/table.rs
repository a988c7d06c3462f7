//! Decision tables and the matcher that walks them.
//!
//! A table is a flat list of [`MatchOp`]s. The walker keeps a program counter
//! and a "current field"; filters and checks that fail jump forward by their
//! `skip` count, which is measured from the op after them. `Decode` ends the
//! walk with whatever the bound format decoder returns; `TryDecode` ends it
//! only on success and otherwise keeps walking.

use tracing::trace;

use crate::bits::{Field, Width, Word};
use crate::config::Features;
use crate::error::DecodeError;
use crate::isa::tc16::{Format, Opcode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOp {
    ExtractField { start: u8, len: u8 },
    FilterValue { value: u32, skip: usize },
    CheckField { start: u8, len: u8, value: u32, skip: usize },
    CheckPredicate { features: Features, skip: usize },
    Decode { opcode: Opcode, format: Format },
    TryDecode { opcode: Opcode, format: Format, skip: usize },
    Fail,
}

/// Read-only decision structure for words of one width.
#[derive(Debug, Clone)]
pub struct DecisionTable {
    width: Width,
    ops: Vec<MatchOp>,
}

impl DecisionTable {
    pub fn new(width: Width, ops: Vec<MatchOp>) -> Self {
        Self { width, ops }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn ops(&self) -> &[MatchOp] {
        &self.ops
    }

    /// Walk the table for `word`, handing each candidate `(opcode, format)`
    /// to `decode`. Running off the end counts as `Fail`.
    pub fn walk<T, F>(&self, word: Word, features: Features, mut decode: F) -> Result<T, DecodeError>
    where
        F: FnMut(Opcode, Format) -> Result<T, DecodeError>,
    {
        let no_match = DecodeError::NoTableMatch { word: word.bits(), width: word.width() };
        let mut pc = 0usize;
        let mut current = 0u32;
        while let Some(op) = self.ops.get(pc) {
            pc += 1;
            match *op {
                MatchOp::ExtractField { start, len } => {
                    current = word.field(Field::new(start.into(), len.into()));
                }
                MatchOp::FilterValue { value, skip } => {
                    if current != value {
                        pc += skip;
                    }
                }
                MatchOp::CheckField { start, len, value, skip } => {
                    if word.field(Field::new(start.into(), len.into())) != value {
                        pc += skip;
                    }
                }
                MatchOp::CheckPredicate { features: required, skip } => {
                    if !features.contains(required) {
                        pc += skip;
                    }
                }
                MatchOp::Decode { opcode, format } => {
                    trace!(?opcode, ?format, word = word.bits(), "table match");
                    return decode(opcode, format);
                }
                MatchOp::TryDecode { opcode, format, skip } => match decode(opcode, format) {
                    Ok(found) => return Ok(found),
                    Err(error) => {
                        trace!(?opcode, %error, "candidate rejected, continuing walk");
                        pc += skip;
                    }
                },
                MatchOp::Fail => break,
            }
        }
        Err(no_match)
    }
}

/// Helpers for laying out table data. Each returns a self-contained op run.
pub mod layout {
    use super::MatchOp;
    use crate::config::Features;
    use crate::isa::tc16::{Format, Opcode};

    fn skip_over(body: &[MatchOp]) -> usize {
        body.len()
    }

    pub fn decode(opcode: Opcode, format: Format) -> Vec<MatchOp> {
        vec![MatchOp::Decode { opcode, format }]
    }

    /// Try `opcode`; if its decoder rejects the word, continue with `otherwise`.
    pub fn try_decode(opcode: Opcode, format: Format, otherwise: Vec<MatchOp>) -> Vec<MatchOp> {
        let mut ops = vec![MatchOp::TryDecode { opcode, format, skip: 0 }];
        ops.extend(otherwise);
        ops
    }

    /// Extract bits `start..start + len`, run the arm whose value matches,
    /// and fail when none does.
    pub fn switch(start: u8, len: u8, arms: Vec<(u32, Vec<MatchOp>)>) -> Vec<MatchOp> {
        let mut ops = vec![MatchOp::ExtractField { start, len }];
        for (value, body) in arms {
            ops.push(MatchOp::FilterValue { value, skip: skip_over(&body) });
            ops.extend(body);
        }
        ops.push(MatchOp::Fail);
        ops
    }

    /// Run `then` if bits `start..start + len` equal `value`, else skip it.
    pub fn check(start: u8, len: u8, value: u32, then: Vec<MatchOp>) -> Vec<MatchOp> {
        let mut ops = vec![MatchOp::CheckField { start, len, value, skip: skip_over(&then) }];
        ops.extend(then);
        ops
    }

    /// Run `then` only when the configured features include `features`.
    pub fn require(features: Features, then: Vec<MatchOp>) -> Vec<MatchOp> {
        let mut ops = vec![MatchOp::CheckPredicate { features, skip: skip_over(&then) }];
        ops.extend(then);
        ops
    }
}
