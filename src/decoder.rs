use serde::Serialize;

use crate::bits::Width;
use crate::error::DecodeError;
use crate::isa::tc16::Opcode;
use crate::register::{PhysReg, RegClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operand {
    Reg { class: RegClass, reg: PhysReg },
    /// Unsigned field value; `bits` is the width of the field it came from.
    Imm { value: u32, bits: u8 },
}

impl Operand {
    pub fn reg(class: RegClass, reg: PhysReg) -> Self {
        Operand::Reg { class, reg }
    }

    pub fn imm(value: u32, bits: u8) -> Self {
        Operand::Imm { value, bits }
    }

    pub fn as_reg(&self) -> Option<PhysReg> {
        match *self {
            Operand::Reg { reg, .. } => Some(reg),
            Operand::Imm { .. } => None,
        }
    }

    pub fn as_imm(&self) -> Option<u32> {
        match *self {
            Operand::Imm { value, .. } => Some(value),
            Operand::Reg { .. } => None,
        }
    }
}

/// A successfully decoded instruction. Read-only once returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedInstruction {
    opcode: Opcode,
    operands: Vec<Operand>,
    width: Width,
    address: u64,
}

impl DecodedInstruction {
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn width(&self) -> Width {
        self.width
    }

    /// Bytes consumed: 2 or 4.
    pub fn size(&self) -> usize {
        self.width.bytes()
    }

    pub fn address(&self) -> u64 {
        self.address
    }
}

/// Accumulates operands for one decode attempt.
///
/// Operands keep call order. Dropping the builder discards the attempt, so a
/// failing format decoder never leaks a partial instruction.
#[derive(Debug)]
pub struct InstructionBuilder {
    opcode: Opcode,
    operands: Vec<Operand>,
}

impl InstructionBuilder {
    pub fn new(opcode: Opcode) -> Self {
        Self { opcode, operands: Vec::with_capacity(5) }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Number of operands so far, i.e. the slot the next push fills.
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    pub fn last(&self) -> Option<&Operand> {
        self.operands.last()
    }

    pub fn push(&mut self, operand: Operand) {
        self.operands.push(operand);
    }

    pub fn push_reg(&mut self, class: RegClass, reg: PhysReg) {
        self.push(Operand::reg(class, reg));
    }

    pub fn push_imm(&mut self, value: u32, bits: u32) {
        self.push(Operand::imm(value, bits as u8));
    }

    pub fn finish(self, width: Width, address: u64) -> DecodedInstruction {
        DecodedInstruction {
            opcode: self.opcode,
            operands: self.operands,
            width,
            address,
        }
    }
}

pub trait Decoder {
    /// Decode one instruction from the start of `bytes`. `address` is
    /// recorded on the result and otherwise unused.
    fn decode(&self, bytes: &[u8], address: u64) -> Result<DecodedInstruction, DecodeError>;
}
