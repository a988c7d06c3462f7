use bitflags::bitflags;

use crate::isa::tc16::Opcode;
use crate::register::RegClass;

/// What an opcode declares for one operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandInfo {
    Reg(RegClass),
    Imm,
}

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpcodeFlags: u8 {
// Destination is read and written: the same register fills two slots.
const TIED_DEST = 1 << 0;
}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeDesc {
    pub operands: &'static [OperandInfo],
    pub flags: OpcodeFlags,
}

impl OpcodeDesc {
    pub const EMPTY: OpcodeDesc = OpcodeDesc::new(&[]);

    pub const fn new(operands: &'static [OperandInfo]) -> Self {
        Self { operands, flags: OpcodeFlags::empty() }
    }

    pub const fn tied(operands: &'static [OperandInfo]) -> Self {
        Self { operands, flags: OpcodeFlags::TIED_DEST }
    }

    pub fn operand(&self, slot: usize) -> Option<&OperandInfo> {
        self.operands.get(slot)
    }

    pub fn num_operands(&self) -> usize {
        self.operands.len()
    }

    pub fn is_tied(&self) -> bool {
        self.flags.contains(OpcodeFlags::TIED_DEST)
    }
}

/// Per-opcode operand descriptors, indexed by opcode.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    descs: Vec<Option<OpcodeDesc>>,
}

impl OpcodeTable {
    pub fn new() -> Self {
        Self { descs: Vec::new() }
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Opcode, OpcodeDesc)>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |table, (opcode, desc)| table.with(opcode, desc))
    }

    /// Insert or replace the descriptor of `opcode`.
    pub fn with(mut self, opcode: Opcode, desc: OpcodeDesc) -> Self {
        let idx = opcode as usize;
        if self.descs.len() <= idx {
            self.descs.resize(idx + 1, None);
        }
        self.descs[idx] = Some(desc);
        self
    }

    /// Opcodes without a descriptor declare no operands, so every
    /// descriptor-driven slot on them fails.
    pub fn get(&self, opcode: Opcode) -> &OpcodeDesc {
        self.descs
            .get(opcode as usize)
            .and_then(Option::as_ref)
            .unwrap_or(&OpcodeDesc::EMPTY)
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}
