//! Operand decoders, one per encoding format.
//!
//! Register fields are 4 bits wide and sit at bit 8 (`s1`/`d` in short
//! forms), 12 (`s2`), 24 (`s3`) or 28 (`d` in long forms). Formats whose
//! register class depends on the opcode take it from the opcode's
//! descriptor, at the slot the operand is about to fill.

use serde::Serialize;

use crate::bits::{fragments_width, Field, Fragment, Width, Word};
use crate::decoder::InstructionBuilder;
use crate::error::DecodeError;
use crate::instructions::{OpcodeDesc, OperandInfo};
use crate::register::{RegClass, RegisterInfo};

const S1: u32 = 8;
const S2: u32 = 12;
const S3: u32 = 24;
const D: u32 = 28;

/// ABS/ABSB absolute address.
pub const OFF18: [Fragment; 4] = [
    Fragment::new(16, 6, 0),
    Fragment::new(28, 4, 6),
    Fragment::new(22, 4, 10),
    Fragment::new(12, 4, 14),
];

/// B-format branch displacement.
pub const DISP24: [Fragment; 2] = [Fragment::new(16, 16, 0), Fragment::new(8, 8, 16)];

/// BO base-plus-offset displacement.
pub const OFF10: [Fragment; 2] = [Fragment::new(16, 6, 0), Fragment::new(28, 4, 6)];

/// BOL long displacement.
pub const OFF16: [Fragment; 3] = [
    Fragment::new(16, 6, 0),
    Fragment::new(28, 4, 6),
    Fragment::new(22, 6, 10),
];

/// BRN bit number; bit 4 lives at bit 7 of the word.
pub const BRN_N: [Fragment; 2] = [Fragment::new(12, 4, 0), Fragment::new(7, 1, 4)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    // 16-bit
    Sb,
    Sbr,
    Sc,
    Sr,
    Src,
    Srr,
    Slr,
    Slro,
    Sro,
    Srrs,
    Sbc,
    Sbrn,
    Ssr,
    Ssro,
    // 32-bit
    Abs,
    Absb,
    B,
    Bo,
    Bol,
    Rc,
    Rcpw,
    Rlc,
    Rr,
    Rr2,
    Rrpw,
    Sys,
    Rrr2,
    Rrr1,
    Bit,
    Rr1,
    Rcr,
    Rrrw,
    Rcrr,
    Rrrr,
    Brr,
    Brc,
    Rrr,
    Rcrw,
    Brn,
}

/// What a format decoder may consult besides the word itself.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    pub registers: &'a RegisterInfo,
    pub desc: &'a OpcodeDesc,
}

impl Format {
    pub fn width(self) -> Width {
        use Format::*;
        match self {
            Sb | Sbr | Sc | Sr | Src | Srr | Slr | Slro | Sro | Srrs | Sbc | Sbrn | Ssr | Ssro => {
                Width::W16
            }
            _ => Width::W32,
        }
    }

    /// Append this format's operands for `word` to `inst`.
    ///
    /// On error `inst` may hold some operands; the caller drops it.
    pub fn decode(
        self,
        word: Word,
        inst: &mut InstructionBuilder,
        ctx: &FormatContext<'_>,
    ) -> Result<(), DecodeError> {
        let expected = self.width();
        if word.width() != expected || word.is_long_form() != (expected == Width::W32) {
            return Err(DecodeError::WidthMismatch { expected });
        }
        let mut f = Fields { word, inst, ctx };
        match self {
            Format::Sb => f.imm(8, 8),
            Format::Sbr => {
                f.data(S2)?;
                f.imm(8, 4);
            }
            Format::Sc => f.imm(8, 8),
            // The one register is both source and destination.
            Format::Sr => {
                f.data(S1)?;
                f.data(S1)?;
            }
            Format::Src => {
                f.slot(S1)?;
                f.imm(12, 4);
            }
            Format::Srr => {
                f.slot(S1)?;
                f.slot(S2)?;
            }
            Format::Slr => {
                f.data(S1)?;
                f.data(S2)?;
            }
            Format::Slro | Format::Ssro => {
                f.data(S1)?;
                f.imm(12, 4);
            }
            Format::Sro => {
                f.imm(8, 4);
                f.data(S2)?;
            }
            Format::Srrs => {
                f.slot(S1)?;
                f.slot(S2)?;
                f.imm(6, 2);
            }
            Format::Sbc | Format::Sbrn => {
                f.imm(8, 4);
                f.imm(12, 4);
            }
            // Stores name the base first.
            Format::Ssr => {
                f.slot(S2)?;
                f.slot(S1)?;
            }
            Format::Abs => f.abs()?,
            Format::Absb => {
                f.data(S1)?;
                f.frag(&OFF18);
            }
            Format::B => f.frag(&DISP24),
            Format::Bo => {
                f.slot(S1)?;
                f.slot(S2)?;
                f.frag(&OFF10);
            }
            Format::Bol => {
                f.slot(S1)?;
                f.slot(S2)?;
                f.frag(&OFF16);
            }
            Format::Rc => {
                f.dest_slot()?;
                f.slot(S1)?;
                f.imm(12, 9);
            }
            Format::Rcpw => {
                f.slot(D)?;
                f.slot(S1)?;
                f.imm(12, 4);
                f.imm(23, 5);
                f.imm(16, 5);
            }
            Format::Rlc => f.rlc()?,
            Format::Rr => {
                f.dest_slot()?;
                f.slot(S1)?;
                f.slot(S2)?;
                f.imm(16, 2);
            }
            Format::Rr2 => f.data_regs(&[D, S1, S2])?,
            Format::Rrpw => {
                f.data_regs(&[D, S1, S2])?;
                f.imm(23, 5);
                f.imm(16, 5);
            }
            Format::Sys => f.data(S1)?,
            Format::Rrr2 | Format::Rrrr => f.data_regs(&[D, S1, S2, S3])?,
            Format::Rrr1 | Format::Rrr => {
                f.data_regs(&[D, S1, S2])?;
                f.imm(16, 2);
                f.data(S3)?;
            }
            Format::Bit => {
                f.data_regs(&[D, S1, S2])?;
                f.imm(16, 5);
                f.imm(23, 5);
            }
            Format::Rr1 => {
                f.data_regs(&[D, S1, S2])?;
                f.imm(16, 2);
            }
            Format::Rcr => {
                f.data_regs(&[D, S1])?;
                f.imm(12, 9);
                f.data(S3)?;
            }
            Format::Rrrw => {
                f.data_regs(&[D, S1, S2])?;
                f.imm(16, 5);
                f.data(S3)?;
            }
            Format::Rcrr => {
                f.data_regs(&[D, S1])?;
                f.imm(12, 4);
                f.data(S3)?;
            }
            Format::Rcrw => {
                f.data_regs(&[D, S1])?;
                f.imm(12, 4);
                f.imm(16, 5);
                f.data(S3)?;
            }
            Format::Brr => {
                f.data_regs(&[S1, S2])?;
                f.imm(16, 15);
            }
            Format::Brc => {
                f.data(S1)?;
                f.imm(12, 4);
                f.imm(16, 15);
            }
            Format::Brn => {
                f.data(S1)?;
                f.frag(&BRN_N);
                f.imm(16, 15);
            }
        }
        Ok(())
    }
}

struct Fields<'a, 'b> {
    word: Word,
    inst: &'a mut InstructionBuilder,
    ctx: &'a FormatContext<'b>,
}

impl Fields<'_, '_> {
    fn raw(&self, offset: u32) -> u32 {
        self.word.field(Field::new(offset, 4))
    }

    fn fixed(&mut self, class: RegClass, offset: u32) -> Result<(), DecodeError> {
        let reg = self.ctx.registers.resolve(class, self.raw(offset))?;
        self.inst.push_reg(class, reg);
        Ok(())
    }

    fn data(&mut self, offset: u32) -> Result<(), DecodeError> {
        self.fixed(RegClass::Data, offset)
    }

    fn data_regs(&mut self, offsets: &[u32]) -> Result<(), DecodeError> {
        offsets.iter().try_for_each(|&offset| self.data(offset))
    }

    /// Register whose class the opcode declares for the next slot.
    fn slot(&mut self, offset: u32) -> Result<(), DecodeError> {
        let slot = self.inst.len();
        let (class, reg) =
            self.ctx
                .registers
                .resolve_operand(self.ctx.desc.operand(slot), slot, self.raw(offset))?;
        self.inst.push_reg(class, reg);
        Ok(())
    }

    /// Long-form destination; tied opcodes list it twice.
    fn dest_slot(&mut self) -> Result<(), DecodeError> {
        self.slot(D)?;
        if self.ctx.desc.is_tied() {
            if let Some(&dest) = self.inst.last() {
                self.inst.push(dest);
            }
        }
        Ok(())
    }

    fn imm(&mut self, offset: u32, width: u32) {
        let value = self.word.field(Field::new(offset, width));
        self.inst.push_imm(value, width);
    }

    fn frag(&mut self, fragments: &[Fragment]) {
        let value = self.word.assemble(fragments);
        self.inst.push_imm(value, fragments_width(fragments));
    }

    /// Whether slot 0 holds a register. A descriptor that declares
    /// nothing cannot order the operands.
    fn leads_with_reg(&self) -> Result<bool, DecodeError> {
        match self.ctx.desc.operand(0) {
            Some(OperandInfo::Reg(_)) => Ok(true),
            Some(OperandInfo::Imm) => Ok(false),
            None => Err(DecodeError::OperandDescriptorMismatch { slot: 0 }),
        }
    }

    fn abs(&mut self) -> Result<(), DecodeError> {
        if self.leads_with_reg()? {
            self.slot(S1)?;
            self.frag(&OFF18);
        } else {
            self.frag(&OFF18);
            if self.ctx.desc.num_operands() > 1 {
                self.slot(S1)?;
            }
        }
        Ok(())
    }

    fn rlc(&mut self) -> Result<(), DecodeError> {
        if self.leads_with_reg()? {
            self.slot(D)?;
            if self.ctx.desc.num_operands() == 3 {
                self.slot(S1)?;
            }
            self.imm(12, 16);
        } else {
            self.imm(12, 16);
            self.slot(D)?;
        }
        Ok(())
    }
}
