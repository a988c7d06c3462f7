//! Register classes and raw-index resolution.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::instructions::OperandInfo;

/// Largest index, after the class transform, any class accepts.
pub const MAX_INDEX: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegClass {
    /// D0..D15
    Data,
    /// A0..A15
    Addr,
    /// E-registers, each aliasing a pair of data registers.
    Ext,
    /// P-registers, each aliasing a pair of address registers.
    PairAddr,
}

impl RegClass {
    pub const ALL: [RegClass; 4] = [RegClass::Data, RegClass::Addr, RegClass::Ext, RegClass::PairAddr];

    pub fn transform(self) -> IndexTransform {
        match self {
            RegClass::Data | RegClass::Addr => IndexTransform::Identity,
            RegClass::Ext | RegClass::PairAddr => IndexTransform::Halve,
        }
    }

    fn bank(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTransform {
    Identity,
    /// Paired classes name every other base register.
    Halve,
}

impl IndexTransform {
    pub fn apply(self, raw: u32) -> u32 {
        match self {
            IndexTransform::Identity => raw,
            IndexTransform::Halve => raw / 2,
        }
    }
}

/// Physical register identifier. Distinct classes never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhysReg(pub u16);

/// Register-class to physical-register mapping.
///
/// Built once and shared read-only by every decode.
#[derive(Debug, Clone)]
pub struct RegisterInfo {
    banks: [Vec<PhysReg>; 4],
}

impl RegisterInfo {
    /// Sixteen registers per class; ids are laid out A, D, E, P starting at 1.
    pub fn tc16() -> Self {
        let bank = |first: u16| (first..first + 16).map(PhysReg).collect::<Vec<_>>();
        let mut banks: [Vec<PhysReg>; 4] = Default::default();
        banks[RegClass::Addr.bank()] = bank(1);
        banks[RegClass::Data.bank()] = bank(17);
        banks[RegClass::Ext.bank()] = bank(33);
        banks[RegClass::PairAddr.bank()] = bank(49);
        Self { banks }
    }

    /// Replace the registers of one class.
    pub fn with_bank(mut self, class: RegClass, regs: Vec<PhysReg>) -> Self {
        self.banks[class.bank()] = regs;
        self
    }

    pub fn bank(&self, class: RegClass) -> &[PhysReg] {
        &self.banks[class.bank()]
    }

    /// Resolve a raw field value for a known class.
    pub fn resolve(&self, class: RegClass, raw: u32) -> Result<PhysReg, DecodeError> {
        let invalid = DecodeError::InvalidRegisterIndex { class, index: raw };
        let index = class.transform().apply(raw);
        if index > MAX_INDEX {
            return Err(invalid);
        }
        self.banks[class.bank()]
            .get(index as usize)
            .copied()
            .ok_or(invalid)
    }

    /// Resolve a raw field value for an operand slot whose class comes from
    /// the opcode's descriptor.
    pub fn resolve_operand(
        &self,
        info: Option<&OperandInfo>,
        slot: usize,
        raw: u32,
    ) -> Result<(RegClass, PhysReg), DecodeError> {
        match info {
            Some(&OperandInfo::Reg(class)) => Ok((class, self.resolve(class, raw)?)),
            _ => Err(DecodeError::OperandDescriptorMismatch { slot }),
        }
    }
}

impl Default for RegisterInfo {
    fn default() -> Self {
        Self::tc16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_class_bounds() {
        let regs = RegisterInfo::tc16();
        for class in [RegClass::Data, RegClass::Addr] {
            assert!(regs.resolve(class, 15).is_ok());
            assert_eq!(
                regs.resolve(class, 16),
                Err(DecodeError::InvalidRegisterIndex { class, index: 16 })
            );
        }
    }

    #[test]
    fn paired_class_halves_before_checking() {
        let regs = RegisterInfo::tc16();
        for class in [RegClass::Ext, RegClass::PairAddr] {
            assert_eq!(regs.resolve(class, 30), Ok(regs.bank(class)[15]));
            assert_eq!(regs.resolve(class, 31), Ok(regs.bank(class)[15]));
            assert_eq!(
                regs.resolve(class, 32),
                Err(DecodeError::InvalidRegisterIndex { class, index: 32 })
            );
        }
        assert_eq!(regs.resolve(RegClass::Ext, 4), regs.resolve(RegClass::Ext, 5));
    }

    #[test]
    fn classes_have_disjoint_ids() {
        let regs = RegisterInfo::tc16();
        let data = regs.resolve(RegClass::Data, 3).unwrap();
        let addr = regs.resolve(RegClass::Addr, 3).unwrap();
        assert_ne!(data, addr);
        let mut all: Vec<PhysReg> = RegClass::ALL.iter().flat_map(|c| regs.bank(*c).to_vec()).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 64);
    }

    #[test]
    fn short_bank_rejects_missing_entries() {
        let regs = RegisterInfo::tc16().with_bank(RegClass::Ext, vec![PhysReg(100), PhysReg(101)]);
        assert_eq!(regs.resolve(RegClass::Ext, 2), Ok(PhysReg(101)));
        assert_eq!(
            regs.resolve(RegClass::Ext, 4),
            Err(DecodeError::InvalidRegisterIndex { class: RegClass::Ext, index: 4 })
        );
    }

    #[test]
    fn descriptor_must_declare_a_register() {
        let regs = RegisterInfo::tc16();
        assert_eq!(
            regs.resolve_operand(Some(&OperandInfo::Imm), 0, 1),
            Err(DecodeError::OperandDescriptorMismatch { slot: 0 })
        );
        assert_eq!(
            regs.resolve_operand(None, 3, 1),
            Err(DecodeError::OperandDescriptorMismatch { slot: 3 })
        );
        // Mismatch wins even when the index is also out of range.
        assert_eq!(
            regs.resolve_operand(Some(&OperandInfo::Imm), 1, 99),
            Err(DecodeError::OperandDescriptorMismatch { slot: 1 })
        );
        let (class, reg) = regs
            .resolve_operand(Some(&OperandInfo::Reg(RegClass::Addr)), 0, 7)
            .unwrap();
        assert_eq!(class, RegClass::Addr);
        assert_eq!(reg, regs.bank(RegClass::Addr)[7]);
    }
}
