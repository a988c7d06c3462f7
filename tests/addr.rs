use pretty_assertions::assert_eq;

use tricore_decode::{DecodedInstruction, Decoder, Opcode, Operand, RegClass, RegisterInfo, Tc16Decoder};

fn enc_rr(op1: u32, op2: u32, d: u32, s1: u32, s2: u32, n: u32) -> u32 {
    (d << 28) | (op2 << 20) | (n << 16) | (s2 << 12) | (s1 << 8) | op1
}

fn enc_rlc(op1: u32, d: u32, s1: u32, const16: u32) -> u32 {
    (d << 28) | (const16 << 12) | (s1 << 8) | op1
}

fn decode32(raw: u32) -> DecodedInstruction {
    Tc16Decoder::new().decode(&raw.to_le_bytes(), 0).unwrap()
}

fn decode16(raw: u32) -> DecodedInstruction {
    Tc16Decoder::new().decode(&(raw as u16).to_le_bytes(), 0).unwrap()
}

fn reg(class: RegClass, raw: u32) -> Operand {
    Operand::reg(class, RegisterInfo::tc16().resolve(class, raw).unwrap())
}

fn d(raw: u32) -> Operand {
    reg(RegClass::Data, raw)
}

fn a(raw: u32) -> Operand {
    reg(RegClass::Addr, raw)
}

#[test]
fn rr_address_moves_mix_classes_per_slot() {
    let inst = decode32(enc_rr(0x01, 0x00, 2, 3, 4, 0));
    assert_eq!(inst.opcode(), Opcode::MovAaRr);
    assert_eq!(inst.operands(), &[a(2), d(3), a(4), Operand::imm(0, 2)]);

    let inst = decode32(enc_rr(0x01, 0x01, 2, 3, 4, 1));
    assert_eq!(inst.opcode(), Opcode::AddARr);
    assert_eq!(inst.operands(), &[a(2), a(3), a(4), Operand::imm(1, 2)]);

    let inst = decode32(enc_rr(0x01, 0x4C, 2, 3, 4, 0));
    assert_eq!(inst.opcode(), Opcode::MovDRr);
    assert_eq!(inst.operands(), &[d(2), d(3), a(4), Operand::imm(0, 2)]);

    let inst = decode32(enc_rr(0x01, 0x63, 2, 3, 4, 0));
    assert_eq!(inst.opcode(), Opcode::MovARr);
    assert_eq!(inst.operands(), &[a(2), d(3), d(4), Operand::imm(0, 2)]);
}

#[test]
fn rlc_three_operand_forms() {
    let inst = decode32(enc_rlc(0x1B, 1, 2, 0xFFFF));
    assert_eq!(inst.opcode(), Opcode::AddiRlc);
    assert_eq!(inst.operands(), &[d(1), d(2), Operand::imm(0xFFFF, 16)]);

    let inst = decode32(enc_rlc(0x11, 10, 11, 0xD000));
    assert_eq!(inst.opcode(), Opcode::AddihARlc);
    assert_eq!(inst.operands(), &[a(10), a(11), Operand::imm(0xD000, 16)]);
}

#[test]
fn rlc_two_operand_forms_follow_descriptor_order() {
    let inst = decode32(enc_rlc(0xBB, 2, 0, 2));
    assert_eq!(inst.opcode(), Opcode::MovURlc);
    assert_eq!(inst.operands(), &[d(2), Operand::imm(2, 16)]);

    let inst = decode32(enc_rlc(0x91, 15, 0, 0x8000));
    assert_eq!(inst.opcode(), Opcode::MovhARlc);
    assert_eq!(inst.operands(), &[a(15), Operand::imm(0x8000, 16)]);

    // MTCR names the core register first.
    let inst = decode32(enc_rlc(0xCD, 4, 0, 0xFE04));
    assert_eq!(inst.opcode(), Opcode::MtcrRlc);
    assert_eq!(inst.operands(), &[Operand::imm(0xFE04, 16), d(4)]);

    let inst = decode32(enc_rlc(0x4D, 4, 0, 0xFE04));
    assert_eq!(inst.opcode(), Opcode::MfcrRlc);
    assert_eq!(inst.operands(), &[d(4), Operand::imm(0xFE04, 16)]);
}

#[test]
fn short_address_forms() {
    let inst = decode16((0x9 << 12) | (4 << 8) | 0xA0);
    assert_eq!(inst.opcode(), Opcode::MovASrc);
    assert_eq!(inst.operands(), &[a(4), Operand::imm(9, 4)]);

    let inst = decode16((0x1 << 12) | (4 << 8) | 0xB0);
    assert_eq!(inst.opcode(), Opcode::AddASrc);
    assert_eq!(inst.operands(), &[a(4), Operand::imm(1, 4)]);

    let inst = decode16((3 << 12) | (4 << 8) | 0x60);
    assert_eq!(inst.opcode(), Opcode::MovASrr);
    assert_eq!(inst.operands(), &[a(4), d(3)]);

    let inst = decode16((3 << 12) | (4 << 8) | 0x80);
    assert_eq!(inst.opcode(), Opcode::MovDSrr);
    assert_eq!(inst.operands(), &[d(4), a(3)]);

    let inst = decode16((3 << 12) | (4 << 8) | 0x40);
    assert_eq!(inst.opcode(), Opcode::MovAaSrr);
    assert_eq!(inst.operands(), &[a(4), a(3)]);
}

#[test]
fn srrs_shift_lives_in_op1_bits() {
    let inst = decode16((2 << 12) | (5 << 8) | 0x10);
    assert_eq!(inst.opcode(), Opcode::AddscASrrs);
    assert_eq!(inst.operands(), &[a(5), a(2), Operand::imm(0, 2)]);

    // n = 3 turns the low byte into 0xD0.
    let raw = (2 << 12) | (5 << 8) | (3 << 6) | 0x10;
    assert_eq!(raw & 0xFF, 0xD0);
    let inst = decode16(raw);
    assert_eq!(inst.opcode(), Opcode::AddscASrrs);
    assert_eq!(inst.operands(), &[a(5), a(2), Operand::imm(3, 2)]);
}

#[test]
fn srrs_emits_s1_s2_n_rather_than_n_s1_s2_n() {
    let inst = decode16((2 << 12) | (5 << 8) | (1 << 6) | 0x10);
    assert_eq!(inst.operands().len(), 3);
    assert_eq!(inst.operands(), &[a(5), a(2), Operand::imm(1, 2)]);
}
