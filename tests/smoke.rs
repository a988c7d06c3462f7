use pretty_assertions::assert_eq;

use tricore_decode::instructions::OpcodeTable;
use tricore_decode::isa::tc16::{long_table, short_table};
use tricore_decode::table::layout::{decode, switch};
use tricore_decode::table::DecisionTable;
use tricore_decode::{
    DecodeError, Decoder, DecoderConfig, Format, Opcode, Operand, PhysReg, RegClass, RegisterInfo,
    TableError, Tc16Decoder, Width, Word,
};

fn enc_b(op1: u32, disp24: u32) -> u32 {
    ((disp24 & 0xFFFF) << 16) | (((disp24 >> 16) & 0xFF) << 8) | op1
}

#[test]
fn one_byte_is_insufficient() {
    let dec = Tc16Decoder::new();
    assert_eq!(
        dec.decode(&[0x3C], 0),
        Err(DecodeError::InsufficientData { needed: 2, available: 1 })
    );
    assert_eq!(
        dec.decode(&[], 0),
        Err(DecodeError::InsufficientData { needed: 2, available: 0 })
    );
}

#[test]
fn long_form_needs_four_bytes() {
    let dec = Tc16Decoder::new();
    // J disp24 with only its first halfword present.
    assert_eq!(
        dec.decode(&[0x1D, 0x00], 0),
        Err(DecodeError::InsufficientData { needed: 4, available: 2 })
    );
}

#[test]
fn short_match_never_reads_the_long_word() {
    let dec = Tc16Decoder::new();
    // J disp8 with nothing after it: a long read would fail.
    let inst = dec.decode(&[0x3C, 0x04], 0x100).unwrap();
    assert_eq!(inst.opcode(), Opcode::JSb);
    assert_eq!(inst.size(), 2);
    assert_eq!(inst.width(), Width::W16);
    assert_eq!(inst.address(), 0x100);

    let inst = dec.decode(&[0x3C, 0x04, 0xFF, 0xFF], 0).unwrap();
    assert_eq!(inst.opcode(), Opcode::JSb);
    assert_eq!(inst.size(), 2);
}

#[test]
fn long_form_falls_back_to_second_table() {
    let dec = Tc16Decoder::new();
    let inst = dec.decode(&enc_b(0x1D, 0x12_3456).to_le_bytes(), 0).unwrap();
    assert_eq!(inst.opcode(), Opcode::JB);
    assert_eq!(inst.size(), 4);
    assert_eq!(inst.operands(), &[Operand::imm(0x12_3456, 24)]);
}

#[test]
fn decode_is_deterministic() {
    let dec = Tc16Decoder::new();
    let bytes = 0x1234_5685u32.to_le_bytes();
    let first = dec.decode(&bytes, 0x8000_0000);
    let second = dec.decode(&bytes, 0x8000_0000);
    assert_eq!(first, second);
    assert!(first.is_ok());
}

#[test]
fn width_mismatch_in_short_table_retries_long() {
    // A broken short table that binds a long-form op1 to a 16-bit format.
    let short = DecisionTable::new(Width::W16, switch(0, 8, vec![(0x1D, decode(Opcode::JSb, Format::Sb))]));
    let dec = Tc16Decoder::from_parts(
        RegisterInfo::tc16(),
        OpcodeTable::tc16(),
        short,
        long_table(),
        DecoderConfig::default(),
    )
    .unwrap();

    let raw = enc_b(0x1D, 0x40);
    assert_eq!(
        dec.decode_word(Word::short(raw as u16), 0),
        Err(DecodeError::WidthMismatch { expected: Width::W16 })
    );
    let inst = dec.decode(&raw.to_le_bytes(), 0).unwrap();
    assert_eq!(inst.opcode(), Opcode::JB);
    assert_eq!(inst.size(), 4);
}

#[test]
fn failed_register_leaves_no_instruction() {
    // Only D0..D3 exist.
    let regs = RegisterInfo::tc16().with_bank(RegClass::Data, (17..21).map(PhysReg).collect());
    let dec = Tc16Decoder::from_parts(
        regs,
        OpcodeTable::tc16(),
        short_table(),
        long_table(),
        DecoderConfig::default(),
    )
    .unwrap();
    // ADD D2, D9 (SRR): s1 resolves, s2 does not.
    let raw = (9 << 12) | (2 << 8) | 0x42;
    assert_eq!(
        dec.decode_word(Word::short(raw as u16), 0),
        Err(DecodeError::InvalidRegisterIndex { class: RegClass::Data, index: 9 })
    );
    assert!(dec.decode(&(raw as u16).to_le_bytes(), 0).is_err());

    // Same instruction with registers in range is fine.
    let raw = (3 << 12) | (2 << 8) | 0x42;
    let inst = dec.decode(&(raw as u16).to_le_bytes(), 0).unwrap();
    assert_eq!(inst.operands().len(), 2);
}

#[test]
fn unknown_encoding_reports_no_match() {
    let dec = Tc16Decoder::new();
    assert_eq!(
        dec.decode(&[0x00, 0x00, 0x00, 0x00], 0),
        Err(DecodeError::NoTableMatch { word: 0, width: Width::W32 })
    );
}

#[test]
fn decoder_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tc16Decoder>();

    let dec = Tc16Decoder::new();
    let words: Vec<u32> = (0..64u32).map(|i| enc_b(0x1D, i * 0x101)).collect();
    let expected: Vec<_> = words.iter().map(|w| dec.decode(&w.to_le_bytes(), 0)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| words.iter().map(|w| dec.decode(&w.to_le_bytes(), 0)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn swapped_tables_are_rejected() {
    let swapped = Tc16Decoder::from_parts(
        RegisterInfo::tc16(),
        OpcodeTable::tc16(),
        long_table(),
        short_table(),
        DecoderConfig::default(),
    );
    assert_eq!(
        swapped.err(),
        Some(TableError::WidthMismatch { role: "short", expected: Width::W16, found: Width::W32 })
    );

    let short_as_long = Tc16Decoder::from_parts(
        RegisterInfo::tc16(),
        OpcodeTable::tc16(),
        short_table(),
        DecisionTable::new(Width::W16, Vec::new()),
        DecoderConfig::default(),
    );
    assert_eq!(
        short_as_long.err(),
        Some(TableError::WidthMismatch { role: "long", expected: Width::W32, found: Width::W16 })
    );
}
