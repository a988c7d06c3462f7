//! Decision tables for the 16-bit and 32-bit instruction words.
//!
//! `op1` is the low byte of every word. Secondary opcodes (`op2`) sit at a
//! format-specific position and are matched by a nested switch.

use crate::bits::Width;
use crate::config::Features;
use crate::table::layout::{check, decode, require, switch};
use crate::table::{DecisionTable, MatchOp};

use super::formats::Format;
use super::opcodes::Opcode::{self, *};

type Arms = Vec<(u32, Vec<MatchOp>)>;

/// One arm per `(value, opcode)` pair, all in `format`.
fn arms(format: Format, entries: &[(u32, Opcode)]) -> Arms {
    entries
        .iter()
        .map(|&(value, opcode)| (value, decode(opcode, format)))
        .collect()
}

fn op2(start: u8, len: u8, format: Format, entries: &[(u32, Opcode)]) -> Vec<MatchOp> {
    switch(start, len, arms(format, entries))
}

/// Conditional branches with the condition in bit 31.
fn cond31(format: Format, when_clear: Opcode, when_set: Opcode) -> Vec<MatchOp> {
    op2(31, 1, format, &[(0, when_clear), (1, when_set)])
}

pub fn short_table() -> DecisionTable {
    use Format::*;

    // SRRS keeps an operand in bits 6..8, so it is matched on six bits.
    let mut ops = check(0, 6, 0x10, decode(AddscASrrs, Srrs));

    let mut op1: Arms = Vec::new();
    op1.extend(arms(Sb, &[(0x3C, JSb), (0x5C, CallSb), (0x6E, JzSb), (0xEE, JnzSb)]));
    op1.extend(arms(Sbr, &[(0x3E, JeqSbr), (0x7E, JneSbr), (0x76, JzSbr), (0xF6, JnzSbr)]));
    op1.extend(arms(Sc, &[(0x16, AndSc), (0x96, OrSc), (0xDA, MovSc), (0xE0, BisrSc)]));
    op1.push((0x46, op2(12, 4, Sr, &[(0x0, NotSr)])));
    op1.push((
        0x32,
        op2(12, 4, Sr, &[(0x0, SatBSr), (0x1, SatBuSr), (0x2, SatHSr), (0x3, SatHuSr), (0x5, RsubSr)]),
    ));
    op1.extend(arms(
        Src,
        &[(0x82, MovSrc), (0xC2, AddSrc), (0xA0, MovASrc), (0xB0, AddASrc), (0x06, ShSrc)],
    ));
    op1.extend(arms(
        Srr,
        &[
            (0x02, MovSrr),
            (0x42, AddSrr),
            (0xA2, SubSrr),
            (0x26, AndSrr),
            (0xA6, OrSrr),
            (0xC6, XorSrr),
            (0x60, MovASrr),
            (0x40, MovAaSrr),
            (0x80, MovDSrr),
            (0x30, AddASrr),
        ],
    ));
    op1.extend(arms(Slr, &[(0x54, LdWSlr), (0x14, LdBuSlr)]));
    op1.extend(arms(Slro, &[(0x48, LdWSlro), (0x08, LdBuSlro)]));
    op1.extend(arms(Sro, &[(0x4C, LdWSro), (0x0C, LdBuSro)]));
    op1.extend(arms(Sbc, &[(0x1E, JeqSbc), (0x5E, JneSbc)]));
    op1.push((0x9E, require(Features::TC161, decode(JeqSbc2, Sbc))));
    op1.push((0xDE, require(Features::TC161, decode(JneSbc2, Sbc))));
    op1.extend(arms(Sbrn, &[(0x2E, JzTSbrn), (0xAE, JnzTSbrn)]));
    op1.extend(arms(Ssr, &[(0x74, StWSsr), (0x34, StBSsr), (0xF4, StASsr)]));
    op1.extend(arms(Ssro, &[(0x68, StWSsro), (0x28, StBSsro)]));

    ops.extend(switch(0, 8, op1));
    DecisionTable::new(Width::W16, ops)
}

pub fn long_table() -> DecisionTable {
    use Format::*;

    // BRN borrows bit 7 of op1 for the high bit of its bit number.
    let mut ops = check(0, 7, 0x6F, cond31(Brn, JzTBrn, JnzTBrn));

    let mut op1: Arms = Vec::new();

    // ABS
    op1.push((0x85, op2(26, 2, Abs, &[(0, LdWAbs), (1, LdDAbs), (2, LdAAbs), (3, LdDaAbs)])));
    op1.push((0x05, op2(26, 2, Abs, &[(0, LdBAbs), (1, LdBuAbs), (2, LdHAbs), (3, LdHuAbs)])));
    op1.push((0xA5, op2(26, 2, Abs, &[(0, StWAbs), (1, StDAbs), (2, StAAbs), (3, StDaAbs)])));
    op1.push((0x25, op2(26, 2, Abs, &[(0, StBAbs), (2, StHAbs)])));
    op1.push((0xC5, op2(26, 2, Abs, &[(0, LeaAbs)])));
    op1.push((0xD5, op2(26, 2, Absb, &[(0, StTAbsb)])));

    // B
    op1.extend(arms(
        B,
        &[(0x1D, JB), (0x6D, CallB), (0x9D, JaB), (0x5D, JlB), (0xED, CallaB), (0xDD, JlaB)],
    ));

    // BO
    op1.push((
        0x09,
        op2(
            22,
            6,
            Bo,
            &[
                (0x00, LdBPos),
                (0x04, LdWPos),
                (0x05, LdDPos),
                (0x06, LdAPos),
                (0x07, LdDaPos),
                (0x10, LdBPre),
                (0x14, LdWPre),
                (0x15, LdDPre),
                (0x16, LdAPre),
                (0x17, LdDaPre),
                (0x20, LdBBso),
                (0x21, LdBuBso),
                (0x22, LdHBso),
                (0x23, LdHuBso),
                (0x24, LdWBso),
                (0x25, LdDBso),
                (0x26, LdABso),
                (0x27, LdDaBso),
            ],
        ),
    ));
    op1.push((
        0x29,
        op2(
            22,
            6,
            Bo,
            &[
                (0x00, LdBBrev),
                (0x04, LdWBrev),
                (0x05, LdDBrev),
                (0x06, LdABrev),
                (0x07, LdDaBrev),
                (0x10, LdBCirc),
                (0x14, LdWCirc),
                (0x15, LdDCirc),
                (0x16, LdACirc),
                (0x17, LdDaCirc),
            ],
        ),
    ));
    op1.push((
        0x89,
        op2(
            22,
            6,
            Bo,
            &[
                (0x00, StBPos),
                (0x04, StWPos),
                (0x05, StDPos),
                (0x06, StAPos),
                (0x07, StDaPos),
                (0x10, StBPre),
                (0x14, StWPre),
                (0x15, StDPre),
                (0x16, StAPre),
                (0x17, StDaPre),
                (0x20, StBBso),
                (0x22, StHBso),
                (0x24, StWBso),
                (0x25, StDBso),
                (0x26, StABso),
                (0x27, StDaBso),
            ],
        ),
    ));
    op1.push((
        0xA9,
        op2(
            22,
            6,
            Bo,
            &[
                (0x00, StBBrev),
                (0x04, StWBrev),
                (0x05, StDBrev),
                (0x06, StABrev),
                (0x07, StDaBrev),
                (0x10, StBCirc),
                (0x14, StWCirc),
                (0x15, StDCirc),
                (0x16, StACirc),
                (0x17, StDaCirc),
            ],
        ),
    ));
    op1.push((0x49, op2(22, 6, Bo, &[(0x28, LeaBo)])));

    // BOL
    op1.extend(arms(Bol, &[(0x19, LdWBol), (0x99, LdABol), (0xD9, LeaBol), (0x59, StWBol)]));

    // RC
    op1.push((
        0x8B,
        op2(
            21,
            7,
            Rc,
            &[
                (0x00, AddRc),
                (0x08, RsubRc),
                (0x10, EqRc),
                (0x20, AndEqRc),
                (0x21, AndNeRc),
                (0x22, AndLtRc),
                (0x23, AndLtURc),
                (0x24, AndGeRc),
                (0x25, AndGeURc),
                (0x27, OrEqRc),
                (0x28, OrNeRc),
                (0x29, OrLtRc),
                (0x2A, OrLtURc),
                (0x2B, OrGeRc),
                (0x2C, OrGeURc),
                (0x2F, XorEqRc),
                (0x30, XorNeRc),
                (0x31, XorLtRc),
                (0x32, XorLtURc),
                (0x33, XorGeRc),
                (0x34, XorGeURc),
            ],
        ),
    ));
    op1.push((0x8F, op2(21, 7, Rc, &[(0x08, AndRc), (0x0A, OrRc), (0x0C, XorRc)])));

    // RCPW
    op1.push((0xB7, op2(21, 2, Rcpw, &[(0, InsertRcpw), (1, ImaskRcpw)])));

    // RLC
    op1.extend(arms(
        Rlc,
        &[
            (0x1B, AddiRlc),
            (0x9B, AddihRlc),
            (0x11, AddihARlc),
            (0x3B, MovRlc),
            (0xBB, MovURlc),
            (0x7B, MovhRlc),
            (0x91, MovhARlc),
            (0xCD, MtcrRlc),
            (0x4D, MfcrRlc),
        ],
    ));

    // RR
    op1.push((
        0x0B,
        op2(
            20,
            8,
            Rr,
            &[
                (0x00, AddRr),
                (0x08, SubRr),
                (0x10, EqRr),
                (0x1F, MovRr),
                (0x20, AndEqRr),
                (0x21, AndNeRr),
                (0x22, AndLtRr),
                (0x23, AndLtURr),
                (0x24, AndGeRr),
                (0x25, AndGeURr),
                (0x27, OrEqRr),
                (0x28, OrNeRr),
                (0x29, OrLtRr),
                (0x2A, OrLtURr),
                (0x2B, OrGeRr),
                (0x2C, OrGeURr),
                (0x2F, XorEqRr),
                (0x30, XorNeRr),
                (0x31, XorLtRr),
                (0x32, XorLtURr),
                (0x33, XorGeRr),
                (0x34, XorGeURr),
            ],
        ),
    ));
    op1.push((
        0x01,
        op2(
            20,
            8,
            Rr,
            &[(0x00, MovAaRr), (0x01, AddARr), (0x02, SubARr), (0x4C, MovDRr), (0x63, MovARr)],
        ),
    ));
    op1.push((0x0F, op2(20, 8, Rr, &[(0x08, AndRr), (0x0A, OrRr), (0x0C, XorRr)])));

    // RR2, RRPW, SYS
    op1.push((0x73, op2(16, 12, Rr2, &[(0x0A, MulRr2), (0x68, MulURr2)])));
    op1.push((0x37, op2(21, 2, Rrpw, &[(0, InsertRrpw), (2, ExtrRrpw), (3, ExtrURrpw)])));
    op1.push((0x77, op2(21, 2, Rrpw, &[(0, DextrRrpw)])));
    op1.push((0x0D, op2(22, 6, Sys, &[(0x0E, RestoreSys), (0x0F, DisableSys)])));

    // Multiply-accumulate
    op1.push((0x03, op2(16, 8, Rrr2, &[(0x0A, MaddRrr2)])));
    op1.push((0x23, op2(16, 8, Rrr2, &[(0x0A, MsubRrr2)])));
    op1.push((0x43, op2(18, 6, Rrr1, &[(0x02, MaddQRrr1)])));
    op1.push((0x63, op2(18, 6, Rrr1, &[(0x02, MsubQRrr1)])));
    op1.push((0x93, op2(18, 10, Rr1, &[(0x02, MulQRr1)])));
    op1.push((0xB3, op2(18, 10, Rr1, &[(0x1A, MulHRr1)])));

    // BIT
    op1.push((0x47, op2(21, 2, Bit, &[(0, AndAndTBit)])));
    op1.push((0x87, op2(21, 2, Bit, &[(0, AndTBit), (1, OrTBit)])));
    op1.push((0x07, op2(21, 2, Bit, &[(0, NandTBit)])));

    // RCR, RRR
    op1.push((0x13, op2(21, 3, Rcr, &[(1, MaddRcr)])));
    op1.push((0x33, op2(21, 3, Rcr, &[(1, MsubRcr)])));
    op1.push((0xAB, op2(21, 3, Rcr, &[(0, CaddRcr), (4, SelRcr)])));
    op1.push((0x2B, op2(20, 4, Rrr, &[(0, CaddRrr), (4, SelRrr), (5, SelnRrr)])));

    // Bit-field insert and extract
    op1.push((0x57, op2(21, 3, Rrrw, &[(0, InsertRrrw), (2, ExtrRrrw), (3, ExtrURrrw)])));
    op1.push((0x97, op2(21, 3, Rcrr, &[(0, InsertRcrr)])));
    op1.push((0x17, op2(21, 3, Rrrr, &[(2, ExtrRrrr), (3, ExtrURrrr), (4, DextrRrrr)])));
    op1.push((0xD7, op2(21, 3, Rcrw, &[(0, InsertRcrw)])));

    // BRR, BRC
    op1.push((0x5F, cond31(Brr, JeqBrr, JneBrr)));
    op1.push((0x3F, cond31(Brr, JltBrr, JltUBrr)));
    op1.push((0x7F, cond31(Brr, JgeBrr, JgeUBrr)));
    op1.push((0xDF, cond31(Brc, JeqBrc, JneBrc)));
    op1.push((0xBF, cond31(Brc, JltBrc, JltUBrc)));
    op1.push((0xFF, cond31(Brc, JgeBrc, JgeUBrc)));

    ops.extend(switch(0, 8, op1));
    DecisionTable::new(Width::W32, ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MatchOp;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn decoded(table: &DecisionTable) -> Vec<(Opcode, Format)> {
        table
            .ops()
            .iter()
            .filter_map(|op| match *op {
                MatchOp::Decode { opcode, format } | MatchOp::TryDecode { opcode, format, .. } => {
                    Some((opcode, format))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn each_table_only_yields_its_own_width() {
        for table in [short_table(), long_table()] {
            for (opcode, format) in decoded(&table) {
                assert_eq!(format.width(), table.width(), "{opcode:?}");
            }
        }
    }

    #[test]
    fn no_opcode_is_reachable_twice() {
        let mut seen = HashSet::new();
        for table in [short_table(), long_table()] {
            for (opcode, _) in decoded(&table) {
                assert!(seen.insert(opcode), "{opcode:?} appears twice");
            }
        }
    }

    #[test]
    fn primary_opcodes_do_not_overlap() {
        for table in [short_table(), long_table()] {
            let ops = table.ops();
            let start = ops
                .iter()
                .rposition(|op| matches!(op, MatchOp::ExtractField { start: 0, len: 8 }))
                .unwrap();
            let mut values = HashSet::new();
            let mut pc = start + 1;
            while let Some(MatchOp::FilterValue { value, skip }) = ops.get(pc) {
                assert!(values.insert(*value), "op1 {value:#04x} listed twice");
                pc += 1 + skip;
            }
            assert_eq!(ops.get(pc), Some(&MatchOp::Fail));
        }
    }
}
