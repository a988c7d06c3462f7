//! Opcode identifiers and their operand descriptors.
//!
//! Names follow `<mnemonic><Format>`, so `LdWBso` is `LD.W` in the BO
//! short-offset addressing mode and `JeqSbr` is the SBR form of `JEQ`.

use serde::Serialize;

use crate::instructions::{OpcodeDesc, OpcodeTable, OperandInfo};
use crate::register::RegClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Opcode {
    // SB
    JSb,
    CallSb,
    JzSb,
    JnzSb,
    // SBR
    JeqSbr,
    JneSbr,
    JzSbr,
    JnzSbr,
    // SC
    AndSc,
    OrSc,
    MovSc,
    BisrSc,
    // SR
    NotSr,
    SatBSr,
    SatBuSr,
    SatHSr,
    SatHuSr,
    RsubSr,
    // SRC
    MovSrc,
    AddSrc,
    MovASrc,
    AddASrc,
    ShSrc,
    // SRR
    MovSrr,
    AddSrr,
    SubSrr,
    AndSrr,
    OrSrr,
    XorSrr,
    MovASrr,
    MovAaSrr,
    MovDSrr,
    AddASrr,
    // SLR, SLRO, SRO
    LdWSlr,
    LdBuSlr,
    LdWSlro,
    LdBuSlro,
    LdWSro,
    LdBuSro,
    // SRRS
    AddscASrrs,
    // SBC
    JeqSbc,
    JneSbc,
    JeqSbc2,
    JneSbc2,
    // SBRN
    JzTSbrn,
    JnzTSbrn,
    // SSR, SSRO
    StWSsr,
    StBSsr,
    StASsr,
    StWSsro,
    StBSsro,

    // ABS
    LdWAbs,
    LdDAbs,
    LdAAbs,
    LdDaAbs,
    LdBAbs,
    LdBuAbs,
    LdHAbs,
    LdHuAbs,
    StWAbs,
    StDAbs,
    StAAbs,
    StDaAbs,
    StBAbs,
    StHAbs,
    LeaAbs,
    // ABSB
    StTAbsb,
    // B
    JB,
    CallB,
    JaB,
    JlB,
    CallaB,
    JlaB,
    // BO, post-increment / pre-increment / short offset
    LdBPos,
    LdWPos,
    LdDPos,
    LdAPos,
    LdDaPos,
    LdBPre,
    LdWPre,
    LdDPre,
    LdAPre,
    LdDaPre,
    LdBBso,
    LdBuBso,
    LdHBso,
    LdHuBso,
    LdWBso,
    LdDBso,
    LdABso,
    LdDaBso,
    // BO, bit-reverse / circular
    LdBBrev,
    LdWBrev,
    LdDBrev,
    LdABrev,
    LdDaBrev,
    LdBCirc,
    LdWCirc,
    LdDCirc,
    LdACirc,
    LdDaCirc,
    StBPos,
    StWPos,
    StDPos,
    StAPos,
    StDaPos,
    StBPre,
    StWPre,
    StDPre,
    StAPre,
    StDaPre,
    StBBso,
    StHBso,
    StWBso,
    StDBso,
    StABso,
    StDaBso,
    StBBrev,
    StWBrev,
    StDBrev,
    StABrev,
    StDaBrev,
    StBCirc,
    StWCirc,
    StDCirc,
    StACirc,
    StDaCirc,
    LeaBo,
    // BOL
    LdWBol,
    LdABol,
    LeaBol,
    StWBol,
    // RC
    AddRc,
    RsubRc,
    EqRc,
    AndRc,
    OrRc,
    XorRc,
    AndEqRc,
    AndNeRc,
    AndLtRc,
    AndLtURc,
    AndGeRc,
    AndGeURc,
    OrEqRc,
    OrNeRc,
    OrLtRc,
    OrLtURc,
    OrGeRc,
    OrGeURc,
    XorEqRc,
    XorNeRc,
    XorLtRc,
    XorLtURc,
    XorGeRc,
    XorGeURc,
    // RCPW
    InsertRcpw,
    ImaskRcpw,
    // RLC
    AddiRlc,
    AddihRlc,
    AddihARlc,
    MovRlc,
    MovURlc,
    MovhRlc,
    MovhARlc,
    MtcrRlc,
    MfcrRlc,
    // RR
    AddRr,
    SubRr,
    EqRr,
    MovRr,
    AndRr,
    OrRr,
    XorRr,
    MovAaRr,
    AddARr,
    SubARr,
    MovDRr,
    MovARr,
    AndEqRr,
    AndNeRr,
    AndLtRr,
    AndLtURr,
    AndGeRr,
    AndGeURr,
    OrEqRr,
    OrNeRr,
    OrLtRr,
    OrLtURr,
    OrGeRr,
    OrGeURr,
    XorEqRr,
    XorNeRr,
    XorLtRr,
    XorLtURr,
    XorGeRr,
    XorGeURr,
    // RR2
    MulRr2,
    MulURr2,
    // RRPW
    InsertRrpw,
    ExtrRrpw,
    ExtrURrpw,
    DextrRrpw,
    // SYS
    RestoreSys,
    DisableSys,
    // RRR2, RRR1
    MaddRrr2,
    MsubRrr2,
    MaddQRrr1,
    MsubQRrr1,
    // BIT
    AndAndTBit,
    AndTBit,
    OrTBit,
    NandTBit,
    // RR1
    MulQRr1,
    MulHRr1,
    // RCR
    MaddRcr,
    MsubRcr,
    CaddRcr,
    SelRcr,
    // RRRW, RCRR, RRRR
    InsertRrrw,
    ExtrRrrw,
    ExtrURrrw,
    InsertRcrr,
    ExtrRrrr,
    ExtrURrrr,
    DextrRrrr,
    // BRR
    JeqBrr,
    JneBrr,
    JltBrr,
    JltUBrr,
    JgeBrr,
    JgeUBrr,
    // BRC
    JeqBrc,
    JneBrc,
    JltBrc,
    JltUBrc,
    JgeBrc,
    JgeUBrc,
    // RRR
    CaddRrr,
    SelRrr,
    SelnRrr,
    // RCRW
    InsertRcrw,
    // BRN
    JzTBrn,
    JnzTBrn,
}

const D: OperandInfo = OperandInfo::Reg(RegClass::Data);
const A: OperandInfo = OperandInfo::Reg(RegClass::Addr);
const E: OperandInfo = OperandInfo::Reg(RegClass::Ext);
const P: OperandInfo = OperandInfo::Reg(RegClass::PairAddr);
const I: OperandInfo = OperandInfo::Imm;

const IMM: OpcodeDesc = OpcodeDesc::new(&[I]);
const IMM2: OpcodeDesc = OpcodeDesc::new(&[I, I]);
const D_I: OpcodeDesc = OpcodeDesc::new(&[D, I]);
const A_I: OpcodeDesc = OpcodeDesc::new(&[A, I]);
const I_D: OpcodeDesc = OpcodeDesc::new(&[I, D]);
const D_D: OpcodeDesc = OpcodeDesc::new(&[D, D]);
const D_A_I: OpcodeDesc = OpcodeDesc::new(&[D, A, I]);
const E_A_I: OpcodeDesc = OpcodeDesc::new(&[E, A, I]);
const A_A_I: OpcodeDesc = OpcodeDesc::new(&[A, A, I]);
const P_A_I: OpcodeDesc = OpcodeDesc::new(&[P, A, I]);
const D_P_I: OpcodeDesc = OpcodeDesc::new(&[D, P, I]);
const E_P_I: OpcodeDesc = OpcodeDesc::new(&[E, P, I]);
const A_P_I: OpcodeDesc = OpcodeDesc::new(&[A, P, I]);
const P_P_I: OpcodeDesc = OpcodeDesc::new(&[P, P, I]);
const D_D_I: OpcodeDesc = OpcodeDesc::new(&[D, D, I]);
const D_I_I: OpcodeDesc = OpcodeDesc::new(&[D, I, I]);
const D_D_D: OpcodeDesc = OpcodeDesc::new(&[D, D, D]);
const D_D_D_I: OpcodeDesc = OpcodeDesc::new(&[D, D, D, I]);
const D_D_D_D: OpcodeDesc = OpcodeDesc::new(&[D, D, D, D]);
const D_D_I_D: OpcodeDesc = OpcodeDesc::new(&[D, D, I, D]);
const D_D_D_I_I: OpcodeDesc = OpcodeDesc::new(&[D, D, D, I, I]);
const D_D_D_I_D: OpcodeDesc = OpcodeDesc::new(&[D, D, D, I, D]);
const D_D_I_I_D: OpcodeDesc = OpcodeDesc::new(&[D, D, I, I, D]);
const RC_TIED: OpcodeDesc = OpcodeDesc::tied(&[D, D, D, I]);
const RR_TIED: OpcodeDesc = OpcodeDesc::tied(&[D, D, D, D, I]);

fn descriptors() -> Vec<(Opcode, OpcodeDesc)> {
    use Opcode::*;
    let mut entries = vec![
        (JSb, IMM),
        (CallSb, IMM),
        (JzSb, IMM),
        (JnzSb, IMM),
        (JeqSbr, D_I),
        (JneSbr, D_I),
        (JzSbr, D_I),
        (JnzSbr, D_I),
        (AndSc, IMM),
        (OrSc, IMM),
        (MovSc, IMM),
        (BisrSc, IMM),
        (MovSrc, D_I),
        (AddSrc, D_I),
        (MovASrc, A_I),
        (AddASrc, A_I),
        (ShSrc, D_I),
        (MovASrr, OpcodeDesc::new(&[A, D])),
        (MovAaSrr, OpcodeDesc::new(&[A, A])),
        (MovDSrr, OpcodeDesc::new(&[D, A])),
        (AddASrr, OpcodeDesc::new(&[A, A])),
        (LdWSlro, D_I),
        (LdBuSlro, D_I),
        (LdWSro, I_D),
        (LdBuSro, I_D),
        (AddscASrrs, A_A_I),
        (JeqSbc, IMM2),
        (JneSbc, IMM2),
        (JeqSbc2, IMM2),
        (JneSbc2, IMM2),
        (JzTSbrn, IMM2),
        (JnzTSbrn, IMM2),
        (StWSsr, OpcodeDesc::new(&[A, D])),
        (StBSsr, OpcodeDesc::new(&[A, D])),
        (StASsr, OpcodeDesc::new(&[A, A])),
        (StWSsro, D_I),
        (StBSsro, D_I),
        (LdWAbs, D_I),
        (LdDAbs, OpcodeDesc::new(&[E, I])),
        (LdAAbs, A_I),
        (LdDaAbs, OpcodeDesc::new(&[P, I])),
        (LdBAbs, D_I),
        (LdBuAbs, D_I),
        (LdHAbs, D_I),
        (LdHuAbs, D_I),
        (StWAbs, I_D),
        (StDAbs, OpcodeDesc::new(&[I, E])),
        (StAAbs, OpcodeDesc::new(&[I, A])),
        (StDaAbs, OpcodeDesc::new(&[I, P])),
        (StBAbs, I_D),
        (StHAbs, I_D),
        (LeaAbs, A_I),
        (StTAbsb, D_I),
        (JB, IMM),
        (CallB, IMM),
        (JaB, IMM),
        (JlB, IMM),
        (CallaB, IMM),
        (JlaB, IMM),
        (LeaBo, A_A_I),
        (LdWBol, D_A_I),
        (LdABol, A_A_I),
        (LeaBol, A_A_I),
        (StWBol, D_A_I),
        (AddRc, D_D_I),
        (RsubRc, D_D_I),
        (EqRc, D_D_I),
        (AndRc, D_D_I),
        (OrRc, D_D_I),
        (XorRc, D_D_I),
        (InsertRcpw, OpcodeDesc::new(&[D, D, I, I, I])),
        (ImaskRcpw, OpcodeDesc::new(&[E, D, I, I, I])),
        (AddiRlc, D_D_I),
        (AddihRlc, D_D_I),
        (AddihARlc, A_A_I),
        (MovRlc, D_I),
        (MovURlc, D_I),
        (MovhRlc, D_I),
        (MovhARlc, A_I),
        (MtcrRlc, I_D),
        (MfcrRlc, D_I),
        (AddRr, D_D_D_I),
        (SubRr, D_D_D_I),
        (EqRr, D_D_D_I),
        (MovRr, D_D_D_I),
        (AndRr, D_D_D_I),
        (OrRr, D_D_D_I),
        (XorRr, D_D_D_I),
        (MovAaRr, OpcodeDesc::new(&[A, D, A, I])),
        (AddARr, OpcodeDesc::new(&[A, A, A, I])),
        (SubARr, OpcodeDesc::new(&[A, A, A, I])),
        (MovDRr, OpcodeDesc::new(&[D, D, A, I])),
        (MovARr, OpcodeDesc::new(&[A, D, D, I])),
        (MulRr2, D_D_D),
        (MulURr2, D_D_D),
        (RestoreSys, OpcodeDesc::new(&[D])),
        (DisableSys, OpcodeDesc::new(&[D])),
        (MaddRrr2, D_D_D_D),
        (MsubRrr2, D_D_D_D),
        (MaddQRrr1, D_D_D_I_D),
        (MsubQRrr1, D_D_D_I_D),
        (AndAndTBit, D_D_D_I_I),
        (AndTBit, D_D_D_I_I),
        (OrTBit, D_D_D_I_I),
        (NandTBit, D_D_D_I_I),
        (MulQRr1, D_D_D_I),
        (MulHRr1, D_D_D_I),
        (MaddRcr, D_D_I_D),
        (MsubRcr, D_D_I_D),
        (CaddRcr, D_D_I_D),
        (SelRcr, D_D_I_D),
        (InsertRrrw, D_D_D_I_D),
        (ExtrRrrw, D_D_D_I_D),
        (ExtrURrrw, D_D_D_I_D),
        (InsertRcrr, D_D_I_D),
        (ExtrRrrr, D_D_D_D),
        (ExtrURrrr, D_D_D_D),
        (DextrRrrr, D_D_D_D),
        (CaddRrr, D_D_D_I_D),
        (SelRrr, D_D_D_I_D),
        (SelnRrr, D_D_D_I_D),
        (InsertRcrw, D_D_I_I_D),
        (JzTBrn, D_I_I),
        (JnzTBrn, D_I_I),
    ];

    let groups: [(&[Opcode], OpcodeDesc); 21] = [
        (&[NotSr, SatBSr, SatBuSr, SatHSr, SatHuSr, RsubSr], D_D),
        (&[MovSrr, AddSrr, SubSrr, AndSrr, OrSrr, XorSrr], D_D),
        (&[LdWSlr, LdBuSlr], D_D),
        (&[LdBPos, LdWPos, LdBPre, LdWPre, LdBBso, LdBuBso, LdHBso, LdHuBso, LdWBso], D_A_I),
        (&[StBPos, StWPos, StBPre, StWPre, StBBso, StHBso, StWBso], D_A_I),
        (&[LdDPos, LdDPre, LdDBso, StDPos, StDPre, StDBso], E_A_I),
        (&[LdAPos, LdAPre, LdABso, StAPos, StAPre, StABso], A_A_I),
        (&[LdDaPos, LdDaPre, LdDaBso, StDaPos, StDaPre, StDaBso], P_A_I),
        (&[LdBBrev, LdWBrev, LdBCirc, LdWCirc, StBBrev, StWBrev, StBCirc, StWCirc], D_P_I),
        (&[LdDBrev, LdDCirc, StDBrev, StDCirc], E_P_I),
        (&[LdABrev, LdACirc, StABrev, StACirc], A_P_I),
        (&[LdDaBrev, LdDaCirc, StDaBrev, StDaCirc], P_P_I),
        (&[AndEqRc, AndNeRc, AndLtRc, AndLtURc, AndGeRc, AndGeURc], RC_TIED),
        (&[OrEqRc, OrNeRc, OrLtRc, OrLtURc, OrGeRc, OrGeURc], RC_TIED),
        (&[XorEqRc, XorNeRc, XorLtRc, XorLtURc, XorGeRc, XorGeURc], RC_TIED),
        (&[AndEqRr, AndNeRr, AndLtRr, AndLtURr, AndGeRr, AndGeURr], RR_TIED),
        (&[OrEqRr, OrNeRr, OrLtRr, OrLtURr, OrGeRr, OrGeURr], RR_TIED),
        (&[XorEqRr, XorNeRr, XorLtRr, XorLtURr, XorGeRr, XorGeURr], RR_TIED),
        (&[InsertRrpw, ExtrRrpw, ExtrURrpw, DextrRrpw], D_D_D_I_I),
        (&[JeqBrr, JneBrr, JltBrr, JltUBrr, JgeBrr, JgeUBrr], D_D_I),
        (&[JeqBrc, JneBrc, JltBrc, JltUBrc, JgeBrc, JgeUBrc], D_I_I),
    ];
    for (opcodes, desc) in groups {
        entries.extend(opcodes.iter().map(|&op| (op, desc)));
    }
    entries
}

impl OpcodeTable {
    /// Descriptors for every opcode the TriCore tables can yield.
    pub fn tc16() -> Self {
        OpcodeTable::from_entries(descriptors())
    }
}
