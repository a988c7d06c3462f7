//! Record dumps for decoded instructions.
//!
//! There is no assembly syntax here: registers print as `<class>#<id>` and
//! immediates as hex with their field width.

use serde::Serialize;
use std::fmt::Write as _;

use tricore_decode::{DecodeError, DecodedInstruction, Operand};

pub fn operand_text(op: &Operand) -> String {
    match *op {
        Operand::Reg { class, reg } => format!("{class:?}#{}", reg.0),
        Operand::Imm { value, bits } => format!("{value:#x}:{bits}"),
    }
}

/// One line per attempt: `addr: [bytes]  Opcode op, op, ...` or an error.
pub fn text_line(
    address: u64,
    bytes: Option<&[u8]>,
    result: &Result<DecodedInstruction, DecodeError>,
) -> String {
    let mut line = format!("{address:#010x}: ");
    if let Some(bytes) = bytes {
        for b in bytes {
            let _ = write!(line, "{b:02x} ");
        }
        line.push(' ');
    }
    match result {
        Ok(inst) => {
            let ops: Vec<String> = inst.operands().iter().map(operand_text).collect();
            let _ = write!(line, "{:?} {}", inst.opcode(), ops.join(", "));
        }
        Err(error) => {
            let _ = write!(line, "<{error}>");
        }
    }
    line.trim_end().to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct Record<'a> {
    pub address: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<&'a DecodedInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Record<'a> {
    pub fn new(
        address: u64,
        bytes: Option<&[u8]>,
        result: &'a Result<DecodedInstruction, DecodeError>,
    ) -> Self {
        let bytes = bytes.map(|b| b.iter().map(|x| format!("{x:02x}")).collect::<Vec<_>>().join(" "));
        match result {
            Ok(inst) => Self { address, bytes, instruction: Some(inst), error: None },
            Err(error) => Self { address, bytes, instruction: None, error: Some(error.to_string()) },
        }
    }
}
