//! TriCore TC1.3.1 / TC1.6.x decoder.

mod formats;
mod opcodes;
mod tables;

use tracing::{debug, trace};

use crate::bits::{Width, Word};
use crate::config::DecoderConfig;
use crate::decoder::{DecodedInstruction, Decoder, InstructionBuilder};
use crate::error::{DecodeError, TableError};
use crate::instructions::OpcodeTable;
use crate::register::RegisterInfo;
use crate::stream::read_word;
use crate::table::DecisionTable;

pub use formats::{Format, FormatContext, BRN_N, DISP24, OFF10, OFF16, OFF18};
pub use opcodes::Opcode;
pub use tables::{long_table, short_table};

/// Table-driven decoder for 16- and 32-bit TriCore encodings.
///
/// Owns its register map, opcode descriptors and decision tables; every
/// decode borrows them read-only, so one decoder can serve many threads.
#[derive(Debug, Clone)]
pub struct Tc16Decoder {
    registers: RegisterInfo,
    opcodes: OpcodeTable,
    short: DecisionTable,
    long: DecisionTable,
    config: DecoderConfig,
}

impl Tc16Decoder {
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            registers: RegisterInfo::tc16(),
            opcodes: OpcodeTable::tc16(),
            short: short_table(),
            long: long_table(),
            config,
        }
    }

    /// Assemble a decoder from explicit tables.
    ///
    /// `short` must be a 16-bit table and `long` a 32-bit one.
    pub fn from_parts(
        registers: RegisterInfo,
        opcodes: OpcodeTable,
        short: DecisionTable,
        long: DecisionTable,
        config: DecoderConfig,
    ) -> Result<Self, TableError> {
        check_width("short", &short, Width::W16)?;
        check_width("long", &long, Width::W32)?;
        Ok(Self { registers, opcodes, short, long, config })
    }

    pub fn registers(&self) -> &RegisterInfo {
        &self.registers
    }

    pub fn opcodes(&self) -> &OpcodeTable {
        &self.opcodes
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode an already-read word against the table of its width.
    pub fn decode_word(&self, word: Word, address: u64) -> Result<DecodedInstruction, DecodeError> {
        let table = match word.width() {
            Width::W16 => &self.short,
            Width::W32 => &self.long,
        };
        trace!(word = word.bits(), width = ?word.width(), "walking decision table");
        table.walk(word, self.config.features, |opcode, format| {
            self.decode_format(word, opcode, format, address)
        })
    }

    fn decode_format(
        &self,
        word: Word,
        opcode: Opcode,
        format: Format,
        address: u64,
    ) -> Result<DecodedInstruction, DecodeError> {
        let ctx = FormatContext { registers: &self.registers, desc: self.opcodes.get(opcode) };
        let mut inst = InstructionBuilder::new(opcode);
        format.decode(word, &mut inst, &ctx)?;
        Ok(inst.finish(format.width(), address))
    }
}

fn check_width(role: &'static str, table: &DecisionTable, expected: Width) -> Result<(), TableError> {
    match table.width() {
        found if found == expected => Ok(()),
        found => Err(TableError::WidthMismatch { role, expected, found }),
    }
}

impl Default for Tc16Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for Tc16Decoder {
    fn decode(&self, bytes: &[u8], address: u64) -> Result<DecodedInstruction, DecodeError> {
        let short = read_word(bytes, Width::W16)?;
        match self.decode_word(short, address) {
            Ok(inst) => return Ok(inst),
            Err(error) => debug!(address, %error, "16-bit decode failed, retrying as 32-bit"),
        }
        let long = read_word(bytes, Width::W32)?;
        self.decode_word(long, address)
    }
}
