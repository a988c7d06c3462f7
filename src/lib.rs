pub mod bits;
pub mod config;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod instructions;
pub mod register;
pub mod stream;
pub mod table;

pub mod isa {
    pub mod tc16; // TriCore v1.6 family
}

pub use bits::{Width, Word};
pub use config::{DecoderConfig, Features};
pub use decoder::{DecodedInstruction, Decoder, InstructionBuilder, Operand};
pub use disasm::{decode_all, Sweep};
pub use error::{DecodeError, TableError};
pub use isa::tc16::{Format, Opcode, Tc16Decoder};
pub use register::{PhysReg, RegClass, RegisterInfo};
