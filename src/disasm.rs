//! Linear sweep over a code buffer.

use tracing::debug;

use crate::decoder::{DecodedInstruction, Decoder};
use crate::error::DecodeError;

/// Instructions are halfword aligned, so an undecodable spot is skipped
/// two bytes at a time.
const RESYNC_STEP: usize = 2;

/// Decodes `bytes` front to back, starting at `base`.
///
/// Yields one item per decode attempt. Failures are reported and skipped
/// rather than ending the sweep.
pub struct Sweep<'a, D: ?Sized> {
    decoder: &'a D,
    bytes: &'a [u8],
    base: u64,
    offset: usize,
}

impl<'a, D: Decoder + ?Sized> Sweep<'a, D> {
    pub fn new(decoder: &'a D, bytes: &'a [u8], base: u64) -> Self {
        Self { decoder, bytes, base, offset: 0 }
    }

    /// Byte offset of the next attempt.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<D: Decoder + ?Sized> Iterator for Sweep<'_, D> {
    type Item = (u64, Result<DecodedInstruction, DecodeError>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.bytes.get(self.offset..).filter(|rest| !rest.is_empty())?;
        let address = self.base.wrapping_add(self.offset as u64);
        let result = self.decoder.decode(rest, address);
        let step = match &result {
            Ok(inst) => inst.size(),
            Err(error) => {
                debug!(address, %error, "skipping undecodable bytes");
                RESYNC_STEP.min(rest.len())
            }
        };
        self.offset += step;
        Some((address, result))
    }
}

/// Decode every instruction of `bytes`, stopping at the first failure.
pub fn decode_all<D: Decoder + ?Sized>(
    decoder: &D,
    bytes: &[u8],
    base: u64,
) -> Result<Vec<DecodedInstruction>, DecodeError> {
    Sweep::new(decoder, bytes, base).map(|(_, result)| result).collect()
}
