use std::fmt;

use crate::buffer::MAX_BLOCK_SIZE;
use crate::error::{Error, Result};

/// Largest chaining state of any supported algorithm, in bytes.
pub const MAX_STATE_SIZE: usize = 128;

/// Compresses one full `block` into `state`.
///
/// `bits` is the message length in bits up to and including this block.
pub type CompressFn = fn(state: &mut [u8], block: &[u8], bits: u64);

/// Pads the buffered `tail`, runs the closing compressions and writes the digest to `out`.
///
/// `bits` is the length of the whole message in bits and `out` has the output size.
pub type FinalizeFn = fn(state: &mut [u8], tail: &[u8], bits: u64, out: &mut [u8]);

/// Descriptor binds everything the generic engine needs to run one algorithm.
///
/// Descriptors are plain data and usually live in a `static`; every engine created
/// from one shares it by reference.
#[derive(Clone, Copy)]
pub struct Descriptor {
    /// Display name, e.g. `"Groestl-256"`.
    pub name: &'static str,
    /// Bytes consumed per compression call.
    pub block_size: usize,
    /// Bytes of chaining state.
    pub state_size: usize,
    /// Bytes of digest output.
    pub output_size: usize,
    /// Initial chaining state, `state_size` bytes long.
    pub iv: fn() -> &'static [u8],
    /// Per-block compression function.
    pub compress: CompressFn,
    /// Padding and output extraction.
    pub finalize: FinalizeFn,
}

impl Descriptor {
    /// Checks that the descriptor can drive an engine.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.block_size == 0 {
            "block size is zero"
        } else if self.block_size > MAX_BLOCK_SIZE {
            "block size exceeds 128 bytes"
        } else if self.state_size > MAX_STATE_SIZE {
            "state size exceeds 128 bytes"
        } else if (self.iv)().len() != self.state_size {
            "IV length differs from state size"
        } else if self.output_size == 0 {
            "output size is zero"
        } else if self.output_size > self.state_size {
            "output size exceeds state size"
        } else {
            return Ok(());
        };

        tracing::warn!(algorithm = self.name, reason, "rejected descriptor");
        Err(Error::InvalidDescriptor {
            name: self.name,
            reason,
        })
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("block_size", &self.block_size)
            .field("state_size", &self.state_size)
            .field("output_size", &self.output_size)
            .finish()
    }
}
