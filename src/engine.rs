use std::io;

use crate::buffer::BlockBuffer;
use crate::descriptor::{Descriptor, MAX_STATE_SIZE};
use crate::error::{Error, Result};

/// Longest message accepted, in bytes: the bit length must fit in 64 bits.
pub const MAX_MESSAGE_BYTES: u64 = u64::MAX >> 3;

/// Engine is the streaming digest state for any algorithm described by a [`Descriptor`].
///
/// Input is buffered until a block is full and then compressed; [`Engine::digest`]
/// pads a copy of the state, so the engine stays usable and later digests cover the
/// whole stream written so far. An engine is not synchronized: share it across threads
/// only behind a lock, or give every thread its own engine.
#[derive(Clone, Debug)]
pub struct Engine {
    descriptor: &'static Descriptor,
    state: [u8; MAX_STATE_SIZE],
    buffer: BlockBuffer,
    compressed: u64, // bytes already fed to the compression function
}

impl Engine {
    /// Creates an engine in its initial state, rejecting an inconsistent descriptor.
    pub fn new(descriptor: &'static Descriptor) -> Result<Engine> {
        descriptor.validate()?;

        let mut e = Engine {
            descriptor,
            state: [0; MAX_STATE_SIZE],
            buffer: BlockBuffer::new(descriptor.block_size),
            compressed: 0,
        };
        e.reset();

        tracing::trace!(algorithm = descriptor.name, "created digest engine");
        Ok(e)
    }

    /// Returns the engine to the state it had right after construction.
    pub fn reset(&mut self) {
        let iv = (self.descriptor.iv)();
        self.state = [0; MAX_STATE_SIZE];
        self.state[..iv.len()].copy_from_slice(iv);
        self.buffer.reset();
        self.compressed = 0;
    }

    /// The descriptor this engine runs.
    pub fn descriptor(&self) -> &'static Descriptor {
        self.descriptor
    }

    /// Number of bytes in a digest.
    pub fn size(&self) -> usize {
        self.descriptor.output_size
    }

    /// Number of bytes in an input block.
    pub fn block_size(&self) -> usize {
        self.descriptor.block_size
    }

    /// Total number of bytes written since construction or the last reset.
    pub fn len(&self) -> u64 {
        self.compressed + self.buffer.position() as u64
    }

    /// Whether nothing has been written since construction or the last reset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `data` to the message. Empty input is a no-op.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        // Check if the new length (in bits) overflows our counter capacity.
        let written = self.len();
        if data.len() as u64 > MAX_MESSAGE_BYTES - written {
            return Err(Error::LengthOverflow {
                written,
                requested: data.len(),
            });
        }

        let Engine {
            descriptor,
            state,
            buffer,
            compressed,
        } = self;
        let compress = descriptor.compress;
        let state_size = descriptor.state_size;
        buffer.input(data, |block| {
            *compressed += block.len() as u64;
            compress(&mut state[..state_size], block, *compressed << 3);
        });
        Ok(())
    }

    /// Writes the digest of everything written so far into `out`, leaving the engine untouched.
    pub fn finalize_into(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != self.size() {
            return Err(Error::OutputSize {
                expected: self.size(),
                actual: out.len(),
            });
        }
        self.close(out);
        Ok(())
    }

    /// Digest of everything written so far.
    pub fn digest(&self) -> Vec<u8> {
        self.sum(Vec::with_capacity(self.size()))
    }

    /// Appends the digest of everything written so far to `prefix`.
    pub fn sum(&self, mut prefix: Vec<u8>) -> Vec<u8> {
        let start = prefix.len();
        prefix.resize(start + self.size(), 0);
        self.close(&mut prefix[start..]);
        prefix
    }

    // out must be exactly output_size bytes long
    fn close(&self, out: &mut [u8]) {
        // Pad a copy of the state so the caller can keep writing.
        let mut state = self.state;
        let d = self.descriptor;
        (d.finalize)(
            &mut state[..d.state_size],
            self.buffer.data(),
            self.len() << 3,
            out,
        );
    }

    /// Consumes the engine and returns the digest.
    pub fn finalize(self) -> Vec<u8> {
        self.digest()
    }
}

impl io::Write for Engine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use std::io::Write;

    use super::*;
    use crate::descriptor::test::toy;
    use anyhow::Result;
    use once_cell::sync::Lazy;

    static TOY: Lazy<Descriptor> = Lazy::new(|| toy(16, 16, 8));
    static BROKEN: Lazy<Descriptor> = Lazy::new(|| toy(16, 16, 32));

    #[test]
    fn rejects_broken_descriptor() {
        assert!(matches!(
            Engine::new(&BROKEN),
            Err(Error::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn counts_bytes_and_blocks() -> Result<()> {
        let mut e = Engine::new(&TOY)?;
        assert!(e.is_empty());
        e.update(&[1; 20])?;
        e.update(&[])?;
        assert_eq!(e.len(), 20);
        assert_eq!(e.size(), 8);
        assert_eq!(e.block_size(), 16);

        // One full block was XORed into the zero state, the tail stays buffered.
        assert_eq!(e.digest(), vec![1; 8]);
        Ok(())
    }

    #[test]
    fn digest_is_a_peek() -> Result<()> {
        let mut e = Engine::new(&TOY)?;
        e.update(&[3; 16])?;
        let first = e.digest();
        assert_eq!(first, e.digest());

        e.update(&[5; 16])?;
        assert_eq!(e.digest(), vec![3 ^ 5; 8]);

        let prefixed = e.sum(vec![0xff]);
        assert_eq!(prefixed.len(), 9);
        assert_eq!(prefixed[0], 0xff);
        assert_eq!(&prefixed[1..], &e.clone().finalize()[..]);
        Ok(())
    }

    #[test]
    fn finalize_into_checks_size() -> Result<()> {
        let e = Engine::new(&TOY)?;
        let mut out = [0u8; 7];
        assert_eq!(
            e.finalize_into(&mut out),
            Err(Error::OutputSize {
                expected: 8,
                actual: 7
            })
        );
        Ok(())
    }

    #[test]
    fn reset_restores_virgin_state() -> Result<()> {
        let mut e = Engine::new(&TOY)?;
        e.update(&[9; 40])?;
        e.reset();
        assert!(e.is_empty());
        assert_eq!(e.digest(), Engine::new(&TOY)?.digest());
        Ok(())
    }

    #[test]
    fn length_overflow_is_rejected() -> Result<()> {
        let mut e = Engine::new(&TOY)?;
        e.compressed = MAX_MESSAGE_BYTES - 4;
        e.update(&[0; 4])?;
        assert_eq!(
            e.update(&[0; 1]),
            Err(Error::LengthOverflow {
                written: MAX_MESSAGE_BYTES,
                requested: 1
            })
        );

        let err = e.write(&[0]).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        Ok(())
    }

    #[test]
    fn io_write() -> Result<()> {
        let mut a = Engine::new(&TOY)?;
        let mut b = Engine::new(&TOY)?;
        a.write_all(&[7; 33])?;
        std::io::copy(&mut &[7u8; 33][..], &mut b)?;
        a.flush()?;
        assert_eq!(a.digest(), b.digest());
        Ok(())
    }
}
