/// Largest block size of any supported algorithm, in bytes.
pub const MAX_BLOCK_SIZE: usize = 128;

/// BlockBuffer accumulates input until a full block of `block_size` bytes is available.
///
/// The buffer never holds a full block: as soon as one is complete it is handed to the
/// compression callback and the cursor returns to zero.
#[derive(Clone, Debug)]
pub struct BlockBuffer {
    data: [u8; MAX_BLOCK_SIZE],
    block_size: usize,
    pos: usize,
}

impl BlockBuffer {
    /// Creates an empty buffer. `block_size` must be in `1..=MAX_BLOCK_SIZE`.
    pub fn new(block_size: usize) -> Self {
        debug_assert!(block_size > 0 && block_size <= MAX_BLOCK_SIZE);
        BlockBuffer {
            data: [0; MAX_BLOCK_SIZE],
            block_size,
            pos: 0,
        }
    }

    /// Number of bytes per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of bytes currently buffered.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The buffered tail, always shorter than one block.
    pub fn data(&self) -> &[u8] {
        &self.data[..self.pos]
    }

    /// Drops the buffered tail.
    pub fn reset(&mut self) {
        self.data = [0; MAX_BLOCK_SIZE];
        self.pos = 0;
    }

    /// Appends `input`, calling `compress` once for every block that becomes full, in order.
    pub fn input(&mut self, mut input: &[u8], mut compress: impl FnMut(&[u8])) {
        let bs = self.block_size;

        if self.pos > 0 {
            // continue with existing buffer, if nonempty
            let n = (bs - self.pos).min(input.len());
            self.data[self.pos..self.pos + n].copy_from_slice(&input[..n]);
            self.pos += n;
            input = &input[n..];
            if self.pos < bs {
                return;
            }
            compress(&self.data[..bs]);
            self.pos = 0;
        }

        let mut blocks = input.chunks_exact(bs);
        for block in &mut blocks {
            compress(block);
        }

        let rest = blocks.remainder();
        self.data[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }
}

/// Pads `tail` with a `0x80` byte, zeros and `suffix` in the last bytes of the final block.
///
/// If the marker and suffix do not fit behind the tail, or `spill` is set and the tail
/// is non-empty, the tail block is closed with the marker and zeros and the suffix goes
/// into an extra all-zero block. `compress` receives each final block together with a
/// flag telling whether the block still carries message bytes.
pub fn pad(
    tail: &[u8],
    block_size: usize,
    suffix: &[u8],
    spill: bool,
    mut compress: impl FnMut(&[u8], bool),
) {
    debug_assert!(tail.len() < block_size && suffix.len() < block_size);
    let mut block = [0u8; MAX_BLOCK_SIZE];
    let block = &mut block[..block_size];

    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;

    let fits = tail.len() + 1 + suffix.len() <= block_size && !(spill && !tail.is_empty());
    if !fits {
        compress(block, !tail.is_empty());
        block.iter_mut().for_each(|b| *b = 0);
    }

    block[block_size - suffix.len()..].copy_from_slice(suffix);
    compress(block, fits && !tail.is_empty());
}

/// Number of blocks `pad` emits for a tail of `tail_len` bytes.
pub fn pad_blocks(tail_len: usize, block_size: usize, suffix_len: usize, spill: bool) -> u64 {
    if tail_len + 1 + suffix_len <= block_size && !(spill && tail_len > 0) {
        1
    } else {
        2
    }
}
