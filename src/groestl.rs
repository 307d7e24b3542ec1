//! Groestl: two fixed AES-like permutations `P` and `Q` over an 8-row byte matrix.
//!
//! The state is kept as columns packed into big-endian `u64`s, row 0 in the most
//! significant byte. Groestl-224/256 use an 8x8 matrix and 10 rounds, Groestl-384/512 an
//! 8x16 matrix and 14 rounds. The last padding field counts blocks, not bits.

use crate::aes::{gf_mul, SBOX};
use crate::bitio::{len64_be, load_u64_be, store_u64_be};
use crate::buffer::{pad, pad_blocks};
use crate::descriptor::Descriptor;

struct Shape {
    rounds: usize,
    shift_p: [usize; 8],
    shift_q: [usize; 8],
}

const SHORT: Shape = Shape {
    rounds: 10,
    shift_p: [0, 1, 2, 3, 4, 5, 6, 7],
    shift_q: [1, 3, 5, 7, 0, 2, 4, 6],
};

const LONG: Shape = Shape {
    rounds: 14,
    shift_p: [0, 1, 2, 3, 4, 5, 6, 11],
    shift_q: [1, 3, 5, 11, 0, 2, 4, 6],
};

fn shape<const COLS: usize>() -> &'static Shape {
    if COLS == 8 {
        &SHORT
    } else {
        &LONG
    }
}

// TABLE[i][x] is the output column of MixBytes(SubBytes) for byte x sitting in row i.
const fn mix_table() -> [[u64; 256]; 8] {
    const CIRC: [u8; 8] = [2, 2, 3, 4, 5, 3, 5, 7];
    let mut table = [[0u64; 256]; 8];
    let mut i = 0;
    while i < 8 {
        let mut x = 0;
        while x < 256 {
            let s = SBOX[x];
            let mut col = 0u64;
            let mut row = 0;
            while row < 8 {
                let c = CIRC[(i + 8 - row) % 8];
                col |= (gf_mul(c, s) as u64) << (56 - 8 * row);
                row += 1;
            }
            table[i][x] = col;
            x += 1;
        }
        i += 1;
    }
    table
}

static TABLE: [[u64; 256]; 8] = mix_table();

fn rounds<const COLS: usize>(x: &mut [u64; COLS], shift: &[usize; 8], is_q: bool) {
    for r in 0..shape::<COLS>().rounds {
        // AddRoundConstant
        for (j, col) in x.iter_mut().enumerate() {
            let c = ((j as u64) << 4) ^ r as u64;
            if is_q {
                *col ^= !c;
            } else {
                *col ^= c << 56;
            }
        }

        // SubBytes, ShiftBytes and MixBytes
        let a = *x;
        for (j, col) in x.iter_mut().enumerate() {
            *col = (0..8).fold(0, |acc, i| {
                let byte = a[(j + shift[i]) % COLS] >> (56 - 8 * i);
                acc ^ TABLE[i][(byte & 0xff) as usize]
            });
        }
    }
}

/// The `P` permutation, for `COLS` of 8 or 16.
pub fn p<const COLS: usize>(x: &mut [u64; COLS]) {
    rounds(x, &shape::<COLS>().shift_p, false)
}

/// The `Q` permutation, for `COLS` of 8 or 16.
pub fn q<const COLS: usize>(x: &mut [u64; COLS]) {
    rounds(x, &shape::<COLS>().shift_q, true)
}

/// Compression function: `h = P(h ^ m) ^ Q(m) ^ h`.
pub fn compress<const COLS: usize>(h: &mut [u64; COLS], m: &[u64; COLS]) {
    let mut x = [0u64; COLS];
    for j in 0..COLS {
        x[j] = h[j] ^ m[j];
    }
    let mut y = *m;
    p(&mut x);
    q(&mut y);
    for j in 0..COLS {
        h[j] ^= x[j] ^ y[j];
    }
}

/// Output transformation `P(h) ^ h`.
pub fn output_transform<const COLS: usize>(h: &[u64; COLS]) -> [u64; COLS] {
    let mut x = *h;
    p(&mut x);
    for j in 0..COLS {
        x[j] ^= h[j];
    }
    x
}

fn compress_block<const COLS: usize>(state: &mut [u8], block: &[u8], _bits: u64) {
    let mut h = load_u64_be::<COLS>(state);
    compress(&mut h, &load_u64_be::<COLS>(block));
    store_u64_be(state, &h);
}

fn finalize<const COLS: usize>(state: &mut [u8], tail: &[u8], bits: u64, out: &mut [u8]) {
    let block_size = 8 * COLS;
    let blocks = (bits >> 3) / block_size as u64 + pad_blocks(tail.len(), block_size, 8, false);
    pad(tail, block_size, &len64_be(blocks), false, |block, _| {
        compress_block::<COLS>(state, block, bits)
    });

    let h = load_u64_be::<COLS>(state);
    let mut digest = [0u8; 128];
    store_u64_be(&mut digest, &output_transform(&h));
    out.copy_from_slice(&digest[block_size - out.len()..block_size]);
}

// The IV is the output size in bits, big-endian in the last bytes of the state.
const fn iv<const N: usize>(output_bits: u64) -> [u8; N] {
    let mut iv = [0u8; N];
    let b = output_bits.to_be_bytes();
    let mut i = 0;
    while i < 8 {
        iv[N - 8 + i] = b[i];
        i += 1;
    }
    iv
}

static IV224: [u8; 64] = iv(224);
static IV256: [u8; 64] = iv(256);
static IV384: [u8; 128] = iv(384);
static IV512: [u8; 128] = iv(512);

/// Groestl-224.
pub static GROESTL224: Descriptor = Descriptor {
    name: "Groestl-224",
    block_size: 64,
    state_size: 64,
    output_size: 28,
    iv: || &IV224,
    compress: compress_block::<8>,
    finalize: finalize::<8>,
};

/// Groestl-256.
pub static GROESTL256: Descriptor = Descriptor {
    name: "Groestl-256",
    block_size: 64,
    state_size: 64,
    output_size: 32,
    iv: || &IV256,
    compress: compress_block::<8>,
    finalize: finalize::<8>,
};

/// Groestl-384.
pub static GROESTL384: Descriptor = Descriptor {
    name: "Groestl-384",
    block_size: 128,
    state_size: 128,
    output_size: 48,
    iv: || &IV384,
    compress: compress_block::<16>,
    finalize: finalize::<16>,
};

/// Groestl-512.
pub static GROESTL512: Descriptor = Descriptor {
    name: "Groestl-512",
    block_size: 128,
    state_size: 128,
    output_size: 64,
    iv: || &IV512,
    compress: compress_block::<16>,
    finalize: finalize::<16>,
};
