//! SHAvite-3 (256-bit family): a Feistel network of AES rounds keyed by the message.
//!
//! The message block expands into 144 round-key words, with the bit counter mixed into
//! four of them. Words are little-endian throughout. Salting and the 512-bit family are
//! not provided.

use crate::aes::aes_round;
use crate::bitio::{len64_le, load_u32_le, store_u32_le};
use crate::buffer::pad;
use crate::descriptor::Descriptor;

const ROUND_KEY_WORDS: usize = 144;

fn expand(m: &[u32; 16], counter: u64) -> [u32; ROUND_KEY_WORDS] {
    let c0 = counter as u32;
    let c1 = (counter >> 32) as u32;

    let mut rk = [0u32; ROUND_KEY_WORDS];
    rk[..16].copy_from_slice(m);
    let mut u = 16;
    for _ in 0..4 {
        // nonlinear expansion
        for _ in 0..4 {
            let x = aes_round([rk[u - 15], rk[u - 14], rk[u - 13], rk[u - 16]]);
            for k in 0..4 {
                rk[u + k] = x[k] ^ rk[u - 4 + k];
            }
            match u {
                16 => {
                    rk[16] ^= c0;
                    rk[17] ^= !c1;
                }
                56 => {
                    rk[57] ^= c1;
                    rk[58] ^= !c0;
                }
                84 => {
                    rk[86] ^= c1;
                    rk[87] ^= !c0;
                }
                124 => {
                    rk[124] ^= c0;
                    rk[127] ^= !c1;
                }
                _ => {}
            }
            u += 4;
        }

        // linear expansion
        for _ in 0..4 {
            rk[u] = rk[u - 16] ^ rk[u - 3];
            rk[u + 1] = rk[u - 15] ^ rk[u - 2];
            rk[u + 2] = rk[u - 14] ^ rk[u - 1];
            rk[u + 3] = rk[u - 13] ^ rk[u];
            u += 4;
        }
    }
    rk
}

/// The C256 compression function.
///
/// `counter` is the number of message bits hashed up to and including this block, or
/// zero for a final block that holds only padding.
pub fn c256(h: &[u32; 8], m: &[u32; 16], counter: u64) -> [u32; 8] {
    let rk = expand(m, counter);
    let mut keys = rk.chunks_exact(4);

    let mut p = *h;
    for _ in 0..6 {
        for (src, dst) in [(4, 0), (0, 4)] {
            let mut x = [p[src], p[src + 1], p[src + 2], p[src + 3]];
            for key in keys.by_ref().take(3) {
                for (w, k) in x.iter_mut().zip(key) {
                    *w ^= k;
                }
                x = aes_round(x);
            }
            for k in 0..4 {
                p[dst + k] ^= x[k];
            }
        }
    }

    let mut out = *h;
    for (o, v) in out.iter_mut().zip(p) {
        *o ^= v;
    }
    out
}

fn compress(state: &mut [u8], block: &[u8], bits: u64) {
    let h = load_u32_le::<8>(state);
    let m = load_u32_le::<16>(block);
    store_u32_le(state, &c256(&h, &m, bits));
}

fn finalize(state: &mut [u8], tail: &[u8], bits: u64, out: &mut [u8]) {
    // bit length, then the digest size in bits
    let mut suffix = [0u8; 10];
    suffix[..8].copy_from_slice(&len64_le(bits));
    suffix[8..].copy_from_slice(&((8 * out.len()) as u16).to_le_bytes());

    pad(tail, 64, &suffix, false, |block, has_message| {
        compress(state, block, if has_message { bits } else { 0 })
    });
    out.copy_from_slice(&state[..out.len()]);
}

const fn words_le(words: [u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = (words[i / 4] >> (8 * (i % 4))) as u8;
        i += 1;
    }
    out
}

static IV224: [u8; 32] = words_le([
    0x6774f31c, 0x990ae210, 0xc87d4274, 0xc9546371, 0x62b2aea8, 0x4b5801d8, 0x1b702860,
    0x842f3017,
]);
static IV256: [u8; 32] = words_le([
    0x49bb3e47, 0x2674860d, 0xa8b392ac, 0x021ac4e6, 0x409283cf, 0x620e5d86, 0x6d929dcb,
    0x96cc2a8b,
]);

/// SHAvite-3-224.
pub static SHAVITE224: Descriptor = Descriptor {
    name: "SHAvite-3-224",
    block_size: 64,
    state_size: 32,
    output_size: 28,
    iv: || &IV224,
    compress,
    finalize,
};

/// SHAvite-3-256.
pub static SHAVITE256: Descriptor = Descriptor {
    name: "SHAvite-3-256",
    block_size: 64,
    state_size: 32,
    output_size: 32,
    iv: || &IV256,
    compress,
    finalize,
};
