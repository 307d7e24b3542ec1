use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Reads `N` little-endian 32-bit words from the front of `src`.
pub fn load_u32_le<const N: usize>(src: &[u8]) -> [u32; N] {
    let mut words = [0u32; N];
    LittleEndian::read_u32_into(&src[..4 * N], &mut words);
    words
}

/// Reads `N` little-endian 64-bit words from the front of `src`.
pub fn load_u64_le<const N: usize>(src: &[u8]) -> [u64; N] {
    let mut words = [0u64; N];
    LittleEndian::read_u64_into(&src[..8 * N], &mut words);
    words
}

/// Reads `N` big-endian 64-bit words from the front of `src`.
pub fn load_u64_be<const N: usize>(src: &[u8]) -> [u64; N] {
    let mut words = [0u64; N];
    BigEndian::read_u64_into(&src[..8 * N], &mut words);
    words
}

/// Writes `words` big-endian to the front of `dst`.
pub fn store_u64_be(dst: &mut [u8], words: &[u64]) {
    BigEndian::write_u64_into(words, &mut dst[..8 * words.len()]);
}

/// Writes `words` little-endian to the front of `dst`.
pub fn store_u32_le(dst: &mut [u8], words: &[u32]) {
    LittleEndian::write_u32_into(words, &mut dst[..4 * words.len()]);
}

/// Writes `words` little-endian to the front of `dst`.
pub fn store_u64_le(dst: &mut [u8], words: &[u64]) {
    LittleEndian::write_u64_into(words, &mut dst[..8 * words.len()]);
}

/// 64-bit little-endian length field.
pub fn len64_le(v: u64) -> [u8; 8] {
    let mut out = [0; 8];
    LittleEndian::write_u64(&mut out, v);
    out
}

/// 64-bit big-endian length field.
pub fn len64_be(v: u64) -> [u8; 8] {
    let mut out = [0; 8];
    BigEndian::write_u64(&mut out, v);
    out
}

/// 128-bit big-endian length field whose upper half is zero.
pub fn len128_be(v: u64) -> [u8; 16] {
    let mut out = [0; 16];
    BigEndian::write_u64(&mut out[8..], v);
    out
}

/// Swaps every pair of adjacent `1 << k`-bit groups of `x`, for `k` in `0..6`.
pub fn swap_bits(x: u64, k: u32) -> u64 {
    const MASKS: [u64; 6] = [
        0x5555_5555_5555_5555,
        0x3333_3333_3333_3333,
        0x0f0f_0f0f_0f0f_0f0f,
        0x00ff_00ff_00ff_00ff,
        0x0000_ffff_0000_ffff,
        0x0000_0000_ffff_ffff,
    ];
    let m = MASKS[k as usize];
    let s = 1 << k;
    ((x & m) << s) | ((x >> s) & m)
}
