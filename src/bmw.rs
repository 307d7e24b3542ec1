//! Blue Midnight Wish: a double-pipe design with 16-word chaining values.
//!
//! Every block goes through the compression function `f`. After the padded message has
//! been absorbed, `f` runs once more with the roles swapped: the chaining value becomes the
//! message and a fixed constant becomes the chaining value. The digest is the rightmost
//! part of that last output.

use crate::bitio::{len64_le, load_u32_le, load_u64_le, store_u32_le, store_u64_le};
use crate::buffer::pad;
use crate::descriptor::Descriptor;

/// Terms of the `W` sums in `f0`: `(index, subtracted)`, over `M[i] ^ H[i]`.
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, false), (7, true), (10, false), (13, false), (14, false)],
    [(6, false), (8, true), (11, false), (14, false), (15, true)],
    [(0, false), (7, false), (9, false), (12, true), (15, false)],
    [(0, false), (1, true), (8, false), (10, true), (13, false)],
    [(1, false), (2, false), (9, false), (11, true), (14, true)],
    [(3, false), (2, true), (10, false), (12, true), (15, false)],
    [(4, false), (0, true), (3, true), (11, true), (13, false)],
    [(1, false), (4, true), (5, true), (12, true), (14, true)],
    [(2, false), (5, true), (6, true), (13, false), (15, true)],
    [(0, false), (3, true), (6, false), (7, true), (14, false)],
    [(8, false), (1, true), (4, true), (7, true), (15, false)],
    [(8, false), (0, true), (2, true), (5, true), (9, false)],
    [(1, false), (3, false), (6, true), (9, true), (10, false)],
    [(2, false), (4, false), (7, false), (10, false), (11, false)],
    [(3, false), (5, true), (8, false), (11, true), (12, true)],
    [(12, false), (4, true), (6, true), (9, true), (13, false)],
];

/// Number of `f1` rounds that use the heavier `expand1` function.
const EXPAND1_ROUNDS: usize = 2;

macro_rules! bmw_compress {
    (
        $(#[$doc:meta])*
        $name:ident, $word:ty, shifts: $sh:expr, rotations: $rot:expr, k: $k:expr
    ) => {
        $(#[$doc])*
        pub fn $name(h: &[$word; 16], m: &[$word; 16]) -> [$word; 16] {
            const SH: [(u32, u32, u32, u32); 4] = $sh;
            const ROT: [u32; 7] = $rot;

            let s = |i: usize, x: $word| -> $word {
                match i {
                    4 => (x >> 1) ^ x,
                    5 => (x >> 2) ^ x,
                    _ => {
                        let (a, b, c, d) = SH[i];
                        (x >> a) ^ (x << b) ^ x.rotate_left(c) ^ x.rotate_left(d)
                    }
                }
            };
            let rm = |i: usize| m[i].rotate_left(i as u32 + 1);

            // f0: bijective transform of M ^ H.
            let mut q = [0 as $word; 32];
            for j in 0..16 {
                let w = W_TERMS[j].iter().fold(0 as $word, |acc, &(i, neg)| {
                    let x = m[i] ^ h[i];
                    if neg {
                        acc.wrapping_sub(x)
                    } else {
                        acc.wrapping_add(x)
                    }
                });
                q[j] = s(j % 5, w).wrapping_add(h[(j + 1) % 16]);
            }

            // f1: sixteen expansion rounds.
            for j in 16..32 {
                let i = j - 16;
                let add = rm(i)
                    .wrapping_add(rm((i + 3) % 16))
                    .wrapping_sub(rm((i + 10) % 16))
                    .wrapping_add(($k as $word).wrapping_mul(j as $word))
                    ^ h[(i + 7) % 16];

                let mut acc = add;
                if i < EXPAND1_ROUNDS {
                    for k in 0..16 {
                        acc = acc.wrapping_add(s([1, 2, 3, 0][k % 4], q[i + k]));
                    }
                } else {
                    for k in 0..14 {
                        let x = q[i + k];
                        acc = acc.wrapping_add(if k % 2 == 0 { x } else { x.rotate_left(ROT[k / 2]) });
                    }
                    acc = acc
                        .wrapping_add(s(4, q[i + 14]))
                        .wrapping_add(s(5, q[i + 15]));
                }
                q[j] = acc;
            }

            // f2: fold the expanded words into the new chaining value.
            let xl = q[16..24].iter().fold(0, |a, &b| a ^ b);
            let xh = q[24..32].iter().fold(xl, |a, &b| a ^ b);

            let mut out = [0 as $word; 16];
            out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
            out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
            out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
            out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
            out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
            out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
            out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
            out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

            const LOW: [(u32, bool); 8] = [
                (8, true),
                (6, false),
                (6, true),
                (4, true),
                (3, false),
                (4, false),
                (7, false),
                (2, false),
            ];
            for i in 8..16 {
                let (shift, left) = LOW[i - 8];
                let l = if left { xl << shift } else { xl >> shift };
                let prev = if i == 8 { 23 } else { 15 + i - 8 };
                out[i] = out[(i - 4) % 8]
                    .rotate_left(i as u32 + 1)
                    .wrapping_add(xh ^ q[i + 16] ^ m[i])
                    .wrapping_add(l ^ q[prev] ^ q[i]);
            }
            out
        }
    };
}

bmw_compress!(
    /// The compression function of BMW-224 and BMW-256.
    compress32,
    u32,
    shifts: [(1, 3, 4, 19), (1, 2, 8, 23), (2, 1, 12, 25), (2, 2, 15, 29)],
    rotations: [3, 7, 13, 16, 19, 23, 27],
    k: 0x0555_5555u32
);

bmw_compress!(
    /// The compression function of BMW-384 and BMW-512.
    compress64,
    u64,
    shifts: [(1, 3, 4, 37), (1, 2, 13, 43), (2, 1, 19, 53), (2, 2, 28, 59)],
    rotations: [5, 11, 27, 32, 37, 43, 53],
    k: 0x0555_5555_5555_5555u64
);

const fn final_block32() -> [u32; 16] {
    let mut c = [0u32; 16];
    let mut i = 0;
    while i < 16 {
        c[i] = 0xaaaa_aaa0 + i as u32;
        i += 1;
    }
    c
}

const fn final_block64() -> [u64; 16] {
    let mut c = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        c[i] = 0xaaaa_aaaa_aaaa_aaa0 + i as u64;
        i += 1;
    }
    c
}

/// Chaining value of the closing `f` call, keyed by the final state.
pub const FINAL32: [u32; 16] = final_block32();
/// 64-bit counterpart of [`FINAL32`].
pub const FINAL64: [u64; 16] = final_block64();

const fn iv32(base: u32) -> [u8; 64] {
    let mut iv = [0u8; 64];
    let mut i = 0;
    while i < 16 {
        let w = (base.wrapping_add(0x0404_0404u32.wrapping_mul(i as u32))).to_le_bytes();
        let mut b = 0;
        while b < 4 {
            iv[4 * i + b] = w[b];
            b += 1;
        }
        i += 1;
    }
    iv
}

const fn iv64(base: u64) -> [u8; 128] {
    let mut iv = [0u8; 128];
    let mut i = 0;
    while i < 16 {
        let w = (base.wrapping_add(0x0808_0808_0808_0808u64.wrapping_mul(i as u64))).to_le_bytes();
        let mut b = 0;
        while b < 8 {
            iv[8 * i + b] = w[b];
            b += 1;
        }
        i += 1;
    }
    iv
}

static IV224: [u8; 64] = iv32(0x0001_0203);
static IV256: [u8; 64] = iv32(0x4041_4243);
static IV384: [u8; 128] = iv64(0x0001_0203_0405_0607);
static IV512: [u8; 128] = iv64(0x8081_8283_8485_8687);

fn compress_small(state: &mut [u8], block: &[u8], _bits: u64) {
    let h = load_u32_le::<16>(state);
    let m = load_u32_le::<16>(block);
    store_u32_le(state, &compress32(&h, &m));
}

fn compress_big(state: &mut [u8], block: &[u8], _bits: u64) {
    let h = load_u64_le::<16>(state);
    let m = load_u64_le::<16>(block);
    store_u64_le(state, &compress64(&h, &m));
}

fn finalize_small(state: &mut [u8], tail: &[u8], bits: u64, out: &mut [u8]) {
    pad(tail, 64, &len64_le(bits), false, |block, _| {
        compress_small(state, block, bits)
    });

    let h = load_u32_le::<16>(state);
    let mut digest = [0u8; 64];
    store_u32_le(&mut digest, &compress32(&FINAL32, &h));
    out.copy_from_slice(&digest[64 - out.len()..]);
}

fn finalize_big(state: &mut [u8], tail: &[u8], bits: u64, out: &mut [u8]) {
    pad(tail, 128, &len64_le(bits), false, |block, _| {
        compress_big(state, block, bits)
    });

    let h = load_u64_le::<16>(state);
    let mut digest = [0u8; 128];
    store_u64_le(&mut digest, &compress64(&FINAL64, &h));
    out.copy_from_slice(&digest[128 - out.len()..]);
}

/// BMW-224.
pub static BMW224: Descriptor = Descriptor {
    name: "BMW-224",
    block_size: 64,
    state_size: 64,
    output_size: 28,
    iv: || &IV224,
    compress: compress_small,
    finalize: finalize_small,
};

/// BMW-256.
pub static BMW256: Descriptor = Descriptor {
    name: "BMW-256",
    block_size: 64,
    state_size: 64,
    output_size: 32,
    iv: || &IV256,
    compress: compress_small,
    finalize: finalize_small,
};

/// BMW-384.
pub static BMW384: Descriptor = Descriptor {
    name: "BMW-384",
    block_size: 128,
    state_size: 128,
    output_size: 48,
    iv: || &IV384,
    compress: compress_big,
    finalize: finalize_big,
};

/// BMW-512.
pub static BMW512: Descriptor = Descriptor {
    name: "BMW-512",
    block_size: 128,
    state_size: 128,
    output_size: 64,
    iv: || &IV512,
    compress: compress_big,
    finalize: finalize_big,
};

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::kat::{boundary_test, main_test, TestElement};

    static TEST_VECTOR: &[TestElement] = &[
        TestElement {
            descriptor: &BMW224,
            input: "",
            output: "e57c183da7e2cd3e90258ca04499b222420f9b6797bbab131b4d286e",
        },
        TestElement {
            descriptor: &BMW256,
            input: "",
            output: "82cac4bf6f4c2b41fbcc0e0984e9d8b76d7662f8e1789cdfbd85682acc55577a",
        },
        TestElement {
            descriptor: &BMW384,
            input: "",
            output: "1db2643911391720e712a8c24457ee456fabfd555f479156e4b24278d6f6bcfb03fab1ec2a2626b79f2880216bc29b29",
        },
        TestElement {
            descriptor: &BMW512,
            input: "",
            output: "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e",
        },
        TestElement {
            descriptor: &BMW224,
            input: "616263",
            output: "246607792ad2625430c81e2c4ea1380add5b08fb8075daed4f401dbc",
        },
        TestElement {
            descriptor: &BMW256,
            input: "616263",
            output: "57d11fc94bdf98e6a0d0bf1d4ddda3f4205e873666a644b5bb585e171ad87d34",
        },
        TestElement {
            descriptor: &BMW384,
            input: "616263",
            output: "411e84c41bd59e1376fc905fe96d2ef58fd59970abba02ca53a7a662f9e6cedb4e7e43bd63717215cd86ea20282f2b36",
        },
        TestElement {
            descriptor: &BMW512,
            input: "616263",
            output: "8f37bef264289f61f3d713944d394a7ac1dd95d3fe5787b5d325a310bc9cd18783852bfee12fbdeaab3ad9a67f2b654e348714aed3acf7d7548e95591af68046",
        },
    ];

    #[test]
    fn test_vector() {
        main_test(TEST_VECTOR);
    }

    #[test]
    fn padding_boundaries() {
        boundary_test(&[
            (&BMW224, 1, "21352bd213c163e440017a4c9c5b0e98afe95463582333b97a9cd85a"),
            (&BMW224, 53, "20021a0949b7f6bd0190a8c5032e9dedbf6e8a05cb24fc0ebacef71b"),
            (&BMW224, 54, "d47861c921984b8ff499a6ee075ca8a8b7302b41b86d1c0d280cfbc3"),
            (&BMW224, 55, "89fb091453be8edb34219fb6a90833ef4b6fea5e68ca86d75fd7a4f9"),
            (&BMW224, 56, "895e0a033c0728b6bd668f5292e02ce2a44699cadaa814abc36c0df6"),
            (&BMW224, 63, "fc42e2578bc62a62541ccf3de6bce3daaaf99c680d3aef06bb093ced"),
            (&BMW224, 64, "da6aca2ee0d3783481b3c1379f8a3e66c0627d73ff75c700ec471536"),
            (&BMW224, 65, "ed52300fd10d1eb474d0ee01ab49065f0df37f7d4638fadf96b12ab3"),
            (&BMW224, 128, "8c25a70111e6d1aa6d2478b844544449118ee039c0780dd57d619d84"),
            (&BMW256, 1, "58efe426847d2834913b2a0074f2ade6fabe99a02b644f656375be05fa762a5e"),
            (&BMW256, 53, "7f0a9f29f65b826c447bf1da8ad9772924e9b89fceb7f70dc04974f4df844e09"),
            (&BMW256, 54, "a95f3b2e679f2f21a06c7cf0fc12872d8ae115303fc691bb114819f7acc72fb9"),
            (&BMW256, 55, "8c1d1014c3a3daf448c7180473a6c1ee6b190c0f9ae0140cf54de79ed4bd9472"),
            (&BMW256, 56, "693d3adc06137fdc8d48b7bda099fd85302d82053e01f9b48a6367f2fc14fcb5"),
            (&BMW256, 63, "8a5e082a1e325db05060fb7cce3d4cd7f4e25331ffd46a3d4704234d8859ac63"),
            (&BMW256, 64, "007a7b7f61cefbe883ffa9ebeb950e37ba2130e282b19fbf045c7779a2fcd4c1"),
            (&BMW256, 65, "54486749afe87f7339763a7b62aaa6ca56d7657731c6e4d8462dbf171bc3e755"),
            (&BMW256, 128, "52543a23d99b2fff4df2db3031ea6ddd009db84d74ba30e0d69e952db9b185b1"),
            (&BMW384, 111, "54d62a9ad594df58dd0ea9e297c5477157c0ed71eedc0597e18de00069f2aa15d347697dab94523efb3e1bee9e5ae341"),
            (&BMW384, 112, "0818d588c887a6d616a83e240b3df8470b9ac845ed45435e7cb36b285cae0f265a50aa97485b6b1251b0b2033f682768"),
            (&BMW384, 119, "dbbb4d15003f2e28942f9831cda1e15917de65adb9ea6248959d089e9dd1a142eb833c1302e7dbda5c5e1e9141b56c82"),
            (&BMW384, 120, "bed901790bbb632de7e5755529d1de81346fd074546f96a6a2667caedc70ba9ead40eaf6e06b1175230aeea53742b66c"),
            (&BMW384, 127, "905570b4f5df86c507c385816cc8cdb19da0ab51b107f403f35037c00f1e02a272450c69f22e2977f682086e1088c392"),
            (&BMW384, 128, "3c9301f5dc782c53bf56219a5cbd8c5fba7483c9326f2c7be35f66042a309b85f93af914c9139416a78115f6cee730f3"),
            (&BMW384, 129, "247798146fb10aaa223c117bbd3e59bee967b3ac47eecbba8534e6f7862759c50b0e471099329d7d69da52dde64d0bac"),
            (&BMW384, 256, "506c20710e37a05205b7f9bc2d437c393c6ce0622bd95f8d084dd576c541fc4ac5b753e3cf0c52227fef025b67daf58e"),
            (&BMW512, 111, "340cfad104a1803f478abcb29214cbe09128f80a879708fe7510567a70286f7bce57448074a811174e337ba39778b61b591d0ffc81b1142135dccfcaae3ace86"),
            (&BMW512, 112, "6c8b1372dbda7aba7bf5dcbdb8ee862a67a2d7d165ee77d3eb714123bb1f91ed0b8416cc3f8e75e69d92bf0d752e7024d1156ce0190ffa88e9890da0204fd332"),
            (&BMW512, 119, "940170a34dd3c446a674f2ec98062b808ac1685ab0c7de2c622bd38b911d93b50650f454e141945253d35926c54407036e9337de656574c8b205ac655209db28"),
            (&BMW512, 120, "70de16abe5779a65ecfa59a72bc2e8543ffc0b8491ca05b5a7a69a10e134a047ff4b51df8bc6314e96ad1702009fa4342eba1242442dbce18268814075a8b013"),
            (&BMW512, 127, "da331a4a5ab9b78551abf1a693b79af1b110a91fed497e5dd3397f4531108f16edef71e502c819fcc52e8961a72d084b76c3379c686d6908481a5e9ce68f5912"),
            (&BMW512, 128, "bd8d0a804448528126bbf33f05a88cf95bf73a4f1dd6aa87407f528f538ce477eb3847f59446e606024dfe39dac7ee105ea5589aee7a45954279a09f2d07d7e6"),
            (&BMW512, 129, "0cc09f299d0518b10ef9e70261f78f8bd36879d948d3502bb796afa27c971f74efeb2c4e0215c43382f8a7e0c8f588d075fb7154a4390dbae3c0efdf7fa9d929"),
            (&BMW512, 256, "081504e10e9e5e3d1556e3d489ccc071cb8392227ead374c0ee089da882122249dbff6aff40e626843c966cfca639d9159982da31e722133c64d2ad970964c69"),
        ]);
    }

    #[test]
    fn iv_layout() {
        assert_eq!(&IV224[..8], &[0x03, 0x02, 0x01, 0x00, 0x07, 0x06, 0x05, 0x04]);
        assert_eq!(&IV256[60..], &[0x7f, 0x7e, 0x7d, 0x7c]);
        assert_eq!(&IV512[120..], &[0xff, 0xfe, 0xfd, 0xfc, 0xfb, 0xfa, 0xf9, 0xf8]);
        assert_eq!(FINAL32[15], 0xaaaa_aaaf);
    }

    #[test]
    fn compression_depends_on_every_message_word() {
        let h = load_u32_le::<16>(&IV256);
        let base = compress32(&h, &[0; 16]);
        for i in 0..16 {
            let mut m = [0u32; 16];
            m[i] = 1;
            assert_ne!(compress32(&h, &m), base, "word {} ignored", i);
        }
    }
}
