//! `digest` 0.10 hashers over the same compression functions the [`Engine`](crate::Engine)
//! runs.
//!
//! Each algorithm gets a `core_api` core and a [`CoreWrapper`] alias, so it can be used
//! through [`digest::Digest`] or [`digest::DynDigest`]. The message length is counted
//! modulo 2^64 bits, since these traits cannot report an overflow.

use std::fmt;

use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, UpdateCore,
    },
    typenum::{U128, U28, U32, U48, U64},
    HashMarker, Output, Reset,
};

use crate::bmw::{BMW224, BMW256, BMW384, BMW512};
use crate::descriptor::{Descriptor, MAX_STATE_SIZE};
use crate::groestl::{GROESTL224, GROESTL256, GROESTL384, GROESTL512};
use crate::jh::{JH224, JH256, JH384, JH512};
use crate::shavite::{SHAVITE224, SHAVITE256};

macro_rules! define_core {
    (
        $core:ident, $hasher:ident, $descriptor:expr, $name:literal,
        block: $block:ty, output: $output:ty
    ) => {
        #[doc = concat!("Lowest-level core hasher state of ", $name, ".")]
        #[derive(Clone)]
        pub struct $core {
            state: [u8; MAX_STATE_SIZE],
            len: u64, // bytes compressed, wrapping
        }

        #[doc = concat!($name, " hasher state.")]
        pub type $hasher = CoreWrapper<$core>;

        impl $core {
            fn descriptor() -> &'static Descriptor {
                &$descriptor
            }
        }

        impl Default for $core {
            fn default() -> Self {
                let mut core = Self {
                    state: [0; MAX_STATE_SIZE],
                    len: 0,
                };
                core.reset();
                core
            }
        }

        impl Reset for $core {
            fn reset(&mut self) {
                let iv = (Self::descriptor().iv)();
                self.state = [0; MAX_STATE_SIZE];
                self.state[..iv.len()].copy_from_slice(iv);
                self.len = 0;
            }
        }

        impl HashMarker for $core {}

        impl BlockSizeUser for $core {
            type BlockSize = $block;
        }

        impl BufferKindUser for $core {
            type BufferKind = Eager;
        }

        impl OutputSizeUser for $core {
            type OutputSize = $output;
        }

        impl UpdateCore for $core {
            #[inline]
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                let d = Self::descriptor();
                for block in blocks {
                    self.len = self.len.wrapping_add(block.len() as u64);
                    (d.compress)(&mut self.state[..d.state_size], &block[..], self.len.wrapping_mul(8));
                }
            }
        }

        impl FixedOutputCore for $core {
            fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                let d = Self::descriptor();
                let tail = buffer.get_data();
                let bits = self.len.wrapping_add(tail.len() as u64).wrapping_mul(8);
                (d.finalize)(&mut self.state[..d.state_size], tail, bits, &mut out[..]);
            }
        }

        impl AlgorithmName for $core {
            #[inline]
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($name)
            }
        }

        impl fmt::Debug for $core {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($core), " { ... }"))
            }
        }
    };
}

define_core!(Bmw224Core, Bmw224, BMW224, "BMW-224", block: U64, output: U28);
define_core!(Bmw256Core, Bmw256, BMW256, "BMW-256", block: U64, output: U32);
define_core!(Bmw384Core, Bmw384, BMW384, "BMW-384", block: U128, output: U48);
define_core!(Bmw512Core, Bmw512, BMW512, "BMW-512", block: U128, output: U64);
define_core!(Groestl224Core, Groestl224, GROESTL224, "Groestl-224", block: U64, output: U28);
define_core!(Groestl256Core, Groestl256, GROESTL256, "Groestl-256", block: U64, output: U32);
define_core!(Groestl384Core, Groestl384, GROESTL384, "Groestl-384", block: U128, output: U48);
define_core!(Groestl512Core, Groestl512, GROESTL512, "Groestl-512", block: U128, output: U64);
define_core!(Jh224Core, Jh224, JH224, "JH-224", block: U64, output: U28);
define_core!(Jh256Core, Jh256, JH256, "JH-256", block: U64, output: U32);
define_core!(Jh384Core, Jh384, JH384, "JH-384", block: U64, output: U48);
define_core!(Jh512Core, Jh512, JH512, "JH-512", block: U64, output: U64);
define_core!(Shavite224Core, Shavite224, SHAVITE224, "SHAvite-3-224", block: U64, output: U28);
define_core!(Shavite256Core, Shavite256, SHAVITE256, "SHAvite-3-256", block: U64, output: U32);
