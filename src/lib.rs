#![warn(missing_docs)]
//! Streaming implementations of the BMW, Groestl, JH and SHAvite-3 hash functions.
//!
//! Every algorithm is a static [`Descriptor`]: block size, state size, output size, IV,
//! a compression function and a finalization function. One generic [`Engine`] buffers
//! input, dispatches full blocks and runs the padding for any of them.
//!
//! Digests are a peek: [`Engine::digest`] finalizes a copy of the state, so the engine can
//! keep absorbing input. Use [`Engine::reset`] to start a new message, or
//! [`Engine::finalize`] to consume the engine.
//!
//! The same functions are also available as RustCrypto [`digest`] hashers such as
//! [`Groestl256`] or [`Jh512`].
//!
//! # Example
//! ```
//! use digest::Digest;
//! use widehash::{Algorithm, Groestl224};
//!
//! fn main() -> widehash::Result<()> {
//!   let mut h = widehash::create("JH-512")?;
//!   h.update(&[0xcc])?;
//!   assert_eq!(
//!     hex::encode(h.digest()),
//!     "277c93806945992a7f10102f28471af2783fe32003b3f63320810e74f1bc233b\
//!      f8669ab4b922db9ef13fcdcd4d31193b731eedde98fc87c129c04a4a1071f66f"
//!   );
//!
//!   let mut h = Algorithm::Shavite256.create()?;
//!   h.update(b"")?;
//!   println!("{}: {}", Algorithm::Shavite256, hex::encode(h.finalize()));
//!
//!   let sum = Groestl224::digest(b"");
//!   assert_eq!(
//!     hex::encode(sum),
//!     "f2e180fb5947be964cd584e22e496242c6a329c577fc4ce8c36d34c3"
//!   );
//!   Ok(())
//! }
//! ```

mod aes;
mod bitio;
pub mod bmw;
/// `buffer` is the block buffer and the padding routine shared by all algorithms.
pub mod buffer;
/// `descriptor` describes an algorithm to the engine.
pub mod descriptor;
/// `engine` is the generic streaming digest.
pub mod engine;
mod error;
pub mod groestl;
pub mod hasher;
pub mod jh;
pub mod registry;
pub mod shavite;

#[cfg(test)]
mod kat;

pub use descriptor::Descriptor;
pub use engine::Engine;
pub use error::{Error, Result};
pub use hasher::{
    Bmw224, Bmw256, Bmw384, Bmw512, Groestl224, Groestl256, Groestl384, Groestl512, Jh224,
    Jh256, Jh384, Jh512, Shavite224, Shavite256,
};
pub use registry::{create, Algorithm};
