//! Algorithm selection by enum value or name.

use std::fmt;
use std::str::FromStr;

use digest::DynDigest;

use crate::descriptor::Descriptor;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::{bmw, groestl, hasher, jh, shavite};

/// Every supported hash function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// BMW-224.
    Bmw224,
    /// BMW-256.
    Bmw256,
    /// BMW-384.
    Bmw384,
    /// BMW-512.
    Bmw512,
    /// Groestl-224.
    Groestl224,
    /// Groestl-256.
    Groestl256,
    /// Groestl-384.
    Groestl384,
    /// Groestl-512.
    Groestl512,
    /// JH-224.
    Jh224,
    /// JH-256.
    Jh256,
    /// JH-384.
    Jh384,
    /// JH-512.
    Jh512,
    /// SHAvite-3-224.
    Shavite224,
    /// SHAvite-3-256.
    Shavite256,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 14] = [
        Algorithm::Bmw224,
        Algorithm::Bmw256,
        Algorithm::Bmw384,
        Algorithm::Bmw512,
        Algorithm::Groestl224,
        Algorithm::Groestl256,
        Algorithm::Groestl384,
        Algorithm::Groestl512,
        Algorithm::Jh224,
        Algorithm::Jh256,
        Algorithm::Jh384,
        Algorithm::Jh512,
        Algorithm::Shavite224,
        Algorithm::Shavite256,
    ];

    /// The static descriptor of the algorithm.
    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Algorithm::Bmw224 => &bmw::BMW224,
            Algorithm::Bmw256 => &bmw::BMW256,
            Algorithm::Bmw384 => &bmw::BMW384,
            Algorithm::Bmw512 => &bmw::BMW512,
            Algorithm::Groestl224 => &groestl::GROESTL224,
            Algorithm::Groestl256 => &groestl::GROESTL256,
            Algorithm::Groestl384 => &groestl::GROESTL384,
            Algorithm::Groestl512 => &groestl::GROESTL512,
            Algorithm::Jh224 => &jh::JH224,
            Algorithm::Jh256 => &jh::JH256,
            Algorithm::Jh384 => &jh::JH384,
            Algorithm::Jh512 => &jh::JH512,
            Algorithm::Shavite224 => &shavite::SHAVITE224,
            Algorithm::Shavite256 => &shavite::SHAVITE256,
        }
    }

    /// Canonical name, e.g. `"Groestl-256"`.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Digest size in bytes.
    pub fn output_size(self) -> usize {
        self.descriptor().output_size
    }

    /// Creates a streaming engine for the algorithm.
    pub fn create(self) -> Result<Engine> {
        Engine::new(self.descriptor())
    }

    /// Creates a boxed `digest` hasher for the algorithm.
    pub fn boxed(self) -> Box<dyn DynDigest> {
        match self {
            Algorithm::Bmw224 => Box::new(hasher::Bmw224::default()),
            Algorithm::Bmw256 => Box::new(hasher::Bmw256::default()),
            Algorithm::Bmw384 => Box::new(hasher::Bmw384::default()),
            Algorithm::Bmw512 => Box::new(hasher::Bmw512::default()),
            Algorithm::Groestl224 => Box::new(hasher::Groestl224::default()),
            Algorithm::Groestl256 => Box::new(hasher::Groestl256::default()),
            Algorithm::Groestl384 => Box::new(hasher::Groestl384::default()),
            Algorithm::Groestl512 => Box::new(hasher::Groestl512::default()),
            Algorithm::Jh224 => Box::new(hasher::Jh224::default()),
            Algorithm::Jh256 => Box::new(hasher::Jh256::default()),
            Algorithm::Jh384 => Box::new(hasher::Jh384::default()),
            Algorithm::Jh512 => Box::new(hasher::Jh512::default()),
            Algorithm::Shavite224 => Box::new(hasher::Shavite224::default()),
            Algorithm::Shavite256 => Box::new(hasher::Shavite256::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Lowercase without separators; "shavite3" and "shavite" name the same family.
fn normalize(name: &str) -> String {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match key.strip_prefix("shavite3") {
        Some(bits) => format!("shavite{}", bits),
        None => key,
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses names like `"BMW-224"`, `"groestl256"` or `"shavite3-256"`.
    fn from_str(s: &str) -> Result<Self> {
        let key = normalize(s);
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| normalize(a.name()) == key)
            .ok_or_else(|| {
                tracing::debug!(name = s, "unknown hash algorithm");
                Error::UnknownAlgorithm(s.to_string())
            })
    }
}

/// Creates a streaming engine for the algorithm called `name`.
pub fn create(name: &str) -> Result<Engine> {
    name.parse::<Algorithm>()?.create()
}
