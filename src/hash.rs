use crate::error::FilterError;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Lane order. Changing it changes every derived index.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Digest of the UTF-8 bytes of `word`, in the standard output byte order.
    pub fn digest(self, word: &str) -> Vec<u8> {
        match self {
            Algorithm::Sha1 => Sha1::digest(word.as_bytes()).to_vec(),
            Algorithm::Sha256 => Sha256::digest(word.as_bytes()).to_vec(),
            Algorithm::Sha512 => Sha512::digest(word.as_bytes()).to_vec(),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FilterError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = FilterError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| FilterError::UnsupportedAlgorithm(ordinal.to_string()))
    }
}

/// Reduces a little-endian integer of arbitrary width modulo `modulus`.
fn le_bytes_mod(bytes: &[u8], modulus: NonZeroUsize) -> usize {
    let m = modulus.get() as u128;
    // Horner's rule from the most significant byte; `acc < m <= u64::MAX`
    // keeps `acc << 8` inside u128.
    let acc = bytes
        .iter()
        .rev()
        .fold(0u128, |acc, &b| ((acc << 8) | b as u128) % m);
    acc as usize
}

/// Digest of `word` read as a little-endian unsigned integer, modulo `max_index`.
pub fn derive_index(word: &str, algorithm: Algorithm, max_index: NonZeroUsize) -> usize {
    le_bytes_mod(&algorithm.digest(word), max_index)
}

/// One index per algorithm, in [`Algorithm::ALL`] order. Not deduplicated.
pub fn derive_indexes(word: &str, max_index: NonZeroUsize) -> [usize; 3] {
    Algorithm::ALL.map(|alg| derive_index(word, alg, max_index))
}
