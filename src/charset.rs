//! Preset Base58 alphabets.

use crate::base_common::Alphabet;
use serde::{Deserialize, Serialize};
use std::{error, fmt, str::FromStr};

const fn preset(symbols: &[u8]) -> Alphabet {
    match Alphabet::new(symbols) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    }
}

pub const GMP: Alphabet = preset(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuv");
pub const BITCOIN: Alphabet = preset(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
pub const FLICKR: Alphabet = preset(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ");
pub const RIPPLE: Alphabet = preset(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");
pub const IPFS: Alphabet = preset(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownCharset {
    name: String,
}

impl UnknownCharset {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl error::Error for UnknownCharset {}

impl fmt::Display for UnknownCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown charset \"{}\"", self.name)
    }
}

/// Names one of the preset alphabets.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    Gmp,
    Bitcoin,
    Flickr,
    Ripple,
    #[default]
    Ipfs,
}

impl Charset {
    pub const ALL: [Charset; 5] = [Self::Gmp, Self::Bitcoin, Self::Flickr, Self::Ripple, Self::Ipfs];

    pub const fn alphabet(self) -> Alphabet {
        match self {
            Self::Gmp => GMP,
            Self::Bitcoin => BITCOIN,
            Self::Flickr => FLICKR,
            Self::Ripple => RIPPLE,
            Self::Ipfs => IPFS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Gmp => "gmp",
            Self::Bitcoin => "bitcoin",
            Self::Flickr => "flickr",
            Self::Ripple => "ripple",
            Self::Ipfs => "ipfs",
        }
    }
}

impl FromStr for Charset {
    type Err = UnknownCharset;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|charset| charset.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCharset { name: name.to_string() })
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Charset> for Alphabet {
    fn from(charset: Charset) -> Self {
        charset.alphabet()
    }
}
