use std::{error, fmt, str::FromStr};

/// Number of symbols in a Base58 alphabet.
pub const LEN: usize = 58;

/// Reasons an alphabet is rejected at construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    DuplicateSymbol { symbol: char, first: usize, second: usize },
    NonAsciiSymbol { symbol: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(f, "Alphabet must contain {} symbols, found {}", LEN, length),
            Self::DuplicateSymbol { symbol, first, second } => {
                write!(f, "Duplicate symbol '{}' at indexes {} and {}", symbol, first, second)
            }
            Self::NonAsciiSymbol { symbol, index } => write!(f, "Non-ascii symbol {:#04x} at index {}", symbol, index),
        }
    }
}

/// An ordered set of 58 distinct ASCII symbols together with its inverse.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Alphabet {
    encode: [u8; LEN],
    decode: [Option<u8>; 128],
}

impl Alphabet {
    pub const fn new(symbols: &[u8]) -> Result<Self, Error> {
        if symbols.len() != LEN {
            return Err(Error::InvalidLength { length: symbols.len() });
        }

        let mut encode = [0u8; LEN];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < LEN {
            let symbol = symbols[index];
            if symbol >= 128 {
                return Err(Error::NonAsciiSymbol { symbol, index });
            }
            if let Some(first) = decode[symbol as usize] {
                return Err(Error::DuplicateSymbol {
                    symbol: symbol as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = symbol;
            decode[symbol as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Symbol for a digit value. Panics if `value >= 58`.
    pub const fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Digit value of a symbol, or `None` if the symbol is not part of the alphabet.
    pub const fn decode(&self, symbol: u8) -> Option<u8> {
        if symbol >= 128 {
            return None;
        }
        self.decode[symbol as usize]
    }

    /// The symbol standing for a leading zero byte.
    pub const fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn symbols(&self) -> &[u8; LEN] {
        &self.encode
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        crate::charset::IPFS
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(symbols: &str) -> Result<Self, Self::Err> {
        Self::new(symbols.as_bytes())
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Error;

    fn try_from(symbols: &str) -> Result<Self, Self::Error> {
        symbols.parse()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode.iter().try_for_each(|&symbol| write!(f, "{}", symbol as char))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet(\"{}\")", self)
    }
}
