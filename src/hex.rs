use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: char, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid character {:?} at position {}", character, index)
            }
            Error::OddLength => write!(f, "Odd number of digits"),
        }
    }
}

const fn nibble(character: u8, index: usize) -> Result<u8, Error> {
    match character {
        b'0'..=b'9' => Ok(character - b'0'),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'A'..=b'F' => Ok(character - b'A' + 10),
        _ => Err(Error::InvalidHexCharacter {
            character: character as char,
            index,
        }),
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    if input.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    input
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8, Error> { Ok(nibble(pair[0], 2 * i)? << 4 | nibble(pair[1], 2 * i + 1)?) })
        .collect()
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    input
        .as_ref()
        .iter()
        .flat_map(|byte| [TABLE[(byte >> 4) as usize], TABLE[(byte & 0x0f) as usize]])
        .map(char::from)
        .collect()
}
