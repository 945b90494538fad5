use super::{split_zeros, Codec, BASE, BYTE_BASE, CODEC};
use crate::convert::convert;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall { required: usize, available: usize },
    /// `index` is the byte offset of the symbol within the input.
    UnknownSymbol { symbol: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required, available } => {
                write!(f, "Output buffer too small ({} bytes required, {} available)", required, available)
            }
            Error::UnknownSymbol { symbol, index } if symbol.is_ascii_graphic() => {
                write!(f, "Unknown symbol '{}' at index {}", *symbol as char, index)
            }
            Error::UnknownSymbol { symbol, index } => write!(f, "Unknown symbol {:#04x} at index {}", symbol, index),
        }
    }
}

impl Codec {
    /// Returns the number of leading zero symbols and the base-256 digits of the rest.
    fn decode_digits(&self, input: &[u8]) -> Result<(usize, Vec<u32>), Error> {
        let digits = input
            .iter()
            .enumerate()
            .map(|(index, &symbol)| match self.alphabet.decode(symbol) {
                Some(value) => Ok(u32::from(value)),
                None => Err(Error::UnknownSymbol { symbol, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let (zeros, digits) = split_zeros(&digits);
        Ok((zeros, convert(digits, BASE, BYTE_BASE)))
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let (zeros, digits) = self.decode_digits(input.as_ref())?;
        let mut output = vec![0u8; zeros];
        output.extend(digits.into_iter().map(|digit| digit as u8));
        Ok(output)
    }

    /// Writes the decoded bytes to the front of `output` and returns their count.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let (zeros, digits) = self.decode_digits(input.as_ref())?;

        let len = zeros + digits.len();
        if output.len() < len {
            return Err(Error::BufferTooSmall {
                required: len,
                available: output.len(),
            });
        }

        let (head, tail) = output[..len].split_at_mut(zeros);
        head.fill(0);
        for (value, digit) in tail.iter_mut().zip(digits) {
            *value = digit as u8;
        }
        Ok(len)
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    CODEC.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    CODEC.decode_into(input, output)
}
