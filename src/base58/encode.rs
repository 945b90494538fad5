use super::{split_zeros, Codec, BASE, BYTE_BASE, CODEC};
use crate::convert::convert;
use std::{error, fmt, iter};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoding.
    BufferTooSmall { required: usize, available: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required, available } => {
                write!(f, "Output buffer too small ({} bytes required, {} available)", required, available)
            }
        }
    }
}

/// Upper bound on the encoded length of `len` input bytes.
pub const fn max_encoded_len(len: usize) -> usize {
    // log(256) / log(58) < 1.38
    len * 138 / 100 + 1
}

impl Codec {
    /// Returns the number of leading zero bytes and the base-58 digits of the rest.
    fn encode_digits(&self, input: &[u8]) -> (usize, Vec<u32>) {
        let digits: Vec<u32> = input.iter().map(|&byte| u32::from(byte)).collect();
        let (zeros, digits) = split_zeros(&digits);
        (zeros, convert(digits, BYTE_BASE, BASE))
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let (zeros, digits) = self.encode_digits(input.as_ref());
        iter::repeat(0)
            .take(zeros)
            .chain(digits)
            .map(|digit| self.alphabet.encode(digit as usize) as char)
            .collect()
    }

    /// Writes the encoding of `input` to the front of `output` and returns its length.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let (zeros, digits) = self.encode_digits(input.as_ref());

        let len = zeros + digits.len();
        if output.len() < len {
            return Err(Error::BufferTooSmall {
                required: len,
                available: output.len(),
            });
        }

        let (head, tail) = output[..len].split_at_mut(zeros);
        head.fill(self.alphabet.zero());
        for (value, digit) in tail.iter_mut().zip(digits) {
            *value = self.alphabet.encode(digit as usize);
        }
        Ok(len)
    }
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    CODEC.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    CODEC.encode_into(input, output)
}
