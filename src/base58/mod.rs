//! Base58 encoding over a configurable alphabet.
//!
//! A [`Codec`] treats its input as one big-endian unsigned integer and
//! rewrites it in the other base through [`crate::convert`]. Leading zero
//! bytes carry no magnitude, so they are counted separately and written as
//! one zero symbol each (and the reverse when decoding).

pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
use crate::base_common::alphabet;
use crate::charset::{self, Charset};

pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into, max_encoded_len};

const BYTE_BASE: u32 = 256;
const BASE: u32 = alphabet::LEN as u32;

/// Encodes and decodes with one fixed alphabet.
///
/// The alphabet tables are owned by the codec and never change, so a codec can
/// be shared between threads freely.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn from_charset(charset: Charset) -> Self {
        Self::new(charset.alphabet())
    }

    /// Builds a codec from a literal 58-symbol string.
    pub fn with_symbols(symbols: &str) -> Result<Self, alphabet::Error> {
        Ok(Self::new(symbols.parse()?))
    }

    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl Default for Codec {
    fn default() -> Self {
        CODEC
    }
}

impl From<Alphabet> for Codec {
    fn from(alphabet: Alphabet) -> Self {
        Self::new(alphabet)
    }
}

impl From<Charset> for Codec {
    fn from(charset: Charset) -> Self {
        Self::from_charset(charset)
    }
}

const CODEC: Codec = Codec::new(charset::IPFS);

/// Splits off the run of leading zero digits, returning its length and the rest.
fn split_zeros(digits: &[u32]) -> (usize, &[u32]) {
    let zeros = digits.iter().take_while(|&&digit| digit == 0).count();
    (zeros, &digits[zeros..])
}

#[cfg(test)]
mod tests {
    use super::{Codec, Charset};
    use proptest::prelude::*;

    const HELLO: &[u8] = b"Hello World!";
    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog.";
    const ZEROS: &[u8] = &[0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd];

    #[test]
    fn default_vectors() {
        let codec = Codec::default();
        assert_eq!(codec.encode(HELLO), "2NEpo7TZRRrLZSi2U");
        assert_eq!(codec.decode("2NEpo7TZRRrLZSi2U"), Ok(HELLO.to_vec()));
        assert_eq!(codec.encode(FOX), "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z");
        assert_eq!(
            codec.decode("USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z"),
            Ok(FOX.to_vec())
        );
        assert_eq!(codec.encode(ZEROS), "11233QC4");
        assert_eq!(codec.decode("11233QC4"), Ok(ZEROS.to_vec()));
    }

    #[test]
    fn gmp_vectors() {
        let codec = Codec::from_charset(Charset::Gmp);
        assert_eq!(codec.encode(HELLO), "1LDlk6QWOOnJWPf1R");
        assert_eq!(codec.encode(ZEROS), "00122NB3");
        assert_eq!(codec.encode([0xff, 0xff, 0xff, 0xff]), "6VUm8F");
        assert_eq!(codec.decode("00122NB3"), Ok(ZEROS.to_vec()));
    }

    #[test]
    fn flickr_vectors() {
        let codec = Codec::from(Charset::Flickr);
        assert_eq!(codec.encode(HELLO), "2nePN7syqqRkyrH2t");
        assert_eq!(
            codec.encode(FOX),
            "trL3EPwMjg5etbX2MCXbdmouBHo5GgDY2iG4ndV6FLDN1kKmDHjRkittbK6y"
        );
        assert_eq!(codec.decode("11233pc4"), Ok(ZEROS.to_vec()));
    }

    #[test]
    fn ripple_vectors() {
        let codec = Codec::from_charset(Charset::Ripple);
        assert_eq!(codec.encode(HELLO), "p4NFofTZRRiLZS5p7");
        assert_eq!(codec.encode(ZEROS), "rrpssQUh");
        assert_eq!(codec.encode([0x00]), "r");
        assert_eq!(codec.decode("p4NFofTZRRiLZS5p7"), Ok(HELLO.to_vec()));
    }

    #[test]
    fn custom_symbols() {
        let codec = Codec::with_symbols("123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ").unwrap();
        assert_eq!(codec, Codec::from_charset(Charset::Flickr));
        assert!(Codec::with_symbols("123").is_err());
    }

    #[test]
    fn bitcoin_matches_ipfs() {
        let bitcoin = Codec::from_charset(Charset::Bitcoin);
        assert_eq!(bitcoin.encode(FOX), Codec::default().encode(FOX));
    }

    #[test]
    fn shared_between_threads() {
        let codec = Codec::default();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| assert_eq!(codec.encode(HELLO), "2NEpo7TZRRrLZSi2U"));
            }
        });
    }

    fn charsets() -> impl Strategy<Value = Charset> {
        prop::sample::select(Charset::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn bytes_round_trip(charset in charsets(), input in prop::collection::vec(any::<u8>(), 0..128)) {
            let codec = Codec::from_charset(charset);
            prop_assert_eq!(codec.decode(codec.encode(&input)), Ok(input));
        }

        #[test]
        fn leading_zeros_preserved(zeros in 0usize..16, rest in prop::collection::vec(any::<u8>(), 0..32)) {
            let codec = Codec::default();
            let mut input = vec![0u8; zeros];
            input.extend_from_slice(&rest);
            // the zero run ends where the payload starts
            if let Some(first) = input.get_mut(zeros) {
                *first |= 1;
            }
            let encoded = codec.encode(&input);
            let zero = codec.alphabet().zero() as char;
            prop_assert_eq!(encoded.chars().take_while(|&c| c == zero).count(), zeros);
        }

        #[test]
        fn symbols_round_trip(charset in charsets(), digits in prop::collection::vec(0usize..58, 0..64)) {
            let codec = Codec::from_charset(charset);
            let text: String = digits.iter().map(|&digit| codec.alphabet().encode(digit) as char).collect();
            let decoded = codec.decode(&text).unwrap();
            prop_assert_eq!(codec.encode(decoded), text);
        }
    }
}
