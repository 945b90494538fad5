//! Reversible Base58 encoding of arbitrary bytes over a configurable alphabet.
//!
//! ```
//! use base58_codec::{base58, Charset, Codec};
//!
//! assert_eq!(base58::encode("Hello World!"), "2NEpo7TZRRrLZSi2U");
//!
//! let codec = Codec::from_charset(Charset::Flickr);
//! assert_eq!(codec.decode("2nePN7syqqRkyrH2t").unwrap(), b"Hello World!");
//! ```

pub mod base58;
pub mod base_common;
pub mod charset;
pub mod convert;

pub use self::{
    base58::Codec,
    base_common::{alphabet, Alphabet},
    charset::Charset,
};
