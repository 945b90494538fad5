use crate::{error::Error, hex};
use base58_codec::{Alphabet, Charset};
use std::{env, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputFormat {
    Text,
    Hex,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "hex" => Ok(Self::Hex),
            _ => Err(String::from("expected \"text\" or \"hex\"")),
        }
    }
}

impl InputFormat {
    pub fn format(self, payload: &[u8]) -> String {
        match self {
            Self::Text => String::from_utf8_lossy(payload).into_owned(),
            Self::Hex => hex::encode(payload),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: Alphabet,
    charset: Option<Charset>,
    input: Vec<u8>,
    input_format: InputFormat,
}

struct Variables<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Variables<F> {
    fn var(&self, key: &str, default: Option<&str>) -> Result<String, Error> {
        match (self.lookup)(key) {
            Some(value) => Ok(value),
            None => default.map(String::from).ok_or_else(|| Error::missing(key)),
        }
    }

    fn var_map<T, E: fmt::Display>(&self, key: &str, f: impl FnOnce(&str) -> Result<T, E>, default: Option<T>) -> Result<T, Error> {
        match (self.lookup)(key) {
            Some(value) => f(&value).map_err(|reason| Error::invalid(key, &value, reason)),
            None => default.ok_or_else(|| Error::missing(key)),
        }
    }
}

/// A preset name wins over a literal alphabet, so "gmp" is never read as symbols.
fn parse_alphabet(value: &str) -> Result<(Alphabet, Option<Charset>), String> {
    match value.parse::<Charset>() {
        Ok(charset) => Ok((charset.alphabet(), Some(charset))),
        Err(unknown) => value
            .parse::<Alphabet>()
            .map(|alphabet| (alphabet, None))
            .map_err(|error| format!("{} and {}", unknown, error.to_string().to_lowercase())),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let variables = Variables { lookup };
        let (alphabet, charset) = variables.var_map(
            "BASE58_ALPHABET",
            parse_alphabet,
            Some((Charset::default().alphabet(), Some(Charset::default()))),
        )?;
        let input_format = variables.var_map("BASE58_INPUT_FORMAT", |format| format.parse::<InputFormat>(), Some(InputFormat::Text))?;
        let input = variables.var("BASE58_INPUT", Some("Hello World!"))?;
        let input = match input_format {
            InputFormat::Text => input.into_bytes(),
            InputFormat::Hex => hex::decode(&input).map_err(|reason| Error::invalid("BASE58_INPUT", &input, reason))?,
        };
        Ok(Self {
            alphabet,
            charset,
            input,
            input_format,
        })
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Preset name, or the symbols themselves for a custom alphabet.
    pub fn alphabet_name(&self) -> String {
        match self.charset {
            Some(charset) => charset.to_string(),
            None => self.alphabet.to_string(),
        }
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn input_format(&self) -> InputFormat {
        self.input_format
    }
}
