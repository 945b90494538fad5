use std::{error, fmt};

/// Configuration or runtime failure of the demo, carried as a message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn missing(key: &str) -> Self {
        Self::new(format!("Missing {}", key))
    }

    pub fn invalid(key: &str, value: &str, reason: impl fmt::Display) -> Self {
        Self::new(format!("Invalid {} \"{}\": {}", key, value, reason))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for Error {}
