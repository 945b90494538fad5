use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Prints messages stamped with the time elapsed since the logger was created.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, value: impl Display) {
        println!("{}", self.line(value));
    }

    pub fn error(&self, value: impl Display) {
        eprintln!("{}", self.line(format!("Error: {}", value)));
    }

    fn line(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::Logger;

    #[test]
    fn line() {
        let line = Logger::new().line("Encoded 2g");
        assert!(line.starts_with("Encoded 2g (00:"));
        assert!(line.ends_with(" elapsed)"));
    }
}
