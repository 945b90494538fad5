pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;

use self::{configuration::Configuration, error::Error, logger::Logger};
use base58_codec::Codec;
use serde_json::json;
use std::process;

fn run(configuration: &Configuration, logger: &Logger) -> Result<(), Box<dyn std::error::Error>> {
    let codec = Codec::new(configuration.alphabet());
    let format = configuration.input_format();
    let input = configuration.input();

    logger.log(format!("Alphabet {}", configuration.alphabet_name()));
    logger.log(format!("Input {}", format.format(input)));

    let encoded = codec.encode(input);
    logger.log(format!("Encoded {}", encoded));

    let decoded = codec.decode(&encoded)?;
    logger.log(format!("Decoded {}", format.format(&decoded)));

    if decoded != input {
        return Err(Error::new("Decoded payload does not match input").into());
    }

    let summary = json!({
        "alphabet": configuration.alphabet_name(),
        "input": format.format(input),
        "encoded": encoded,
        "decoded": format.format(&decoded),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() {
    let logger = Logger::new();
    let result = match Configuration::new() {
        Ok(configuration) => run(&configuration, &logger),
        Err(error) => Err(error.into()),
    };
    if let Err(error) = result {
        logger.error(error);
        process::exit(1);
    }
}
