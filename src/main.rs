use script_container::{hex, input, report, Configuration, Logger, OutputFormat, PartialLogger, ScriptContainer};
use std::{
    error::Error,
    fs,
    io::{self, Read},
    process,
};

fn read_input(configuration: &Configuration) -> io::Result<String> {
    match configuration.input_file_path() {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn run(configuration: &Configuration, logger: &Logger) -> Result<(), Box<dyn Error>> {
    let lines = input::parse(&read_input(configuration)?)?;
    logger.log(format!("Read {} outputs", lines.len()));

    let mut container = ScriptContainer::new();
    let mut partial_logger = PartialLogger::new(configuration.log_interval(), logger);
    for line in &lines {
        container
            .append(line.amount, &line.script)
            .map_err(|error| format!("Line {}: {}", line.number, error))?;
        partial_logger.log(|index| format!("Appended output {} from line {}", index, line.number));
    }

    match configuration.output_format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report(&container)?)?),
        OutputFormat::Hex => println!("{}", hex::encode(container.serialize()?)),
    }

    container.dispose();
    logger.log("Disposed container");
    Ok(())
}

fn main() {
    let logger = Logger::new();
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => {
            logger.log(error);
            process::exit(2);
        }
    };
    if let Err(error) = run(&configuration, &logger) {
        logger.log(error);
        process::exit(1);
    }
}
