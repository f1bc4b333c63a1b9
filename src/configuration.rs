use std::{env, error, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputFormat {
    Json,
    Hex,
}

#[derive(Debug)]
pub struct InvalidOutputFormat;

impl fmt::Display for InvalidOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expecting json or hex")
    }
}

impl error::Error for InvalidOutputFormat {}

impl FromStr for OutputFormat {
    type Err = InvalidOutputFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "hex" => Ok(OutputFormat::Hex),
            _ => Err(InvalidOutputFormat),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    input_file_path: Option<String>,
    output_format: OutputFormat,
    log_interval: usize,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, String> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, String> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let input_file_path = var(&lookup, "INPUT_FILE_PATH", None).ok();
        let output_format = var_map(&lookup, "OUTPUT_FORMAT", |format| format.parse(), Some(OutputFormat::Json))?;
        let log_interval = var_map(&lookup, "LOG_INTERVAL", |interval| interval.parse(), Some(1000))?;
        Ok(Self {
            input_file_path,
            output_format,
            log_interval,
        })
    }

    pub fn input_file_path(&self) -> Option<&str> {
        self.input_file_path.as_deref()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}
