use crate::{hex, Error};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Line {
    pub number: usize,
    pub amount: i64,
    pub script: Vec<u8>,
}

pub fn parse_line(number: usize, line: &str) -> Result<Option<Line>, Error> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut fields = line.split_whitespace();
    let amount = fields.next().unwrap_or_default();
    let amount = amount
        .parse::<i64>()
        .map_err(|_| Error::invalid_argument(format!(r#"Line {}: invalid amount "{}""#, number, amount)))?;
    let script = match fields.next() {
        Some(script) => {
            hex::decode(script).map_err(|error| Error::invalid_argument(format!("Line {}: {}", number, error)))?
        }
        None => Vec::new(),
    };
    if let Some(extra) = fields.next() {
        return Err(Error::invalid_argument(format!(r#"Line {}: unexpected field "{}""#, number, extra)));
    }
    Ok(Some(Line { number, amount, script }))
}

pub fn parse(input: &str) -> Result<Vec<Line>, Error> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line).transpose())
        .collect()
}
