use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: char, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid character {:?} at position {}", character, index)
            }
            Error::OddLength => write!(f, "Odd number of digits"),
        }
    }
}

const fn nibble(character: u8, index: usize) -> Result<u8, Error> {
    match character {
        b'A'..=b'F' => Ok(character - b'A' + 10),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'0'..=b'9' => Ok(character - b'0'),
        _ => Err(Error::InvalidHexCharacter {
            character: character as char,
            index,
        }),
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let (offset, digits) = match input {
        [b'0', b'x' | b'X', rest @ ..] => (2, rest),
        _ => (0, input),
    };
    if digits.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    digits
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8, Error> {
            let index = offset + 2 * i;
            Ok(nibble(pair[0], index)? << 4 | nibble(pair[1], index + 1)?)
        })
        .collect()
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode(b"Hello world"), "48656c6c6f20776f726c64");
        assert_eq!(super::encode(b""), "");
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode("48656c6c6f20776f726c64"), Ok(b"Hello world".to_vec()));
        assert_eq!(super::decode("0x51"), Ok(vec![0x51]));
        assert_eq!(super::decode("0XAbCd"), Ok(vec![0xab, 0xcd]));
        assert_eq!(super::decode(""), Ok(vec![]));
    }

    #[test]
    fn decode_errors() {
        assert_eq!(super::decode("0x5"), Err(Error::OddLength));
        assert_eq!(
            super::decode("0x5g"),
            Err(Error::InvalidHexCharacter { character: 'g', index: 3 })
        );
    }
}
