use crate::Error;
use std::convert::TryInto;

pub struct BufferReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BufferReader<'a> {
    pub fn new(buffer: &'a [u8]) -> BufferReader<'a> {
        Self { buffer, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_buffer(1)?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, Error> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, Error> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, Error> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_var_int_le(&mut self) -> Result<u64, Error> {
        let (value, minimum): (u64, u64) = match self.read_u8()? {
            0xFD => (self.read_u16_le()?.into(), 0xFD),
            0xFE => (self.read_u32_le()?.into(), 0x1_0000),
            0xFF => (self.read_u64_le()?, 0x1_0000_0000),
            byte => return Ok(byte.into()),
        };
        if value < minimum {
            return Err(Error::invalid_argument(format!("Non-canonical compact size {}", value)));
        }
        Ok(value)
    }

    pub fn read_buffer(&mut self, length: usize) -> Result<&'a [u8], Error> {
        let end = self
            .offset
            .checked_add(length)
            .filter(|end| *end <= self.buffer.len())
            .ok_or_else(|| {
                Error::invalid_argument(format!("Unexpected end of buffer reading {} bytes at offset {}", length, self.offset))
            })?;
        let buffer = &self.buffer[self.offset..end];
        self.offset = end;
        Ok(buffer)
    }

    pub fn read_var_buffer_le(&mut self) -> Result<Vec<u8>, Error> {
        let length = self.read_var_int_le()?;
        let length = length
            .try_into()
            .map_err(|_| Error::invalid_argument(format!("Buffer length {} too large", length)))?;
        Ok(self.read_buffer(length)?.to_vec())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_buffer(N)?);
        Ok(array)
    }
}
