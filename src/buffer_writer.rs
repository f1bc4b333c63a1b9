pub struct BufferWriter {
    buffer: Vec<u8>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.write_buffer(&[value]);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.write_buffer(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.write_buffer(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.write_buffer(&value.to_le_bytes());
    }

    /// Bitcoin compact-size integer.
    pub fn write_var_int(&mut self, value: u64) {
        match value {
            0..=0xFC => self.write_u8(value as u8),
            0xFD..=0xFFFF => {
                self.write_u8(0xFD);
                self.write_u16(value as u16);
            }
            0x1_0000..=0xFFFF_FFFF => {
                self.write_u8(0xFE);
                self.write_u32(value as u32);
            }
            _ => {
                self.write_u8(0xFF);
                self.write_u64(value);
            }
        }
    }

    pub fn write_buffer(&mut self, value: &[u8]) {
        self.buffer.extend_from_slice(value);
    }

    pub fn write_var_buffer(&mut self, value: &[u8]) {
        self.write_var_int(value.len() as u64);
        self.write_buffer(value);
    }

    pub fn buffer(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for BufferWriter {
    fn default() -> Self {
        Self::new()
    }
}
