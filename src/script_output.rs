use crate::{hex, Amount, BufferReader, BufferWriter, Error};
use serde::{Serialize, Serializer};
use std::convert::TryFrom;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ScriptOutput {
    pub amount: Amount,
    #[serde(serialize_with = "serialize_hex")]
    pub script: Vec<u8>,
}

fn serialize_hex<S: Serializer>(script: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(script))
}

impl ScriptOutput {
    pub fn new(amount: Amount, script: impl Into<Vec<u8>>) -> Self {
        Self {
            amount,
            script: script.into(),
        }
    }

    pub fn write(&self, writer: &mut BufferWriter) {
        writer.write_u64(self.amount.to_sat());
        writer.write_var_buffer(&self.script);
    }

    pub fn from_reader(reader: &mut BufferReader) -> Result<Self, Error> {
        let amount = Amount::try_from(reader.read_u64_le()?)?;
        let script = reader.read_var_buffer_le()?;
        Ok(Self { amount, script })
    }
}
