use crate::{Amount, BufferReader, BufferWriter, Error, PrevoutCommitments, ScriptOutput};
use std::{
    convert::TryFrom,
    mem,
    sync::{Mutex, MutexGuard, PoisonError},
};

#[derive(Debug)]
enum State {
    Active(Vec<ScriptOutput>),
    Disposed,
}

#[derive(Debug)]
pub struct ScriptContainer {
    state: Mutex<State>,
}

impl ScriptContainer {
    pub fn new() -> Self {
        Self::from_outputs(Vec::new())
    }

    fn from_outputs(outputs: Vec<ScriptOutput>) -> Self {
        Self {
            state: Mutex::new(State::Active(outputs)),
        }
    }

    // Every transition is a single assignment, so a poisoned lock still holds a consistent state.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn outputs_mut(&mut self) -> Result<&mut Vec<ScriptOutput>, Error> {
        match self.state.get_mut().unwrap_or_else(PoisonError::into_inner) {
            State::Active(outputs) => Ok(outputs),
            State::Disposed => Err(Error::disposed()),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&[ScriptOutput]) -> T) -> Result<T, Error> {
        match &*self.lock() {
            State::Active(outputs) => Ok(f(outputs.as_slice())),
            State::Disposed => Err(Error::disposed()),
        }
    }

    pub fn append(&mut self, amount: i64, script: &[u8]) -> Result<(), Error> {
        let outputs = self.outputs_mut()?;
        let amount = Amount::try_from(amount)?;
        outputs.push(ScriptOutput::new(amount, script));
        Ok(())
    }

    pub fn push(&mut self, output: ScriptOutput) -> Result<(), Error> {
        self.outputs_mut()?.push(output);
        Ok(())
    }

    pub fn dispose(&self) {
        let previous = mem::replace(&mut *self.lock(), State::Disposed);
        drop(previous);
    }

    pub fn is_disposed(&self) -> bool {
        matches!(*self.lock(), State::Disposed)
    }

    pub fn len(&self) -> Result<usize, Error> {
        self.read(|outputs| outputs.len())
    }

    pub fn is_empty(&self) -> Result<bool, Error> {
        self.read(|outputs| outputs.is_empty())
    }

    pub fn outputs(&self) -> Result<Vec<ScriptOutput>, Error> {
        self.read(|outputs| outputs.to_vec())
    }

    pub fn into_outputs(self) -> Result<Vec<ScriptOutput>, Error> {
        match self.state.into_inner().unwrap_or_else(PoisonError::into_inner) {
            State::Active(outputs) => Ok(outputs),
            State::Disposed => Err(Error::disposed()),
        }
    }

    pub fn total_amount(&self) -> Result<Amount, Error> {
        self.read(|outputs| {
            outputs
                .iter()
                .try_fold(Amount::ZERO, |total, output| total.checked_add(output.amount))
                .ok_or_else(|| Error::invalid_argument("Total amount out of range"))
        })?
    }

    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        self.read(|outputs| {
            let mut writer = BufferWriter::new();
            writer.write_var_int(outputs.len() as u64);
            for output in outputs {
                output.write(&mut writer);
            }
            writer.buffer()
        })
    }

    pub fn deserialize(buffer: &[u8]) -> Result<Self, Error> {
        let mut reader = BufferReader::new(buffer);
        let count = reader.read_var_int_le()?;
        let mut outputs = Vec::new();
        for _ in 0..count {
            outputs.push(ScriptOutput::from_reader(&mut reader)?);
        }
        if !reader.is_empty() {
            return Err(Error::invalid_argument(format!(
                "Unexpected trailing bytes at offset {}",
                reader.offset()
            )));
        }
        Ok(Self::from_outputs(outputs))
    }

    pub fn commitments(&self) -> Result<PrevoutCommitments, Error> {
        self.read(|outputs| PrevoutCommitments::from_outputs(outputs))
    }
}

impl Default for ScriptContainer {
    fn default() -> Self {
        Self::new()
    }
}
