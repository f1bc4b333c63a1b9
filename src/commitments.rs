use crate::{BufferWriter, ScriptOutput};
use sha2::{Digest, Sha256};

// BIP-341 sha_amounts and sha_scriptpubkeys.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PrevoutCommitments {
    pub amounts: [u8; 32],
    pub scripts: [u8; 32],
}

impl PrevoutCommitments {
    pub fn from_outputs<'a>(outputs: impl IntoIterator<Item = &'a ScriptOutput>) -> Self {
        let mut amounts = Sha256::new();
        let mut scripts = Sha256::new();
        for output in outputs {
            amounts.update(output.amount.to_sat().to_le_bytes());
            let mut writer = BufferWriter::new();
            writer.write_var_buffer(&output.script);
            scripts.update(writer.buffer());
        }
        Self {
            amounts: digest(amounts),
            scripts: digest(scripts),
        }
    }
}

fn digest(hasher: Sha256) -> [u8; 32] {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

#[cfg(test)]
mod tests {
    use super::PrevoutCommitments;
    use crate::{hex, Amount, ScriptOutput};
    use std::convert::TryFrom;

    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn empty() {
        let commitments = PrevoutCommitments::from_outputs(&Vec::<ScriptOutput>::new());
        assert_eq!(hex::encode(commitments.amounts), EMPTY);
        assert_eq!(hex::encode(commitments.scripts), EMPTY);
    }

    #[test]
    fn order_matters() {
        let a = ScriptOutput::new(Amount::try_from(1000i64).unwrap(), vec![0x51]);
        let b = ScriptOutput::new(Amount::try_from(2500i64).unwrap(), vec![0x52]);
        let forward = PrevoutCommitments::from_outputs(&[a.clone(), b.clone()]);
        let backward = PrevoutCommitments::from_outputs(&[b, a]);
        assert_ne!(forward.amounts, backward.amounts);
        assert_ne!(forward.scripts, backward.scripts);
        assert_ne!(hex::encode(forward.amounts), EMPTY);
    }
}
