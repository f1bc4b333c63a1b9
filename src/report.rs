use crate::{hex, Error, ScriptContainer};
use serde_json::{json, Value};

// Valid appends can sum past the Amount range. Null only past u64.
fn total_amount(container: &ScriptContainer) -> Result<Option<u64>, Error> {
    Ok(container
        .outputs()?
        .iter()
        .try_fold(0u64, |total, output| total.checked_add(output.amount.to_sat())))
}

pub fn report(container: &ScriptContainer) -> Result<Value, Error> {
    let commitments = container.commitments()?;
    Ok(json!({
        "count": container.len()?,
        "total_amount": total_amount(container)?,
        "outputs": container.outputs()?,
        "serialized": hex::encode(container.serialize()?),
        "sha_amounts": hex::encode(commitments.amounts),
        "sha_scriptpubkeys": hex::encode(commitments.scripts),
    }))
}
