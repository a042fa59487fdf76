//! Canonical field-mapping encoder used as hashing input.
//!
//! A mapping of named fields is rendered as compact JSON with object keys
//! sorted lexicographically, recursively through nested mappings and
//! sequences. Two mappings with identical key/value pairs encode to
//! byte-identical output regardless of insertion order, so a proof-of-work
//! guess and the eventually stored block hash to the same value.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Encode any serializable field mapping into its canonical byte form.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let value = serde_json::to_value(value)?;
    let mut out = Vec::new();
    write_value(&value, &mut out)?;
    Ok(out)
}

/// Lowercase hex SHA-256 of the canonical encoding.
pub fn digest_hex<T: Serialize>(value: &T) -> Result<String> {
    let encoded = to_canonical_json(value)?;
    Ok(crate::utils::sha256_hex(encoded.as_slice()))
}

fn write_value(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::Object(fields) => {
            // Keys sorted explicitly; the invariant must not depend on the
            // backing map implementation.
            let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push(b'{');
            for (idx, (key, field)) in entries.into_iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                out.extend(serde_json::to_vec(key)?);
                out.push(b':');
                write_value(field, out)?;
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                write_value(item, out)?;
            }
            out.push(b']');
        }
        scalar => out.extend(serde_json::to_vec(scalar)?),
    }
    Ok(())
}
