use crate::{AsValue, Error, Result, SqlWriter, UlidError, Value, truncate_long, writer::Context};
use std::str;
use ulid::Ulid;
use uuid::Uuid;

/// Scan a row value into a [`Ulid`].
///
/// Accepted inputs:
/// - NULL of any type: the nil ulid, no error.
/// - `Varchar`: the 26 characters base32 form.
/// - `Blob`: 16 raw bytes, otherwise the bytes of the 26 characters form.
/// - `Ulid` and `Uuid`: taken byte for byte.
///
/// Every other variant fails with [`UlidError::UnsupportedType`].
pub fn scan_ulid(value: Value) -> Result<Ulid> {
    if value.is_null() {
        return Ok(Ulid::nil());
    }
    match value {
        Value::Ulid(Some(v)) => Ok(v),
        Value::Uuid(Some(v)) => Ok(uuid_to_ulid(v)),
        Value::Varchar(Some(v)) => parse_ulid(&v),
        Value::Blob(Some(v)) => scan_ulid_bytes(&v),
        _ => Err(Error::new(UlidError::UnsupportedType {
            found: value.type_name(),
        })),
    }
}

/// Driver value to store a [`Ulid`]: NULL for the nil ulid, the 16 bytes otherwise.
pub fn value_ulid(ulid: Ulid) -> Value {
    if ulid.is_nil() {
        Value::Null
    } else {
        Value::Blob(Some(ulid.to_bytes().into()))
    }
}

/// Bind arguments and the placeholder list for a batch of ids, e.g. the
/// `IN (...)` of a lookup. Placeholders are numbered from the first one.
pub fn ulid_placeholders<W: SqlWriter + ?Sized>(writer: &W, ids: &[Ulid]) -> (Vec<Value>, String) {
    let args = ids.iter().map(|v| v.as_value()).collect::<Vec<_>>();
    let mut out = String::with_capacity(ids.len() * 4);
    writer.write_placeholders(&mut Context::default(), &mut out, ids.len());
    (args, out)
}

pub fn ulid_to_uuid(ulid: Ulid) -> Uuid {
    Uuid::from_bytes(ulid.to_bytes())
}

pub fn uuid_to_ulid(uuid: Uuid) -> Ulid {
    Ulid::from_bytes(*uuid.as_bytes())
}

fn parse_ulid(input: &str) -> Result<Ulid> {
    let malformed = |reason: String| {
        Error::new(UlidError::Malformed {
            input: truncate_long(input).into_owned(),
            reason,
        })
    };
    let ulid = Ulid::from_string(input).map_err(|e| malformed(e.to_string()))?;
    // 26 base32 characters hold 130 bits, the decoder drops the top two
    if !matches!(input.as_bytes().first(), Some(b'0'..=b'7')) {
        return Err(malformed("value overflows 128 bits".into()));
    }
    Ok(ulid)
}

fn scan_ulid_bytes(input: &[u8]) -> Result<Ulid> {
    if let Ok(bytes) = <[u8; 16]>::try_from(input) {
        return Ok(Ulid::from_bytes(bytes));
    }
    log::debug!(
        "Blob of {} bytes is not a binary ulid, decoding it as text",
        input.len()
    );
    match str::from_utf8(input) {
        Ok(text) => parse_ulid(text),
        Err(e) => Err(Error::new(UlidError::Malformed {
            input: truncate_long(&hex::encode_upper(input)).into_owned(),
            reason: format!("expected 16 bytes or utf-8 text, {e}"),
        })),
    }
}

impl AsValue for Ulid {
    fn as_empty_value() -> Value {
        Value::Ulid(None)
    }
    fn as_value(self) -> Value {
        Value::Ulid(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        scan_ulid(value)
    }
    fn parse(input: impl AsRef<str>) -> Result<Self> {
        parse_ulid(input.as_ref())
    }
}
