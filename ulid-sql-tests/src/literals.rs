use crate::Expected;
use ulid_sql_core::{Context, NullableUlid, SqlWriter, Ulid, Value};

pub(crate) fn literals<W: SqlWriter + ?Sized>(writer: &W, expected: &Expected) {
    let id = Ulid::from_parts(1, 0);

    let mut out = String::new();
    writer.write_value(&mut Context::default(), &mut out, &Value::Ulid(Some(id)));
    assert_eq!(out, expected.ulid_literal);

    let mut out = String::new();
    writer.write_value(&mut Context::default(), &mut out, &Value::Ulid(None));
    assert_eq!(out, "NULL");

    let mut out = String::new();
    writer.write_value(&mut Context::default(), &mut out, &NullableUlid::null().value());
    assert_eq!(out, "NULL");

    let mut out = String::new();
    writer.write_value(&mut Context::default(), &mut out, &"it's".into());
    assert!(out.contains("it''s"), "Quote was not escaped in {out}");
}
