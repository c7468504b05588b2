use crate::Expected;
use ulid_sql_core::{AsValue, Context, NullableUlid, SqlWriter, Ulid};

pub(crate) fn column_type<W: SqlWriter + ?Sized>(writer: &W, expected: &Expected) {
    let mut out = String::new();
    writer.write_column_type(&mut Context::default(), &mut out, &Ulid::as_empty_value());
    assert_eq!(out, expected.column_type);

    let mut out = String::new();
    writer.write_column_type(
        &mut Context::default(),
        &mut out,
        &NullableUlid::as_empty_value(),
    );
    assert_eq!(out, expected.column_type);

    assert_eq!(expected.dialect.column_type(), expected.column_type);
    assert_eq!(
        NullableUlid::column_type(&expected.dialect),
        expected.column_type
    );
    assert_eq!(NullableUlid::data_type(), "uuid");
}
