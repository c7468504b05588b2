use std::fmt::Write;
use ulid_sql_core::{Context, Dialect, SqlWriter, Value};

/// PostgreSQL and CockroachDB: ulids live in `uuid` columns, placeholders are numbered.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresSqlWriter {}

impl SqlWriter for PostgresSqlWriter {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn write_column_type(&self, _context: &mut Context, out: &mut String, value: &Value) {
        match value {
            Value::Boolean(..) => out.push_str("BOOLEAN"),
            Value::Int32(..) => out.push_str("INTEGER"),
            Value::Int64(..) => out.push_str("BIGINT"),
            Value::Float64(..) => out.push_str("DOUBLE PRECISION"),
            Value::Varchar(..) => out.push_str("TEXT"),
            Value::Blob(..) => out.push_str("BYTEA"),
            Value::Uuid(..) => out.push_str("UUID"),
            Value::Ulid(..) => out.push_str(Dialect::Postgres.column_type()),
            _ => log::error!(
                "Unexpected ulid_sql::Value, variant {:?} is not supported",
                value
            ),
        };
    }

    fn write_value_blob(&self, _context: &mut Context, out: &mut String, value: &[u8]) {
        out.push_str("'\\x");
        for b in value {
            let _ = write!(out, "{:02X}", b);
        }
        out.push_str("'::BYTEA");
    }

    fn write_placeholder(&self, context: &mut Context, out: &mut String) {
        context.counter += 1;
        let mut buffer = itoa::Buffer::new();
        out.push('$');
        out.push_str(buffer.format(context.counter));
    }
}
