use ulid_sql_core::{Context, Dialect, SqlWriter, TableRef, Ulid, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct SQLiteSqlWriter {}

impl SqlWriter for SQLiteSqlWriter {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn write_table_ref(&self, context: &mut Context, out: &mut String, value: &TableRef) {
        // Sqlite has attached databases instead of schemas, the name is flattened
        out.push('"');
        if !value.schema.is_empty() {
            self.write_escaped(context, out, &value.schema, '"', "\"\"");
            out.push('.');
        }
        self.write_escaped(context, out, &value.name, '"', "\"\"");
        out.push('"');
    }

    fn write_column_type(&self, _context: &mut Context, out: &mut String, value: &Value) {
        match value {
            Value::Boolean(..) => out.push_str("INTEGER"),
            Value::Int32(..) => out.push_str("INTEGER"),
            Value::Int64(..) => out.push_str("INTEGER"),
            Value::Float64(..) => out.push_str("REAL"),
            Value::Varchar(..) => out.push_str("TEXT"),
            Value::Blob(..) => out.push_str("BLOB"),
            Value::Uuid(..) => out.push_str("TEXT"),
            Value::Ulid(..) => out.push_str(Dialect::Sqlite.column_type()),
            _ => log::error!(
                "Unexpected ulid_sql::Value, cannot get the sql type from {:?} variant",
                value
            ),
        };
    }

    fn write_value_bool(&self, _context: &mut Context, out: &mut String, value: bool) {
        out.push(['0', '1'][value as usize]);
    }

    fn write_value_infinity(&self, _context: &mut Context, out: &mut String, negative: bool) {
        if negative {
            out.push('-');
        }
        out.push_str("1.0e+10000");
    }

    fn write_value_nan(&self, context: &mut Context, out: &mut String) {
        // SQLite stores NaN as NULL
        self.write_value_none(context, out);
    }

    fn write_value_ulid(&self, context: &mut Context, out: &mut String, value: &Ulid) {
        self.write_value_blob(context, out, &value.to_bytes());
    }
}
