use ulid_sql_core::{Context, Dialect, SqlWriter, Ulid, Value};

/// MySQL and MariaDB: binary ulid columns, backtick identifiers, `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySQLSqlWriter {}

impl SqlWriter for MySQLSqlWriter {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn write_identifier_quoted(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('`');
        self.write_escaped(context, out, value, '`', "``");
        out.push('`');
    }

    fn write_column_type(&self, _context: &mut Context, out: &mut String, value: &Value) {
        match value {
            Value::Boolean(..) => out.push_str("BOOLEAN"),
            Value::Int32(..) => out.push_str("INTEGER"),
            Value::Int64(..) => out.push_str("BIGINT"),
            Value::Float64(..) => out.push_str("DOUBLE"),
            Value::Varchar(..) => out.push_str("VARCHAR(255)"),
            Value::Blob(..) => out.push_str("BLOB"),
            Value::Uuid(..) => out.push_str("CHAR(36)"),
            Value::Ulid(..) => out.push_str(Dialect::MySql.column_type()),
            _ => log::error!(
                "Unexpected ulid_sql::Value, variant {:?} is not supported",
                value
            ),
        };
    }

    fn write_value_infinity(&self, _context: &mut Context, out: &mut String, negative: bool) {
        if negative {
            out.push('-');
        }
        out.push_str("1.0e+10000");
    }

    fn write_value_nan(&self, context: &mut Context, out: &mut String) {
        // No NaN in MySQL
        self.write_value_none(context, out);
    }

    fn write_value_string(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('\'');
        let mut escaped = String::with_capacity(value.len());
        self.write_escaped(context, &mut escaped, value, '\\', "\\\\");
        self.write_escaped(context, out, &escaped, '\'', "''");
        out.push('\'');
    }

    fn write_value_ulid(&self, context: &mut Context, out: &mut String, value: &Ulid) {
        self.write_value_blob(context, out, &value.to_bytes());
    }
}
