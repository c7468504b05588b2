use crate::{
    ColumnDef, Dialect, PrimaryKeyType, TableRef, Value, separated_by, ulid_to_uuid,
    writer::Context,
};
use std::fmt::Write;
use ulid::Ulid;

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

macro_rules! write_float {
    ($this:ident, $context:ident, $out:ident, $value:expr) => {{
        if $value.is_infinite() {
            $this.write_value_infinity($context, $out, $value.is_sign_negative());
        } else if $value.is_nan() {
            $this.write_value_nan($context, $out);
        } else {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        }
    }};
}

/// Dialect printer turning ulid columns, values and placeholders into SQL.
///
/// Every method has a generic implementation (close to PostgreSQL without
/// numbered placeholders), dialects override what differs.
pub trait SqlWriter {
    /// Dialect this writer renders.
    fn dialect(&self) -> Dialect {
        Dialect::default()
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &str,
        search: char,
        replace: &str,
    ) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    fn write_identifier_quoted(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(context, out, value, '"', "\"\"");
        out.push('"');
    }

    fn write_table_ref(&self, context: &mut Context, out: &mut String, value: &TableRef) {
        if !value.schema.is_empty() {
            self.write_identifier_quoted(context, out, &value.schema);
            out.push('.');
        }
        self.write_identifier_quoted(context, out, &value.name);
    }

    /// Render the SQL type for a `Value` prototype.
    fn write_column_type(&self, _context: &mut Context, out: &mut String, value: &Value) {
        match value {
            Value::Boolean(..) => out.push_str("BOOLEAN"),
            Value::Int32(..) => out.push_str("INTEGER"),
            Value::Int64(..) => out.push_str("BIGINT"),
            Value::Float64(..) => out.push_str("DOUBLE"),
            Value::Varchar(..) => out.push_str("VARCHAR"),
            Value::Blob(..) => out.push_str("BLOB"),
            Value::Uuid(..) => out.push_str("UUID"),
            Value::Ulid(..) => out.push_str(Dialect::default().column_type()),
            Value::Null => log::error!(
                "Unexpected Value::Null, a column needs a typed prototype like Value::Ulid(None)"
            ),
        };
    }

    /// Render a concrete value (including proper quoting / escaping).
    fn write_value(&self, context: &mut Context, out: &mut String, value: &Value) {
        match value {
            v if v.is_null() => self.write_value_none(context, out),
            Value::Boolean(Some(v)) => self.write_value_bool(context, out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::Float64(Some(v)) => write_float!(self, context, out, *v),
            Value::Varchar(Some(v)) => self.write_value_string(context, out, v),
            Value::Blob(Some(v)) => self.write_value_blob(context, out, v),
            Value::Uuid(Some(v)) => {
                let _ = write!(out, "'{v}'");
            }
            Value::Ulid(Some(v)) => self.write_value_ulid(context, out, v),
            _ => log::error!("Cannot write {:?}", value),
        };
    }

    fn write_value_none(&self, _context: &mut Context, out: &mut String) {
        out.push_str("NULL");
    }

    fn write_value_bool(&self, _context: &mut Context, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize]);
    }

    /// Render an infinite float, as a cast from its text form by default.
    fn write_value_infinity(&self, context: &mut Context, out: &mut String, negative: bool) {
        let mut buffer = ryu::Buffer::new();
        let value = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        self.write_float_cast(context, out, buffer.format(value));
    }

    fn write_value_nan(&self, context: &mut Context, out: &mut String) {
        let mut buffer = ryu::Buffer::new();
        self.write_float_cast(context, out, buffer.format(f64::NAN));
    }

    /// `CAST('<text>' AS <float type>)`
    fn write_float_cast(&self, context: &mut Context, out: &mut String, text: &str) {
        out.push_str("CAST(");
        self.write_value_string(context, out, text);
        out.push_str(" AS ");
        self.write_column_type(context, out, &Value::Float64(None));
        out.push(')');
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(context, out, value, '\'', "''");
        out.push('\'');
    }

    /// Render a blob literal using hex escapes.
    fn write_value_blob(&self, _context: &mut Context, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        out.push_str(&hex::encode_upper(value));
        out.push('\'');
    }

    /// Render a ulid literal, as a uuid unless the dialect stores bytes.
    fn write_value_ulid(&self, _context: &mut Context, out: &mut String, value: &Ulid) {
        let _ = write!(out, "'{}'", ulid_to_uuid(*value));
    }

    /// Render one bind parameter placeholder.
    fn write_placeholder(&self, context: &mut Context, out: &mut String) {
        context.counter += 1;
        out.push('?');
    }

    /// Render `count` comma separated placeholders.
    fn write_placeholders(&self, context: &mut Context, out: &mut String, count: usize) {
        separated_by(
            out,
            0..count,
            |out, _| self.write_placeholder(context, out),
            ",",
        );
    }

    /// Emit CREATE TABLE with one line per column.
    fn write_create_table(
        &self,
        out: &mut String,
        table: &TableRef,
        columns: &[ColumnDef],
        if_not_exists: bool,
    ) {
        let mut context = Context::default();
        out.reserve(64 + columns.len() * 32);
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("CREATE TABLE ");
        if if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        self.write_table_ref(&mut context, out, table);
        out.push_str(" (\n");
        separated_by(
            out,
            columns,
            |out, v| self.write_create_table_column_fragment(&mut context, out, v),
            ",\n",
        );
        let primary_key = columns
            .iter()
            .filter(|v| v.primary_key == PrimaryKeyType::PartOfPrimaryKey)
            .collect::<Vec<_>>();
        if !primary_key.is_empty() {
            out.push_str(",\nPRIMARY KEY (");
            separated_by(
                out,
                primary_key,
                |out, v| self.write_identifier_quoted(&mut context, out, &v.name),
                ", ",
            );
            out.push(')');
        }
        out.push_str(");");
    }

    /// Emit single column definition fragment.
    fn write_create_table_column_fragment(
        &self,
        context: &mut Context,
        out: &mut String,
        column: &ColumnDef,
    ) {
        self.write_identifier_quoted(context, out, &column.name);
        out.push(' ');
        self.write_column_type(context, out, &column.value);
        if !column.nullable && column.primary_key == PrimaryKeyType::None {
            out.push_str(" NOT NULL");
        }
        if column.primary_key == PrimaryKeyType::PrimaryKey {
            // Composite primary key is printed after the columns
            out.push_str(" PRIMARY KEY");
        }
    }

    fn write_drop_table(&self, out: &mut String, table: &TableRef, if_exists: bool) {
        let mut context = Context::default();
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("DROP TABLE ");
        if if_exists {
            out.push_str("IF EXISTS ");
        }
        self.write_table_ref(&mut context, out, table);
        out.push(';');
    }

    /// Emit INSERT INTO with `rows` tuples of placeholders. Nothing is written
    /// when there are no rows or no columns.
    fn write_insert(&self, out: &mut String, table: &TableRef, columns: &[&str], rows: usize) {
        if rows == 0 || columns.is_empty() {
            log::warn!(
                "Skipping the insert into `{}`, it has {} rows of {} columns",
                table.name,
                rows,
                columns.len()
            );
            return;
        }
        let mut context = Context::default();
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("INSERT INTO ");
        self.write_table_ref(&mut context, out, table);
        out.push_str(" (");
        separated_by(
            out,
            columns,
            |out, v| self.write_identifier_quoted(&mut context, out, v),
            ", ",
        );
        out.push_str(") VALUES\n");
        separated_by(
            out,
            0..rows,
            |out, _| {
                out.push('(');
                self.write_placeholders(&mut context, out, columns.len());
                out.push(')');
            },
            ",\n",
        );
        out.push(';');
    }

    /// Emit SELECT of the rows whose `column` matches one of `count` ids.
    /// An empty batch selects nothing with a false condition.
    fn write_select_by_ids(&self, out: &mut String, table: &TableRef, column: &str, count: usize) {
        let mut context = Context::default();
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("SELECT * FROM ");
        self.write_table_ref(&mut context, out, table);
        out.push_str("\nWHERE ");
        if count == 0 {
            self.write_value_bool(&mut context, out, false);
            out.push(';');
            return;
        }
        self.write_identifier_quoted(&mut context, out, column);
        out.push_str(" IN (");
        self.write_placeholders(&mut context, out, count);
        out.push_str(");");
    }
}

/// Fallback writer used for dialects without a dedicated crate.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for GenericSqlWriter {}
