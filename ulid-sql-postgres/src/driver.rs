use crate::PostgresSqlWriter;
use ulid_sql_core::Driver;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDriver;
impl PostgresDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for PostgresDriver {
    type SqlWriter = PostgresSqlWriter;

    const NAME: &'static str = "postgres";
    fn sql_writer(&self) -> Self::SqlWriter {
        PostgresSqlWriter::default()
    }
}
