mod column_type;
mod literals;
mod placeholders;
mod statements;

use crate::{
    column_type::column_type, literals::literals, placeholders::placeholders,
    statements::statements,
};
use log::LevelFilter;
use std::env;
use ulid_sql_core::{ColumnDef, Dialect, SqlWriter, TableRef, Ulid};

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// What a dialect is expected to render for the shared fixtures.
#[derive(Debug, Clone)]
pub struct Expected {
    pub dialect: Dialect,
    /// Column type of a ulid.
    pub column_type: &'static str,
    /// Placeholders for the three [`sample_ids`].
    pub placeholders: &'static str,
    /// Literal of `Ulid::from_parts(1, 0)`.
    pub ulid_literal: &'static str,
    /// [`sample_table`] created with `IF NOT EXISTS`.
    pub create_table: &'static str,
    /// Two rows of `id` and `name`.
    pub insert: &'static str,
    /// Lookup of the three [`sample_ids`] by `id`.
    pub select: &'static str,
    pub drop_table: &'static str,
}

pub fn sample_ids() -> [Ulid; 3] {
    [
        Ulid::from_parts(1, 0),
        Ulid::from_parts(2, 0),
        Ulid::from_parts(3, 0),
    ]
}

pub fn sample_table() -> TableRef {
    TableRef::new("test_ulid_models")
}

pub fn sample_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new::<Ulid>("id").primary_key(),
        ColumnDef::new::<String>("name"),
        ColumnDef::new::<Option<Ulid>>("parent_id"),
    ]
}

pub fn execute_tests<W: SqlWriter + ?Sized>(writer: &W, expected: &Expected) {
    assert_eq!(writer.dialect(), expected.dialect);
    column_type(writer, expected);
    placeholders(writer, expected);
    literals(writer, expected);
    statements(writer, expected);
}
