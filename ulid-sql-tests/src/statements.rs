use crate::{Expected, sample_columns, sample_ids, sample_table};
use ulid_sql_core::SqlWriter;

pub(crate) fn statements<W: SqlWriter + ?Sized>(writer: &W, expected: &Expected) {
    let table = sample_table();

    let mut out = String::new();
    writer.write_create_table(&mut out, &table, &sample_columns(), true);
    assert_eq!(out, expected.create_table);

    let mut out = String::new();
    writer.write_insert(&mut out, &table, &["id", "name"], 2);
    assert_eq!(out, expected.insert);

    let mut out = String::new();
    writer.write_select_by_ids(&mut out, &table, "id", sample_ids().len());
    assert_eq!(out, expected.select);

    let mut out = String::new();
    writer.write_drop_table(&mut out, &table, true);
    assert_eq!(out, expected.drop_table);

    // An empty lookup is still valid SQL
    let mut out = String::new();
    writer.write_select_by_ids(&mut out, &table, "id", 0);
    assert!(out.starts_with("SELECT * FROM "), "{out}");
    assert!(!out.contains("IN ()"), "{out}");

    // Statements appended to a non empty buffer are placed on a new line
    let mut out = String::new();
    writer.write_drop_table(&mut out, &table, true);
    writer.write_create_table(&mut out, &table, &sample_columns(), true);
    assert_eq!(
        out,
        format!("{}\n{}", expected.drop_table, expected.create_table)
    );
}
