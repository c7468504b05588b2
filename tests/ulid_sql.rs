#[cfg(test)]
mod tests {
    use indoc::indoc;
    use ulid_sql::{
        ColumnDef, Dialect, NullableUlid, SqlWriter, TableRef, Ulid, Value, scan_ulid,
        sql_writer, sql_writer_for_url, ulid_placeholders,
    };
    use ulid_sql_tests::{Expected, execute_tests, init_logs, sample_ids};

    #[test]
    fn placeholders_per_dialect() {
        init_logs();
        let ids = sample_ids();
        let tests = [
            ("mysql", "?,?,?"),
            ("postgres", "$1,$2,$3"),
            ("sqlite", "?,?,?"),
            ("other", "?,?,?"),
        ];
        for (dialect, want) in tests {
            let writer = sql_writer(&Dialect::from(dialect));
            let (args, placeholders) = ulid_placeholders(writer.as_ref(), &ids);
            assert_eq!(args.len(), 3, "{dialect}");
            assert_eq!(placeholders, want, "{dialect}");
        }
    }

    #[test]
    fn writer_dialect() {
        for dialect in [Dialect::MySql, Dialect::Postgres, Dialect::Sqlite] {
            assert_eq!(sql_writer(&dialect).dialect(), dialect);
        }
        assert_eq!(
            sql_writer(&Dialect::from("sqlserver")).dialect(),
            Dialect::default()
        );
    }

    #[test]
    fn generic_writer() {
        init_logs();
        let writer = sql_writer(&Dialect::from("duckdb"));
        execute_tests(
            writer.as_ref(),
            &Expected {
                dialect: Dialect::default(),
                column_type: "uuid",
                placeholders: "?,?,?",
                ulid_literal: "'00000000-0001-0000-0000-000000000000'",
                create_table: indoc! {r#"
                    CREATE TABLE IF NOT EXISTS "test_ulid_models" (
                    "id" uuid PRIMARY KEY,
                    "name" VARCHAR NOT NULL,
                    "parent_id" uuid);"#},
                insert: indoc! {r#"
                    INSERT INTO "test_ulid_models" ("id", "name") VALUES
                    (?,?),
                    (?,?);"#},
                select: indoc! {r#"
                    SELECT * FROM "test_ulid_models"
                    WHERE "id" IN (?,?,?);"#},
                drop_table: r#"DROP TABLE IF EXISTS "test_ulid_models";"#,
            },
        );
    }

    #[test]
    fn cockroach_model() {
        init_logs();
        let writer = sql_writer_for_url("postgresql://root@localhost:26257/latix?sslmode=disable")
            .expect("Could not pick a writer from the url");
        let table = TableRef::new("test_ulid_models");

        let mut out = String::new();
        writer.write_create_table(
            &mut out,
            &table,
            &[
                ColumnDef::new::<Ulid>("id").primary_key(),
                ColumnDef::new::<String>("name"),
            ],
            true,
        );
        assert_eq!(
            out,
            indoc! {r#"
                CREATE TABLE IF NOT EXISTS "test_ulid_models" (
                "id" uuid PRIMARY KEY,
                "name" TEXT NOT NULL);"#}
        );

        let id = Ulid::new();
        let (args, placeholders) = ulid_placeholders(writer.as_ref(), &[id]);
        assert_eq!(placeholders, "$1");
        let mut out = String::new();
        writer.write_select_by_ids(&mut out, &table, "id", args.len());
        assert!(out.ends_with(r#"WHERE "id" IN ($1);"#), "{out}");

        // The row comes back with the value that was bound
        let loaded = scan_ulid(args.into_iter().next().unwrap_or_default()).unwrap();
        assert_eq!(loaded, id);
    }

    #[test]
    fn nullable_column_per_dialect() {
        let tests = [
            ("mysql", "VARBINARY(16)"),
            ("postgres", "uuid"),
            ("sqlite", "BLOB"),
            ("other", "uuid"),
        ];
        for (dialect, want) in tests {
            let dialect = Dialect::from(dialect);
            assert_eq!(NullableUlid::column_type(&dialect), want);
            let mut out = String::new();
            sql_writer(&dialect).write_column_type(
                &mut Default::default(),
                &mut out,
                &Value::Ulid(None),
            );
            assert_eq!(out, want);
        }
    }

    #[test]
    fn bad_url() {
        assert!(sql_writer_for_url("::").is_err());
    }
}
