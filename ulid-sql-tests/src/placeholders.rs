use crate::{Expected, sample_ids};
use ulid_sql_core::{Context, SqlWriter, Value, ulid_placeholders};

pub(crate) fn placeholders<W: SqlWriter + ?Sized>(writer: &W, expected: &Expected) {
    let ids = sample_ids();
    let (args, placeholders) = ulid_placeholders(writer, &ids);
    assert_eq!(args.len(), 3);
    assert_eq!(placeholders, expected.placeholders);
    for (arg, id) in args.iter().zip(ids) {
        assert_eq!(*arg, Value::Ulid(Some(id)));
    }

    // Empty batch
    let (args, placeholders) = ulid_placeholders(writer, &[]);
    assert!(args.is_empty());
    assert_eq!(placeholders, "");

    // Two batches in the same statement keep counting
    let mut context = Context::default();
    let mut out = String::new();
    writer.write_placeholders(&mut context, &mut out, 2);
    out.push(';');
    writer.write_placeholders(&mut context, &mut out, 1);
    assert_eq!(context.counter, 3);
    let (first, second) = expected
        .placeholders
        .rsplit_once(',')
        .expect("Three placeholders are separated by commas");
    assert_eq!(out, format!("{first};{second}"));
}
