#[cfg(test)]
mod tests {
    use ulid_sql_core::{AsValue, Dialect, NullableUlid, Ulid, Value};

    #[test]
    fn nullable_scan() {
        let id = Ulid::from_parts(123, 0);
        let tests: Vec<(&str, Value, Option<NullableUlid>)> = vec![
            ("nil input", Value::Null, Some(NullableUlid::null())),
            ("typed null", Value::Blob(None), Some(NullableUlid::null())),
            ("valid string", Value::Varchar(Some(id.to_string())), Some(id.into())),
            ("valid bytes", Value::Blob(Some(id.to_bytes().into())), Some(id.into())),
            (
                "valid bytes string representation",
                Value::Blob(Some(id.to_string().into_bytes().into())),
                Some(id.into()),
            ),
            ("invalid string", Value::Varchar(Some("invalid".into())), None),
            ("invalid bytes", Value::Blob(Some(b"invalid".as_slice().into())), None),
            ("unsupported type", Value::Int64(Some(123)), None),
        ];
        for (name, input, want) in tests {
            let mut nu = NullableUlid::default();
            let result = nu.scan(input);
            match want {
                Some(want) => {
                    assert!(result.is_ok(), "{name}: {result:?}");
                    assert_eq!(nu.is_valid(), want.is_valid(), "{name}");
                    assert_eq!(nu.ulid(), want.ulid(), "{name}");
                }
                None => assert!(result.is_err(), "{name}: expected an error"),
            }
        }
    }

    #[test]
    fn nullable_scan_failure_keeps_previous() {
        let id = Ulid::from_parts(7, 7);
        let mut nu = NullableUlid::new(id);
        assert!(nu.scan(Value::Int32(Some(1))).is_err());
        assert_eq!(nu.ulid(), Some(id));
        nu.scan(Value::Null).unwrap();
        assert!(!nu.is_valid());
        assert_eq!(nu, NullableUlid::null());
    }

    #[test]
    fn nullable_scan_overflow() {
        let id = Ulid::from_parts(3, 3);
        let mut nu = NullableUlid::new(id);
        let text = "ZZZZZZZZZZZZZZZZZZZZZZZZZZ";
        assert!(nu.scan(Value::Varchar(Some(text.into()))).is_err());
        assert!(nu.scan(Value::Blob(Some(text.as_bytes().into()))).is_err());
        assert_eq!(nu.ulid(), Some(id));
    }

    #[test]
    fn nullable_scan_nil_is_valid() {
        let mut nu = NullableUlid::null();
        nu.scan(Value::Blob(Some([0u8; 16].into()))).unwrap();
        assert!(nu.is_valid());
        assert_eq!(nu.ulid(), Some(Ulid::nil()));
    }

    #[test]
    fn nullable_value() {
        assert_eq!(NullableUlid::null().value(), Value::Null);
        let id = Ulid::from_parts(123, 0);
        assert_eq!(
            NullableUlid::new(id).value(),
            Value::Blob(Some(id.to_bytes().into()))
        );
    }

    #[test]
    fn nullable_round_trip() {
        let id = Ulid::new();
        let mut nu = NullableUlid::null();
        nu.scan(NullableUlid::new(id).value()).unwrap();
        assert_eq!(nu.ulid(), Some(id));
        nu.scan(NullableUlid::null().value()).unwrap();
        assert_eq!(nu.ulid(), None);
    }

    #[test]
    fn nullable_conversions() {
        let id = Ulid::from_parts(5, 5);
        assert_eq!(NullableUlid::from(Some(id)), NullableUlid::new(id));
        assert_eq!(NullableUlid::from(None), NullableUlid::null());
        assert_eq!(Option::<Ulid>::from(NullableUlid::new(id)), Some(id));
        assert_eq!(Option::<Ulid>::from(NullableUlid::null()), None);
        assert_eq!(NullableUlid::new(id).as_value(), Value::Ulid(Some(id)));
        assert_eq!(NullableUlid::null().as_value(), Value::Ulid(None));
        assert_eq!(
            NullableUlid::try_from_value(Value::Varchar(Some(id.to_string()))).unwrap(),
            NullableUlid::new(id)
        );
        assert_eq!(
            NullableUlid::try_from_value(Value::Null).unwrap(),
            NullableUlid::null()
        );
    }

    #[test]
    fn nullable_data_type() {
        assert_eq!(NullableUlid::data_type(), "uuid");
        let tests = [
            ("mysql", "VARBINARY(16)"),
            ("postgres", "uuid"),
            ("sqlite", "BLOB"),
            ("sqlserver", "uuid"),
        ];
        for (dialect, want) in tests {
            assert_eq!(NullableUlid::column_type(&Dialect::from(dialect)), want, "{dialect}");
        }
    }
}
