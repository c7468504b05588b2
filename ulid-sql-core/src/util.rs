use std::borrow::Cow;

/// Writes `values` into `out` using `f`, placing `separator` between the
/// entries that produced some output.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Shortens `value` for error messages, cutting on a char boundary.
pub fn truncate_long(value: &str) -> Cow<'_, str> {
    const MAX: usize = 497;
    if value.len() <= MAX {
        return Cow::Borrowed(value);
    }
    let mut end = MAX;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", value[..end].trim_end()))
}
