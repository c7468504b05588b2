use crate::{Dialect, SqlWriter};

/// Entry point of a dialect crate.
pub trait Driver {
    type SqlWriter: SqlWriter;

    /// Canonical dialect name, it parses back into [`Driver::dialect`].
    const NAME: &'static str;

    fn sql_writer(&self) -> Self::SqlWriter;

    fn dialect(&self) -> Dialect {
        Dialect::from(Self::NAME)
    }
}
