use crate::Result;
use anyhow::Context;
use std::{convert::Infallible, fmt, str::FromStr};
use url::Url;

/// Database backend targeted by the generated SQL.
///
/// Passed explicitly to whatever needs it (usually to pick a
/// [`crate::SqlWriter`]). Names are matched case-insensitively and unknown
/// names are kept in [`Dialect::Other`], which uses the generic SQL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// MySQL and MariaDB.
    MySql,
    /// PostgreSQL and CockroachDB.
    Postgres,
    Sqlite,
    Other(String),
}

impl Dialect {
    /// Dialect from the scheme of a connection url like `postgres://user@host/db`.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .with_context(|| format!("Could not parse the connection url `{url}`"))?;
        Ok(Self::from(parsed.scheme()))
    }

    pub fn name(&self) -> &str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::Other(name) => name,
        }
    }

    /// Column type storing a ulid.
    pub fn column_type(&self) -> &'static str {
        match self {
            Dialect::MySql => "VARBINARY(16)",
            Dialect::Postgres => "uuid",
            Dialect::Sqlite => "BLOB",
            Dialect::Other(..) => "uuid",
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Other(String::new())
    }
}

impl From<&str> for Dialect {
    fn from(value: &str) -> Self {
        let lowercase = value.trim().to_ascii_lowercase();
        match lowercase.as_str() {
            "mysql" | "mariadb" => Dialect::MySql,
            "postgres" | "postgresql" | "cockroach" | "cockroachdb" => Dialect::Postgres,
            "sqlite" | "sqlite3" => Dialect::Sqlite,
            _ => Dialect::Other(lowercase),
        }
    }
}

impl FromStr for Dialect {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
