use std::fmt;

use sqlx::postgres::PgArguments;
use sqlx::{Arguments, Encode, Postgres, Type};

use super::composer;
use super::error::PaginationError;
use super::request::PaginationRequest;

/// SQL text and the arguments bound to its placeholders.
pub(crate) struct Statement {
    sql: String,
    args: PgArguments,
}

impl Statement {
    /// `SELECT * FROM <table>`.
    pub(crate) fn select_all(table: &str) -> Result<Self, PaginationError> {
        let table = checked_identifier(table)?;
        Ok(Self::raw(format!("SELECT * FROM {table}")))
    }

    /// `SELECT count(*) FROM <table>`.
    pub(crate) fn count_all(table: &str) -> Result<Self, PaginationError> {
        let table = checked_identifier(table)?;
        Ok(Self::raw(format!("SELECT count(*) FROM {table}")))
    }

    fn raw(sql: String) -> Self {
        Self { sql, args: PgArguments::default() }
    }

    #[allow(dead_code)]
    pub(crate) fn bind<T>(mut self, value: T) -> Result<Self, PaginationError>
    where
        T: 'static + Encode<'static, Postgres> + Type<Postgres>,
    {
        Arguments::add(&mut self.args, value)
            .map_err(|err| PaginationError::StatementBuild(err.to_string()))?;
        Ok(self)
    }

    pub(crate) fn sql(&self) -> &str {
        &self.sql
    }

    pub(crate) fn arg_count(&self) -> usize {
        Arguments::len(&self.args)
    }

    /// Appends ordering and slicing clauses; bound arguments are kept as they are.
    pub(crate) fn decorated(self, request: &PaginationRequest) -> Self {
        Self { sql: composer::decorate(&self.sql, request), args: self.args }
    }

    pub(crate) fn into_parts(self) -> (String, PgArguments) {
        (self.sql, self.args)
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("sql", &self.sql)
            .field("args", &self.arg_count())
            .finish()
    }
}

/// Accepts `name` or `schema.name` where every part is a plain SQL identifier.
fn checked_identifier(name: &str) -> Result<&str, PaginationError> {
    let valid = !name.is_empty() && name.split('.').count() <= 2 && name.split('.').all(is_plain);
    if valid {
        Ok(name)
    } else {
        Err(PaginationError::StatementBuild(format!("invalid table identifier '{name}'")))
    }
}

fn is_plain(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
