use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("already exists: {entity}")]
    Duplicate { entity: &'static str },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(err.to_string())
            }
            _ => Self::Database(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_violations_are_mapped() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (x TEXT NOT NULL UNIQUE)")
            .unwrap();
        conn.execute("INSERT INTO t (x) VALUES ('a')", []).unwrap();

        let err: Error = conn
            .execute("INSERT INTO t (x) VALUES ('a')", [])
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Constraint(_)));
    }

    #[test]
    fn test_other_sqlite_errors_stay_database() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err: Error = conn
            .execute("SELECT * FROM no_such_table", [])
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Database(_)));
    }
}
