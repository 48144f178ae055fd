//! Classification of PostgreSQL errors.

/// Name of the unique constraint guarding `links.short_name`.
pub const SHORT_NAME_CONSTRAINT: &str = "links_short_name_key";

/// Returns true if `e` is a unique violation on the alias constraint.
pub fn is_unique_violation_on_short_name(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_NAME_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert!(!is_unique_violation_on_short_name(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_short_name(&sqlx::Error::PoolTimedOut));
    }
}
