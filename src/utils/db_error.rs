//! Helpers for interpreting database errors.

/// Returns whether `e` is a unique-constraint violation on `links.short_code`.
///
/// SQLite reports no constraint name, so the column is matched in the message
/// (`UNIQUE constraint failed: links.short_code`).
pub fn is_unique_violation_on_short_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("links.short_code")
}
