/// Primary key constraint of the `documents` table.
const DOCUMENTS_PKEY: &str = "documents_pkey";

pub fn is_unique_violation_on_id(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(DOCUMENTS_PKEY))
}
