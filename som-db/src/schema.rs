//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `species` - one row per scientific name; the primary key makes a later
///   row with the same name replace the earlier one
/// - `observations` - observation rows in source order (`id` is the load order)
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS species (
        scientific_name TEXT PRIMARY KEY,
        genus TEXT NOT NULL,
        species TEXT NOT NULL,
        common_name TEXT
    );

    CREATE TABLE IF NOT EXISTS observations (
        id INTEGER PRIMARY KEY,
        scientific_name TEXT NOT NULL,
        latitude REAL,
        longitude REAL,
        place TEXT NOT NULL,
        observed_on TEXT NOT NULL,
        photo_url TEXT,
        quality_grade TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_obs_species ON observations(scientific_name);
    CREATE INDEX IF NOT EXISTS idx_obs_grade ON observations(quality_grade);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in &["species", "observations"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
