use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS individuals (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    cfb_name TEXT NOT NULL UNIQUE,
    role TEXT,
    updated_ts TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS contributions (
    id INTEGER PRIMARY KEY,
    refno TEXT NOT NULL UNIQUE,
    amount INTEGER NOT NULL,
    date TEXT,
    contributor_name TEXT NOT NULL DEFAULT '',
    recipient_name TEXT NOT NULL DEFAULT '',
    recipient_id INTEGER,
    cfb_recipient_id TEXT NOT NULL DEFAULT '',
    election TEXT NOT NULL DEFAULT '',
    office_cd TEXT NOT NULL DEFAULT '',
    can_class TEXT NOT NULL DEFAULT '',
    committee TEXT NOT NULL DEFAULT '',
    filing TEXT NOT NULL DEFAULT '',
    schedule TEXT NOT NULL DEFAULT '',
    c_code TEXT NOT NULL DEFAULT '',
    borough TEXT NOT NULL DEFAULT '',
    city TEXT NOT NULL DEFAULT '',
    state TEXT NOT NULL DEFAULT '',
    zip TEXT NOT NULL DEFAULT '',
    occupation TEXT NOT NULL DEFAULT '',
    employer_name TEXT NOT NULL DEFAULT '',
    created_at TEXT DEFAULT (datetime('now')),
    FOREIGN KEY (recipient_id) REFERENCES individuals(id)
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    #[test]
    fn test_init_db_creates_tables() {
        let (_dir, conn) = test_db();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        for expected in &["individuals", "contributions"] {
            assert!(tables.contains(&expected.to_string()), "missing table: {expected}");
        }
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn).unwrap();
    }

    #[test]
    fn test_refno_is_unique() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO contributions (refno, amount) VALUES ('R1', 100)", [],
        ).unwrap();
        let dup = conn.execute(
            "INSERT INTO contributions (refno, amount) VALUES ('R1', 200)", [],
        );
        assert!(dup.is_err());
    }

    #[test]
    fn test_cfb_name_is_unique() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO individuals (first_name, last_name, cfb_name) VALUES ('John', 'Smith', 'Smith, John')", [],
        ).unwrap();
        let dup = conn.execute(
            "INSERT INTO individuals (first_name, last_name, cfb_name) VALUES ('Johnny', 'Smith', 'Smith, John')", [],
        );
        assert!(dup.is_err());
    }
}
