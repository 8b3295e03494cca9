use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;

/// Resolve a raw CFB recipient name to a stored individual.
///
/// The filings often carry one trailing token the canonical name lacks
/// (a middle initial or generational suffix), so after an exact miss we
/// drop the last whitespace-delimited token and try once more. That is
/// the only fallback; there is deliberately no scored or edit-distance
/// matching.
pub fn resolve_recipient(conn: &Connection, name: &str) -> Result<Option<i64>> {
    if let Some(id) = lookup(conn, name)? {
        return Ok(Some(id));
    }
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return Ok(None);
    }
    let trimmed = parts[..parts.len() - 1].join(" ");
    lookup(conn, &trimmed)
}

fn lookup(conn: &Connection, cfb_name: &str) -> Result<Option<i64>> {
    let id = conn
        .query_row("SELECT id FROM individuals WHERE cfb_name = ?1", [cfb_name], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};
    use crate::models::Individual;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    fn add_individual(conn: &Connection, first: &str, last: &str) -> i64 {
        conn.execute(
            "INSERT INTO individuals (first_name, last_name, cfb_name) VALUES (?1, ?2, ?3)",
            rusqlite::params![first, last, Individual::cfb_name(first, last)],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    #[test]
    fn test_exact_match() {
        let (_dir, conn) = test_db();
        let id = add_individual(&conn, "John", "Smith");
        assert_eq!(resolve_recipient(&conn, "Smith, John").unwrap(), Some(id));
    }

    #[test]
    fn test_match_after_dropping_last_token() {
        let (_dir, conn) = test_db();
        let id = add_individual(&conn, "John", "Smith");
        assert_eq!(resolve_recipient(&conn, "Smith, John A").unwrap(), Some(id));
    }

    #[test]
    fn test_no_match() {
        let (_dir, conn) = test_db();
        add_individual(&conn, "John", "Smith");
        assert_eq!(resolve_recipient(&conn, "Jones, Alice").unwrap(), None);
    }

    #[test]
    fn test_single_token_name_has_no_fallback() {
        let (_dir, conn) = test_db();
        add_individual(&conn, "John", "Smith");
        assert_eq!(resolve_recipient(&conn, "Smith").unwrap(), None);
    }

    #[test]
    fn test_fallback_rejoins_with_single_spaces() {
        let (_dir, conn) = test_db();
        let id = add_individual(&conn, "John", "Smith");
        // Extra interior whitespace collapses during the rejoin.
        assert_eq!(resolve_recipient(&conn, "Smith,  John  Jr").unwrap(), Some(id));
    }
}
