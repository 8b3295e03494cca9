use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::Result;
use crate::models::Individual;
use crate::settings::get_data_dir;

pub fn add(first: &str, last: &str, role: Option<&str>) -> Result<()> {
    let conn = get_connection(&get_data_dir().join("redstring.db"))?;
    let cfb_name = Individual::cfb_name(first, last);
    conn.execute(
        "INSERT INTO individuals (first_name, last_name, cfb_name, role) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![first, last, cfb_name, role],
    )?;
    println!("Added individual: {cfb_name}");
    Ok(())
}

pub fn list() -> Result<()> {
    let conn = get_connection(&get_data_dir().join("redstring.db"))?;
    let mut stmt =
        conn.prepare("SELECT id, cfb_name, role FROM individuals ORDER BY cfb_name")?;
    let rows: Vec<(i64, String, Option<String>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Role"]);
    for (id, cfb_name, role) in rows {
        table.add_row(vec![
            Cell::new(id),
            Cell::new(cfb_name),
            Cell::new(role.unwrap_or_default()),
        ]);
    }
    println!("Individuals\n{table}");
    Ok(())
}
