use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::money;
use crate::settings::get_data_dir;

pub fn list(limit: usize) -> Result<()> {
    let conn = get_connection(&get_data_dir().join("redstring.db"))?;
    let mut stmt = conn.prepare(
        "SELECT c.refno, c.date, c.contributor_name, c.recipient_name, i.cfb_name, c.amount
         FROM contributions c
         LEFT JOIN individuals i ON i.id = c.recipient_id
         ORDER BY c.date DESC, c.refno DESC
         LIMIT ?1",
    )?;
    let rows: Vec<(String, Option<String>, String, String, Option<String>, i64)> = stmt
        .query_map([limit as i64], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec!["Refno", "Date", "Contributor", "Recipient (raw)", "Matched", "Amount"]);
    for (refno, date, contributor, recipient, matched, amount) in rows {
        table.add_row(vec![
            Cell::new(refno),
            Cell::new(date.unwrap_or_default()),
            Cell::new(contributor),
            Cell::new(recipient),
            Cell::new(matched.unwrap_or_default()),
            Cell::new(money(amount)),
        ]);
    }
    println!("Contributions\n{table}");
    Ok(())
}
