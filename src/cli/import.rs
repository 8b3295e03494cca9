use std::path::PathBuf;

use colored::Colorize;

use crate::db::get_connection;
use crate::error::Result;
use crate::importer::{import_file, write_unmatched_report};
use crate::settings::get_data_dir;

pub fn run(file: &str) -> Result<()> {
    let file_path = PathBuf::from(file);
    let data_dir = get_data_dir();
    let conn = get_connection(&data_dir.join("redstring.db"))?;

    let result = import_file(&conn, &file_path)?;

    println!(
        "{} imported, {} skipped (already present), {} missing a reference number",
        result.imported.to_string().green(),
        result.duplicates,
        result.missing_refno,
    );

    let report_path = data_dir.join("unmatched_names.txt");
    match write_unmatched_report(&report_path, &result.unmatched) {
        Ok(()) => {
            if !result.unmatched.is_empty() {
                println!(
                    "{} unmatched recipient names written to {}",
                    result.unmatched.len().to_string().yellow(),
                    report_path.display()
                );
            }
        }
        // The import itself already committed; a failed report is only a warning.
        Err(e) => eprintln!("unable to write unmatched-names report: {e}"),
    }

    Ok(())
}
