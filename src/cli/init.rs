use colored::Colorize;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::settings::{save_settings, Settings};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let settings = match data_dir {
        Some(dir) => Settings { data_dir: dir },
        None => Settings::default(),
    };
    std::fs::create_dir_all(&settings.data_dir)?;

    let db_path = std::path::Path::new(&settings.data_dir).join("redstring.db");
    let conn = get_connection(&db_path)?;
    init_db(&conn)?;
    save_settings(&settings)?;

    println!("{} {}", "Initialized database at".green(), db_path.display());
    Ok(())
}
