use crate::error::Result;
use crate::settings::get_data_dir;

pub fn run() -> Result<()> {
    let path = get_data_dir().join("unmatched_names.txt");
    if !path.exists() {
        println!("No unmatched-names report found. Run an import first.");
        return Ok(());
    }
    let content = std::fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        println!("Every recipient name in the last import matched an individual.");
    } else {
        print!("{content}");
    }
    Ok(())
}
