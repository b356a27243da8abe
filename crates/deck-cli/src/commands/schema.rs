//! Schema command implementation

use crate::error::Result;

/// Run the schema command
pub fn run_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&deck_config::json_schema())?);
    Ok(())
}
