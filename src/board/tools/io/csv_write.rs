use std::fs;
use std::path::Path;

use crate::board::tools::error::Result;
use crate::board::tools::flatten::Row;

/// Header line of the CSV artifact.
pub const CSV_HEADER: &str = "\"Theme\", \"Epic\", \"Item\", \"ItemType\", \"Points\"";

/// Renders the flat table as quoted, comma-space separated text with the
/// fixed header and a trailing newline. Cell values are interpolated
/// directly: embedded quotes or commas are not escaped, matching the
/// historical output byte for byte.
pub fn render_table(rows: &[Row]) -> String {
    let body = rows
        .iter()
        .map(render_row)
        .collect::<Vec<String>>()
        .join("\n");
    format!("{CSV_HEADER}\n{body}\n")
}

fn render_row(row: &Row) -> String {
    let Row(theme, epic, item, item_type, points) = row;
    format!("\"{theme}\", \"{epic}\", \"{item}\", \"{item_type}\", \"{points}\"")
}

/// Renders the table and writes it to the given path.
pub fn write_table(path: &Path, rows: &[Row]) -> Result<()> {
    fs::write(path, render_table(rows))?;
    Ok(())
}
