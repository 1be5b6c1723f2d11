use anyhow::Result;
use serde::Serialize;

/// Prints `value` as pretty JSON on stdout.
///
/// # Errors
/// Returns an error if `value` cannot be serialized.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Renders an aligned two-column table.
pub fn print_table(headers: (&str, &str), rows: &[(String, String)]) {
    let width = rows.iter().map(|(left, _)| left.len()).chain([headers.0.len()]).max().unwrap_or(0);

    println!("{:<width$}  {}", headers.0, headers.1);
    println!("{:-<total$}", "", total = width + 2 + headers.1.len().max(8));
    for (left, right) in rows {
        println!("{left:<width$}  {right}");
    }
}
