use crate::services::output::print_json;
use anyhow::Result;
use ghub_grievance::GrievanceConfig;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    generation: u64,
    categories: usize,
    flags: usize,
    restricted_flags: Vec<&'a str>,
    global_resolution: Option<String>,
    legacy_entries: usize,
}

/// Prints a summary of a configuration that built successfully.
///
/// # Errors
/// Returns an error if the JSON output cannot be produced.
pub fn summarize(config: &GrievanceConfig, json: bool) -> Result<()> {
    let summary = Summary {
        generation: config.generation(),
        categories: config.category_count(),
        flags: config.flags().len(),
        restricted_flags: config.restricted_flags(),
        global_resolution: config.resolution().global.map(|d| d.to_string()),
        legacy_entries: config.resolution().legacy.len(),
    };

    if json {
        return print_json(&summary);
    }

    println!("✅ Configuration is valid");
    println!("   categories:        {}", summary.categories);
    println!("   flags:             {}", summary.flags);
    if !summary.restricted_flags.is_empty() {
        println!("   restricted flags:  {}", summary.restricted_flags.join(", "));
    }
    println!(
        "   global resolution: {}",
        summary.global_resolution.as_deref().unwrap_or("unset (fallback 5,0)")
    );
    println!("   legacy entries:    {}", summary.legacy_entries);

    Ok(())
}
