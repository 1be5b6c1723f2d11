use crate::services::output::{print_json, print_table};
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use ghub_grievance::{GrievanceConfig, Resolution};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    category: &'a str,
    configured: bool,
    #[serde(flatten)]
    resolution: Resolution,
    created_at: String,
    deadline: String,
}

/// Prints the effective resolution time and deadline of `category`.
///
/// Unknown categories still resolve through the defaults; the report says so.
///
/// # Errors
/// Returns an error if the JSON output cannot be produced.
pub fn resolve(
    config: &GrievanceConfig,
    category: &str,
    created_at: Option<DateTime<Utc>>,
    json: bool,
) -> Result<()> {
    let created_at = created_at.unwrap_or_else(Utc::now);
    let resolution = config.resolution_for(category);
    let deadline = resolution.duration.deadline_from(created_at);

    let report = ResolveReport {
        category,
        configured: config.category(category).is_some(),
        resolution,
        created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        deadline: deadline.to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    if json {
        return print_json(&report);
    }

    let note = if report.configured { "" } else { " (not a configured category)" };
    println!("{category}{note}");
    println!("   resolution: {} ({:?})", resolution.duration, resolution.source);
    println!("   deadline:   {}", report.deadline);

    Ok(())
}

/// Prints the resolution table of every configured category.
///
/// # Errors
/// Returns an error if the JSON output cannot be produced.
pub fn table(config: &GrievanceConfig, json: bool) -> Result<()> {
    let entries = config.resolution_table();

    if json {
        return print_json(&entries);
    }

    let rows: Vec<_> = entries
        .iter()
        .map(|entry| (entry.path.clone(), entry.resolution.duration.to_string()))
        .collect();
    print_table(("Category", "Resolution"), &rows);

    Ok(())
}
