use crate::services::output::{print_json, print_table};
use anyhow::Result;
use ghub_domain::action::Action;
use ghub_grievance::{AccessNode, ConfigNode, GrievanceConfig};
use ghub_kernel::security::Principal;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    category: &'a str,
    flags: &'a [&'a str],
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    priority: String,
}

/// Prints the categories `principal` can reach for `action`.
///
/// # Errors
/// Returns an error if the JSON output cannot be produced.
pub fn categories(
    config: &GrievanceConfig,
    principal: &Principal,
    action: Action,
    tree: bool,
    json: bool,
) -> Result<()> {
    let roots = config.filter_categories(principal, action);

    if tree {
        if json {
            return print_json(&roots);
        }
        for root in &roots {
            print_tree(root, 0);
        }
        return Ok(());
    }

    let flat: Vec<&ConfigNode> = roots.iter().flat_map(AccessNode::flatten).collect();
    if json {
        return print_json(&flat);
    }

    let rows: Vec<_> = flat.iter().map(|node| (node.path().to_owned(), describe(node))).collect();
    print_table(("Category", "Priority"), &rows);
    Ok(())
}

/// Prints the flags `principal` may use.
///
/// # Errors
/// Returns an error if the JSON output cannot be produced.
pub fn flags(config: &GrievanceConfig, principal: &Principal, json: bool) -> Result<()> {
    let flags = config.accessible_flags(principal);

    if json {
        return print_json(&flags);
    }

    let rows: Vec<_> = flags.iter().map(|flag| (flag.name().to_owned(), describe(flag))).collect();
    print_table(("Flag", "Priority"), &rows);
    Ok(())
}

/// Checks a would-be ticket. A denied check prints the reason and fails the command.
///
/// # Errors
/// Returns the access error when the ticket is not allowed.
pub fn check(
    config: &GrievanceConfig,
    principal: &Principal,
    category: &str,
    flags: &[&str],
    json: bool,
) -> Result<()> {
    let outcome = config.validate_ticket_access(principal, category, flags);
    let report = CheckReport {
        category,
        flags,
        allowed: outcome.is_ok(),
        reason: outcome.as_ref().err().map(ToString::to_string),
        priority: config.effective_priority(category, flags).to_string(),
    };

    if json {
        print_json(&report)?;
    } else if report.allowed {
        println!("✅ Allowed: {category} (priority {})", report.priority);
    }

    outcome.map_err(Into::into)
}

fn print_tree(node: &AccessNode<'_>, depth: usize) {
    let marker = if node.accessible { "" } else { " (placeholder)" };
    println!("{:indent$}{}{marker}", "", node.node.name(), indent = depth * 2);
    for child in &node.children {
        print_tree(child, depth + 1);
    }
}

fn describe(node: &ConfigNode) -> String {
    node.priority().unwrap_or("-").to_owned()
}
