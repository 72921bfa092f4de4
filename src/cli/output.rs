//! Terminal output helpers.
//!
//! - Green: success lines
//! - Red: errors (stderr)
//! - Yellow: warnings
//! - Cyan: paths, key names, hints
//!
//! Styling is dropped entirely when NO_COLOR is set.

use console::style;

/// Styling is suppressed when the NO_COLOR env var is present.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Confirmation line with a green checkmark.
///
/// Example: `✓ secure entry written`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Error line on stderr with a red cross.
///
/// Example: `✗ malformed yaml`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Warning line in yellow; the run still succeeds.
///
/// Example: `⚠ --clipboard is ignored when a file path is given`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Follow-up suggestion in cyan, printed after an error.
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Indented bullet line, used for variable-name listings.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// A file path styled for inline use in a message.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// A mapping key styled for inline use in a message.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}
