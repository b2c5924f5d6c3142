//! Output formatting
//!
//! Status prefixes and error reporting for the terminal.

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Format an error and its chain of causes
pub fn format_error(error: &anyhow::Error) -> String {
    let mut message = format!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        message.push_str(&format!("\n  Caused by: {cause}"));
    }
    message
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{}", format_error(error));
}
