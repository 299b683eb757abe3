//! Command parser for the : command system

use super::{ExportFormat, View};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Show(View),

    // Data
    Export(ExportFormat),

    // Session
    Help,
    Quit,

    // Unknown command or bad argument
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim().to_lowercase());

    match cmd.to_lowercase().as_str() {
        "queue" | "opd" => Command::Show(View::Queue),
        "beds" | "bed" | "wards" => Command::Show(View::Beds),
        "inventory" | "inv" | "stock" => Command::Show(View::Inventory),

        "export" | "exp" => match args.as_deref() {
            None | Some("") | Some("csv") => Command::Export(ExportFormat::Csv),
            Some("json") => Command::Export(ExportFormat::Json),
            Some(_) => Command::Unknown(input.to_string()),
        },

        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
