//! Command parser for the : command line

use crate::app::Tab;
use crate::data::ReportPeriod;
use crate::modules::export::ExportFormat;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Tab(Tab),
    Period(ReportPeriod),

    // Reports
    Export(ExportFormat),

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim().to_lowercase());

    match cmd.to_lowercase().as_str() {
        "export" | "exp" => match args.as_deref() {
            None | Some("") | Some("json") => Command::Export(ExportFormat::Json),
            Some("csv") => Command::Export(ExportFormat::Csv),
            Some(_) => Command::Unknown(input.to_string()),
        },

        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        // Same names as --tab/--period and the config file
        _ if args.is_some() => Command::Unknown(input.to_string()),
        name => {
            if let Some(tab) = Tab::parse(name) {
                Command::Tab(tab)
            } else if let Some(period) = ReportPeriod::parse(name) {
                Command::Period(period)
            } else {
                Command::Unknown(input.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("dashboard"), Command::Tab(Tab::Dashboard));
        assert_eq!(parse_command("dash"), Command::Tab(Tab::Dashboard));
        assert_eq!(parse_command("STORES"), Command::Tab(Tab::Stores));
        assert_eq!(parse_command("smarter"), Command::Tab(Tab::SmarterIntegration));
    }

    #[test]
    fn test_parse_period_commands() {
        assert_eq!(parse_command("monthly"), Command::Period(ReportPeriod::Monthly));
        assert_eq!(parse_command(" year "), Command::Period(ReportPeriod::Yearly));
    }

    #[test]
    fn test_parse_export_commands() {
        assert_eq!(parse_command("export"), Command::Export(ExportFormat::Json));
        assert_eq!(parse_command("export csv"), Command::Export(ExportFormat::Csv));
        assert_eq!(parse_command("exp JSON"), Command::Export(ExportFormat::Json));
        assert_eq!(
            parse_command("export xml"),
            Command::Unknown("export xml".to_string())
        );
    }

    #[test]
    fn test_command_accepts_cli_tab_names() {
        for name in ["smarterintegration", "smarter-integration", "integrations", "integration"] {
            assert_eq!(parse_command(name), Command::Tab(Tab::SmarterIntegration), "{name}");
            assert_eq!(Tab::parse(name), Some(Tab::SmarterIntegration), "{name}");
        }
        for name in ["weekly", "week", "Monthly", "year"] {
            assert_eq!(
                parse_command(name),
                Command::Period(ReportPeriod::parse(name).unwrap())
            );
        }
        assert_eq!(
            parse_command("stores now"),
            Command::Unknown("stores now".to_string())
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
