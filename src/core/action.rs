//! Actions that modules can return to communicate with the app

use crate::app::Tab;
use crate::data::ReportPeriod;
use crate::modules::export::ExportFormat;

/// Actions returned by modules and commands to communicate state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the main pane to a tab
    SelectTab(Tab),

    /// Switch the report period
    SelectPeriod(ReportPeriod),

    /// Write the report summaries to disk
    Export(ExportFormat),

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Toggle the help overlay
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
