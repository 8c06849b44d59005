use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::Settings;
use crate::core::{parse_command, Action, Command, NotifyLevel};
use crate::data::{ReportPeriod, DEMAND_FORECAST, INTEGRATIONS, INVENTORY, STORES};
use crate::modules::export;
use crate::modules::integrations::IntegrationBoard;

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Sidebar tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Stores,
    Reports,
    SmarterIntegration,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Dashboard,
        Tab::Stores,
        Tab::Reports,
        Tab::SmarterIntegration,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Stores => "Stores",
            Tab::Reports => "Reports",
            Tab::SmarterIntegration => "Smarter Integration",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Stores => '2',
            Tab::Reports => '3',
            Tab::SmarterIntegration => '4',
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "dashboard" | "dash" | "home" => Some(Tab::Dashboard),
            "stores" | "store" => Some(Tab::Stores),
            "reports" | "report" => Some(Tab::Reports),
            "smarterintegration" | "smarter-integration" | "smarter" | "integrations"
            | "integration" => Some(Tab::SmarterIntegration),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn cycle(&self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let idx = self.index();
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Self::ALL[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    Inventory,
    Demand,
    Stores,
}

impl ChartId {
    pub fn len(&self) -> usize {
        match self {
            ChartId::Inventory => INVENTORY.len(),
            ChartId::Demand => DEMAND_FORECAST.len(),
            ChartId::Stores => STORES.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The chart point the tooltip is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHover {
    pub chart: ChartId,
    pub index: usize,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    pub active_tab: Tab,
    pub report_period: ReportPeriod,
    /// Mounted only while the Smarter Integration tab is active
    pub integrations: Option<IntegrationBoard>,
    pub hover: Option<ChartHover>,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub export_dir: PathBuf,
    pub help_open: bool,
    pub should_quit: bool,
    pending_copy: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            report_period: ReportPeriod::Weekly,
            integrations: None,
            hover: None,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            export_dir: export::default_export_dir(),
            help_open: false,
            should_quit: false,
            pending_copy: None,
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let mut app = Self::new();
        app.report_period = settings.report_period;
        app.export_dir = settings.export_dir.clone();
        app.select_tab(settings.initial_tab);
        app
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab && (tab != Tab::SmarterIntegration || self.integrations.is_some()) {
            return;
        }
        debug!(from = self.active_tab.title(), to = tab.title(), "tab selected");
        self.active_tab = tab;
        self.hover = None;
        self.integrations = match tab {
            Tab::SmarterIntegration => Some(IntegrationBoard::mount(&INTEGRATIONS)),
            _ => None,
        };
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        self.select_tab(self.active_tab.cycle(forward));
    }

    pub fn select_period(&mut self, period: ReportPeriod) {
        if period != self.report_period {
            debug!(period = period.key(), "report period selected");
        }
        self.report_period = period;
    }

    pub fn cycle_period(&mut self, forward: bool) {
        self.select_period(self.report_period.cycle(forward));
    }

    /// Charts reachable from the keyboard on the current tab
    pub fn tab_charts(&self) -> &'static [ChartId] {
        match self.active_tab {
            Tab::Dashboard => &[ChartId::Inventory, ChartId::Demand],
            Tab::Stores => &[ChartId::Stores],
            Tab::Reports | Tab::SmarterIntegration => &[],
        }
    }

    pub fn set_hover(&mut self, chart: ChartId, index: usize) {
        if !self.tab_charts().contains(&chart) || chart.is_empty() {
            return;
        }
        self.hover = Some(ChartHover {
            chart,
            index: index.min(chart.len() - 1),
        });
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    pub fn move_hover(&mut self, forward: bool) {
        let charts = self.tab_charts();
        let Some(&first) = charts.first() else {
            return;
        };
        match self.hover {
            Some(hover) if charts.contains(&hover.chart) => {
                let len = hover.chart.len();
                if len == 0 {
                    return;
                }
                let index = if forward {
                    (hover.index + 1) % len
                } else {
                    (hover.index + len - 1) % len
                };
                self.set_hover(hover.chart, index);
            }
            _ => self.set_hover(first, 0),
        }
    }

    /// Move the tooltip to the next chart on the tab
    pub fn cycle_hover_chart(&mut self) {
        let charts = self.tab_charts();
        if charts.is_empty() {
            return;
        }
        let next = match self.hover {
            Some(hover) => {
                let idx = charts.iter().position(|c| *c == hover.chart).unwrap_or(0);
                charts[(idx + 1) % charts.len()]
            }
            None => charts[0],
        };
        self.set_hover(next, 0);
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = std::mem::take(&mut self.command.input);
        self.input_mode = InputMode::Normal;
        if input.trim().is_empty() {
            return;
        }
        let action = self.execute_command(&parse_command(&input));
        self.apply_action(action);
    }

    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Tab(tab) => Action::SelectTab(*tab),
            Command::Period(period) => Action::SelectPeriod(*period),
            Command::Export(format) => Action::Export(*format),
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(raw) => {
                Action::Notify(format!("Unknown command: {raw}"), NotifyLevel::Warn)
            }
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::SelectPeriod(period) => self.select_period(period),
            Action::Export(format) => {
                let outcome = export::export_action(format, self.report_period, &self.export_dir);
                self.apply_action(outcome);
            }
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(text, level) => {
                if level != NotifyLevel::Info {
                    warn!(message = %text, "status");
                }
                self.set_status(text, level.into());
            }
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }
}
