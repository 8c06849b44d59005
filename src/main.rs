use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use greengarden::app::{App, StatusLevel, Tab};
use greengarden::config::{self, Overrides, Settings};
use greengarden::data::{self, ReportPeriod};
use greengarden::{input, ui};

#[derive(Debug, Parser)]
#[command(
    name = "greengarden",
    version,
    about = "Green Garden: grocery inventory dashboard for the terminal"
)]
struct Args {
    /// Tab to open on start (dashboard, stores, reports, integrations)
    #[arg(long, value_parser = parse_tab)]
    tab: Option<Tab>,

    /// Report period (weekly, monthly, yearly)
    #[arg(long, value_parser = parse_period)]
    period: Option<ReportPeriod>,

    /// Config file (default: ~/.config/greengarden/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "greengarden=debug"
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for `:export` files
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn parse_tab(raw: &str) -> Result<Tab, String> {
    Tab::parse(raw).ok_or_else(|| {
        format!("unknown tab {raw:?} (expected dashboard, stores, reports or integrations)")
    })
}

fn parse_period(raw: &str) -> Result<ReportPeriod, String> {
    ReportPeriod::parse(raw)
        .ok_or_else(|| format!("unknown period {raw:?} (expected weekly, monthly or yearly)"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    data::validate().context("built-in data is malformed")?;

    let mut warnings = Vec::new();
    let file_config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            warnings.push(format!("{err}; using defaults"));
            config::Config::default()
        }
    };
    let overrides = Overrides {
        tab: args.tab,
        period: args.period,
        export_dir: args.export_dir,
        log_file: args.log_file,
        log_level: args.log_level,
    };
    let (settings, resolve_warnings) = Settings::resolve(&file_config, overrides);
    warnings.extend(resolve_warnings);

    init_logging(&settings)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        tab = settings.initial_tab.title(),
        period = settings.report_period.key(),
        export_dir = %settings.export_dir.display(),
        "greengarden starting"
    );
    for warning in &warnings {
        warn!("{warning}");
    }

    let mut app = App::with_settings(&settings);
    if let Some(first) = warnings.first() {
        app.set_status(format!("Config: {first}"), StatusLevel::Warn);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, settings.tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }
    info!("greengarden stopped");

    Ok(())
}

fn init_logging(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = settings.log_file.as_deref() else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init();
        return Ok(());
    };

    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let mut size = Rect::default();
        terminal.draw(|f| {
            size = f.size();
            ui::draw(f, &app);
        })?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, size),
                _ => {}
            }
        }

        if let Some(text) = app.take_copy_request() {
            copy_to_clipboard(&mut app, &text);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn copy_to_clipboard(app: &mut App, text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => app.set_status("Copied AI insight to clipboard", StatusLevel::Info),
        Err(err) => {
            warn!(error = %err, "clipboard unavailable");
            app.set_status(format!("Clipboard unavailable: {err}"), StatusLevel::Error);
        }
    }
}
