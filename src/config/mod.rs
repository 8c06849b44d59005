use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::app::Tab;
use crate::data::ReportPeriod;

const DEFAULT_TICK_MS: u64 = 250;
const MIN_TICK_MS: u64 = 16;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub initial_tab: Option<String>,
    pub report_period: Option<String>,
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tab: Option<Tab>,
    pub period: Option<ReportPeriod>,
    pub export_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Effective runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub initial_tab: Tab,
    pub report_period: ReportPeriod,
    pub tick_rate: Duration,
    pub export_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Settings {
    /// Merge config and overrides. Unusable config values fall back to
    /// defaults and are reported in the returned warnings.
    pub fn resolve(config: &Config, overrides: Overrides) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let initial_tab = overrides.tab.unwrap_or_else(|| {
            match config.ui.initial_tab.as_deref() {
                Some(raw) => Tab::parse(raw).unwrap_or_else(|| {
                    warnings.push(format!("unknown initial_tab {raw:?}, using dashboard"));
                    Tab::Dashboard
                }),
                None => Tab::Dashboard,
            }
        });

        let report_period = overrides.period.unwrap_or_else(|| {
            match config.ui.report_period.as_deref() {
                Some(raw) => ReportPeriod::parse(raw).unwrap_or_else(|| {
                    warnings.push(format!("unknown report_period {raw:?}, using weekly"));
                    ReportPeriod::Weekly
                }),
                None => ReportPeriod::Weekly,
            }
        });

        let tick_ms = config.ui.tick_rate_ms.unwrap_or(DEFAULT_TICK_MS);
        let tick_ms = if tick_ms < MIN_TICK_MS {
            warnings.push(format!("tick_rate_ms {tick_ms} too low, using {MIN_TICK_MS}"));
            MIN_TICK_MS
        } else {
            tick_ms
        };

        let export_dir = overrides
            .export_dir
            .or_else(|| config.export.dir.as_deref().and_then(expand_path))
            .unwrap_or_else(crate::modules::export::default_export_dir);

        let log_file = overrides
            .log_file
            .or_else(|| config.log.file.as_deref().and_then(expand_path))
            .or_else(default_log_path);

        let log_level = overrides
            .log_level
            .or_else(|| config.log.level.clone())
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        let settings = Self {
            initial_tab,
            report_period,
            tick_rate: Duration::from_millis(tick_ms),
            export_dir,
            log_file,
            log_level,
        };
        (settings, warnings)
    }
}

/// Load the config file. A missing file yields defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("GREENGARDEN_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("greengarden").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("greengarden").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "greengarden", "greengarden")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("greengarden"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("greengarden"));
    }
    directories::ProjectDirs::from("io", "greengarden", "greengarden")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("greengarden.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = parse("[ui]\ninitial_tab = \"reports\"\n").unwrap();
        assert_eq!(config.ui.initial_tab.as_deref(), Some("reports"));
        assert!(config.ui.report_period.is_none());
        assert!(config.export.dir.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(parse("[ui\ninitial_tab = 1").is_err());
    }

    #[test]
    fn test_resolve_uses_config_values() {
        let config = parse(
            "[ui]\ninitial_tab = \"smarter\"\nreport_period = \"yearly\"\ntick_rate_ms = 100\n\
             [export]\ndir = \"/tmp/gg-exports\"\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let (settings, warnings) = Settings::resolve(&config, Overrides::default());
        assert!(warnings.is_empty());
        assert_eq!(settings.initial_tab, Tab::SmarterIntegration);
        assert_eq!(settings.report_period, ReportPeriod::Yearly);
        assert_eq!(settings.tick_rate, Duration::from_millis(100));
        assert_eq!(settings.export_dir, PathBuf::from("/tmp/gg-exports"));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_resolve_overrides_win() {
        let config = parse("[ui]\ninitial_tab = \"stores\"\n").unwrap();
        let overrides = Overrides {
            tab: Some(Tab::Reports),
            period: Some(ReportPeriod::Monthly),
            log_level: Some("warn".to_string()),
            ..Overrides::default()
        };
        let (settings, _) = Settings::resolve(&config, overrides);
        assert_eq!(settings.initial_tab, Tab::Reports);
        assert_eq!(settings.report_period, ReportPeriod::Monthly);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_resolve_unknown_tab_warns() {
        let config = parse("[ui]\ninitial_tab = \"warehouse\"\ntick_rate_ms = 1\n").unwrap();
        let (settings, warnings) = Settings::resolve(&config, Overrides::default());
        assert_eq!(settings.initial_tab, Tab::Dashboard);
        assert_eq!(settings.tick_rate, Duration::from_millis(MIN_TICK_MS));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_expand_path_blank() {
        assert!(expand_path("   ").is_none());
        assert_eq!(expand_path("/abs/path"), Some(PathBuf::from("/abs/path")));
    }
}
