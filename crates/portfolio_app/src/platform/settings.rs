use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use portfolio_core::PageConfig;

use super::logging::LogDestination;

const PREFS_FILENAME: &str = ".portfolio_prefs.ron";

/// Startup settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub page: PageConfig,
    pub prefs_path: PathBuf,
    /// Stop after this long even if stdin stays open.
    pub run_for: Option<Duration>,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut page = PageConfig::default();
        if let Some(raw) = lookup("PORTFOLIO_API_BASE") {
            page = page
                .with_api_base(&raw)
                .with_context(|| format!("invalid PORTFOLIO_API_BASE {raw:?}"))?;
        }

        let run_for = match lookup("PORTFOLIO_RUN_SECS") {
            Some(raw) => {
                let secs: f64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid PORTFOLIO_RUN_SECS {raw:?}"))?;
                let limit = Duration::try_from_secs_f64(secs).with_context(|| {
                    format!("PORTFOLIO_RUN_SECS must be a non-negative number of seconds, got {raw:?}")
                })?;
                Some(limit)
            }
            None => None,
        };

        let prefs_path = lookup("PORTFOLIO_PREFS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(PREFS_FILENAME));

        let log_destination = match lookup("PORTFOLIO_LOG") {
            Some(raw) => LogDestination::parse(&raw)
                .with_context(|| format!("PORTFOLIO_LOG must be file, terminal or both, got {raw:?}"))?,
            None => LogDestination::File,
        };

        let log_level = match lookup("PORTFOLIO_LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORTFOLIO_LOG_LEVEL {raw:?}"))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            page,
            prefs_path,
            run_for,
            log_destination,
            log_level,
        })
    }
}
