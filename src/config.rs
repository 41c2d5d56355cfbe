use eyre::{Result, WrapErr, ensure};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub analytics: Analytics,
}

/// Tuning parameters for the movie catalog report. The student queries are
/// deliberately not configurable.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Analytics {
    /// Size of the non-overlapping report windows.
    pub fixed_window: usize,
    /// Size of the overlapping report windows.
    pub sliding_window: usize,
    /// Minimum rating for a movie to appear in the highlights.
    pub high_rating: f64,
}

impl Default for Analytics {
    fn default() -> Analytics {
        Analytics {
            fixed_window: 3,
            sliding_window: 2,
            high_rating: 8.0,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content =
            fs::read_to_string(file_name).wrap_err("cannot load configuration file")?;
        let config =
            toml::from_str::<Config>(&content).wrap_err("cannot parse configuration file")?;
        config.check()?;
        debug!(file = %file_name.display(), "configuration loaded");
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        ensure!(
            self.analytics.fixed_window > 0,
            "analytics.fixed_window must be positive"
        );
        ensure!(
            self.analytics.sliding_window > 0,
            "analytics.sliding_window must be positive"
        );
        Ok(())
    }
}
