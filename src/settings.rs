use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use config::{Config, File};
use serde::Deserialize;

use querybar::{ControllerConfig, app_dirs};

use crate::cli::CliArgs;

const DEFAULT_HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    controller: ControllerSection,
    demo: DemoSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ControllerSection {
    debounce_ms: Option<u64>,
    backfill_threshold: Option<usize>,
    backfill_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DemoSection {
    seed: Option<PathBuf>,
    history_file: Option<PathBuf>,
    history_capacity: Option<usize>,
}

/// Effective demo configuration after merging file values and CLI overrides.
pub(crate) struct ResolvedConfig {
    pub controller: ControllerConfig,
    pub seed: Option<PathBuf>,
    pub history_file: Option<PathBuf>,
    pub history_capacity: usize,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!(
            "  Suggest debounce: {}ms",
            self.controller.suggest_debounce.as_millis()
        );
        println!("  Backfill threshold: {}", self.controller.backfill_threshold);
        println!("  Backfill limit: {}", self.controller.backfill_limit);
        println!("  History capacity: {}", self.history_capacity);
        match &self.seed {
            Some(path) => println!("  Seed corpus: {}", path.display()),
            None => println!("  Seed corpus: (built-in)"),
        }
        match &self.history_file {
            Some(path) => println!("  History file: {}", path.display()),
            None => println!("  History file: (default data directory)"),
        }
    }
}

/// Load the configuration file (if any) and apply CLI overrides.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let raw = load_raw(cli.config.as_deref())?;
    resolve(raw, cli)
}

fn load_raw(explicit_path: Option<&Path>) -> Result<RawConfig> {
    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let mut builder = Config::builder();
    if let Some(path) = &path {
        builder = builder.add_source(File::from(path.as_path()).required(false));
    }

    builder
        .build()
        .context("failed to load configuration")?
        .try_deserialize::<RawConfig>()
        .context("failed to parse configuration")
}

fn default_config_path() -> Option<PathBuf> {
    app_dirs::get_config_dir()
        .ok()
        .map(|dir| dir.join("config.toml"))
}

fn resolve(raw: RawConfig, cli: &CliArgs) -> Result<ResolvedConfig> {
    let defaults = ControllerConfig::default();
    let debounce_ms = cli.debounce_ms.or(raw.controller.debounce_ms);
    let controller = ControllerConfig {
        suggest_debounce: debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.suggest_debounce),
        backfill_threshold: raw
            .controller
            .backfill_threshold
            .unwrap_or(defaults.backfill_threshold),
        backfill_limit: raw.controller.backfill_limit.unwrap_or(defaults.backfill_limit),
    };

    // Validate
    ensure!(
        controller.suggest_debounce <= Duration::from_secs(5),
        "debounce-ms must be at most 5000"
    );
    ensure!(
        controller.backfill_limit > 0,
        "backfill-limit must be greater than zero"
    );

    let history_capacity = raw
        .demo
        .history_capacity
        .unwrap_or(DEFAULT_HISTORY_CAPACITY);
    ensure!(
        history_capacity > 0,
        "history-capacity must be greater than zero"
    );

    Ok(ResolvedConfig {
        controller,
        seed: cli.seed.clone().or(raw.demo.seed),
        history_file: cli.history_file.clone().or(raw.demo.history_file),
        history_capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let resolved = resolve(RawConfig::default(), &CliArgs::default()).unwrap();
        assert_eq!(resolved.controller.suggest_debounce, Duration::from_millis(250));
        assert_eq!(resolved.controller.backfill_threshold, 10);
        assert_eq!(resolved.controller.backfill_limit, 5);
        assert_eq!(resolved.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn file_values_are_read_and_cli_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[controller]\ndebounce_ms = 100\nbackfill_limit = 3\n\n[demo]\nhistory_capacity = 7\n",
        )
        .unwrap();

        let raw = load_raw(Some(&path)).unwrap();
        let cli = CliArgs {
            debounce_ms: Some(40),
            ..CliArgs::default()
        };
        let resolved = resolve(raw, &cli).unwrap();

        assert_eq!(resolved.controller.suggest_debounce, Duration::from_millis(40));
        assert_eq!(resolved.controller.backfill_limit, 3);
        assert_eq!(resolved.history_capacity, 7);
    }

    #[test]
    fn oversized_debounce_is_rejected() {
        let cli = CliArgs {
            debounce_ms: Some(60_000),
            ..CliArgs::default()
        };
        assert!(resolve(RawConfig::default(), &cli).is_err());
    }
}
