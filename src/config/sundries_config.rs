// src/config/sundries_config.rs

use serde::{Deserialize, Serialize};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use env_logger::Env;
use log::debug;
use std::path::Path;

use crate::core::checkers::Numeric;
use crate::core::static_random::Randomizer;
use crate::crypto::cipher::{caesar, DEFAULT_CAESAR_SHIFT};
use crate::html::paging::{get_pages, PageItem, DEFAULT_DISTANCE};

/// Library-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SundriesConfig {
    /// Logging level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub random: RandomConfig,

    #[serde(default)]
    pub paging: PagingConfig,

    #[serde(default)]
    pub cipher: CipherConfig,
}

/// Random source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Fixed seed for reproducible runs; seeded from the thread rng when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of uniform draws averaged by `random_int` (1 = uniform)
    #[serde(default = "default_distribution")]
    pub distribution: u32,
}

/// Pagination defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Pages shown on each side of the current page
    #[serde(default = "default_distance")]
    pub distance: u32,
}

/// Cipher defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherConfig {
    #[serde(default = "default_caesar_shift")]
    pub caesar_shift: i64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_distribution() -> u32 {
    1
}

fn default_distance() -> u32 {
    DEFAULT_DISTANCE
}

fn default_caesar_shift() -> i64 {
    DEFAULT_CAESAR_SHIFT
}

impl Default for SundriesConfig {
    fn default() -> Self {
        SundriesConfig {
            log_level: default_log_level(),
            random: RandomConfig::default(),
            paging: PagingConfig::default(),
            cipher: CipherConfig::default(),
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig {
            seed: None,
            distribution: default_distribution(),
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        PagingConfig { distance: default_distance() }
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig { caesar_shift: default_caesar_shift() }
    }
}

impl PagingConfig {
    /// `get_pages` with the configured distance.
    pub fn get_pages<C: Numeric, T: Numeric>(&self, current: C, total: T) -> crate::core::Result<Vec<PageItem>> {
        get_pages(current, total, self.distance)
    }
}

impl CipherConfig {
    /// `caesar` with the configured shift.
    pub fn caesar(&self, message: &str) -> String {
        caesar(message, self.caesar_shift)
    }
}

impl SundriesConfig {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("random.distribution", 1)?
            .set_default("paging.distance", DEFAULT_DISTANCE as i64)?
            .set_default("cipher.caesar_shift", DEFAULT_CAESAR_SHIFT)
    }

    fn with_environment(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (SUNDRIES_LOG_LEVEL, SUNDRIES_RANDOM__SEED, ...)
        let config = builder
            .add_source(
                Environment::with_prefix("SUNDRIES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let loaded: SundriesConfig = config.try_deserialize()?;
        debug!("Loaded configuration: {:?}", loaded);
        Ok(loaded)
    }

    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("sundries.toml").exists() {
            builder = builder.add_source(File::with_name("sundries.toml"));
        } else if Path::new("sundries.yaml").exists() {
            builder = builder.add_source(File::with_name("sundries.yaml"));
        }

        Self::with_environment(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::with_environment(builder)
    }

    /// Random source honouring `random.seed` and `random.distribution`.
    pub fn randomizer(&self) -> Randomizer {
        let randomizer = match self.random.seed {
            Some(seed) => Randomizer::from_seed(seed),
            None => Randomizer::new(),
        };
        randomizer.with_distribution(self.random.distribution)
    }

    /// Installs `env_logger` with `log_level` as the default filter (`RUST_LOG` still wins).
    pub fn init_logging(&self) -> Result<(), log::SetLoggerError> {
        let env = Env::default()
            .default_filter_or(self.log_level.as_str())
            .default_write_style_or("auto");

        env_logger::Builder::from_env(env).try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = SundriesConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.random.seed, None);
        assert_eq!(config.random.distribution, 1);
        assert_eq!(config.paging.distance, 2);
        assert_eq!(config.cipher.caesar_shift, 13);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = SundriesConfig::load().unwrap_or_else(|_| SundriesConfig::default());
        assert_eq!(config.paging.distance, 2);
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!("sundries-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            "log_level = \"debug\"\n[random]\nseed = 99\ndistribution = 3\n[paging]\ndistance = 4\n",
        )
        .unwrap();

        let config = SundriesConfig::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.random.seed, Some(99));
        assert_eq!(config.random.distribution, 3);
        assert_eq!(config.paging.distance, 4);
        assert_eq!(config.cipher.caesar_shift, 13);
    }

    #[test]
    fn test_seeded_randomizer_is_reproducible() {
        let mut config = SundriesConfig::default();
        config.random.seed = Some(5);
        let mut a = config.randomizer();
        let mut b = config.randomizer();
        assert_eq!(a.next(), b.next());
    }

    #[test]
    fn test_randomizer_carries_distribution() {
        let mut config = SundriesConfig::default();
        config.random.seed = Some(6);
        config.random.distribution = 50;
        let mut random = config.randomizer();
        assert_eq!(random.distribution(), 50);
        // fifty averaged draws stay close to the middle of 0..100
        for _ in 0..200 {
            let x = random.random_int_default(0, 100, 1).unwrap();
            assert!((25..75).contains(&x), "{}", x);
        }
    }

    #[test]
    fn test_paging_and_cipher_sections_apply() {
        let mut config = SundriesConfig::default();
        assert_eq!(config.paging.get_pages(5, 10).unwrap().len(), 9);
        config.paging.distance = 0;
        assert_eq!(
            config.paging.get_pages(5, 10).unwrap(),
            vec![PageItem::Page(1), PageItem::Ellipsis, PageItem::Page(5), PageItem::Ellipsis, PageItem::Page(10)]
        );

        assert_eq!(config.cipher.caesar("abc"), "nop");
        config.cipher.caesar_shift = 1;
        assert_eq!(config.cipher.caesar("abc"), "bcd");
    }

    #[test]
    fn test_init_logging_twice_reports_error() {
        let config = SundriesConfig::default();
        let _ = config.init_logging();
        assert!(config.init_logging().is_err());
    }
}
