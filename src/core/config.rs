// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

// Configuration for the generator front-end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub max_batch_count: usize,
    pub default_exclude_ambiguous: bool,

    // Logging
    pub log_level: LevelFilter,
    /// Log to this file instead of stderr when set.
    pub log_file: Option<PathBuf>,

    /// Problems found while loading. Logged by [`Config::log_warnings`] once a logger exists.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            min_password_length: 4,
            max_password_length: 128,
            max_batch_count: 100,
            default_exclude_ambiguous: false,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        let mut warnings = Vec::new();
        parse_into(&lookup, "PASSFORGE_DEFAULT_LENGTH", &mut config.default_password_length, &mut warnings);
        parse_into(&lookup, "PASSFORGE_MIN_LENGTH", &mut config.min_password_length, &mut warnings);
        parse_into(&lookup, "PASSFORGE_MAX_LENGTH", &mut config.max_password_length, &mut warnings);
        parse_into(&lookup, "PASSFORGE_MAX_COUNT", &mut config.max_batch_count, &mut warnings);
        parse_into(&lookup, "PASSFORGE_EXCLUDE_AMBIGUOUS", &mut config.default_exclude_ambiguous, &mut warnings);

        if config.min_password_length == 0 {
            warnings.push("PASSFORGE_MIN_LENGTH must be positive, using 1".to_string());
            config.min_password_length = 1;
        }
        if config.max_password_length < config.min_password_length {
            warnings.push(format!(
                "PASSFORGE_MAX_LENGTH ({}) is below PASSFORGE_MIN_LENGTH ({}), using the minimum",
                config.max_password_length, config.min_password_length
            ));
            config.max_password_length = config.min_password_length;
        }
        config.default_password_length = config
            .default_password_length
            .clamp(config.min_password_length, config.max_password_length);
        if config.max_batch_count == 0 {
            config.max_batch_count = 1;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', keeping {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config.warnings = warnings;
        config
    }

    // Emit load-time warnings; call after logging is initialised
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    pub fn length_in_range(&self, length: usize) -> bool {
        (self.min_password_length..=self.max_password_length).contains(&length)
    }

    pub fn count_in_range(&self, count: usize) -> bool {
        (1..=self.max_batch_count).contains(&count)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T, warnings: &mut Vec<String>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", val, key)),
        }
    }
}
