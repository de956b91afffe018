//! Configuration module for `DegreeCalc`

use crate::core::models::RequirementTable;
use crate::core::AuditError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the configuration directory
const DIR_VARIABLE: &str = "$DEGREE_CALC";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for rendered audit reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Audit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Default student identifier (program code is derived from it)
    #[serde(default)]
    pub student_id: String,
    /// Optional TOML requirement table replacing the built-in one
    #[serde(default)]
    pub requirements_file: String,
    /// Default report file stem
    #[serde(default)]
    pub report_name: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Audit settings
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override student identifier
    pub student_id: Option<String>,
    /// Override requirement table file
    pub requirements_file: Option<String>,
}

/// Fill `target` from `default` when `target` is empty. Returns `true` if it changed.
fn fill_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$DEGREE_CALC` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/degreecalc`
    /// - macOS: `~/Library/Application Support/degreecalc`
    /// - Windows: `%APPDATA%\degreecalc`
    #[must_use]
    pub fn get_degreecalc_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("degreecalc")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so upgrading adds new settings without touching existing ones.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        changed |= fill_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_empty(&mut self.logging.file, &defaults.logging.file);
        changed |= fill_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir);
        changed |= fill_empty(&mut self.audit.student_id, &defaults.audit.student_id);
        changed |= fill_empty(
            &mut self.audit.requirements_file,
            &defaults.audit.requirements_file,
        );
        changed |= fill_empty(&mut self.audit.report_name, &defaults.audit.report_name);
        changed
    }

    /// Apply CLI-provided overrides onto this configuration
    ///
    /// Only non-`None` values replace config values. Apply overrides to a
    /// runtime copy (see [`with_overrides`](Self::with_overrides)), never to a
    /// config that will be saved.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(student_id) = &overrides.student_id {
            self.audit.student_id.clone_from(student_id);
        }
        if let Some(requirements_file) = &overrides.requirements_file {
            self.audit.requirements_file.clone_from(requirements_file);
        }
    }

    /// Runtime copy of this configuration with `overrides` applied
    ///
    /// `self` keeps the stored values, so `config set`/`unset` can save it
    /// without persisting one-run overrides.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut runtime = self.clone();
        runtime.apply_overrides(overrides);
        runtime
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_degreecalc_dir`](Self::get_degreecalc_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_degreecalc_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DEGREE_CALC` in a string to the configuration directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_degreecalc_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// `$DEGREE_CALC` is expanded in path-like values. Missing fields use
    /// their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.audit.requirements_file = Self::expand_variables(&config.audit.requirements_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults if missing
    ///
    /// An existing file is merged with new default fields and re-saved when
    /// that adds anything. Unreadable or invalid files fall back to defaults.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        if let Ok(content) = fs::read_to_string(config_file) {
            if let Ok(mut config) = Self::from_toml(&content) {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                return config;
            }
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir`,
    /// `student_id`, `requirements_file`, `report_name` (dashes accepted in
    /// place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "student_id" | "student-id" => Some(self.audit.student_id.clone()),
            "requirements_file" | "requirements-file" => {
                Some(self.audit.requirements_file.clone())
            }
            "report_name" | "report-name" => Some(self.audit.report_name.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// This updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid for it
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|_| format!("Invalid log level: '{value}'"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "student_id" | "student-id" => self.audit.student_id = value.to_string(),
            "requirements_file" | "requirements-file" => {
                self.audit.requirements_file = value.to_string();
            }
            "report_name" | "report-name" => self.audit.report_name = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => {
                self.paths.reports_dir.clone_from(&defaults.paths.reports_dir);
            }
            "student_id" | "student-id" => {
                self.audit.student_id.clone_from(&defaults.audit.student_id);
            }
            "requirements_file" | "requirements-file" => self
                .audit
                .requirements_file
                .clone_from(&defaults.audit.requirements_file),
            "report_name" | "report-name" => {
                self.audit.report_name.clone_from(&defaults.audit.report_name);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Requirement table for audits: the configured file, or the built-in table
    ///
    /// # Errors
    /// Returns `AuditError::RequirementTable` if the configured file cannot be
    /// read or parsed
    pub fn requirement_table(&self) -> Result<RequirementTable, AuditError> {
        let path = self.audit.requirements_file.trim();
        if path.is_empty() {
            return Ok(RequirementTable::builtin());
        }
        let content = fs::read_to_string(path).map_err(|e| AuditError::RequirementTable {
            message: format!("cannot read {path}: {e}"),
        })?;
        RequirementTable::from_toml(&content)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[audit]")?;
        writeln!(f, "  student_id = \"{}\"", self.audit.student_id)?;
        writeln!(f, "  requirements_file = \"{}\"", self.audit.requirements_file)?;
        writeln!(f, "  report_name = \"{}\"", self.audit.report_name)?;

        Ok(())
    }
}
