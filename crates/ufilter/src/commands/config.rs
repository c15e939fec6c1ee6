//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/ufilter/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use user_filters_rs::{FilterOption, FilterOptions, RenderOptions};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable that overrides the config file location.
const CONFIG_ENV_VAR: &str = "UFILTER_CONFIG";

/// Keys accepted by `config set`.
const SETTABLE_KEYS: &[&str] = &["output.color", "output.date_format", "output.timezone"];

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Form option overrides.
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: OutputConfig::default(),
            options: OptionsConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// strftime pattern for dates in descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    /// IANA timezone for timestamps in descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Option list overrides. Empty role/status lists keep the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<FilterOption>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<FilterOption>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<FilterOption>,
}

impl Config {
    /// Builds render options from the `[output]` section.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut options = RenderOptions::default();
        if let Some(ref format) = self.output.date_format {
            options = options
                .with_date_format(format.as_str())
                .map_err(|e| CommandError::Config(e.to_string()))?;
        }
        if let Some(ref tz) = self.output.timezone {
            options = options
                .with_timezone(tz)
                .map_err(|e| CommandError::Config(e.to_string()))?;
        }
        Ok(options)
    }

    /// Builds the form option lists, applying `[options]` overrides.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::default()
            .with_roles(self.options.roles.clone())
            .with_statuses(self.options.statuses.clone())
            .with_departments(self.options.departments.clone())
    }
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/ufilter/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("ufilter"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("ufilter"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    tracing::debug!(path = %path.display(), version = config.version, "loaded config");

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    // version 1 is the initial schema
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }
            if let Some(ref format) = config.output.date_format {
                println!("  date_format: {}", format);
            }
            if let Some(ref tz) = config.output.timezone {
                println!("  timezone: {}", tz);
            }

            println!("\n[options]");
            println!("  roles: {}", override_summary(&config.options.roles));
            println!("  statuses: {}", override_summary(&config.options.statuses));
            println!("  departments: {}", override_summary(&config.options.departments));
        } else {
            println!("(No config file exists. Run 'ufilter config set <key> <value>' to create one.)");
        }
    }

    Ok(())
}

fn override_summary(list: &[FilterOption]) -> String {
    if list.is_empty() {
        "(default)".to_string()
    } else {
        list.iter()
            .map(|o| o.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `section.key = value` assignment to a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("output"), "date_format") => {
            RenderOptions::default()
                .with_date_format(value)
                .map_err(|e| CommandError::Config(e.to_string()))?;
            config.output.date_format = Some(value.to_string());
        }
        (Some("output"), "timezone") => {
            RenderOptions::default()
                .with_timezone(value)
                .map_err(|e| CommandError::Config(e.to_string()))?;
            config.output.timezone = Some(value.to_string());
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                SETTABLE_KEYS.join(", ")
            )));
        }
    }

    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;
    use user_filters_rs::OptionKind;

    /// Points UFILTER_CONFIG at a file inside a fresh temp dir.
    fn with_temp_config<F: FnOnce(&PathBuf)>(f: F) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let previous = env::var(CONFIG_ENV_VAR).ok();
        env::set_var(CONFIG_ENV_VAR, &path);

        f(&path);

        match previous {
            Some(value) => env::set_var(CONFIG_ENV_VAR, value),
            None => env::remove_var(CONFIG_ENV_VAR),
        }
    }

    // ==================== parse_bool ====================

    #[test]
    fn test_parse_bool_true_values() {
        for value in ["true", "True", "TRUE", "yes", "1", "on"] {
            assert!(parse_bool(value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_false_values() {
        for value in ["false", "FALSE", "no", "0", "off"] {
            assert!(!parse_bool(value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
        assert!(parse_bool("2").is_err());
    }

    // ==================== Schema ====================

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.output.color.is_none());
        assert!(config.output.date_format.is_none());
        assert!(config.options.roles.is_empty());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1

[output]
color = false
date_format = "%Y-%m-%d"
timezone = "Europe/Berlin"

[[options.departments]]
value = "sales"
label = "Sales"

[[options.departments]]
value = "eng"
label = "Engineering"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.output.date_format.as_deref(), Some("%Y-%m-%d"));
        assert_eq!(config.output.timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(config.options.departments.len(), 2);

        let options = config.filter_options();
        assert_eq!(
            options.label_for(OptionKind::Department, "eng"),
            Some("Engineering")
        );
        // roles were not overridden
        assert_eq!(options.roles.len(), 5);
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serialization_skips_unset() {
        let config = Config {
            output: OutputConfig {
                color: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("color = true"));
        assert!(!toml_str.contains("date_format"));
        assert!(!toml_str.contains("roles"));
    }

    #[test]
    fn test_migrate_config_sets_current_version() {
        let config = Config {
            version: 0,
            ..Default::default()
        };
        assert_eq!(migrate_config(config).unwrap().version, CONFIG_VERSION);
    }

    // ==================== Render options ====================

    #[test]
    fn test_render_options_from_config() {
        let config = Config {
            output: OutputConfig {
                date_format: Some("%d.%m.%Y".to_string()),
                timezone: Some("Asia/Tokyo".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let options = config.render_options().unwrap();
        assert_eq!(options.date_format(), "%d.%m.%Y");
        assert_eq!(options.timezone(), Some(chrono_tz::Asia::Tokyo));
    }

    #[test]
    fn test_render_options_invalid_timezone() {
        let config = Config {
            output: OutputConfig {
                timezone: Some("Mars/Olympus".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.render_options(),
            Err(CommandError::Config(_))
        ));
    }

    // ==================== Set ====================

    #[test]
    fn test_apply_setting_valid_keys() {
        let mut config = Config::default();
        apply_setting(&mut config, "output.color", "off").unwrap();
        apply_setting(&mut config, "output.date_format", "%Y/%m/%d").unwrap();
        apply_setting(&mut config, "output.timezone", "UTC").unwrap();
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.output.date_format.as_deref(), Some("%Y/%m/%d"));
        assert_eq!(config.output.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn test_apply_setting_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply_setting(&mut config, "output.date_format", "%Q").is_err());
        assert!(apply_setting(&mut config, "output.timezone", "Nowhere").is_err());
        assert!(apply_setting(&mut config, "output.color", "sometimes").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_setting_unknown_key() {
        let mut config = Config::default();
        let err = apply_setting(&mut config, "cache.enabled", "true").unwrap_err();
        assert!(err.to_string().contains("output.timezone"));
    }

    // ==================== Paths and persistence ====================

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        with_temp_config(|path| {
            assert_eq!(&get_config_path().unwrap(), path);
            assert_eq!(get_config_dir().unwrap(), path.parent().unwrap());
        });
    }

    #[test]
    #[serial]
    fn test_load_missing_config_gives_defaults() {
        with_temp_config(|_| {
            assert_eq!(load_config().unwrap(), Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_save_then_load() {
        with_temp_config(|path| {
            let mut config = Config::default();
            apply_setting(&mut config, "output.timezone", "America/New_York").unwrap();
            save_config(&config).unwrap();

            assert!(path.exists());
            assert_eq!(load_config().unwrap(), config);
        });
    }

    #[test]
    #[serial]
    fn test_load_malformed_config() {
        with_temp_config(|path| {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "[output\ncolor = ").unwrap();
            assert!(matches!(load_config(), Err(CommandError::Config(_))));
        });
    }
}
