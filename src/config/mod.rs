//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "employee_nav=debug".to_string()
}

const APP_DIR_NAME: &str = "employee-nav";

/// Get config directory (EMS_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("EMS_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join(".config")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("log_filter", default_log_filter())?
        // Optional config.{toml,json,yaml} in the config directory
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Environment overrides (EMS_PORT, EMS_LOG_FILTER)
        .add_source(
            ::config::Environment::with_prefix("EMS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Plain PORT (Docker, PaaS) applies only when EMS_PORT is unset
    if std::env::var("EMS_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port_num) => builder = builder.set_override("port", port_num as i64)?,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for key in ["EMS_CONFIG_DIR", "EMS_PORT", "EMS_LOG_FILTER", "PORT"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        env::set_var("EMS_CONFIG_DIR", "/tmp/ems-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.log_filter, "employee_nav=debug");
    }

    #[test]
    #[serial]
    fn test_config_file_is_read() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 9100\nlog_filter = \"employee_nav=trace\"\n",
        )
        .unwrap();
        env::set_var("EMS_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9100);
        assert_eq!(config.log_filter, "employee_nav=trace");
    }

    #[test]
    #[serial]
    fn test_ems_port_beats_plain_port() {
        clear_env();
        env::set_var("EMS_CONFIG_DIR", "/tmp/ems-test-nonexistent");
        env::set_var("EMS_PORT", "9200");
        env::set_var("PORT", "9300");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9200);
    }

    #[test]
    #[serial]
    fn test_log_filter_env_override() {
        clear_env();
        env::set_var("EMS_CONFIG_DIR", "/tmp/ems-test-nonexistent");
        env::set_var("EMS_LOG_FILTER", "employee_nav=warn");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.log_filter, "employee_nav=warn");
    }

    #[test]
    #[serial]
    fn test_plain_port_fallback() {
        clear_env();
        env::set_var("EMS_CONFIG_DIR", "/tmp/ems-test-nonexistent");
        env::set_var("PORT", "9300");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9300);
    }

    #[test]
    #[serial]
    fn test_invalid_plain_port_is_ignored() {
        clear_env();
        env::set_var("EMS_CONFIG_DIR", "/tmp/ems-test-nonexistent");
        env::set_var("PORT", "not-a-port");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 8080);
    }
}
