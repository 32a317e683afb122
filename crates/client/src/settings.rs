use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub runtime: RuntimeSettings,
    #[serde(default)]
    pub fixtures: FixtureSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Optional CLI credentials for non-interactive login.
    #[serde(default)]
    pub auth: AuthSettings,
}

/// Where the runtime configuration document comes from.
///
/// When a URL is set it wins over the file path; when neither loads, the
/// built-in defaults apply.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeSettings {
    #[serde(default = "default_config_path")]
    pub config_path: String,

    #[serde(default)]
    pub config_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureSettings {
    /// Root directory for local fixture responses.
    #[serde(default = "default_fixtures_root")]
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

fn default_config_path() -> String {
    "config/runtime-config.json".to_string()
}
fn default_fixtures_root() -> String {
    "fixtures".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            config_url: String::new(),
        }
    }
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            root: default_fixtures_root(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration (optional)
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with PF__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("PF").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings for testing with custom overrides, without touching the
    /// file system or process environment.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }
        builder.build()?.try_deserialize()
    }
}
