use std::str::FromStr;

use base64::Engine;
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid log filter '{0}'")]
    InvalidLogFilter(String),
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// How message bytes are stored in input files.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum InputEncoding {
    #[default]
    Raw,
    Hex,
    Base64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct InspectConfig {
    pub log_format: LogFormat,
    pub log_filter: Option<String>,
    pub input_encoding: InputEncoding,
    pub pretty: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Compact,
            log_filter: None,
            input_encoding: InputEncoding::Raw,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_format: Option<LogFormat>,
    pub log_filter: Option<String>,
    pub input_encoding: Option<InputEncoding>,
    pub pretty: Option<bool>,
}

impl InspectConfig {
    const ENV_PREFIX: &'static str = "FLOWLINK_INSPECT";

    pub fn load() -> Result<Self, ConfigError> {
        let defaults = InspectConfig::default();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/inspect").required(false))
            .add_source(config::File::with_name("config/inspect.local").required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("log_format", defaults.log_format.as_str())?
            .set_default("input_encoding", defaults.input_encoding.as_str())?
            .set_default("pretty", defaults.pretty)?;

        let settings: InspectConfig = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_overrides(&mut self, overrides: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
        if let Some(filter) = &overrides.log_filter {
            self.log_filter = Some(filter.clone());
        }
        if let Some(encoding) = overrides.input_encoding {
            self.input_encoding = encoding;
        }
        if let Some(pretty) = overrides.pretty {
            self.pretty = pretty;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = &self.log_filter {
            tracing_subscriber::EnvFilter::try_new(filter)
                .map_err(|_| ConfigError::InvalidLogFilter(filter.clone()))?;
        }
        Ok(())
    }
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unsupported log format '{other}'")),
        }
    }
}

impl<'de> Deserialize<'de> for LogFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        LogFormat::from_str(&value).map_err(D::Error::custom)
    }
}

impl InputEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEncoding::Raw => "raw",
            InputEncoding::Hex => "hex",
            InputEncoding::Base64 => "base64",
        }
    }

    /// Turns file contents into protobuf message bytes. Text encodings
    /// ignore surrounding whitespace.
    pub fn decode(&self, input: &[u8]) -> anyhow::Result<Vec<u8>> {
        match self {
            InputEncoding::Raw => Ok(input.to_vec()),
            InputEncoding::Hex => {
                let text = std::str::from_utf8(input)?.trim();
                Ok(hex::decode(text.strip_prefix("0x").unwrap_or(text))?)
            }
            InputEncoding::Base64 => {
                let text = std::str::from_utf8(input)?.trim();
                Ok(base64::engine::general_purpose::STANDARD.decode(text)?)
            }
        }
    }
}

impl FromStr for InputEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(InputEncoding::Raw),
            "hex" => Ok(InputEncoding::Hex),
            "base64" => Ok(InputEncoding::Base64),
            other => Err(format!("unsupported input encoding '{other}'")),
        }
    }
}

impl<'de> Deserialize<'de> for InputEncoding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        InputEncoding::from_str(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn defaults_match_expectations() {
        let config = InspectConfig::default();
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.input_encoding, InputEncoding::Raw);
        assert!(config.log_filter.is_none());
        assert!(config.pretty);
    }

    #[test]
    #[serial]
    fn environment_overrides_take_effect() {
        env::set_var("FLOWLINK_INSPECT__LOG_FORMAT", "json");
        env::set_var("FLOWLINK_INSPECT__INPUT_ENCODING", "hex");
        env::set_var("FLOWLINK_INSPECT__PRETTY", "false");

        let config = InspectConfig::load().expect("config loads");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.input_encoding, InputEncoding::Hex);
        assert!(!config.pretty);

        env::remove_var("FLOWLINK_INSPECT__LOG_FORMAT");
        env::remove_var("FLOWLINK_INSPECT__INPUT_ENCODING");
        env::remove_var("FLOWLINK_INSPECT__PRETTY");
    }

    #[test]
    #[serial]
    fn unknown_encoding_fails_to_load() {
        env::set_var("FLOWLINK_INSPECT__INPUT_ENCODING", "ebcdic");

        let result = InspectConfig::load();
        assert!(matches!(result, Err(ConfigError::Build(_))));

        env::remove_var("FLOWLINK_INSPECT__INPUT_ENCODING");
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = InspectConfig::default();
        config
            .apply_overrides(&CliOverrides {
                log_format: Some(LogFormat::Json),
                input_encoding: Some(InputEncoding::Base64),
                ..CliOverrides::default()
            })
            .expect("overrides apply");

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.input_encoding, InputEncoding::Base64);
    }

    #[test]
    fn invalid_log_filter_is_rejected() {
        let mut config = InspectConfig::default();
        let err = config
            .apply_overrides(&CliOverrides {
                log_filter: Some("flowlink=verbose".into()),
                ..CliOverrides::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFilter(_)));
    }

    #[test]
    fn text_encodings_strip_whitespace() {
        assert_eq!(InputEncoding::Hex.decode(b"0x0a0b\n").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(InputEncoding::Base64.decode(b" CgsM \n").unwrap(), vec![0x0a, 0x0b, 0x0c]);
        assert_eq!(InputEncoding::Raw.decode(b"\x01").unwrap(), vec![0x01]);
        assert!(InputEncoding::Hex.decode(b"zz").is_err());
    }
}
