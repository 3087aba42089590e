use std::str::FromStr;

use dictamail::{Normalizer, Vocabulary, VocabularyError, VocabularyExtension};
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("failed to determine the current directory: {0}")]
    CurrentDir(#[from] std::io::Error),
    #[error("invalid APP_ENVIRONMENT '{0}': expected 'local' or 'production'")]
    UnknownEnvironment(String),
    #[error("invalid normalizer vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
}

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub normalizer: NormalizerSettings,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct NormalizerSettings {
    #[serde(default)]
    pub infer_domain: bool,
    #[serde(default)]
    pub vocabulary: VocabularyExtension,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl NormalizerSettings {
    pub fn build_normalizer(&self) -> Result<Normalizer, SettingsError> {
        let builder = Normalizer::builder().infer_domain(self.infer_domain);
        if self.vocabulary.is_empty() {
            return Ok(builder.build());
        }

        let vocabulary = Vocabulary::builtin().extended(&self.vocabulary)?;
        Ok(builder.vocabulary(vocabulary).build())
    }
}

pub fn read_config() -> Result<Settings, SettingsError> {
    let base_path = std::env::current_dir()?;
    let config_directory = base_path.join("config");

    let environment_name = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    let environment = Environment::from_str(&environment_name)
        .map_err(|_| SettingsError::UnknownEnvironment(environment_name))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("DICTAMAIL")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[derive(Display, Debug, EnumString, PartialEq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
