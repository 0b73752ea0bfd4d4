use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct TelegramSettings {
    pub token: String,
}

#[derive(Deserialize, Debug)]
pub struct MiniAppSettings {
    pub url: String,
}

#[derive(Deserialize, Debug)]
pub struct StorageSettings {
    pub path: PathBuf,
}

#[derive(Deserialize, Debug)]
pub struct AppSettings {
    pub telegram: TelegramSettings,
    pub miniapp: MiniAppSettings,
    pub storage: StorageSettings,
}

impl AppSettings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("telegram.token", "")?
            .set_default("miniapp.url", "https://somon-app.com")?
            .set_default("storage.path", "known_users.json")?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            // The deployment supplies the token through a single BOT_TOKEN
            // variable, so it wins over every file source.
            .set_override_option("telegram.token", std::env::var("BOT_TOKEN").ok())?
            .build()?;

        settings.try_deserialize()
    }
}
