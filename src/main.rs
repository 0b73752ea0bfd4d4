mod appsettings;
mod storage;
mod telegram;

use std::sync::Arc;

use anyhow::Context;
use teloxide::Bot;
use url::Url;

use appsettings::AppSettings;
use storage::{JsonKnownUsersStore, KnownUsersStore};
use telegram::{MiniAppUrl, TelegramInteractionInterface};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = AppSettings::new().context("failed to load application settings")?;
    anyhow::ensure!(
        !settings.telegram.token.is_empty(),
        "BOT_TOKEN is missing. Set it in the environment or in appsettings.local."
    );

    let miniapp_url = Url::parse(&settings.miniapp.url)
        .with_context(|| format!("miniapp.url is not a valid URL: {}", settings.miniapp.url))?;

    let store: Arc<dyn KnownUsersStore> =
        Arc::new(JsonKnownUsersStore::load(&settings.storage.path));
    let bot = Bot::new(&settings.telegram.token);

    TelegramInteractionInterface::start(bot, store, MiniAppUrl(miniapp_url)).await;

    Ok(())
}
