mod info;
mod start;
mod util;

use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, filter_command, macros::BotCommands, prelude::*};
use url::Url;

use crate::storage::KnownUsersStore;

type HandlerResult = anyhow::Result<()>;

/// Address of the web mini-application, passed to handlers through the
/// dispatcher dependencies.
#[derive(Clone)]
pub struct MiniAppUrl(pub Url);

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
enum Command {
    #[command(description = "open the mini-app menu.")]
    Start,
}

pub struct TelegramInteractionInterface;

impl TelegramInteractionInterface {
    pub async fn start(bot: Bot, store: Arc<dyn KnownUsersStore>, miniapp_url: MiniAppUrl) {
        log::info!("Starting Telegram interaction interface");

        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![store, miniapp_url])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await
    }
}

fn schema() -> UpdateHandler<anyhow::Error> {
    let command_handler =
        filter_command::<Command, _>()
            .branch(dptree::case![Command::Start].endpoint(start::handle_start));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(dptree::endpoint(fallback));

    let callback_handler = Update::filter_callback_query().endpoint(info::handle_info_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

async fn fallback(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Я понимаю только команду /start — она откроет меню с кнопкой приложения.",
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use teloxide_tests::{MockBot, MockMessageText};

    #[tokio::test]
    #[serial]
    async fn plain_text_gets_fallback_hint() {
        let mut bot = MockBot::new(MockMessageText::new().text("привет"), schema());

        bot.dispatch().await;

        let responses = bot.get_responses();
        let text = responses.sent_messages[0].text().unwrap();
        assert!(text.contains("/start"));
    }
}
