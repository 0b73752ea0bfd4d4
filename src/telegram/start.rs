use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};

use super::{HandlerResult, MiniAppUrl, info::InfoAction};
use crate::storage::KnownUsersStore;

const WELCOME: &str =
    "Добро пожаловать в Somon VPN 🇹🇯\n\nНажми кнопку ниже, чтобы открыть приложение.";

const WELCOME_BACK: &str =
    "С возвращением в Somon VPN 🇹🇯\n\nПриложение на месте — кнопка ниже.";

pub(super) async fn handle_start(
    bot: Bot,
    msg: Message,
    store: Arc<dyn KnownUsersStore>,
    miniapp_url: MiniAppUrl,
) -> HandlerResult {
    // Messages without a sender (channel posts) are greeted as newcomers
    // and not recorded.
    let first_time = match msg.from.as_ref() {
        Some(user) => store.mark_seen(user.id.0).await,
        None => true,
    };

    let text = if first_time { WELCOME } else { WELCOME_BACK };

    bot.send_message(msg.chat.id, text)
        .reply_markup(start_keyboard(&miniapp_url))
        .await?;

    Ok(())
}

fn start_keyboard(miniapp_url: &MiniAppUrl) -> InlineKeyboardMarkup {
    let open_app = InlineKeyboardButton::web_app(
        "🚀 Открыть мини-апп",
        WebAppInfo {
            url: miniapp_url.0.clone(),
        },
    );

    let contacts =
        InlineKeyboardButton::callback("📞 Контакты", InfoAction::Contacts.callback_data());
    let privacy = InlineKeyboardButton::callback(
        "🔒 Политика конфиденциальности",
        InfoAction::Privacy.callback_data(),
    );

    InlineKeyboardMarkup::new(vec![vec![open_app], vec![contacts, privacy]])
}
