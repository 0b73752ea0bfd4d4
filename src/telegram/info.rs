use teloxide::prelude::*;

use super::HandlerResult;
use crate::telegram::util::try_get_message_from_query;

const CONTACTS_TEXT: &str = "📞 Поддержка Somon VPN\n\n\
Telegram: @somonvpn_support\n\
E-mail: support@somon-app.com\n\n\
Пишите, если что-то не работает — отвечаем каждый день.";

const PRIVACY_TEXT: &str = "🔒 Политика конфиденциальности\n\n\
Бот хранит только идентификатор вашего Telegram-аккаунта, чтобы отличать \
новых пользователей от вернувшихся. Сообщения, контакты и трафик не \
сохраняются и не передаются третьим лицам.";

/// Static informational screens reachable from the start keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum InfoAction {
    Contacts,
    Privacy,
}

impl InfoAction {
    pub(super) fn callback_data(self) -> &'static str {
        match self {
            Self::Contacts => "info:contacts",
            Self::Privacy => "info:privacy",
        }
    }

    pub(super) fn parse(data: &str) -> Option<Self> {
        match data {
            "info:contacts" => Some(Self::Contacts),
            "info:privacy" => Some(Self::Privacy),
            _ => None,
        }
    }

    fn reply(self) -> &'static str {
        match self {
            Self::Contacts => CONTACTS_TEXT,
            Self::Privacy => PRIVACY_TEXT,
        }
    }
}

pub(super) async fn handle_info_callback(bot: Bot, query: CallbackQuery) -> HandlerResult {
    let action = query.data.as_deref().and_then(InfoAction::parse);

    match action {
        Some(action) => {
            if let Some(message) = try_get_message_from_query(&query) {
                bot.send_message(message.chat.id, action.reply()).await?;
            }
        }
        None => {
            log::debug!("Ignoring callback query with data {:?}", query.data);
        }
    }

    bot.answer_callback_query(query.id).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::schema;
    use serial_test::serial;
    use teloxide_tests::{MockBot, MockCallbackQuery};

    #[test]
    fn parses_only_known_actions() {
        assert_eq!(InfoAction::parse("info:contacts"), Some(InfoAction::Contacts));
        assert_eq!(InfoAction::parse("info:privacy"), Some(InfoAction::Privacy));
        assert_eq!(InfoAction::parse("info:unknown"), None);
        assert_eq!(InfoAction::parse(""), None);
    }

    #[test]
    fn callback_data_round_trips() {
        for action in [InfoAction::Contacts, InfoAction::Privacy] {
            assert_eq!(InfoAction::parse(action.callback_data()), Some(action));
        }
    }

    #[tokio::test]
    #[serial]
    async fn contacts_callback_sends_contacts() {
        let query = MockCallbackQuery::new().data("info:contacts");
        let mut bot = MockBot::new(query, schema());

        bot.dispatch().await;

        let responses = bot.get_responses();
        assert!(!responses.answered_callback_queries.is_empty());

        let text = responses.sent_messages[0].text().unwrap();
        assert!(text.contains("Поддержка"));
    }

    #[tokio::test]
    #[serial]
    async fn privacy_callback_sends_policy() {
        let query = MockCallbackQuery::new().data("info:privacy");
        let mut bot = MockBot::new(query, schema());

        bot.dispatch().await;

        let responses = bot.get_responses();
        assert!(!responses.answered_callback_queries.is_empty());

        let text = responses.sent_messages[0].text().unwrap();
        assert!(text.contains("конфиденциальности"));
    }

    #[tokio::test]
    #[serial]
    async fn unknown_callback_is_acknowledged_without_reply() {
        let query = MockCallbackQuery::new().data("info:unknown");
        let mut bot = MockBot::new(query, schema());

        bot.dispatch().await;

        let responses = bot.get_responses();
        assert!(!responses.answered_callback_queries.is_empty());
        assert!(responses.sent_messages.is_empty());
    }
}
