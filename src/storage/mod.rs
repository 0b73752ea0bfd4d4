mod known_users;

pub use known_users::JsonKnownUsersStore;

use async_trait::async_trait;

/// Records which Telegram user IDs the bot has already greeted.
#[async_trait]
pub trait KnownUsersStore: Send + Sync {
    /// Records the ID and reports whether it was seen for the first time.
    async fn mark_seen(&self, user_id: u64) -> bool;

    async fn is_known(&self, user_id: u64) -> bool;
}
