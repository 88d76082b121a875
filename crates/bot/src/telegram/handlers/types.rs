//! Handler types, dependencies, and user registration helpers

use std::sync::Arc;

use teloxide::types::Message;

use privet_core::error::AppResult;
use privet_core::storage::db::{self, User};
use privet_core::storage::{get_connection, DbPool};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub db_pool: Arc<DbPool>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }
}

/// Identity fields extracted from an inbound message
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserInfo {
    /// Extract user info from a Telegram message.
    ///
    /// The external identifier is the sender's id; for sender-less updates
    /// (channel posts) the chat id stands in, which equals the sender id in
    /// private chats.
    pub fn from_message(msg: &Message) -> Self {
        let telegram_id = msg
            .from
            .as_ref()
            .and_then(|u| i64::try_from(u.id.0).ok())
            .unwrap_or(msg.chat.id.0);

        Self {
            telegram_id,
            username: msg.from.as_ref().and_then(|u| u.username.clone()),
            first_name: msg.from.as_ref().map(|u| u.first_name.clone()),
            last_name: msg.from.as_ref().and_then(|u| u.last_name.clone()),
        }
    }
}

/// Insert-or-refresh the user row for an inbound message.
///
/// Idempotent: a repeat registration keeps the surrogate id and refreshes
/// the display-name fields and `updated_at`. The write completes before the
/// caller sends any reply; a persistence failure propagates to the caller.
pub fn register_user(db_pool: &Arc<DbPool>, user: &UserInfo) -> AppResult<User> {
    let conn = get_connection(db_pool)?;
    let row = db::upsert_user(
        &conn,
        user.telegram_id,
        user.username.as_deref(),
        user.first_name.as_deref(),
        user.last_name.as_deref(),
    )?;
    Ok(row)
}
