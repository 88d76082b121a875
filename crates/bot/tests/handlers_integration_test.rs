//! Integration tests for Telegram handlers using teloxide_tests
//!
//! These tests simulate real Telegram interactions without hitting the API.
//! Run with: cargo test --test handlers_integration_test
//!
//! Every test drives the real dispatcher schema from the crate with a
//! throwaway file-backed database, so the upsert path is exercised exactly
//! as in production.

use pretty_assertions::assert_eq;
use serial_test::serial;
use std::sync::Arc;
use teloxide_tests::{MockBot, MockCallbackQuery, MockMessageText};

use privet::telegram::{help_text, schema, HandlerDeps, ACK_TEXT, WELCOME_TEXT};
use privet_core::storage::db::count_users;
use privet_core::storage::{create_pool, get_connection, DbPool};

/// Creates handler dependencies backed by a temp-file SQLite database.
///
/// A file-backed database (not `:memory:`) so every pooled connection sees
/// the same data. The temp file guard must outlive the test.
fn create_test_deps() -> (tempfile::NamedTempFile, Arc<DbPool>, HandlerDeps) {
    let db_file = tempfile::NamedTempFile::new().expect("create temp db file");
    let pool = Arc::new(
        create_pool(db_file.path().to_str().expect("temp path is utf-8")).expect("Failed to create test database"),
    );
    let deps = HandlerDeps::new(Arc::clone(&pool));
    (db_file, pool, deps)
}

#[tokio::test]
#[serial]
async fn test_start_command_registers_user_and_sends_welcome() {
    let (_guard, pool, deps) = create_test_deps();

    let message = MockMessageText::new().text("/start");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    let sent_messages = &responses.sent_messages;

    assert_eq!(sent_messages.len(), 1, "Should send exactly one message");
    assert_eq!(sent_messages[0].text().expect("Message should have text"), WELCOME_TEXT);

    let conn = get_connection(&pool).expect("Failed to get connection");
    assert_eq!(count_users(&conn).unwrap(), 1, "Should create exactly one user row");
}

#[tokio::test]
#[serial]
async fn test_start_command_twice_is_idempotent() {
    let (_guard, pool, deps) = create_test_deps();

    let messages = vec![MockMessageText::new().text("/start"), MockMessageText::new().text("/start")];
    let mut bot = MockBot::new(messages, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 2, "Each /start gets a reply");
    for msg in &responses.sent_messages {
        assert_eq!(msg.text().expect("Message should have text"), WELCOME_TEXT);
    }

    let conn = get_connection(&pool).expect("Failed to get connection");
    assert_eq!(count_users(&conn).unwrap(), 1, "Repeat /start must not duplicate the row");
}

#[tokio::test]
#[serial]
async fn test_help_command_sends_command_list_without_touching_db() {
    let (_guard, pool, deps) = create_test_deps();

    let message = MockMessageText::new().text("/help");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 1, "Should send exactly one message");
    assert_eq!(
        responses.sent_messages[0].text().expect("Message should have text"),
        help_text(),
        "Help reply must match the command list verbatim"
    );

    let conn = get_connection(&pool).expect("Failed to get connection");
    assert_eq!(count_users(&conn).unwrap(), 0, "/help must not create rows");
}

#[tokio::test]
#[serial]
async fn test_plain_text_gets_acknowledgment_without_touching_db() {
    let (_guard, pool, deps) = create_test_deps();

    let message = MockMessageText::new().text("hello there");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 1, "Should send exactly one message");
    assert_eq!(
        responses.sent_messages[0].text().expect("Message should have text"),
        ACK_TEXT,
        "Free text gets the fixed acknowledgment verbatim"
    );

    let conn = get_connection(&pool).expect("Failed to get connection");
    assert_eq!(count_users(&conn).unwrap(), 0, "Free text must not create rows");
}

#[tokio::test]
#[serial]
async fn test_unknown_command_falls_through_to_acknowledgment() {
    let (_guard, pool, deps) = create_test_deps();

    let message = MockMessageText::new().text("/frobnicate");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 1);
    assert_eq!(
        responses.sent_messages[0].text().expect("Message should have text"),
        ACK_TEXT,
        "Unknown commands are generic messages"
    );

    let conn = get_connection(&pool).expect("Failed to get connection");
    assert_eq!(count_users(&conn).unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_callback_query_is_acknowledged() {
    let (_guard, _pool, deps) = create_test_deps();

    let callback = MockCallbackQuery::new().data("anything");
    let mut bot = MockBot::new(callback, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert!(
        !responses.answered_callback_queries.is_empty(),
        "Should answer callback query"
    );
    assert!(
        responses.sent_messages.is_empty(),
        "Callback acknowledgment sends no message"
    );
}

#[tokio::test]
#[serial]
async fn test_start_then_text_sequence() {
    let (_guard, pool, deps) = create_test_deps();

    let messages = vec![
        MockMessageText::new().text("/start"),
        MockMessageText::new().text("what can you do?"),
    ];
    let mut bot = MockBot::new(messages, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 2, "Should send 2 messages for 2 inputs");
    assert_eq!(responses.sent_messages[0].text().unwrap(), WELCOME_TEXT);
    assert_eq!(responses.sent_messages[1].text().unwrap(), ACK_TEXT);

    let conn = get_connection(&pool).expect("Failed to get connection");
    assert_eq!(count_users(&conn).unwrap(), 1);
}
