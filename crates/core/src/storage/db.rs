use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension, Result};

use super::migrations;

/// A registered bot user.
///
/// `telegram_id` is the platform's stable identifier and the upsert key;
/// `id` is the internal surrogate key that settings reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A per-user key/value setting. `(user_id, key)` is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub id: i64,
    pub user_id: i64,
    pub key: String,
    pub value: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Create a new database connection pool
///
/// Initializes a pool with up to 10 connections, enables foreign key
/// enforcement on every connection (required for the settings cascade), and
/// applies schema migrations on the first connection.
///
/// # Arguments
///
/// * `database_path` - Path to SQLite database file
pub fn create_pool(database_path: &str) -> anyhow::Result<DbPool> {
    let manager = SqliteConnectionManager::file(database_path)
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
    let pool = Pool::builder()
        .max_size(10) // Maximum 10 connections in the pool
        .build(manager)?;

    let mut conn = pool.get()?;
    migrations::run_migrations(&mut conn)?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// The connection is automatically returned to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Insert a user, or refresh the existing row if `telegram_id` is already
/// registered.
///
/// The upsert is keyed on the `telegram_id` unique constraint: an existing
/// row keeps its `id` and `created_at`, while the display-name fields and
/// `updated_at` are refreshed. Atomicity is SQLite's.
///
/// # Returns
///
/// The stored row after the upsert.
pub fn upsert_user(
    conn: &DbConnection,
    telegram_id: i64,
    username: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<User> {
    conn.execute(
        "INSERT INTO users (telegram_id, username, first_name, last_name)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(telegram_id) DO UPDATE SET
             username = excluded.username,
             first_name = excluded.first_name,
             last_name = excluded.last_name,
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![telegram_id, username, first_name, last_name],
    )?;

    // The row exists after the statement above; a miss here is a real error.
    let user = get_user(conn, telegram_id)?;
    user.ok_or(rusqlite::Error::QueryReturnedNoRows)
}

/// Fetch a user by Telegram ID.
///
/// # Returns
///
/// `Ok(Some(User))` if registered, `Ok(None)` otherwise.
pub fn get_user(conn: &DbConnection, telegram_id: i64) -> Result<Option<User>> {
    conn.query_row(
        "SELECT id, telegram_id, username, first_name, last_name, created_at, updated_at
         FROM users WHERE telegram_id = ?1",
        params![telegram_id],
        |row| {
            Ok(User {
                id: row.get(0)?,
                telegram_id: row.get(1)?,
                username: row.get(2)?,
                first_name: row.get(3)?,
                last_name: row.get(4)?,
                created_at: row.get(5)?,
                updated_at: row.get(6)?,
            })
        },
    )
    .optional()
}

/// Count registered users.
pub fn count_users(conn: &DbConnection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
}

/// Delete a user by Telegram ID.
///
/// Associated settings rows are removed by the `ON DELETE CASCADE` rule.
///
/// # Returns
///
/// `Ok(true)` if a row was deleted, `Ok(false)` if the user was not found.
pub fn delete_user(conn: &DbConnection, telegram_id: i64) -> Result<bool> {
    let rows_affected = conn.execute("DELETE FROM users WHERE telegram_id = ?1", params![telegram_id])?;
    Ok(rows_affected > 0)
}

/// Insert or update a setting, keyed on the `(user_id, key)` unique pair.
///
/// An existing row keeps its `id` and `created_at`; `value` and
/// `updated_at` are refreshed.
pub fn set_setting(conn: &DbConnection, user_id: i64, key: &str, value: Option<&str>) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (user_id, key, value)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id, key) DO UPDATE SET
             value = excluded.value,
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![user_id, key, value],
    )?;
    Ok(())
}

/// Fetch a single setting by `(user_id, key)`.
pub fn get_setting(conn: &DbConnection, user_id: i64, key: &str) -> Result<Option<Setting>> {
    conn.query_row(
        "SELECT id, user_id, key, value, created_at, updated_at
         FROM settings WHERE user_id = ?1 AND key = ?2",
        params![user_id, key],
        |row| {
            Ok(Setting {
                id: row.get(0)?,
                user_id: row.get(1)?,
                key: row.get(2)?,
                value: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        },
    )
    .optional()
}

/// List all settings of a user, ordered by key.
pub fn list_settings(conn: &DbConnection, user_id: i64) -> Result<Vec<Setting>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, key, value, created_at, updated_at
         FROM settings WHERE user_id = ?1 ORDER BY key",
    )?;
    let rows = stmt.query_map(params![user_id], |row| {
        Ok(Setting {
            id: row.get(0)?,
            user_id: row.get(1)?,
            key: row.get(2)?,
            value: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    })?;

    let mut settings = Vec::new();
    for row in rows {
        settings.push(row?);
    }
    Ok(settings)
}
