use std::cmp::Ordering;

use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::StoreError;

/// One step in the schema history.
#[derive(Clone, Copy, Debug)]
pub struct Migration {
    /// The schema version after this step has been applied.
    pub version: i32,
    pub description: &'static str,
    pub sql: &'static str,
}

const CREATE_GAMES: Migration = Migration {
    version: 1,
    description: "create games table",
    sql: "CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_black TEXT,
            player_white TEXT,
            date TEXT,
            moves TEXT,
            result TEXT
        )",
};

/// All schema steps, in order. Versions start at 1 and increase by one.
pub const MIGRATIONS: &[Migration] = &[CREATE_GAMES];

/// The schema version this build reads and writes.
pub const SCHEMA_VERSION: i32 = 1;

/// What to do when the database on disk has an older schema version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradePolicy {
    /// Drop the `games` table and create it from scratch.
    ///
    /// All stored games are lost. The id counter is carried over, so ids of
    /// the discarded games are not handed out again.
    #[default]
    Recreate,
    /// Apply the pending migrations, keeping existing rows.
    Migrate,
}

pub(crate) fn user_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Brings the schema up to [`SCHEMA_VERSION`].
pub(crate) fn initialize(conn: &mut Connection, policy: UpgradePolicy) -> Result<(), StoreError> {
    upgrade(conn, MIGRATIONS, policy)
}

fn upgrade(
    conn: &mut Connection,
    migrations: &[Migration],
    policy: UpgradePolicy,
) -> Result<(), StoreError> {
    let target = migrations.last().map_or(0, |m| m.version);
    let found = user_version(conn)?;

    match found.cmp(&target) {
        Ordering::Equal => {
            debug!(version = found, "Schema is up to date");
            Ok(())
        }
        Ordering::Greater => Err(StoreError::UnsupportedSchemaVersion {
            found,
            supported: target,
        }),
        Ordering::Less => {
            let tx = conn.transaction()?;
            if found > 0 && policy == UpgradePolicy::Recreate {
                warn!(
                    from = found,
                    to = target,
                    "Recreating games table, previously stored games are discarded"
                );
                let last_id = last_assigned_id(&tx)?;
                tx.execute_batch("DROP TABLE IF EXISTS games")?;
                apply(&tx, migrations, 0)?;
                if let Some(seq) = last_id {
                    tx.execute(
                        "INSERT INTO sqlite_sequence (name, seq) VALUES ('games', ?1)",
                        params![seq],
                    )?;
                }
            } else {
                apply(&tx, migrations, found)?;
            }
            tx.pragma_update(None, "user_version", target)?;
            tx.commit()?;
            info!(from = found, to = target, "Upgraded schema");
            Ok(())
        }
    }
}

// The AUTOINCREMENT counter of `games`. Dropping the table removes it from
// `sqlite_sequence`, which only exists once some AUTOINCREMENT table was created.
fn last_assigned_id(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_sequence: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence')",
        [],
        |row| row.get(0),
    )?;
    if !has_sequence {
        return Ok(None);
    }
    conn.query_row(
        "SELECT seq FROM sqlite_sequence WHERE name = 'games'",
        [],
        |row| row.get(0),
    )
    .optional()
}

fn apply(conn: &Connection, migrations: &[Migration], from: i32) -> rusqlite::Result<()> {
    for migration in migrations.iter().filter(|m| m.version > from) {
        debug!(
            version = migration.version,
            description = migration.description,
            "Applying migration"
        );
        conn.execute_batch(migration.sql)?;
    }
    Ok(())
}
