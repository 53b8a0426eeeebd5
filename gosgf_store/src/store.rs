use std::path::{Path, PathBuf};

use gosgf::GameRecord;
use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use crate::schema::{self, UpgradePolicy};
use crate::StoreError;

/// The file name of the database inside the data directory.
pub const DATABASE_NAME: &str = "go_records.db";

/// An append-only log of finished games, backed by a single SQLite file.
///
/// All operations block the calling thread. Locking between several
/// processes opening the same file is left to SQLite.
pub struct GameStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl GameStore {
    /// Opens the database at `path`, creating the file and its parent
    /// directories if necessary, and brings the schema up to date.
    pub fn open(path: impl AsRef<Path>, policy: UpgradePolicy) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        info!(path = %path.display(), ?policy, "Opening game store");
        let mut conn = Connection::open(path)?;
        schema::initialize(&mut conn, policy)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens [`DATABASE_NAME`] inside `dir`.
    pub fn open_in_dir(dir: impl AsRef<Path>, policy: UpgradePolicy) -> Result<Self, StoreError> {
        Self::open(dir.as_ref().join(DATABASE_NAME), policy)
    }

    /// A store that lives only as long as the returned value. Mostly useful for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let mut conn = Connection::open_in_memory()?;
        schema::initialize(&mut conn, UpgradePolicy::default())?;
        Ok(Self { conn, path: None })
    }

    /// The database file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> Result<i32, StoreError> {
        Ok(schema::user_version(&self.conn)?)
    }

    /// Appends a game and returns the id assigned to it.
    ///
    /// The arguments are stored as given, without any validation.
    pub fn add_game_record(
        &self,
        player_black: &str,
        player_white: &str,
        date: &str,
        moves: &str,
        result: &str,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO games (player_black, player_white, date, moves, result)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![player_black, player_white, date, moves, result],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "Stored game record");
        Ok(id)
    }

    /// Reads every stored game, in the order the database returns them.
    pub fn get_all_games(&self) -> Result<Vec<GameRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, player_black, player_white, date, moves, result FROM games")?;
        let games = stmt
            .query_map([], game_from_row)?
            .collect::<Result<Vec<GameRecord>, rusqlite::Error>>()?;
        debug!(count = games.len(), "Loaded game records");
        Ok(games)
    }
}

// The text columns are nullable in the schema. Rows written by this store
// never contain NULL, but treat it as an empty string anyway.
fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn game_from_row(row: &Row<'_>) -> rusqlite::Result<GameRecord> {
    Ok(GameRecord {
        id: row.get(0)?,
        player_black: text(row, 1)?,
        player_white: text(row, 2)?,
        date: text(row, 3)?,
        moves: text(row, 4)?,
        game_result: text(row, 5)?,
    })
}
