#[derive(Debug)]
/// Error type for all store operations.
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Io(std::io::Error),
    Config(serde_json::Error),
    /// The database was written by a newer version of this program.
    UnsupportedSchemaVersion {
        found: i32,
        supported: i32,
    },
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Sqlite(err) => Some(err),
            StoreError::Io(err) => Some(err),
            StoreError::Config(err) => Some(err),
            StoreError::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Sqlite(_) => write!(f, "Database operation failed"),
            StoreError::Io(_) => write!(f, "Could not access the database location"),
            StoreError::Config(_) => write!(f, "Could not read the store configuration"),
            StoreError::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "Database has schema version {}, but only versions up to {} are supported",
                found, supported
            ),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Sqlite(err)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Config(err)
    }
}
