mod config;
mod error;
mod schema;
mod store;
pub use config::*;
pub use error::*;
pub use schema::{Migration, UpgradePolicy, MIGRATIONS, SCHEMA_VERSION};
pub use store::*;
