use persistence::db::DatabaseConfig;

use super::read_var;

/// Database connection settings from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional; no connection when unset)
pub fn from_lookup<F>(lookup: &F) -> Option<DatabaseConfig>
where
    F: Fn(&str) -> Option<String>,
{
    read_var(lookup, "DATABASE_URL").map(DatabaseConfig::new)
}
