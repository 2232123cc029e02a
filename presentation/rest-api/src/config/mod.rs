pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod error;
pub mod frontend_config;
pub mod groq_config;
pub mod server_config;

/// Reads a variable through `lookup`, treating blank values as unset.
pub(crate) fn read_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}
