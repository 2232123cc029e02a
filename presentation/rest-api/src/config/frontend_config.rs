use std::path::{Path, PathBuf};

use super::read_var;

/// Static serving of the prebuilt frontend bundle.
///
/// Environment variables:
/// - APP_ENV or NODE_ENV: "production" in either enables static serving
/// - FRONTEND_DIST_DIR: Bundle directory (default: "../frontend/dist")
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub production: bool,
    pub dist_dir: PathBuf,
}

impl FrontendConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = ["APP_ENV", "NODE_ENV"]
            .into_iter()
            .any(|key| read_var(lookup, key).is_some_and(|mode| mode == "production"));
        let dist_dir = read_var(lookup, "FRONTEND_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("../frontend/dist"));

        Self {
            production,
            dist_dir,
        }
    }

    /// Bundle directory to serve, only in production mode.
    pub fn static_dir(&self) -> Option<&Path> {
        self.production.then_some(self.dist_dir.as_path())
    }
}
