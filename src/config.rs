// Database location resolution

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "LEADS_DB_PATH";

const DB_FILENAME: &str = "leads.db";
const APP_DIR: &str = "leadstore";

/// Resolve the database path: an explicit flag wins, then
/// `LEADS_DB_PATH`, then `leads.db` under the user data directory
/// (or the working directory when no data directory exists).
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    resolve_from(flag, env::var_os(DB_PATH_ENV), dirs::data_dir())
}

fn resolve_from(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    data_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(value) = env_value {
        if !value.is_empty() {
            return PathBuf::from(value);
        }
    }
    match data_dir {
        Some(dir) => dir.join(APP_DIR).join(DB_FILENAME),
        None => PathBuf::from(DB_FILENAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_everything() {
        let path = resolve_from(
            Some(PathBuf::from("/tmp/mine.db")),
            Some(OsString::from("/tmp/env.db")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(path, PathBuf::from("/tmp/mine.db"));
    }

    #[test]
    fn test_env_wins_over_data_dir() {
        let path = resolve_from(None, Some(OsString::from("/tmp/env.db")), Some(PathBuf::from("/data")));
        assert_eq!(path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let path = resolve_from(None, Some(OsString::new()), Some(PathBuf::from("/data")));
        assert_eq!(path, PathBuf::from("/data/leadstore/leads.db"));
    }

    #[test]
    fn test_fallback_is_working_directory() {
        let path = resolve_from(None, None, None);
        assert_eq!(path, PathBuf::from("leads.db"));
    }
}
