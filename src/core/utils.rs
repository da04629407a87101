use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".switchboard_bom";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DATA_DIR: &str = "data";

pub const HOME_ENV: &str = "SWITCHBOARD_BOM_HOME";
pub const DATA_ENV: &str = "SWITCHBOARD_BOM_DATA";

/// Returns the application directory, defaulting to `~/.switchboard_bom`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Catalog directory: environment override, then the configured directory,
/// then `./data`.
pub fn resolve_data_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(custom) = env::var_os(DATA_ENV) {
        return PathBuf::from(custom);
    }
    configured
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
