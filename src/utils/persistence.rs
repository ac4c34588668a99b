//! Paths under ~/.lane-runner/ for the config override and the log file.

use std::fs;
use std::io;
use std::path::PathBuf;

const DATA_DIR_NAME: &str = ".lane-runner";
const CONFIG_FILE_NAME: &str = "config.json";

/// Get the ~/.lane-runner/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.lane-runner/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// The user's config override, if one exists. Never creates anything.
pub fn default_config_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(DATA_DIR_NAME).join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}
