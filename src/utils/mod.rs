mod atomic;

pub use atomic::{atomic_write, TEMP_FILE_PREFIX};

use std::path::{Path, PathBuf};

/// The name of the per-user application folder
pub const APP_FOLDER: &str = ".lost-found";

/// Folder (under the app folder) holding the document collections
pub const DATA_FOLDER: &str = "data";

/// Get the per-user application folder (`~/.lost-found`)
#[must_use]
pub fn get_app_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER)
}

/// Default data directory used when neither the CLI nor the user config names one
#[must_use]
pub fn default_data_dir() -> PathBuf {
    get_app_path().join(DATA_FOLDER)
}

/// Directory of one collection below a data directory
#[must_use]
pub fn collection_path(data_dir: &Path, collection: &str) -> PathBuf {
    data_dir.join(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_path_ends_with_folder() {
        assert!(get_app_path().ends_with(APP_FOLDER));
    }

    #[test]
    fn test_default_data_dir_is_inside_app_path() {
        assert!(default_data_dir().starts_with(get_app_path()));
    }

    #[test]
    fn test_collection_path() {
        let path = collection_path(Path::new("/srv/lost-found"), "itens_perdidos");
        assert_eq!(path, Path::new("/srv/lost-found/itens_perdidos"));
    }
}
