use std::path::Path;

use page_logging::{page_error, page_info, page_warn};
use portfolio_core::Theme;
use portfolio_engine::{read_if_exists, write_atomically};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    /// `"light"` or `"dark"`.
    theme: String,
}

/// Reads the stored theme. Anything unreadable falls back to light.
pub(crate) fn load_theme(path: &Path) -> Theme {
    let content = match read_if_exists(path) {
        Ok(Some(text)) => text,
        Ok(None) => return Theme::default(),
        Err(err) => {
            page_warn!("Failed to read preferences from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            page_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    match Theme::parse(&prefs.theme) {
        Some(theme) => {
            page_info!("Loaded theme {} from {:?}", theme, path);
            theme
        }
        None => {
            page_warn!("Unknown theme {:?} in {:?}", prefs.theme, path);
            Theme::default()
        }
    }
}

pub(crate) fn save_theme(path: &Path, theme: Theme) {
    let prefs = PersistedPrefs {
        theme: theme.as_str().to_string(),
    };

    let content = match ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::new()) {
        Ok(text) => text,
        Err(err) => {
            page_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomically(path, &content) {
        page_error!("Failed to write preferences to {:?}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_means_light() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_theme(&temp.path().join("prefs.ron")), Theme::Light);
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.ron");
        save_theme(&path, Theme::Dark);
        assert!(fs::read_to_string(&path).unwrap().contains("\"dark\""));
        assert_eq!(load_theme(&path), Theme::Dark);

        save_theme(&path, Theme::Light);
        assert_eq!(load_theme(&path), Theme::Light);
    }

    #[test]
    fn garbage_falls_back_to_light() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.ron");
        fs::write(&path, "not ron at all {").unwrap();
        assert_eq!(load_theme(&path), Theme::Light);

        fs::write(&path, "(theme: \"sepia\")").unwrap();
        assert_eq!(load_theme(&path), Theme::Light);
    }
}
