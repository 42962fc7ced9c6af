/// Theme preference, persisted in localStorage

use crate::error::{describe_js, SiteError};

pub const THEME_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Read a stored value; only an explicit "light" opts out of dark
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value.map(str::trim) {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Reads and writes the theme through the browser
pub struct ThemeStore {
    window: web_sys::Window,
}

impl ThemeStore {
    pub fn new() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        Ok(ThemeStore { window })
    }

    fn local_storage(&self) -> Result<web_sys::Storage, SiteError> {
        self.window
            .local_storage()
            .map_err(|e| SiteError::Storage(describe_js(&e)))?
            .ok_or_else(|| SiteError::Storage("localStorage disabled".to_string()))
    }

    pub fn load(&self) -> Result<Theme, SiteError> {
        let stored = self
            .local_storage()?
            .get_item(THEME_KEY)
            .map_err(|e| SiteError::Storage(describe_js(&e)))?;
        Ok(Theme::from_stored(stored.as_deref()))
    }

    pub fn save(&self, theme: Theme) -> Result<(), SiteError> {
        self.local_storage()?
            .set_item(THEME_KEY, theme.as_str())
            .map_err(|e| SiteError::Storage(describe_js(&e)))
    }

    /// Toggle the `dark` class on the root element
    pub fn apply(&self, theme: Theme) -> Result<(), SiteError> {
        let root = self
            .window
            .document()
            .and_then(|d| d.document_element())
            .ok_or_else(|| SiteError::Dom("no document element".to_string()))?;

        root.class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
            .map(|_| ())
            .map_err(|e| SiteError::Dom(describe_js(&e)))
    }
}

/// Load the stored theme and apply it; failures fall back to dark
pub fn restore_theme() -> Theme {
    let result = ThemeStore::new().and_then(|store| {
        let theme = store.load().unwrap_or_else(|e| {
            log::warn!("Could not read theme: {}", e);
            Theme::default()
        });
        store.apply(theme)?;
        Ok(theme)
    });

    result.unwrap_or_else(|e| {
        log::warn!("Could not apply theme: {}", e);
        Theme::default()
    })
}

/// Persist and apply a theme; the caller's in-memory theme changes regardless
pub fn persist_theme(theme: Theme) {
    let result = ThemeStore::new().and_then(|store| {
        if let Err(e) = store.save(theme) {
            log::warn!("Could not save theme: {}", e);
        }
        store.apply(theme)
    });

    if let Err(e) = result {
        log::warn!("Could not apply theme: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some(" light ")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_stored_value_matches_reader() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }
}
