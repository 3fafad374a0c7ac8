use shared::theme::{default_themes, Theme, ThemeError};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::info;

/// Current palette selection. Created once at startup and shared by
/// reference; readers subscribe instead of polling.
pub struct ThemeStore {
    themes: Vec<Theme>,
    current: watch::Sender<Theme>,
}

impl ThemeStore {
    /// The first theme in `themes` is the initial selection.
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeError> {
        let first = themes.first().cloned().ok_or(ThemeError::NoThemes)?;
        let (current, _) = watch::channel(first);
        Ok(Self { themes, current })
    }

    pub fn with_defaults() -> Result<Self, ThemeError> {
        Self::new(default_themes())
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn current(&self) -> Theme {
        self.current.borrow().clone()
    }

    /// Selects a theme by display name or slug. Unknown names leave the
    /// selection untouched.
    pub fn set_theme(&self, name: &str) -> Result<Theme, ThemeError> {
        let theme = self
            .themes
            .iter()
            .find(|t| t.name == name || t.slug() == name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;
        info!(theme = %theme.name, "theme selected");
        self.current.send_replace(theme.clone());
        Ok(theme)
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.current.subscribe()
    }

    /// Stream of selections, starting with the current one.
    pub fn changes(&self) -> WatchStream<Theme> {
        WatchStream::new(self.subscribe())
    }

    pub fn css_variables(&self) -> Result<Vec<(String, String)>, ThemeError> {
        self.current.borrow().css_variables()
    }
}
