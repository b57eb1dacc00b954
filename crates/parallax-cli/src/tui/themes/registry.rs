//! Theme registry for discovering and accessing themes

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Theme;

/// Name used when a requested theme does not exist
pub const DEFAULT_THEME: &str = "dusk";

pub static THEME_REGISTRY: LazyLock<ThemeRegistry> = LazyLock::new(ThemeRegistry::new);

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    fallback: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            fallback: super::dusk(),
        };

        registry.register(super::dusk());
        registry.register(super::paper());
        registry.register(super::terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or(&self.fallback)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get_key_value(name))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
