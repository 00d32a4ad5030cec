//! Theme struct bundling tokens, component presets and the global sheet.

use std::path::Path;

use serde::Deserialize;

use super::components::Components;
use super::sheet::StyleSheet;
use crate::error::ThemeError;
use crate::responsive::{Breakpoints, Viewport, BREAKPOINTS};
use crate::tokens::{ColorOverrides, Colors, MobileChrome, Typography};

/// Overrides accepted in a theme document.
///
/// ```yaml
/// colors:
///   text:
///     primary: "#111111"
///     secondary: "#333333"
///     tertiary: "#555555"
///     inverse: "#ffffff"
///     accent: "#0ea5e9"
///     muted: "#999999"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub colors: ColorOverrides,
}

/// The complete design system for one viewport.
///
/// Component presets and the style sheet are derived from the tokens and
/// rebuilt whenever the colors change.
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::{ColorOverrides, Theme};
/// use aterciopelada_style::responsive::Viewport;
///
/// let theme = Theme::for_viewport(Viewport::new(820.0, 1180.0));
/// assert!(theme.viewport().is_tablet());
///
/// let plain = theme.with_colors(ColorOverrides::default());
/// assert_eq!(plain.colors(), theme.colors());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: Colors,
    typography: Typography,
    chrome: MobileChrome,
    breakpoints: Breakpoints,
    viewport: Viewport,
    components: Components,
    sheet: StyleSheet,
}

impl Theme {
    /// Creates the default theme for the process-wide viewport.
    pub fn new() -> Self {
        Self::for_viewport(Viewport::current())
    }

    /// Creates the default theme for a specific viewport.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::assemble(
            Colors::default(),
            Typography::default(),
            MobileChrome::default(),
            viewport,
        )
    }

    /// Returns a theme with some color groups replaced.
    pub fn with_colors(&self, overrides: ColorOverrides) -> Self {
        Self::assemble(
            self.colors.with_overrides(overrides),
            self.typography.clone(),
            self.chrome,
            self.viewport,
        )
    }

    /// Applies a YAML theme document on top of this theme.
    pub fn with_yaml_str(&self, source: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_yaml::from_str(source).map_err(|err| {
            tracing::warn!(error = %err, "rejected theme document");
            ThemeError::from(err)
        })?;
        Ok(self.with_colors(config.colors))
    }

    /// Builds the default theme for the process-wide viewport with a YAML
    /// document applied.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        Self::new().with_yaml_str(source)
    }

    /// Reads and applies a YAML theme file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading theme file");
        Self::from_yaml_str(&source)
    }

    fn assemble(
        colors: Colors,
        typography: Typography,
        chrome: MobileChrome,
        viewport: Viewport,
    ) -> Self {
        let components = Components::build(&colors, &typography, &chrome, &viewport);
        let sheet = StyleSheet::global(&colors, &typography, &components, &viewport);
        Self {
            colors,
            typography,
            chrome,
            breakpoints: BREAKPOINTS,
            viewport,
            components,
            sheet,
        }
    }

    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Fixed sizes of the header, tab bar and safe area.
    pub fn chrome(&self) -> &MobileChrome {
        &self.chrome
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn style_sheet(&self) -> &StyleSheet {
        &self.sheet
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
