//! Color palettes.

use serde::{Deserialize, Serialize};

/// A tonal palette from lightest (`50`) to darkest (`900`), plus the text
/// color that reads on its main shade.
///
/// In YAML the shade keys must be quoted (`"500": "#d63384"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub shade_50: String,
    #[serde(rename = "100")]
    pub shade_100: String,
    #[serde(rename = "200")]
    pub shade_200: String,
    #[serde(rename = "300")]
    pub shade_300: String,
    #[serde(rename = "400")]
    pub shade_400: String,
    #[serde(rename = "500")]
    pub shade_500: String,
    #[serde(rename = "600")]
    pub shade_600: String,
    #[serde(rename = "700")]
    pub shade_700: String,
    #[serde(rename = "800")]
    pub shade_800: String,
    #[serde(rename = "900")]
    pub shade_900: String,
    pub contrast: String,
}

impl ColorScale {
    /// Looks up a shade by its number.
    pub fn shade(&self, shade: u16) -> Option<&str> {
        let color = match shade {
            50 => &self.shade_50,
            100 => &self.shade_100,
            200 => &self.shade_200,
            300 => &self.shade_300,
            400 => &self.shade_400,
            500 => &self.shade_500,
            600 => &self.shade_600,
            700 => &self.shade_700,
            800 => &self.shade_800,
            900 => &self.shade_900,
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(shades: [&str; 10], contrast: &str) -> Self {
        let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900] = shades.map(String::from);
        Self {
            shade_50: s50,
            shade_100: s100,
            shade_200: s200,
            shade_300: s300,
            shade_400: s400,
            shade_500: s500,
            shade_600: s600,
            shade_700: s700,
            shade_800: s800,
            shade_900: s900,
            contrast: contrast.to_string(),
        }
    }
}

/// A status color in three tones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemanticColor {
    pub light: String,
    pub main: String,
    pub dark: String,
    pub contrast: String,
}

impl SemanticColor {
    fn new(light: &str, main: &str, dark: &str, contrast: &str) -> Self {
        Self {
            light: light.to_string(),
            main: main.to_string(),
            dark: dark.to_string(),
            contrast: contrast.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemanticColors {
    pub error: SemanticColor,
    pub warning: SemanticColor,
    pub success: SemanticColor,
    pub info: SemanticColor,
}

/// Background colors for screens, cards and overlays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub elevated: String,
    pub overlay: String,
    pub glass: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub inverse: String,
    pub accent: String,
    pub muted: String,
}

/// The full color system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub neutral: ColorScale,
    pub semantic: SemanticColors,
    pub surface: SurfaceColors,
    pub text: TextColors,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: ColorScale::from_hex(
                [
                    "#fdf2f4", "#fce7eb", "#f9d0d9", "#f4a6b7", "#ed7590", "#d63384", "#c02a74",
                    "#a02464", "#85205a", "#6f1e52",
                ],
                "#ffffff",
            ),
            secondary: ColorScale::from_hex(
                [
                    "#f6f8f6", "#e8f0e8", "#d3e2d3", "#b0ccb0", "#85b085", "#6b9b6b", "#5a8a5a",
                    "#4a734a", "#3d5e3d", "#344f34",
                ],
                "#ffffff",
            ),
            neutral: ColorScale::from_hex(
                [
                    "#fafaf9", "#f7f6f4", "#ede9e6", "#ddd6d1", "#b8aca4", "#8b7d74", "#6b5d54",
                    "#524842", "#3a332e", "#2a241f",
                ],
                "#ffffff",
            ),
            semantic: SemanticColors {
                error: SemanticColor::new("#fef2f2", "#e11d48", "#be123c", "#ffffff"),
                warning: SemanticColor::new("#fffbeb", "#f59e0b", "#d97706", "#000000"),
                success: SemanticColor::new("#f0fdf4", "#22c55e", "#16a34a", "#ffffff"),
                info: SemanticColor::new("#f0f9ff", "#0ea5e9", "#0284c7", "#ffffff"),
            },
            surface: SurfaceColors {
                primary: "#ffffff".into(),
                secondary: "#fafaf9".into(),
                tertiary: "#f7f6f4".into(),
                elevated: "#ffffff".into(),
                overlay: "rgba(42, 36, 31, 0.75)".into(),
                glass: "rgba(247, 246, 244, 0.9)".into(),
            },
            text: TextColors {
                primary: "#2a241f".into(),
                secondary: "#524842".into(),
                tertiary: "#8b7d74".into(),
                inverse: "#ffffff".into(),
                accent: "#d63384".into(),
                muted: "#b8aca4".into(),
            },
        }
    }
}

/// Replacement palettes. Each group that is set replaces the default group
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorOverrides {
    pub primary: Option<ColorScale>,
    pub secondary: Option<ColorScale>,
    pub neutral: Option<ColorScale>,
    pub semantic: Option<SemanticColors>,
    pub surface: Option<SurfaceColors>,
    pub text: Option<TextColors>,
}

impl Colors {
    /// Returns a copy with the overridden groups swapped in.
    pub fn with_overrides(&self, overrides: ColorOverrides) -> Colors {
        let base = self.clone();
        Colors {
            primary: overrides.primary.unwrap_or(base.primary),
            secondary: overrides.secondary.unwrap_or(base.secondary),
            neutral: overrides.neutral.unwrap_or(base.neutral),
            semantic: overrides.semantic.unwrap_or(base.semantic),
            surface: overrides.surface.unwrap_or(base.surface),
            text: overrides.text.unwrap_or(base.text),
        }
    }
}
