//! Named global style sheet.

use std::collections::BTreeMap;

use serde::Serialize;

use super::components::Components;
use crate::responsive::Viewport;
use crate::style::{convert_style, StyleObject};
use crate::style_object;
use crate::tokens::spacing::{SPACE_1, SPACE_2, SPACE_4};
use crate::tokens::{Colors, Typography};

/// A set of named, converted styles shared across screens.
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::Theme;
///
/// let theme = Theme::new();
/// let sheet = theme.style_sheet();
/// let button = sheet.get("buttonPrimary").unwrap();
/// assert!(button.contains("backgroundColor"));
/// assert!(button.contains("paddingVertical"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleSheet {
    styles: BTreeMap<String, StyleObject>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a style, converting it for the native renderer.
    ///
    /// Every entry goes through [`convert_style`], including presets that
    /// are already native, so string weights such as `fontWeight: "600"`
    /// are stored as numbers.
    pub fn add(mut self, name: &str, style: StyleObject, viewport: &Viewport) -> Self {
        self.styles
            .insert(name.to_string(), convert_style(&style, viewport));
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleObject> {
        self.styles.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Builds the app-wide sheet from tokens and component presets.
    pub(crate) fn global(
        colors: &Colors,
        typography: &Typography,
        components: &Components,
        viewport: &Viewport,
    ) -> Self {
        let button = &components.button;
        let flex_direction = |direction: &str| style_object! { "flexDirection" => direction };

        StyleSheet::new()
            .add(
                "listItemTitle",
                style_object! {
                    "fontSize" => typography.scale.lg,
                    "fontWeight" => "600",
                    "color" => &colors.text.primary,
                    "marginBottom" => SPACE_1,
                },
                viewport,
            )
            .add(
                "listItemSubtitle",
                style_object! {
                    "fontSize" => typography.scale.base,
                    "color" => &colors.text.secondary,
                },
                viewport,
            )
            .add(
                "modalTitle",
                style_object! {
                    "fontSize" => typography.scale.xl2,
                    "fontWeight" => "600",
                    "color" => &colors.text.primary,
                    "marginBottom" => SPACE_2,
                },
                viewport,
            )
            .add(
                "modalCloseButton",
                style_object! { "padding" => SPACE_2, "borderRadius" => 8 },
                viewport,
            )
            .add(
                "screenBase",
                style_object! {
                    "flex" => 1,
                    "backgroundColor" => &colors.surface.secondary,
                },
                viewport,
            )
            .add(
                "screenContent",
                style_object! { "flex" => 1, "paddingHorizontal" => SPACE_4 },
                viewport,
            )
            .add(
                "screenCentered",
                style_object! {
                    "flex" => 1,
                    "alignItems" => "center",
                    "justifyContent" => "center",
                    "paddingHorizontal" => SPACE_4,
                },
                viewport,
            )
            .add("headerBase", components.header.base.clone(), viewport)
            .add("headerTitle", components.header.title.clone(), viewport)
            .add("buttonBase", button.base.clone(), viewport)
            .add(
                "buttonPrimary",
                button.base.merged(&button.variants.primary),
                viewport,
            )
            .add(
                "buttonSecondary",
                button.base.merged(&button.variants.secondary),
                viewport,
            )
            .add(
                "buttonGhost",
                button.base.merged(&button.variants.ghost),
                viewport,
            )
            .add("buttonSm", button.base.merged(&button.sizes.sm), viewport)
            .add("buttonLg", button.base.merged(&button.sizes.lg), viewport)
            .add("cardBase", components.card.base.clone(), viewport)
            .add(
                "cardElevated",
                components.card.base.merged(&components.card.elevated),
                viewport,
            )
            .add("inputBase", components.input.base.clone(), viewport)
            .add(
                "inputError",
                components.input.base.merged(&components.input.error),
                viewport,
            )
            .add(
                "textPrimary",
                style_object! {
                    "color" => &colors.text.primary,
                    "fontSize" => typography.scale.base,
                },
                viewport,
            )
            .add(
                "textSecondary",
                style_object! {
                    "color" => &colors.text.secondary,
                    "fontSize" => typography.scale.sm,
                },
                viewport,
            )
            .add(
                "textMuted",
                style_object! {
                    "color" => &colors.text.muted,
                    "fontSize" => typography.scale.xs,
                },
                viewport,
            )
            .add("flexRow", flex_direction("row"), viewport)
            .add("flexColumn", flex_direction("column"), viewport)
            .add(
                "alignCenter",
                style_object! { "alignItems" => "center" },
                viewport,
            )
            .add(
                "justifyCenter",
                style_object! { "justifyContent" => "center" },
                viewport,
            )
            .add(
                "justifyBetween",
                style_object! { "justifyContent" => "space-between" },
                viewport,
            )
    }
}
