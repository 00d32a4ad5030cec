//! Component style presets.

use crate::responsive::Viewport;
use crate::style::{convert_style, StyleObject};
use crate::style_object;
use crate::tokens::spacing::{SPACE_2, SPACE_3, SPACE_4, SPACE_6, SPACE_8};
use crate::tokens::{Colors, MobileChrome, Shadow, Typography};

/// Minimum touch target height.
pub const MIN_TOUCH_TARGET: f64 = 44.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyles {
    pub base: StyleObject,
    pub title: StyleObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonVariants {
    pub primary: StyleObject,
    pub secondary: StyleObject,
    pub ghost: StyleObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSizes {
    pub sm: StyleObject,
    pub lg: StyleObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyles {
    pub base: StyleObject,
    pub variants: ButtonVariants,
    pub sizes: ButtonSizes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStyles {
    pub base: StyleObject,
    pub elevated: StyleObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputStyles {
    pub base: StyleObject,
    pub error: StyleObject,
}

/// Converted styles for the shared UI components.
///
/// Variants and sizes hold only what they change; layer them over `base`
/// with [`StyleObject::merged`].
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    pub header: HeaderStyles,
    pub button: ButtonStyles,
    pub card: CardStyles,
    pub input: InputStyles,
}

impl Components {
    /// Builds every preset from the given tokens.
    pub fn build(
        colors: &Colors,
        typography: &Typography,
        chrome: &MobileChrome,
        viewport: &Viewport,
    ) -> Self {
        let native = |style: StyleObject| convert_style(&style, viewport);

        let header = HeaderStyles {
            base: native(
                style_object! {
                    "height" => chrome.header,
                    "backgroundColor" => &colors.surface.primary,
                    "borderBottomWidth" => 1,
                    "borderBottomColor" => &colors.neutral.shade_200,
                }
                .merged(&Shadow::Sm.style())
                .merged(&style_object! {
                    "flexDirection" => "row",
                    "alignItems" => "center",
                    "justifyContent" => "space-between",
                    "paddingHorizontal" => SPACE_4,
                }),
            ),
            title: native(style_object! {
                "fontSize" => typography.scale.lg,
                "fontWeight" => typography.weights.semibold,
                "color" => &colors.text.primary,
                "textAlign" => "center",
                "flex" => 1,
            }),
        };

        let button = ButtonStyles {
            base: native(style_object! {
                "paddingVertical" => SPACE_3,
                "paddingHorizontal" => SPACE_6,
                "borderRadius" => 8,
                "alignItems" => "center",
                "justifyContent" => "center",
                "minHeight" => MIN_TOUCH_TARGET,
            }),
            variants: ButtonVariants {
                primary: native(
                    style_object! { "backgroundColor" => &colors.primary.shade_500 }
                        .merged(&Shadow::Base.style()),
                ),
                secondary: native(style_object! {
                    "backgroundColor" => "transparent",
                    "borderWidth" => 1,
                    "borderColor" => &colors.secondary.shade_500,
                }),
                ghost: native(style_object! { "backgroundColor" => "transparent" }),
            },
            sizes: ButtonSizes {
                sm: native(style_object! {
                    "paddingVertical" => SPACE_2,
                    "paddingHorizontal" => SPACE_4,
                    "minHeight" => 36,
                }),
                lg: native(style_object! {
                    "paddingVertical" => SPACE_4,
                    "paddingHorizontal" => SPACE_8,
                    "minHeight" => 52,
                }),
            },
        };

        let card = CardStyles {
            base: native(
                style_object! {
                    "backgroundColor" => &colors.surface.primary,
                    "borderRadius" => 12,
                    "padding" => SPACE_4,
                }
                .merged(&Shadow::Base.style()),
            ),
            elevated: native(Shadow::Lg.style()),
        };

        let input = InputStyles {
            base: native(style_object! {
                "paddingVertical" => SPACE_3,
                "paddingHorizontal" => SPACE_4,
                "fontSize" => typography.scale.base,
                "color" => &colors.text.primary,
                "backgroundColor" => &colors.surface.primary,
                "borderWidth" => 1,
                "borderColor" => &colors.neutral.shade_300,
                "borderRadius" => 8,
                "minHeight" => MIN_TOUCH_TARGET,
            }),
            error: native(style_object! {
                "borderColor" => &colors.semantic.error.main,
            }),
        };

        Self {
            header,
            button,
            card,
            input,
        }
    }
}
