//! Type families, sizes, weights and spacing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub display: String,
    pub body: String,
    pub mono: String,
}

/// Font sizes in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    pub xs: f64,
    pub sm: f64,
    pub base: f64,
    pub lg: f64,
    pub xl: f64,
    #[serde(rename = "2xl")]
    pub xl2: f64,
    #[serde(rename = "3xl")]
    pub xl3: f64,
    #[serde(rename = "4xl")]
    pub xl4: f64,
    #[serde(rename = "5xl")]
    pub xl5: f64,
    #[serde(rename = "6xl")]
    pub xl6: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontWeights {
    pub light: f64,
    pub regular: f64,
    pub medium: f64,
    pub semibold: f64,
    pub bold: f64,
    pub extrabold: f64,
}

/// Line-height multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: f64,
    pub normal: f64,
    pub relaxed: f64,
    pub loose: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    pub tighter: f64,
    pub tight: f64,
    pub normal: f64,
    pub wide: f64,
    pub wider: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub families: FontFamilies,
    pub scale: TypeScale,
    pub weights: FontWeights,
    pub line_heights: LineHeights,
    pub letter_spacing: LetterSpacing,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            families: FontFamilies {
                display: "System".into(),
                body: "System".into(),
                mono: "Courier New".into(),
            },
            scale: TypeScale {
                xs: 12.0,
                sm: 14.0,
                base: 16.0,
                lg: 18.0,
                xl: 20.0,
                xl2: 24.0,
                xl3: 30.0,
                xl4: 36.0,
                xl5: 48.0,
                xl6: 60.0,
            },
            weights: FontWeights {
                light: 300.0,
                regular: 400.0,
                medium: 500.0,
                semibold: 600.0,
                bold: 700.0,
                extrabold: 800.0,
            },
            line_heights: LineHeights {
                tight: 1.25,
                normal: 1.5,
                relaxed: 1.625,
                loose: 2.0,
            },
            letter_spacing: LetterSpacing {
                tighter: -0.8,
                tight: -0.4,
                normal: 0.0,
                wide: 0.4,
                wider: 0.8,
            },
        }
    }
}
