//! Spacing scale (4px steps on an 8px grid).

use serde::{Deserialize, Serialize};

/// Base grid unit.
pub const SPACING_UNIT: f64 = 8.0;

pub const SPACE_0: f64 = 0.0;
pub const SPACE_1: f64 = 4.0;
pub const SPACE_2: f64 = 8.0;
pub const SPACE_3: f64 = 12.0;
pub const SPACE_4: f64 = 16.0;
pub const SPACE_5: f64 = 20.0;
pub const SPACE_6: f64 = 24.0;
pub const SPACE_8: f64 = 32.0;
pub const SPACE_10: f64 = 40.0;
pub const SPACE_12: f64 = 48.0;
pub const SPACE_16: f64 = 64.0;
pub const SPACE_20: f64 = 80.0;
pub const SPACE_24: f64 = 96.0;
pub const SPACE_32: f64 = 128.0;

/// Every defined step of the scale, in order.
pub const SPACING_SCALE: [(u8, f64); 14] = [
    (0, SPACE_0),
    (1, SPACE_1),
    (2, SPACE_2),
    (3, SPACE_3),
    (4, SPACE_4),
    (5, SPACE_5),
    (6, SPACE_6),
    (8, SPACE_8),
    (10, SPACE_10),
    (12, SPACE_12),
    (16, SPACE_16),
    (20, SPACE_20),
    (24, SPACE_24),
    (32, SPACE_32),
];

/// Returns the spacing for a scale step, or `None` for steps the scale
/// skips (7, 9, ...).
pub fn space(step: u8) -> Option<f64> {
    SPACING_SCALE
        .iter()
        .find(|(s, _)| *s == step)
        .map(|(_, value)| *value)
}

/// Fixed sizes of the mobile app chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileChrome {
    pub header: f64,
    pub content: f64,
    pub tab_bar: f64,
    pub safe_area: f64,
}

impl Default for MobileChrome {
    fn default() -> Self {
        Self {
            header: 60.0,
            content: SPACE_4,
            tab_bar: 80.0,
            safe_area: 44.0,
        }
    }
}
