//! Elevation presets expressed as native shadow properties.

use crate::style::StyleObject;
use crate::style_object;

/// Shadow depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shadow {
    None,
    Sm,
    Base,
    Lg,
    Xl,
}

impl Shadow {
    /// The shadow as style properties, ready to merge into another style.
    ///
    /// `elevation` is the Android equivalent of the iOS shadow fields.
    pub fn style(self) -> StyleObject {
        let (offset, opacity, radius, elevation) = match self {
            Shadow::None => return StyleObject::new(),
            Shadow::Sm => (1, 0.05, 2, 1),
            Shadow::Base => (2, 0.1, 4, 2),
            Shadow::Lg => (4, 0.15, 8, 4),
            Shadow::Xl => (8, 0.2, 16, 8),
        };
        style_object! {
            "shadowColor" => "#000",
            "shadowOffset" => style_object! { "width" => 0, "height" => offset },
            "shadowOpacity" => opacity,
            "shadowRadius" => radius,
            "elevation" => elevation,
        }
    }
}
