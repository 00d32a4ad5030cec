//! Screen-width buckets and their thresholds.

use serde::{Deserialize, Serialize};

/// Device-width classification tier.
///
/// Buckets are ordered from narrowest to widest, so `bucket >= ScreenBucket::Large`
/// reads as "large or wider".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenBucket {
    Small,
    Medium,
    Large,
    Tablet,
}

impl ScreenBucket {
    /// All buckets, narrowest first.
    pub const ALL: [ScreenBucket; 4] = [
        ScreenBucket::Small,
        ScreenBucket::Medium,
        ScreenBucket::Large,
        ScreenBucket::Tablet,
    ];

    /// Multiplier applied by [`Viewport::scaled_spacing`](super::Viewport::scaled_spacing).
    pub fn spacing_multiplier(self) -> f64 {
        match self {
            ScreenBucket::Small => 0.8,
            ScreenBucket::Tablet => 1.2,
            ScreenBucket::Medium | ScreenBucket::Large => 1.0,
        }
    }

    /// Multiplier applied by [`Viewport::scaled_font_size`](super::Viewport::scaled_font_size).
    pub fn font_multiplier(self) -> f64 {
        match self {
            ScreenBucket::Small => 0.9,
            ScreenBucket::Tablet => 1.1,
            ScreenBucket::Medium | ScreenBucket::Large => 1.0,
        }
    }
}

impl std::fmt::Display for ScreenBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScreenBucket::Small => "small",
            ScreenBucket::Medium => "medium",
            ScreenBucket::Large => "large",
            ScreenBucket::Tablet => "tablet",
        };
        f.write_str(name)
    }
}

/// Width breakpoints in logical pixels.
///
/// Each bucket starts at its threshold and runs up to the next one:
///
/// | Bucket | Width |
/// |--------|-------|
/// | small | `< 375` |
/// | medium | `375..414` |
/// | large | `414..768` |
/// | tablet | `>= 768` |
///
/// `small` (320) is the narrowest supported device and `xlarge` (480) is a
/// layout hint for wide phones; neither moves a bucket boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub xlarge: f64,
    pub tablet: f64,
}

/// The breakpoint table used by the mobile client.
pub const BREAKPOINTS: Breakpoints = Breakpoints {
    small: 320.0,
    medium: 375.0,
    large: 414.0,
    xlarge: 480.0,
    tablet: 768.0,
};

impl Default for Breakpoints {
    fn default() -> Self {
        BREAKPOINTS
    }
}

impl Breakpoints {
    /// Classifies a device width.
    ///
    /// Every width maps to exactly one bucket. Widths that are not numbers
    /// classify as [`ScreenBucket::Small`].
    pub fn bucket_for(&self, width: f64) -> ScreenBucket {
        if width >= self.tablet {
            ScreenBucket::Tablet
        } else if width >= self.large {
            ScreenBucket::Large
        } else if width >= self.medium {
            ScreenBucket::Medium
        } else {
            ScreenBucket::Small
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.bucket_for(320.0), ScreenBucket::Small);
        assert_eq!(bp.bucket_for(374.9), ScreenBucket::Small);
        assert_eq!(bp.bucket_for(375.0), ScreenBucket::Medium);
        assert_eq!(bp.bucket_for(413.0), ScreenBucket::Medium);
        assert_eq!(bp.bucket_for(414.0), ScreenBucket::Large);
        assert_eq!(bp.bucket_for(767.0), ScreenBucket::Large);
        assert_eq!(bp.bucket_for(768.0), ScreenBucket::Tablet);
        assert_eq!(bp.bucket_for(1366.0), ScreenBucket::Tablet);
    }

    #[test]
    fn test_degenerate_widths() {
        let bp = Breakpoints::default();
        assert_eq!(bp.bucket_for(0.0), ScreenBucket::Small);
        assert_eq!(bp.bucket_for(-10.0), ScreenBucket::Small);
        assert_eq!(bp.bucket_for(f64::NAN), ScreenBucket::Small);
    }

    #[test]
    fn test_xlarge_does_not_split_large() {
        let bp = Breakpoints::default();
        assert_eq!(bp.bucket_for(479.0), bp.bucket_for(480.0));
    }

    #[test]
    fn test_thresholds_are_ordered() {
        let bp = BREAKPOINTS;
        assert!(bp.small < bp.medium);
        assert!(bp.medium < bp.large);
        assert!(bp.large < bp.xlarge);
        assert!(bp.xlarge < bp.tablet);
    }

    #[test]
    fn test_bucket_ordering() {
        assert!(ScreenBucket::Small < ScreenBucket::Medium);
        assert!(ScreenBucket::Large < ScreenBucket::Tablet);
        assert_eq!(ScreenBucket::ALL.len(), 4);
    }

    #[test]
    fn test_bucket_display() {
        assert_eq!(ScreenBucket::Tablet.to_string(), "tablet");
        assert_eq!(ScreenBucket::Small.to_string(), "small");
    }
}
