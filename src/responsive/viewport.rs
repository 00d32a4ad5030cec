//! The device viewport snapshot used by responsive resolution.

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::breakpoints::{Breakpoints, ScreenBucket, BREAKPOINTS};
use super::values::{Fallback, ResponsiveValues};
use crate::unit::round_half_up;

/// Safe-area padding reserved by the device chrome.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Device dimensions captured once and passed to whatever needs them.
///
/// The bucket is computed when the viewport is built, so resolving values
/// never re-reads the device. Build a new `Viewport` to react to rotation
/// or resizing.
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::responsive::{ScreenBucket, Viewport};
///
/// let phone = Viewport::new(390.0, 844.0).with_scale(3.0);
/// assert_eq!(phone.bucket(), ScreenBucket::Medium);
/// assert!(phone.is_portrait());
/// assert_eq!(phone.scaled_spacing(16.0), 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    scale: f64,
    bucket: ScreenBucket,
    fallback: Fallback,
    insets: SafeAreaInsets,
}

impl Viewport {
    /// Creates a viewport classified against the default [`BREAKPOINTS`].
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_breakpoints(width, height, &BREAKPOINTS)
    }

    /// Creates a viewport classified against custom breakpoints.
    pub fn with_breakpoints(width: f64, height: f64, breakpoints: &Breakpoints) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            bucket: breakpoints.bucket_for(width),
            fallback: Fallback::default(),
            insets: SafeAreaInsets::default(),
        }
    }

    /// Sets the device pixel ratio.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets how [`resolve`](Self::resolve) treats missing slots.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the safe-area insets reported by the host.
    pub fn with_safe_area_insets(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Returns the process-wide default viewport.
    ///
    /// See [`set_viewport`].
    pub fn current() -> Self {
        *CURRENT_VIEWPORT
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Device pixel ratio.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn bucket(&self) -> ScreenBucket {
        self.bucket
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    pub fn safe_area_insets(&self) -> SafeAreaInsets {
        self.insets
    }

    pub fn is_small_screen(&self) -> bool {
        self.bucket == ScreenBucket::Small
    }

    pub fn is_medium_screen(&self) -> bool {
        self.bucket == ScreenBucket::Medium
    }

    pub fn is_large_screen(&self) -> bool {
        self.bucket == ScreenBucket::Large
    }

    pub fn is_tablet(&self) -> bool {
        self.bucket == ScreenBucket::Tablet
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Picks the value for this viewport's bucket.
    ///
    /// Uses the viewport's [`Fallback`] policy, [`Fallback::ExactOrSmall`] unless
    /// changed with [`with_fallback`](Self::with_fallback).
    pub fn resolve<'v, T>(&self, values: &'v ResponsiveValues<T>) -> Option<&'v T> {
        values.resolve(self.bucket, self.fallback)
    }

    /// Scales a spacing value for the bucket: 0.8 on small screens, 1.2 on
    /// tablets. The result is rounded.
    pub fn scaled_spacing(&self, base: f64) -> f64 {
        round_half_up(base * self.bucket.spacing_multiplier())
    }

    /// Scales a font size for the bucket: 0.9 on small screens, 1.1 on
    /// tablets. The result is rounded.
    pub fn scaled_font_size(&self, base: f64) -> f64 {
        round_half_up(base * self.bucket.font_multiplier())
    }
}

impl Default for Viewport {
    /// A 375×667 phone at 2x, the viewport assumed before the host reports one.
    fn default() -> Self {
        Viewport::new(375.0, 667.0).with_scale(2.0)
    }
}

static CURRENT_VIEWPORT: Lazy<RwLock<Viewport>> = Lazy::new(|| RwLock::new(Viewport::default()));

/// Replaces the process-wide default viewport.
///
/// Hosts call this once at startup with the device dimensions. Everything
/// that takes a `&Viewport` explicitly is unaffected.
pub fn set_viewport(viewport: Viewport) {
    let mut guard = CURRENT_VIEWPORT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    tracing::debug!(
        width = viewport.width,
        height = viewport.height,
        bucket = %viewport.bucket,
        "viewport updated"
    );
    *guard = viewport;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_bucket_is_captured_at_construction() {
        assert_eq!(Viewport::new(320.0, 640.0).bucket(), ScreenBucket::Small);
        assert_eq!(Viewport::new(375.0, 667.0).bucket(), ScreenBucket::Medium);
        assert_eq!(Viewport::new(414.0, 896.0).bucket(), ScreenBucket::Large);
        assert_eq!(Viewport::new(767.0, 1024.0).bucket(), ScreenBucket::Large);
        assert_eq!(Viewport::new(768.0, 1024.0).bucket(), ScreenBucket::Tablet);
    }

    #[test]
    fn test_exactly_one_bucket_predicate_holds() {
        for width in [300.0, 380.0, 500.0, 1024.0] {
            let vp = Viewport::new(width, 900.0);
            let flags = [
                vp.is_small_screen(),
                vp.is_medium_screen(),
                vp.is_large_screen(),
                vp.is_tablet(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }
    }

    #[test]
    fn test_orientation() {
        assert!(Viewport::new(390.0, 844.0).is_portrait());
        assert!(Viewport::new(844.0, 390.0).is_landscape());
        let square = Viewport::new(500.0, 500.0);
        assert!(!square.is_portrait());
        assert!(!square.is_landscape());
    }

    #[test]
    fn test_resolve_documented_examples() {
        let values = ResponsiveValues::new(1).tablet(4);
        assert_eq!(Viewport::new(800.0, 1200.0).resolve(&values), Some(&4));
        assert_eq!(Viewport::new(500.0, 900.0).resolve(&values), Some(&1));
    }

    #[test]
    fn test_resolve_uses_configured_fallback() {
        let values = ResponsiveValues::new("small").large("large");
        let tablet = Viewport::new(1024.0, 768.0);
        assert_eq!(tablet.resolve(&values), Some(&"small"));
        assert_eq!(
            tablet.with_fallback(Fallback::Tiered).resolve(&values),
            Some(&"large")
        );
    }

    #[test]
    fn test_resolve_gap_falls_to_small() {
        let tablet = Viewport::new(800.0, 1200.0);
        assert_eq!(tablet.resolve(&ResponsiveValues::new(1).large(3)), Some(&1));

        let large = Viewport::new(500.0, 900.0);
        assert_eq!(large.resolve(&ResponsiveValues::new(1).medium(2)), Some(&1));
    }

    #[test]
    fn test_scaled_spacing() {
        assert_eq!(Viewport::new(320.0, 640.0).scaled_spacing(16.0), 13.0);
        assert_eq!(Viewport::new(375.0, 667.0).scaled_spacing(16.0), 16.0);
        assert_eq!(Viewport::new(500.0, 900.0).scaled_spacing(16.0), 16.0);
        assert_eq!(Viewport::new(800.0, 1200.0).scaled_spacing(16.0), 19.0);
    }

    #[test]
    fn test_scaled_font_size() {
        assert_eq!(Viewport::new(320.0, 640.0).scaled_font_size(20.0), 18.0);
        assert_eq!(Viewport::new(320.0, 640.0).scaled_font_size(15.0), 14.0);
        assert_eq!(Viewport::new(414.0, 896.0).scaled_font_size(15.0), 15.0);
        assert_eq!(Viewport::new(800.0, 1200.0).scaled_font_size(15.0), 17.0);
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints {
            tablet: 600.0,
            ..BREAKPOINTS
        };
        let vp = Viewport::with_breakpoints(640.0, 960.0, &bp);
        assert!(vp.is_tablet());
    }

    #[test]
    fn test_default_insets_are_zero() {
        assert_eq!(Viewport::default().safe_area_insets(), SafeAreaInsets::default());
        let insets = SafeAreaInsets {
            top: 44.0,
            bottom: 34.0,
            ..SafeAreaInsets::default()
        };
        let vp = Viewport::default().with_safe_area_insets(insets);
        assert_eq!(vp.safe_area_insets().top, 44.0);
    }

    #[test]
    #[serial]
    fn test_set_viewport_replaces_current() {
        let previous = Viewport::current();

        set_viewport(Viewport::new(820.0, 1180.0));
        assert!(Viewport::current().is_tablet());

        set_viewport(previous);
        assert_eq!(Viewport::current(), previous);
    }
}
