//! Per-bucket value sets.

use serde::{Deserialize, Serialize};

use super::breakpoints::ScreenBucket;

/// A value with up to one variant per screen bucket.
///
/// `small` is the fallback and should always be set; resolving a set
/// without it can yield `None`.
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::responsive::{ResponsiveValues, Viewport};
///
/// let columns = ResponsiveValues::new(1).tablet(4);
///
/// assert_eq!(Viewport::new(800.0, 1024.0).resolve(&columns), Some(&4));
/// assert_eq!(Viewport::new(500.0, 900.0).resolve(&columns), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponsiveValues<T> {
    pub small: Option<T>,
    pub medium: Option<T>,
    pub large: Option<T>,
    pub tablet: Option<T>,
}

impl<T> Default for ResponsiveValues<T> {
    fn default() -> Self {
        Self {
            small: None,
            medium: None,
            large: None,
            tablet: None,
        }
    }
}

impl<T> ResponsiveValues<T> {
    /// Creates a set with the `small` fallback.
    pub fn new(small: T) -> Self {
        Self {
            small: Some(small),
            ..Self::default()
        }
    }

    /// Sets the `medium` slot.
    pub fn medium(mut self, value: T) -> Self {
        self.medium = Some(value);
        self
    }

    /// Sets the `large` slot.
    pub fn large(mut self, value: T) -> Self {
        self.large = Some(value);
        self
    }

    /// Sets the `tablet` slot.
    pub fn tablet(mut self, value: T) -> Self {
        self.tablet = Some(value);
        self
    }

    /// Returns the slot for exactly this bucket.
    pub fn get(&self, bucket: ScreenBucket) -> Option<&T> {
        match bucket {
            ScreenBucket::Small => self.small.as_ref(),
            ScreenBucket::Medium => self.medium.as_ref(),
            ScreenBucket::Large => self.large.as_ref(),
            ScreenBucket::Tablet => self.tablet.as_ref(),
        }
    }

    /// Resolves the set for a bucket.
    ///
    /// With [`Fallback::ExactOrSmall`], only the bucket's own slot is tried
    /// before `small`, so a tablet with only `large` set gets `small`. With
    /// [`Fallback::Tiered`], tiers are tried from `tablet` down while the
    /// bucket is at least that wide.
    pub fn resolve(&self, bucket: ScreenBucket, fallback: Fallback) -> Option<&T> {
        let tiers = [ScreenBucket::Tablet, ScreenBucket::Large, ScreenBucket::Medium];
        let hit = match fallback {
            Fallback::Tiered => tiers
                .into_iter()
                .filter(|tier| bucket >= *tier)
                .find_map(|tier| self.get(tier)),
            Fallback::ExactOrSmall => tiers
                .into_iter()
                .filter(|tier| bucket == *tier)
                .find_map(|tier| self.get(tier)),
        };
        hit.or(self.small.as_ref())
    }
}

/// How a missing slot is handled when resolving [`ResponsiveValues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
    /// Use the bucket's own slot, otherwise jump straight to `small`.
    #[default]
    ExactOrSmall,
    /// Walk down through every tier the bucket covers before `small`.
    Tiered,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ResponsiveValues<u32> {
        ResponsiveValues::new(1).medium(2).large(3).tablet(4)
    }

    #[test]
    fn test_full_set_picks_own_bucket() {
        let values = full();
        for (bucket, expected) in ScreenBucket::ALL.into_iter().zip([1, 2, 3, 4]) {
            assert_eq!(values.resolve(bucket, Fallback::Tiered), Some(&expected));
            assert_eq!(values.resolve(bucket, Fallback::ExactOrSmall), Some(&expected));
        }
    }

    #[test]
    fn test_missing_large_falls_to_small() {
        let values = ResponsiveValues::new(1).tablet(4);
        assert_eq!(values.resolve(ScreenBucket::Tablet, Fallback::Tiered), Some(&4));
        assert_eq!(values.resolve(ScreenBucket::Large, Fallback::Tiered), Some(&1));
        assert_eq!(values.resolve(ScreenBucket::Medium, Fallback::Tiered), Some(&1));
    }

    #[test]
    fn test_tiered_steps_down_from_tablet() {
        let values = ResponsiveValues::new(1).large(3);
        assert_eq!(values.resolve(ScreenBucket::Tablet, Fallback::Tiered), Some(&3));

        let values = ResponsiveValues::new(1).medium(2);
        assert_eq!(values.resolve(ScreenBucket::Tablet, Fallback::Tiered), Some(&2));
        assert_eq!(values.resolve(ScreenBucket::Large, Fallback::Tiered), Some(&2));
    }

    #[test]
    fn test_exact_or_small_skips_lower_tiers() {
        let values = ResponsiveValues::new(1).large(3);
        assert_eq!(
            values.resolve(ScreenBucket::Tablet, Fallback::ExactOrSmall),
            Some(&1)
        );
        assert_eq!(
            values.resolve(ScreenBucket::Large, Fallback::ExactOrSmall),
            Some(&3)
        );
    }

    #[test]
    fn test_small_never_uses_wider_tiers() {
        let values = ResponsiveValues::default().medium(2).large(3).tablet(4);
        assert_eq!(values.resolve(ScreenBucket::Small, Fallback::Tiered), None);
    }

    #[test]
    fn test_missing_small_yields_none() {
        let values: ResponsiveValues<u32> = ResponsiveValues::default().tablet(4);
        assert_eq!(values.resolve(ScreenBucket::Large, Fallback::Tiered), None);
    }

    #[test]
    fn test_zero_is_a_defined_slot() {
        let values = ResponsiveValues::new(8).tablet(0);
        assert_eq!(values.resolve(ScreenBucket::Tablet, Fallback::Tiered), Some(&0));
    }

    #[test]
    fn test_default_policy_jumps_to_small_on_gap() {
        assert_eq!(Fallback::default(), Fallback::ExactOrSmall);

        let values = ResponsiveValues::new(1).large(3);
        assert_eq!(values.resolve(ScreenBucket::Tablet, Fallback::default()), Some(&1));

        let values = ResponsiveValues::new(1).medium(2);
        assert_eq!(values.resolve(ScreenBucket::Large, Fallback::default()), Some(&1));
    }

    #[test]
    fn test_fallback_names() {
        let policy: Fallback = serde_json::from_str(r#""exact-or-small""#).unwrap();
        assert_eq!(policy, Fallback::ExactOrSmall);
        let policy: Fallback = serde_json::from_str(r#""tiered""#).unwrap();
        assert_eq!(policy, Fallback::Tiered);
    }

    #[test]
    fn test_deserialize_partial_set() {
        let values: ResponsiveValues<f64> =
            serde_json::from_str(r#"{"small": 12, "tablet": 20}"#).unwrap();
        assert_eq!(values, ResponsiveValues::new(12.0).tablet(20.0));
    }
}
