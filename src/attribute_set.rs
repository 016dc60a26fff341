//! Attribute set module.
//!
//! An `AttributeSet` maps attributes to values. Extraction produces a
//! partial set; profiles carry a complete one. Each attribute has a fixed
//! slot, so complete sets can be built in `const` context.

use crate::attribute::Attribute;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// A mapping from [`Attribute`] to `f64`.
///
/// Missing attributes are absent, not zero.
///
/// # Examples
///
/// ```rust
/// use rollgrade::{Attribute, AttributeSet};
///
/// let mut set = AttributeSet::new();
/// set.insert(Attribute::MiningAmount, 210.0);
///
/// assert_eq!(set.get(Attribute::MiningAmount), Some(210.0));
/// assert_eq!(set.get(Attribute::ActivationTime), None);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttributeSet {
    values: [Option<f64>; Attribute::COUNT],
}

impl AttributeSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            values: [None; Attribute::COUNT],
        }
    }

    /// Const builder used for profile defaults.
    pub const fn with(mut self, attribute: Attribute, value: f64) -> Self {
        self.values[attribute.index()] = Some(value);
        self
    }

    /// Value of `attribute`, if present.
    pub fn get(&self, attribute: Attribute) -> Option<f64> {
        self.values[attribute.index()]
    }

    /// Value of `attribute`, or `0.0` if absent.
    pub fn get_or_zero(&self, attribute: Attribute) -> f64 {
        self.get(attribute).unwrap_or(0.0)
    }

    /// Set `attribute`, returning the previous value.
    pub fn insert(&mut self, attribute: Attribute, value: f64) -> Option<f64> {
        self.values[attribute.index()].replace(value)
    }

    /// Remove `attribute`, returning its value.
    pub fn remove(&mut self, attribute: Attribute) -> Option<f64> {
        self.values[attribute.index()].take()
    }

    /// Whether `attribute` is present.
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.values[attribute.index()].is_some()
    }

    /// Number of present attributes.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Whether no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Present attributes in [`Attribute::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        Attribute::ALL
            .iter()
            .filter_map(move |&a| self.get(a).map(|v| (a, v)))
    }

    /// Overlay this set on `defaults`: values in `self` win, gaps are
    /// filled from `defaults`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollgrade::{Attribute, AttributeSet};
    ///
    /// let defaults = AttributeSet::new()
    ///     .with(Attribute::MiningAmount, 200.0)
    ///     .with(Attribute::ActivationTime, 45.0);
    /// let mut rolled = AttributeSet::new();
    /// rolled.insert(Attribute::MiningAmount, 230.0);
    ///
    /// let merged = rolled.merged_over(&defaults);
    /// assert_eq!(merged.get(Attribute::MiningAmount), Some(230.0));
    /// assert_eq!(merged.get(Attribute::ActivationTime), Some(45.0));
    /// ```
    pub fn merged_over(&self, defaults: &AttributeSet) -> AttributeSet {
        let mut merged = *defaults;
        for (attribute, value) in self.iter() {
            merged.insert(attribute, value);
        }
        merged
    }
}

impl FromIterator<(Attribute, f64)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (Attribute, f64)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (attribute, value) in iter {
            set.insert(attribute, value);
        }
        set
    }
}

impl Serialize for AttributeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (attribute, value) in self.iter() {
            map.serialize_entry(&attribute, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<Attribute, f64>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}
