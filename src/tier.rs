//! Tier classification module.
//!
//! A roll's tier is found by placing its plain throughput into a
//! profile-specific table of seven calibrated bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality grade of a roll, `S` best to `F` worst.
///
/// Variants are declared worst first so that `Ord` follows quality.
///
/// # Examples
///
/// ```rust
/// use rollgrade::Tier;
///
/// assert!(Tier::S > Tier::A);
/// assert_eq!(Tier::S.summary_label(), "+S");
/// assert_eq!(Tier::C.summary_label(), "C");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    F,
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Tier {
    /// All tiers, best first.
    pub const ALL: [Tier; 7] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D, Tier::E, Tier::F];

    /// Single-letter name of the tier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::E => "E",
            Tier::F => "F",
        }
    }

    /// Label used in the one-line summary: `+S` for the top tier.
    pub const fn summary_label(self) -> &'static str {
        match self {
            Tier::S => "+S",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `[min, max)` throughput band in m3/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBand {
    pub min: f64,
    pub max: f64,
}

impl TierBand {
    /// Band from `min` (inclusive) to `max` (exclusive).
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` falls inside the band. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Calibrated bands for one item type.
///
/// `S` is open-ended above its `min`, `F` is open-ended below its `max`;
/// the remaining bands are checked by range membership.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub s: TierBand,
    pub a: TierBand,
    pub b: TierBand,
    pub c: TierBand,
    pub d: TierBand,
    pub e: TierBand,
    pub f: TierBand,
}

impl TierTable {
    /// Band of `tier`.
    pub fn band(&self, tier: Tier) -> &TierBand {
        match tier {
            Tier::S => &self.s,
            Tier::A => &self.a,
            Tier::B => &self.b,
            Tier::C => &self.c,
            Tier::D => &self.d,
            Tier::E => &self.e,
            Tier::F => &self.f,
        }
    }

    /// Classify a plain throughput value.
    ///
    /// Total: every input, NaN included, gets exactly one tier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollgrade::{ItemTypeProfile, Tier};
    ///
    /// let tiers = &ItemTypeProfile::ORE.tiers;
    /// assert_eq!(tiers.classify(200.0 / 45.0), Tier::E);
    /// assert_eq!(tiers.classify(9.0), Tier::S);
    /// assert_eq!(tiers.classify(-1.0), Tier::F);
    /// ```
    pub fn classify(&self, value: f64) -> Tier {
        if value >= self.s.min {
            return Tier::S;
        }
        [Tier::A, Tier::B, Tier::C, Tier::D, Tier::E]
            .into_iter()
            .find(|&tier| self.band(tier).contains(value))
            .unwrap_or(Tier::F)
    }

    /// Human-readable band of `tier`, e.g. `6.27-6.61+ m3/s` or `<4.44 m3/s`.
    pub fn describe(&self, tier: Tier) -> String {
        let band = self.band(tier);
        match tier {
            Tier::S => format!("{:.2}-{:.2}+ m3/s", band.min, band.max),
            Tier::F => format!("<{:.2} m3/s", band.max),
            _ => format!("{:.2}-{:.5} m3/s", band.min, band.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TierTable {
        TierTable {
            s: TierBand::new(6.0, 7.0),
            a: TierBand::new(5.0, 6.0),
            b: TierBand::new(4.0, 5.0),
            c: TierBand::new(3.0, 4.0),
            d: TierBand::new(2.0, 3.0),
            e: TierBand::new(1.0, 2.0),
            f: TierBand::new(0.0, 1.0),
        }
    }

    #[test]
    fn test_band_edges() {
        let t = table();
        assert_eq!(t.classify(6.0), Tier::S);
        assert_eq!(t.classify(5.999_999), Tier::A);
        assert_eq!(t.classify(5.0), Tier::A);
        assert_eq!(t.classify(1.0), Tier::E);
        assert_eq!(t.classify(0.999), Tier::F);
    }

    #[test]
    fn test_s_ignores_max() {
        assert_eq!(table().classify(1000.0), Tier::S);
    }

    #[test]
    fn test_nan_and_negative_are_f() {
        let t = table();
        assert_eq!(t.classify(f64::NAN), Tier::F);
        assert_eq!(t.classify(-5.0), Tier::F);
        assert_eq!(t.classify(f64::NEG_INFINITY), Tier::F);
    }

    #[test]
    fn test_tier_order() {
        let mut sorted = Tier::ALL;
        sorted.sort();
        assert_eq!(sorted[0], Tier::F);
        assert_eq!(sorted[6], Tier::S);
    }

    #[test]
    fn test_describe() {
        let t = table();
        assert_eq!(t.describe(Tier::S), "6.00-7.00+ m3/s");
        assert_eq!(t.describe(Tier::F), "<1.00 m3/s");
        assert_eq!(t.describe(Tier::C), "3.00-4.00000 m3/s");
    }
}
