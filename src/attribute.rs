//! Attribute identifier module.
//!
//! Provides the `Attribute` enum, the closed set of item attributes a
//! strip miner roll can carry. Each attribute knows its canonical name,
//! how pasted text scales it, and which direction counts as an improvement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Divisor applied to attributes that pasted text expresses as percentages.
pub const PERCENT_SCALE: f64 = 100.0;

/// A rollable item attribute.
///
/// The order of the variants is the order attributes are reported in.
///
/// # Examples
///
/// ```rust
/// use rollgrade::Attribute;
///
/// assert_eq!(Attribute::MiningAmount.as_str(), "MiningAmount");
/// assert_eq!(Attribute::CriticalSuccessChance.scale(), 100.0);
/// assert_eq!(Attribute::ActivationTime.scale(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Capacitor energy used per cycle (GJ).
    ActivationCost,
    /// Cycle duration in seconds.
    ActivationTime,
    /// Volume mined per cycle (m3).
    MiningAmount,
    /// Probability of a critical success per cycle, as a fraction.
    CriticalSuccessChance,
    /// Extra yield of a critical success, as a fraction of the mining amount.
    CriticalSuccessBonusYield,
    /// Optimal range in kilometres.
    OptimalRange,
    /// Probability of generating residue per cycle, as a fraction.
    ResidueProbability,
    /// Residue volume lost relative to the mining amount.
    ResidueVolumeMultiplier,
}

impl Attribute {
    /// Number of attributes.
    pub const COUNT: usize = 8;

    /// All attributes in report order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::ActivationCost,
        Attribute::ActivationTime,
        Attribute::MiningAmount,
        Attribute::CriticalSuccessChance,
        Attribute::CriticalSuccessBonusYield,
        Attribute::OptimalRange,
        Attribute::ResidueProbability,
        Attribute::ResidueVolumeMultiplier,
    ];

    /// Slot of this attribute in [`Attribute::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical name, also used as the serialized key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Attribute::ActivationCost => "ActivationCost",
            Attribute::ActivationTime => "ActivationTime",
            Attribute::MiningAmount => "MiningAmount",
            Attribute::CriticalSuccessChance => "CriticalSuccessChance",
            Attribute::CriticalSuccessBonusYield => "CriticalSuccessBonusYield",
            Attribute::OptimalRange => "OptimalRange",
            Attribute::ResidueProbability => "ResidueProbability",
            Attribute::ResidueVolumeMultiplier => "ResidueVolumeMultiplier",
        }
    }

    /// Label the item info window uses for this attribute.
    pub const fn label(self) -> &'static str {
        match self {
            Attribute::ActivationCost => "Activation Cost",
            Attribute::ActivationTime => "Activation Time",
            Attribute::MiningAmount => "Mining Amount",
            Attribute::CriticalSuccessChance => "Critical Success Chance",
            Attribute::CriticalSuccessBonusYield => "Critical Success Bonus Yield",
            Attribute::OptimalRange => "Optimal Range",
            Attribute::ResidueProbability => "Residue Probability",
            Attribute::ResidueVolumeMultiplier => "Residue Volume Multiplier",
        }
    }

    /// Divisor between the number shown in pasted text and the stored value.
    ///
    /// Crit chance, crit bonus yield and residue probability are shown as
    /// percentages and stored as fractions. Everything else is stored as shown.
    pub const fn scale(self) -> f64 {
        match self {
            Attribute::CriticalSuccessChance
            | Attribute::CriticalSuccessBonusYield
            | Attribute::ResidueProbability => PERCENT_SCALE,
            _ => 1.0,
        }
    }

    /// Whether a larger rolled value is an improvement.
    pub const fn higher_is_better(self) -> bool {
        !matches!(
            self,
            Attribute::ActivationCost
                | Attribute::ActivationTime
                | Attribute::ResidueProbability
                | Attribute::ResidueVolumeMultiplier
        )
    }

    /// Whether the attribute only matters for item types with residue.
    pub const fn is_residue(self) -> bool {
        matches!(
            self,
            Attribute::ResidueProbability | Attribute::ResidueVolumeMultiplier
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
