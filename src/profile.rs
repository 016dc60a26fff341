//! Item type profiles.
//!
//! A profile bundles everything that differs between the two strip
//! miner variants: default attributes, tier bands, and whether residue
//! mechanics apply. Profiles are `const` and shared by reference.

use crate::attribute::Attribute;
use crate::attribute_set::AttributeSet;
use crate::tier::{TierBand, TierTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two supported tool variants.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    /// ORE Strip Miner. No residue mechanics.
    Ore,
    /// Modulated Strip Miner II. Cycles may generate residue.
    Modulated,
}

impl ItemType {
    /// Every supported item type.
    pub const ALL: [ItemType; 2] = [ItemType::Ore, ItemType::Modulated];

    /// Label used in summaries and reports.
    pub const fn label(self) -> &'static str {
        match self {
            ItemType::Ore => "ORE",
            ItemType::Modulated => "Modulated",
        }
    }

    /// Whether cycles of this item type can generate residue.
    pub const fn has_residue(self) -> bool {
        matches!(self, ItemType::Modulated)
    }

    /// The constant profile of this item type.
    pub const fn profile(self) -> &'static ItemTypeProfile {
        match self {
            ItemType::Ore => &ItemTypeProfile::ORE,
            ItemType::Modulated => &ItemTypeProfile::MODULATED,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative bounds the mutation system can roll for an attribute.
///
/// `min` and `max` are fractions of the base value: `-0.15` is 15% below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationRange {
    pub min: f64,
    pub max: f64,
}

impl MutationRange {
    /// Range from `min` to `max`, both fractions of the base value.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `rolled` is reachable from `base` under this range.
    ///
    /// A small tolerance absorbs the rounding of displayed values.
    pub fn allows(&self, base: f64, rolled: f64) -> bool {
        const TOLERANCE: f64 = 1e-6;
        if base == 0.0 {
            return rolled == 0.0;
        }
        let change = rolled / base - 1.0;
        change >= self.min - TOLERANCE && change <= self.max + TOLERANCE
    }
}

/// Mutation ranges per attribute, shared by both variants.
pub const fn mutation_range(attribute: Attribute) -> MutationRange {
    match attribute {
        Attribute::ActivationCost => MutationRange::new(-0.40, 0.40),
        Attribute::ActivationTime => MutationRange::new(-0.10, 0.10),
        Attribute::MiningAmount => MutationRange::new(-0.15, 0.30),
        Attribute::CriticalSuccessChance => MutationRange::new(-0.35, 0.30),
        Attribute::CriticalSuccessBonusYield => MutationRange::new(-0.20, 0.15),
        Attribute::OptimalRange => MutationRange::new(-0.25, 0.30),
        Attribute::ResidueProbability => MutationRange::new(-0.30, 0.30),
        Attribute::ResidueVolumeMultiplier => MutationRange::new(-0.20, 0.15),
    }
}

/// Immutable description of one item type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemTypeProfile {
    pub item_type: ItemType,
    /// Complete default attribute set of the unmutated item.
    pub defaults: AttributeSet,
    pub tiers: TierTable,
}

impl ItemTypeProfile {
    pub const ORE: ItemTypeProfile = ItemTypeProfile {
        item_type: ItemType::Ore,
        defaults: AttributeSet::new()
            .with(Attribute::ActivationCost, 23.0)
            .with(Attribute::ActivationTime, 45.0)
            .with(Attribute::MiningAmount, 200.0)
            .with(Attribute::CriticalSuccessChance, 0.01)
            .with(Attribute::CriticalSuccessBonusYield, 2.0)
            .with(Attribute::OptimalRange, 18.75)
            .with(Attribute::ResidueProbability, 0.0)
            .with(Attribute::ResidueVolumeMultiplier, 0.0),
        tiers: TierTable {
            s: TierBand::new(6.27, 6.61),
            a: TierBand::new(5.92, 6.27),
            b: TierBand::new(5.57, 5.92),
            c: TierBand::new(5.23, 5.57),
            d: TierBand::new(4.88, 5.23),
            e: TierBand::new(4.44, 4.88),
            f: TierBand::new(0.0, 4.44),
        },
    };

    pub const MODULATED: ItemTypeProfile = ItemTypeProfile {
        item_type: ItemType::Modulated,
        defaults: AttributeSet::new()
            .with(Attribute::ActivationCost, 30.0)
            .with(Attribute::ActivationTime, 45.0)
            .with(Attribute::MiningAmount, 120.0)
            .with(Attribute::CriticalSuccessChance, 0.01)
            .with(Attribute::CriticalSuccessBonusYield, 2.0)
            .with(Attribute::OptimalRange, 15.0)
            .with(Attribute::ResidueProbability, 0.34)
            .with(Attribute::ResidueVolumeMultiplier, 1.0),
        tiers: TierTable {
            s: TierBand::new(3.76188, 3.97),
            a: TierBand::new(3.55376, 3.76188),
            b: TierBand::new(3.34564, 3.55376),
            c: TierBand::new(3.13752, 3.34564),
            d: TierBand::new(2.92940, 3.13752),
            e: TierBand::new(2.67, 2.92940),
            f: TierBand::new(0.0, 2.67),
        },
    };

    pub const fn label(&self) -> &'static str {
        self.item_type.label()
    }

    pub const fn has_residue(&self) -> bool {
        self.item_type.has_residue()
    }

    /// Default value of `attribute`. Profiles define every attribute.
    pub fn default_value(&self, attribute: Attribute) -> f64 {
        self.defaults.get_or_zero(attribute)
    }

    /// Attributes worth reporting for this item type.
    pub fn reported_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL
            .into_iter()
            .filter(move |a| self.has_residue() || !a.is_residue())
    }
}
