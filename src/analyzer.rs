//! Roll analyzer module.
//!
//! Provides the `RollAnalyzer` type, the main entry point for grading a
//! roll. It merges extracted attributes over the profile defaults,
//! computes the six throughput figures, and classifies the tier.

use crate::attribute::Attribute;
use crate::attribute_set::AttributeSet;
use crate::bonus::BonusStack;
use crate::error::RollError;
use crate::extract::extract;
use crate::profile::{ItemType, ItemTypeProfile};
use crate::result::RollResult;
use crate::throughput::{self, CycleModifiers, Throughput};
use crate::tier::Tier;

/// Inputs of the throughput formulas, read from a merged attribute set.
struct RolledInputs {
    mining_amount: f64,
    activation_time: f64,
    modifiers: CycleModifiers,
}

impl RolledInputs {
    /// Residue terms are zero for item types without residue mechanics,
    /// whatever the attribute set says.
    fn read(stats: &AttributeSet, profile: &ItemTypeProfile) -> Self {
        let (residue_probability, residue_multiplier) = if profile.has_residue() {
            (
                stats.get_or_zero(Attribute::ResidueProbability),
                stats.get_or_zero(Attribute::ResidueVolumeMultiplier),
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            mining_amount: stats.get_or_zero(Attribute::MiningAmount),
            activation_time: stats.get_or_zero(Attribute::ActivationTime),
            modifiers: CycleModifiers {
                crit_chance: stats.get_or_zero(Attribute::CriticalSuccessChance),
                crit_bonus: stats.get_or_zero(Attribute::CriticalSuccessBonusYield),
                residue_probability,
                residue_multiplier,
            },
        }
    }
}

/// The item's own plain, crit-adjusted and effective figures.
pub(crate) fn absolute_throughput(
    stats: &AttributeSet,
    profile: &ItemTypeProfile,
) -> Result<Throughput, RollError> {
    let inputs = RolledInputs::read(stats, profile);
    let crits = inputs.modifiers.without_residue();
    Ok(Throughput {
        plain: throughput::plain(inputs.mining_amount, inputs.activation_time)?,
        crit_adjusted: throughput::crit_adjusted(
            inputs.mining_amount,
            inputs.activation_time,
            crits.crit_chance,
            crits.crit_bonus,
        )?,
        effective: throughput::effective(
            inputs.mining_amount,
            inputs.activation_time,
            inputs.modifiers,
        )?,
    })
}

/// Grades rolls against a fixed bonus stack.
///
/// The analyzer holds no per-call state; one instance can be shared
/// across threads.
///
/// # Examples
///
/// ```rust
/// use rollgrade::{extract, ItemTypeProfile, RollAnalyzer, Tier};
///
/// let analyzer = RollAnalyzer::default();
/// let stats = extract("Mining Amount 250\nActivation Time 41.2");
/// let result = analyzer.analyze(&stats, &ItemTypeProfile::ORE).unwrap();
///
/// assert_eq!(result.tier, Tier::A);
/// assert!(result.real_world.plain > result.throughput.plain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RollAnalyzer {
    bonus: BonusStack,
}

impl RollAnalyzer {
    /// Create an analyzer computing real-world figures under `bonus`.
    pub fn new(bonus: BonusStack) -> Self {
        Self { bonus }
    }

    /// The bonus stack behind the real-world figures.
    pub fn bonus(&self) -> &BonusStack {
        &self.bonus
    }

    /// Analyze extracted attributes against `profile`.
    ///
    /// Attributes missing from `extracted` take the profile default.
    ///
    /// # Errors
    ///
    /// [`RollError::InvalidActivationTime`] when the merged or the boosted
    /// activation time is not positive.
    pub fn analyze(
        &self,
        extracted: &AttributeSet,
        profile: &ItemTypeProfile,
    ) -> Result<RollResult, RollError> {
        let stats = extracted.merged_over(&profile.defaults);
        let inputs = RolledInputs::read(&stats, profile);
        let figures = absolute_throughput(&stats, profile)?;

        let real_world = Throughput {
            plain: throughput::real_world(
                &self.bonus,
                inputs.mining_amount,
                inputs.activation_time,
                CycleModifiers::default(),
            )?,
            crit_adjusted: throughput::real_world(
                &self.bonus,
                inputs.mining_amount,
                inputs.activation_time,
                inputs.modifiers.without_residue(),
            )?,
            effective: throughput::real_world(
                &self.bonus,
                inputs.mining_amount,
                inputs.activation_time,
                inputs.modifiers,
            )?,
        };

        let tier = profile.tiers.classify(figures.plain);
        let range_bonus = tier != Tier::F
            && stats.get_or_zero(Attribute::OptimalRange)
                > profile.default_value(Attribute::OptimalRange);
        tracing::debug!(
            item_type = %profile.item_type,
            plain = figures.plain,
            effective = figures.effective,
            real_world_effective = real_world.effective,
            %tier,
            range_bonus,
            "analyzed roll"
        );

        Ok(RollResult {
            item_type: profile.item_type,
            stats,
            throughput: figures,
            real_world,
            tier,
            range_bonus,
        })
    }
}

/// Analyze with the reference bonus stack.
pub fn analyze(
    extracted: &AttributeSet,
    profile: &ItemTypeProfile,
) -> Result<RollResult, RollError> {
    RollAnalyzer::default().analyze(extracted, profile)
}

/// Extract attributes from `text` and analyze them as `item_type`.
pub fn analyze_text(text: &str, item_type: ItemType) -> Result<RollResult, RollError> {
    analyze(&extract(text), item_type.profile())
}
