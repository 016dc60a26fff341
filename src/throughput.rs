//! Throughput calculations.
//!
//! Every function here is pure and validates the activation time it
//! divides by. Figures are in m3 per second.

use crate::bonus::BonusStack;
use crate::error::RollError;
use serde::{Deserialize, Serialize};

/// Crit and residue terms of a cycle.
///
/// All fields are fractions: `crit_chance` 0.01 is a 1% chance,
/// `crit_bonus` 2.0 is +200% yield on a crit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CycleModifiers {
    pub crit_chance: f64,
    pub crit_bonus: f64,
    pub residue_probability: f64,
    pub residue_multiplier: f64,
}

impl CycleModifiers {
    /// Only crit terms; residue zeroed.
    pub const fn crits(crit_chance: f64, crit_bonus: f64) -> Self {
        Self {
            crit_chance,
            crit_bonus,
            residue_probability: 0.0,
            residue_multiplier: 0.0,
        }
    }

    /// Same crit terms with residue removed.
    pub const fn without_residue(self) -> Self {
        Self::crits(self.crit_chance, self.crit_bonus)
    }

    /// Expected volume of one cycle mining `amount`.
    pub fn expected_cycle_volume(&self, amount: f64) -> f64 {
        let crit_gain = amount * self.crit_bonus * self.crit_chance;
        let residue_loss = amount * self.residue_probability * self.residue_multiplier;
        amount + crit_gain - residue_loss
    }
}

/// Reject zero, negative, and NaN activation times.
pub fn validate_activation_time(activation_time: f64) -> Result<f64, RollError> {
    if activation_time > 0.0 {
        Ok(activation_time)
    } else {
        Err(RollError::InvalidActivationTime { activation_time })
    }
}

/// Mining amount divided by activation time.
///
/// # Examples
///
/// ```rust
/// use rollgrade::throughput::plain;
///
/// assert_eq!(plain(200.0, 40.0).unwrap(), 5.0);
/// assert!(plain(200.0, 0.0).is_err());
/// ```
pub fn plain(mining_amount: f64, activation_time: f64) -> Result<f64, RollError> {
    let time = validate_activation_time(activation_time)?;
    Ok(mining_amount / time)
}

/// Throughput including expected crit gain, ignoring residue.
pub fn crit_adjusted(
    mining_amount: f64,
    activation_time: f64,
    crit_chance: f64,
    crit_bonus: f64,
) -> Result<f64, RollError> {
    effective(
        mining_amount,
        activation_time,
        CycleModifiers::crits(crit_chance, crit_bonus),
    )
}

/// Throughput including expected crit gain and residue loss.
///
/// With both residue terms zero this equals [`crit_adjusted`] exactly.
pub fn effective(
    mining_amount: f64,
    activation_time: f64,
    modifiers: CycleModifiers,
) -> Result<f64, RollError> {
    let time = validate_activation_time(activation_time)?;
    Ok(modifiers.expected_cycle_volume(mining_amount) / time)
}

/// Real-world throughput with the bonus stack applied.
///
/// Boosts the amount and the time, validates both activation times, then
/// applies `modifiers` to the boosted amount. Pass
/// [`CycleModifiers::default`] for the plain real-world figure.
///
/// # Examples
///
/// ```rust
/// use rollgrade::bonus::BonusStack;
/// use rollgrade::throughput::{real_world, CycleModifiers};
///
/// let stack = BonusStack::REFERENCE;
/// let base = real_world(&stack, 200.0, 45.0, CycleModifiers::default()).unwrap();
/// let crits = real_world(&stack, 200.0, 45.0, CycleModifiers::crits(0.01, 2.0)).unwrap();
/// assert!(crits > base);
/// ```
pub fn real_world(
    bonus: &BonusStack,
    mining_amount: f64,
    activation_time: f64,
    modifiers: CycleModifiers,
) -> Result<f64, RollError> {
    validate_activation_time(activation_time)?;
    let boosted_time = validate_activation_time(bonus.boost_time(activation_time))?;
    let boosted_amount = bonus.boost_amount(mining_amount);
    Ok(modifiers.expected_cycle_volume(boosted_amount) / boosted_time)
}

/// The three figures computed for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Throughput {
    /// Amount over time.
    pub plain: f64,
    /// Including expected crit gain.
    pub crit_adjusted: f64,
    /// Including expected crit gain and residue loss.
    pub effective: f64,
}
