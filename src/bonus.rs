//! Bonus stack module.
//!
//! The real-world throughput figures assume one fixed reference fit:
//! maxed mining skills on an exhumer hull, mining upgrades, and an
//! industrial core boost. `BonusStack` holds those constants and knows
//! how to apply them to a rolled mining amount and activation time.

use serde::{Deserialize, Serialize};

/// Bonus per trained skill level.
pub const SKILL_BONUS_PER_LEVEL: f64 = 0.05;

/// Trained levels of the skills that scale mining amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevels {
    pub mining: u8,
    pub astrogeology: u8,
    pub exhumer: u8,
}

impl SkillLevels {
    /// Combined multiplier, each skill contributing `1 + level * 0.05`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollgrade::bonus::SkillLevels;
    ///
    /// let levels = SkillLevels { mining: 5, astrogeology: 5, exhumer: 5 };
    /// assert!((levels.multiplier() - 1.953125).abs() < 1e-12);
    /// ```
    pub fn multiplier(&self) -> f64 {
        [self.mining, self.astrogeology, self.exhumer]
            .into_iter()
            .map(|level| 1.0 + f64::from(level) * SKILL_BONUS_PER_LEVEL)
            .product()
    }
}

/// The fixed bonus stack behind every real-world figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusStack {
    pub skills: SkillLevels,
    /// Exhumer role bonus to mining amount.
    pub ship_role_bonus: f64,
    /// Mining laser upgrade modules.
    pub module_bonus: f64,
    /// Mining foreman burst yield.
    pub foreman_burst_yield: f64,
    /// Industrial core yield bonus.
    pub industrial_core_yield: f64,
    /// Industrial core cycle-time multiplier (below 1 shortens cycles).
    pub industrial_core_cycle_time: f64,
    /// Final correction so the figures line up with fitting tools.
    pub calibration: f64,
}

impl BonusStack {
    /// The reference configuration.
    pub const REFERENCE: BonusStack = BonusStack {
        skills: SkillLevels {
            mining: 5,
            astrogeology: 5,
            exhumer: 5,
        },
        ship_role_bonus: 1.75,
        module_bonus: 1.15,
        foreman_burst_yield: 1.15,
        industrial_core_yield: 1.50,
        industrial_core_cycle_time: 0.75,
        calibration: 1.35,
    };

    /// Mining amount after skills, hull, modules, boosts, then calibration.
    pub fn boost_amount(&self, mining_amount: f64) -> f64 {
        let bonused =
            mining_amount * self.skills.multiplier() * self.ship_role_bonus * self.module_bonus;
        let boosted = bonused * self.foreman_burst_yield * self.industrial_core_yield;
        boosted * self.calibration
    }

    /// Activation time after the industrial core cycle-time bonus.
    pub fn boost_time(&self, activation_time: f64) -> f64 {
        activation_time * self.industrial_core_cycle_time
    }
}

impl Default for BonusStack {
    fn default() -> Self {
        Self::REFERENCE
    }
}
