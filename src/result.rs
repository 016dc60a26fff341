//! Roll analysis results.
//!
//! Contains the `RollResult` type, the read-only record produced by one
//! analysis call.

use crate::analyzer::absolute_throughput;
use crate::attribute_set::AttributeSet;
use crate::format::{format_percentage, percent_change};
use crate::profile::{ItemType, ItemTypeProfile};
use crate::throughput::Throughput;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// The outcome of analyzing one roll.
///
/// `stats` is the merged attribute set the figures were computed from.
/// `throughput` holds the item's own figures, `real_world` the same
/// figures with the bonus stack applied. `range_bonus` marks a roll above
/// tier F whose optimal range beats the unmutated item's.
///
/// # Examples
///
/// ```rust
/// use rollgrade::{analyze_text, ItemType, Tier};
///
/// let result = analyze_text("Mining Amount 200.0\nActivation Time 45.0", ItemType::Ore).unwrap();
/// assert_eq!(result.tier, Tier::E);
/// assert_eq!(result.summary(), "E: (+0.0%) [ORE]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollResult {
    pub item_type: ItemType,
    pub stats: AttributeSet,
    pub throughput: Throughput,
    pub real_world: Throughput,
    pub tier: Tier,
    pub range_bonus: bool,
}

impl RollResult {
    /// Profile of the analyzed item type.
    pub fn profile(&self) -> &'static ItemTypeProfile {
        self.item_type.profile()
    }

    /// Figures of the unmutated item, if its defaults are valid.
    fn baseline(&self) -> Option<Throughput> {
        let profile = self.profile();
        absolute_throughput(&profile.defaults, profile).ok()
    }

    /// Plain throughput change against the unmutated item, in percent.
    pub fn plain_change(&self) -> f64 {
        self.baseline()
            .map_or(0.0, |base| percent_change(self.throughput.plain, base.plain))
    }

    /// Effective throughput change against the unmutated item, in percent.
    pub fn effective_change(&self) -> f64 {
        self.baseline()
            .map_or(0.0, |base| percent_change(self.throughput.effective, base.effective))
    }

    /// Tier with the optimal range qualifier, e.g. `A+`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollgrade::{analyze_text, ItemType};
    ///
    /// let roll = "Mining Amount 250\nActivation Time 41.2\n";
    ///
    /// let longer = analyze_text(&format!("{roll}Optimal Range 20.1"), ItemType::Ore).unwrap();
    /// assert_eq!(longer.tier_label(), "A+");
    ///
    /// let shorter = analyze_text(&format!("{roll}Optimal Range 17.0"), ItemType::Ore).unwrap();
    /// assert_eq!(shorter.tier_label(), "A");
    /// ```
    pub fn tier_label(&self) -> String {
        if self.range_bonus {
            format!("{}+", self.tier)
        } else {
            self.tier.to_string()
        }
    }

    /// One-line summary, e.g. `+S: (+12.4%) [Modulated]`.
    pub fn summary(&self) -> String {
        format!(
            "{}: ({}) [{}]",
            self.tier.summary_label(),
            format_percentage(self.plain_change()),
            self.profile().label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(item_type: ItemType, plain: f64, tier: Tier) -> RollResult {
        let figures = Throughput {
            plain,
            crit_adjusted: plain,
            effective: plain,
        };
        RollResult {
            item_type,
            stats: item_type.profile().defaults,
            throughput: figures,
            real_world: figures,
            tier,
            range_bonus: false,
        }
    }

    #[test]
    fn test_summary_top_tier() {
        let r = result(ItemType::Modulated, 120.0 / 45.0 * 1.5, Tier::S);
        assert_eq!(r.summary(), "+S: (+50.0%) [Modulated]");
    }

    #[test]
    fn test_summary_negative() {
        let r = result(ItemType::Ore, 200.0 / 45.0 * 0.9, Tier::F);
        assert_eq!(r.summary(), "F: (-10.0%) [ORE]");
    }

    #[test]
    fn test_summary_ignores_range_bonus() {
        let mut r = result(ItemType::Ore, 200.0 / 45.0 * 1.2, Tier::B);
        r.range_bonus = true;
        assert_eq!(r.tier_label(), "B+");
        assert_eq!(r.summary(), "B: (+20.0%) [ORE]");
    }

    #[test]
    fn test_json_round_trip() {
        let r = result(ItemType::Ore, 4.5, Tier::E);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"tier\":\"E\""));
        assert!(json.contains("\"range_bonus\":false"));
        let back: RollResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
