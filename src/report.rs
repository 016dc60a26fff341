//! Roll comparison report.
//!
//! Compares a roll against the unmutated item: per-attribute changes,
//! whether each change is an improvement and within the mutation range,
//! and the throughput figures side by side.

use crate::analyzer::RollAnalyzer;
use crate::attribute::Attribute;
use crate::attribute_set::AttributeSet;
use crate::error::RollError;
use crate::format::{format_percentage, percent_change, DEAD_BAND};
use crate::profile::mutation_range;
use crate::result::RollResult;
use crate::throughput::Throughput;
use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 76;

/// Change of one attribute against the unmutated item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeDelta {
    pub attribute: Attribute,
    pub base: f64,
    pub rolled: f64,
    pub percent_change: f64,
    /// `Some(true)` for an improvement, `Some(false)` for a regression,
    /// `None` inside the dead band.
    pub favourable: Option<bool>,
    pub within_mutation_range: bool,
}

impl AttributeDelta {
    pub fn new(attribute: Attribute, base: f64, rolled: f64) -> Self {
        let change = percent_change(rolled, base);
        let favourable = if change > DEAD_BAND {
            Some(attribute.higher_is_better())
        } else if change < -DEAD_BAND {
            Some(!attribute.higher_is_better())
        } else {
            None
        };
        Self {
            attribute,
            base,
            rolled,
            percent_change: change,
            favourable,
            within_mutation_range: mutation_range(attribute).allows(base, rolled),
        }
    }
}

/// One throughput figure of the roll next to the unmutated item's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDelta {
    pub name: &'static str,
    pub base: f64,
    pub rolled: f64,
    pub base_real_world: f64,
    pub rolled_real_world: f64,
    pub percent_change: f64,
}

impl MetricDelta {
    fn new(name: &'static str, base: (f64, f64), rolled: (f64, f64)) -> Self {
        Self {
            name,
            base: base.0,
            rolled: rolled.0,
            base_real_world: base.1,
            rolled_real_world: rolled.1,
            percent_change: percent_change(rolled.0, base.0),
        }
    }
}

/// Full comparison of a roll against the unmutated item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollReport {
    pub result: RollResult,
    pub baseline: RollResult,
    pub attributes: Vec<AttributeDelta>,
    pub metrics: Vec<MetricDelta>,
    pub tier_band: String,
}

impl RollReport {
    /// Build the report for `result`, analyzing the profile defaults with
    /// the same analyzer for the baseline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollgrade::{analyze_text, ItemType, RollAnalyzer, RollReport};
    ///
    /// let text = "Mining Amount 230\nActivation Time 44.1";
    /// let result = analyze_text(text, ItemType::Ore).unwrap();
    /// let report = RollReport::new(&result, &RollAnalyzer::default()).unwrap();
    ///
    /// assert_eq!(report.metrics.len(), 2);
    /// assert!(report.render().contains("Tier: D"));
    /// ```
    pub fn new(result: &RollResult, analyzer: &RollAnalyzer) -> Result<Self, RollError> {
        let profile = result.profile();
        let baseline = analyzer.analyze(&AttributeSet::new(), profile)?;

        let attributes = profile
            .reported_attributes()
            .map(|attribute| {
                AttributeDelta::new(
                    attribute,
                    profile.default_value(attribute),
                    result.stats.get_or_zero(attribute),
                )
            })
            .collect();

        let mut metrics = vec![MetricDelta::new(
            "Base M3/sec",
            pair(&baseline, |t| t.plain),
            pair(result, |t| t.plain),
        )];
        if profile.has_residue() {
            metrics.push(MetricDelta::new(
                "Base + Crits M3/s",
                pair(&baseline, |t| t.crit_adjusted),
                pair(result, |t| t.crit_adjusted),
            ));
        }
        metrics.push(MetricDelta::new(
            "Effective M3/sec",
            pair(&baseline, |t| t.effective),
            pair(result, |t| t.effective),
        ));

        Ok(Self {
            result: *result,
            baseline,
            attributes,
            metrics,
            tier_band: profile.tiers.describe(result.tier),
        })
    }

    /// Attributes whose rolled value the mutation system cannot produce.
    pub fn out_of_range(&self) -> impl Iterator<Item = &AttributeDelta> {
        self.attributes.iter().filter(|d| !d.within_mutation_range)
    }

    /// Plain-text table of the report.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let label = self.result.profile().label();

        writeln!(f, "{heavy}")?;
        writeln!(f, "EVE Online {label} Strip Miner Roll Analyzer")?;
        writeln!(f, "{heavy}\n")?;

        writeln!(f, "Roll Analysis:")?;
        write_header(f, &light)?;
        for delta in &self.attributes {
            let marker = if delta.within_mutation_range {
                ""
            } else {
                " (out of range)"
            };
            writeln!(
                f,
                "{:<20} {:<20} {:<20} {}{}",
                short_name(delta.attribute),
                display_value(delta.attribute, delta.base),
                display_value(delta.attribute, delta.rolled),
                format_percentage(delta.percent_change),
                marker
            )?;
        }

        writeln!(f, "\nPerformance Metrics:")?;
        write_header(f, &light)?;
        for metric in &self.metrics {
            let base = format!("{:.2} ({:.1})", metric.base, metric.base_real_world);
            let rolled = format!("{:.2} ({:.1})", metric.rolled, metric.rolled_real_world);
            writeln!(
                f,
                "{:<20} {:<20} {:<20} {}",
                metric.name,
                base,
                rolled,
                format_percentage(metric.percent_change)
            )?;
        }

        writeln!(f, "\nTier: {}", self.result.tier_label())?;
        writeln!(f, "({})", self.tier_band)?;
        writeln!(f, "\n{heavy}")
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, rule: &str) -> fmt::Result {
    writeln!(
        f,
        "{:<20} {:<20} {:<20} {:<20}",
        "Metric", "Base", "Rolled", "% Change"
    )?;
    writeln!(f, "{rule}")
}

/// `(own, real-world)` value of one figure.
fn pair(result: &RollResult, pick: fn(&Throughput) -> f64) -> (f64, f64) {
    (pick(&result.throughput), pick(&result.real_world))
}

fn short_name(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::ActivationCost => "Activation Cost",
        Attribute::ActivationTime => "Activation Time",
        Attribute::MiningAmount => "Mining Amount",
        Attribute::CriticalSuccessChance => "Crit Chance",
        Attribute::CriticalSuccessBonusYield => "Crit Bonus",
        Attribute::OptimalRange => "Optimal Range",
        Attribute::ResidueProbability => "Residue Prob",
        Attribute::ResidueVolumeMultiplier => "Residue Mult",
    }
}

fn display_value(attribute: Attribute, value: f64) -> String {
    match attribute {
        Attribute::ActivationCost => format!("{value:.1} GJ"),
        Attribute::ActivationTime => format!("{value:.1} s"),
        Attribute::MiningAmount => format!("{value:.1} m3"),
        Attribute::CriticalSuccessChance | Attribute::ResidueProbability => {
            format!("{:.2}%", value * 100.0)
        }
        Attribute::CriticalSuccessBonusYield => format!("{:.0}%", value * 100.0),
        Attribute::OptimalRange => format!("{value:.2} km"),
        Attribute::ResidueVolumeMultiplier => format!("{value:.3} x"),
    }
}
