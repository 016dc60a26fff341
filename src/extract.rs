//! Stat extraction module.
//!
//! Turns free-form pasted item info text into a partial [`AttributeSet`].
//! Extraction is best-effort: lines that do not look like
//! `<label> <number>` or whose label is unknown are skipped.

use crate::attribute::Attribute;
use crate::attribute_set::AttributeSet;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// How a [`LabelRule`] pattern is anchored against the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    /// The label must start with the pattern.
    Prefix,
    /// The pattern may appear anywhere in the label.
    Contains,
}

/// One entry of the label table.
///
/// `words` are matched case-insensitively, separated by any run of
/// whitespace. A rule with `unless` does not match labels containing
/// that word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRule {
    pub words: &'static [&'static str],
    pub anchor: LabelMatch,
    pub unless: Option<&'static str>,
    pub attribute: Attribute,
}

impl LabelRule {
    const fn new(words: &'static [&'static str], anchor: LabelMatch, attribute: Attribute) -> Self {
        Self {
            words,
            anchor,
            unless: None,
            attribute,
        }
    }

    const fn unless(mut self, word: &'static str) -> Self {
        self.unless = Some(word);
        self
    }

    fn to_regex(self) -> Regex {
        let body = self
            .words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join(r"\s+");
        let source = match self.anchor {
            LabelMatch::Prefix => format!("^{body}"),
            LabelMatch::Contains => body,
        };
        RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .expect("label rules are built from escaped literals")
    }
}

/// Ordered label table. The first matching rule wins.
pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule::new(&["activation", "cost"], LabelMatch::Prefix, Attribute::ActivationCost),
    LabelRule::new(&["activation", "time"], LabelMatch::Contains, Attribute::ActivationTime),
    LabelRule::new(&["duration"], LabelMatch::Contains, Attribute::ActivationTime)
        .unless("residue"),
    LabelRule::new(&["mining", "amount"], LabelMatch::Prefix, Attribute::MiningAmount),
    LabelRule::new(
        &["critical", "success", "chance"],
        LabelMatch::Contains,
        Attribute::CriticalSuccessChance,
    ),
    LabelRule::new(
        &["critical", "success", "bonus", "yield"],
        LabelMatch::Contains,
        Attribute::CriticalSuccessBonusYield,
    ),
    LabelRule::new(&["optimal", "range"], LabelMatch::Prefix, Attribute::OptimalRange),
    LabelRule::new(
        &["residue", "probability"],
        LabelMatch::Contains,
        Attribute::ResidueProbability,
    ),
    LabelRule::new(
        &["residue", "volume", "multiplier"],
        LabelMatch::Contains,
        Attribute::ResidueVolumeMultiplier,
    ),
];

lazy_static! {
    static ref COMPILED_RULES: Vec<(Regex, LabelRule)> =
        LABEL_RULES.iter().map(|rule| (rule.to_regex(), *rule)).collect();

    /// Label/value splits, most specific separator first.
    static ref LINE_SHAPES: [Regex; 3] = [
        Regex::new(r"^(.+?)\t+(\d.*)$").unwrap(),
        Regex::new(r"^(.+?)\s{2,}(\d.*)$").unwrap(),
        Regex::new(r"^(.+?)\s+(\d.*)$").unwrap(),
    ];

    static ref TIME_VALUE: Regex = RegexBuilder::new(r"^(\d+)\s*m\s*(\d+(?:\.\d+)?)\s*s$")
        .case_insensitive(true)
        .build()
        .unwrap();

    /// A leading number followed by a minutes unit.
    static ref MINUTES_UNIT: Regex = RegexBuilder::new(r"^\d+(?:\.\d+)?\s*m(?:\s|\d|$)")
        .case_insensitive(true)
        .build()
        .unwrap();

    static ref NUMBER: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// Find the attribute a label refers to.
///
/// # Examples
///
/// ```rust
/// use rollgrade::Attribute;
/// use rollgrade::extract::match_label;
///
/// assert_eq!(match_label("Mining Amount"), Some(Attribute::MiningAmount));
/// assert_eq!(match_label("Cycle Duration"), Some(Attribute::ActivationTime));
/// assert_eq!(match_label("Residue Duration"), None);
/// ```
pub fn match_label(label: &str) -> Option<Attribute> {
    COMPILED_RULES
        .iter()
        .find(|(regex, rule)| {
            regex.is_match(label)
                && !rule
                    .unless
                    .is_some_and(|word| label.to_lowercase().contains(word))
        })
        .map(|(_, rule)| rule.attribute)
}

/// Split a trimmed line into `(label, value)`; the value starts with a digit.
fn split_line(line: &str) -> Option<(&str, &str)> {
    LINE_SHAPES.iter().find_map(|shape| {
        let caps = shape.captures(line)?;
        Some((caps.get(1)?.as_str().trim(), caps.get(2)?.as_str().trim()))
    })
}

/// Parse a `3m 20s` or `3m 20.5s` duration into seconds.
fn parse_minutes_seconds(value: &str) -> Option<f64> {
    let caps = TIME_VALUE.captures(value)?;
    let minutes: f64 = caps[1].parse().ok()?;
    let seconds: f64 = caps[2].parse().ok()?;
    Some(minutes * SECONDS_PER_MINUTE + seconds)
}

/// Parse the first number of a value, ignoring thousands separators.
fn parse_number(value: &str) -> Option<f64> {
    let normalized: String = value.chars().filter(|c| *c != ',' && *c != ' ').collect();
    let number = NUMBER.find(&normalized)?;
    number
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Extract the value of a single line, if it names a known attribute.
///
/// Returns the attribute and its stored (fraction-scaled) value.
pub fn extract_line(line: &str) -> Option<(Attribute, f64)> {
    let (label, value) = split_line(line.trim())?;
    let attribute = match_label(label)?;

    if attribute == Attribute::ActivationTime && MINUTES_UNIT.is_match(value) {
        let seconds = parse_minutes_seconds(value);
        if seconds.is_none() {
            tracing::debug!(%attribute, value, "skipping line with malformed duration");
        }
        return seconds.map(|seconds| (attribute, seconds));
    }

    match parse_number(value) {
        Some(number) => Some((attribute, number / attribute.scale())),
        None => {
            tracing::debug!(%attribute, value, "skipping line with unparseable value");
            None
        }
    }
}

/// Extract all recognised attributes from pasted text.
///
/// Later lines for the same attribute overwrite earlier ones.
///
/// # Examples
///
/// ```rust
/// use rollgrade::{extract, Attribute};
///
/// let stats = extract("Mining Amount 215.4 m3\nCritical Success Chance 1.12 %\nFoo 3");
/// assert_eq!(stats.get(Attribute::MiningAmount), Some(215.4));
/// assert!((stats.get(Attribute::CriticalSuccessChance).unwrap() - 0.0112).abs() < 1e-12);
/// assert_eq!(stats.len(), 2);
/// ```
pub fn extract(text: &str) -> AttributeSet {
    let mut stats = AttributeSet::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((attribute, value)) = extract_line(line) {
            tracing::trace!(%attribute, value, line, "extracted attribute");
            stats.insert(attribute, value);
        }
    }
    tracing::debug!(recognised = stats.len(), "extraction finished");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
        assert!(extract("   \n\n\t\n").is_empty());
    }

    #[test]
    fn test_unknown_label_ignored() {
        assert!(extract("Foo Bar 12.3").is_empty());
    }

    #[test]
    fn test_percentage_scaling() {
        let stats = extract("Critical Success Chance 1.00");
        assert_eq!(stats.get(Attribute::CriticalSuccessChance), Some(0.01));

        let stats = extract("Critical Success Bonus Yield 200 %");
        assert_eq!(stats.get(Attribute::CriticalSuccessBonusYield), Some(2.0));

        let stats = extract("Residue Probability 34 %");
        assert_eq!(stats.get(Attribute::ResidueProbability), Some(0.34));
    }

    #[test]
    fn test_residue_multiplier_not_scaled() {
        let stats = extract("Residue Volume Multiplier 1.15 x");
        assert_eq!(stats.get(Attribute::ResidueVolumeMultiplier), Some(1.15));
    }

    #[test]
    fn test_case_insensitive_and_spacing() {
        let stats = extract("MINING   AMOUNT\t\t212.5");
        assert_eq!(stats.get(Attribute::MiningAmount), Some(212.5));
    }

    #[test]
    fn test_prefix_rules_are_anchored() {
        assert_eq!(match_label("Base Mining Amount"), None);
        assert_eq!(match_label("Max Optimal Range"), None);
        assert_eq!(match_label("Activation Costs"), Some(Attribute::ActivationCost));
    }

    #[test]
    fn test_contains_rules() {
        assert_eq!(
            match_label("Modified Activation Time"),
            Some(Attribute::ActivationTime)
        );
        assert_eq!(
            match_label("Item Residue Probability"),
            Some(Attribute::ResidueProbability)
        );
    }

    #[test]
    fn test_duration_excludes_residue() {
        assert_eq!(match_label("Duration"), Some(Attribute::ActivationTime));
        assert_eq!(match_label("Residue Duration"), None);
    }

    #[test]
    fn test_minutes_seconds() {
        let stats = extract("Activation Time 3m 20s");
        assert_eq!(stats.get(Attribute::ActivationTime), Some(200.0));

        let stats = extract("Activation Time\t3m20s");
        assert_eq!(stats.get(Attribute::ActivationTime), Some(200.0));
    }

    #[test]
    fn test_minutes_fractional_seconds() {
        let stats = extract("Activation Time 3m 20.5s");
        assert_eq!(stats.get(Attribute::ActivationTime), Some(200.5));

        let stats = extract("Activation Time\t0m 44.25 s");
        assert_eq!(stats.get(Attribute::ActivationTime), Some(44.25));
    }

    #[test]
    fn test_malformed_duration_skipped() {
        assert!(extract("Activation Time 1m").is_empty());
        assert!(extract("Activation Time 3m 20").is_empty());
        assert!(extract("Activation Time 3m 20s 5").is_empty());

        let stats = extract("Activation Time 44.8 s");
        assert_eq!(stats.get(Attribute::ActivationTime), Some(44.8));
    }

    #[test]
    fn test_thousands_separator() {
        let stats = extract("Mining Amount 1,250.5 m3");
        assert_eq!(stats.get(Attribute::MiningAmount), Some(1250.5));
    }

    #[test]
    fn test_value_must_start_with_digit() {
        assert!(extract("Mining Amount").is_empty());
        assert!(extract("Mining Amount: n/a").is_empty());
    }

    #[test]
    fn test_last_line_wins() {
        let stats = extract("Mining Amount 200\nMining Amount 230");
        assert_eq!(stats.get(Attribute::MiningAmount), Some(230.0));
    }

    #[test]
    fn test_overflowing_number_skipped() {
        let huge = "9".repeat(400);
        let stats = extract(&format!("Mining Amount {huge}\nActivation Time 44"));
        assert_eq!(stats.get(Attribute::MiningAmount), None);
        assert_eq!(stats.get(Attribute::ActivationTime), Some(44.0));
    }

    #[test]
    fn test_every_rule_compiles_and_matches_its_words() {
        for rule in LABEL_RULES {
            let label = rule.words.join(" ");
            assert_eq!(match_label(&label), Some(rule.attribute), "{label}");
        }
    }
}
