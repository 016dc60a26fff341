//! Tests for text extraction.
//!
//! These tests verify:
//! - Every attribute survives being shown as game text and read back
//! - The line shapes the client and hand-typed notes produce
//! - Label matching across case and separator variants

use rollgrade::extract::{extract_line, match_label, LABEL_RULES};
use rollgrade::*;

// ============================================================================
// Round trip through game text
// ============================================================================

fn rolled_set() -> AttributeSet {
    AttributeSet::new()
        .with(Attribute::ActivationCost, 27.4)
        .with(Attribute::ActivationTime, 41.3)
        .with(Attribute::MiningAmount, 143.7)
        .with(Attribute::CriticalSuccessChance, 0.0118)
        .with(Attribute::CriticalSuccessBonusYield, 1.87)
        .with(Attribute::OptimalRange, 16.25)
        .with(Attribute::ResidueProbability, 0.312)
        .with(Attribute::ResidueVolumeMultiplier, 0.94)
}

/// Shown values are stored values times the attribute scale.
fn as_game_text(stats: &AttributeSet, separator: &str) -> String {
    stats
        .iter()
        .map(|(attribute, value)| {
            format!("{}{separator}{}", attribute.label(), value * attribute.scale())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extraction reads back what the client shows, for each separator style.
#[test]
fn test_game_text_round_trip() {
    let stats = rolled_set();
    for separator in ["\t", "  ", " ", "\t\t"] {
        let parsed = extract(&as_game_text(&stats, separator));
        assert_eq!(parsed.len(), Attribute::COUNT, "separator {separator:?}");
        for (attribute, value) in stats.iter() {
            let read = parsed.get(attribute).unwrap();
            assert!((read - value).abs() < 1e-9, "{attribute}: {read} != {value}");
        }
    }
}

/// Units after the number do not disturb the value.
#[test]
fn test_units_after_value() {
    let text = "\
Activation Cost\t27.4 GJ
Optimal Range\t16.25 km
Mining Amount\t143.7 m3
Residue Volume Multiplier\t0.94 x";
    let stats = extract(text);
    assert_eq!(stats.get(Attribute::ActivationCost), Some(27.4));
    assert_eq!(stats.get(Attribute::OptimalRange), Some(16.25));
    assert_eq!(stats.get(Attribute::MiningAmount), Some(143.7));
    assert_eq!(stats.get(Attribute::ResidueVolumeMultiplier), Some(0.94));
}

// ============================================================================
// Label variants
// ============================================================================

/// Each rule accepts upper, lower, and stretched spellings of its words.
#[test]
fn test_label_variants() {
    for rule in LABEL_RULES {
        let variants = [
            rule.words.join(" ").to_uppercase(),
            rule.words.join(" ").to_lowercase(),
            rule.words.join("   "),
            rule.words.join("\t"),
        ];
        for label in &variants {
            assert_eq!(match_label(label), Some(rule.attribute), "{label:?}");
        }
    }
}

/// The first matching rule decides the attribute.
#[test]
fn test_label_priority() {
    assert_eq!(
        match_label("Activation Time / Duration"),
        Some(Attribute::ActivationTime)
    );
    assert_eq!(
        match_label("Critical Success Bonus Yield"),
        Some(Attribute::CriticalSuccessBonusYield)
    );
    assert_eq!(match_label("Residue Probability"), Some(Attribute::ResidueProbability));
}

/// Labels that only resemble known ones are not matched.
#[test]
fn test_near_miss_labels() {
    for label in ["Mining", "Amount", "Critical Chance", "Range", "Residue", "Activation"] {
        assert_eq!(match_label(label), None, "{label:?}");
    }
}

// ============================================================================
// Single lines
// ============================================================================

/// Whole lines resolve to an attribute and a stored value.
#[test]
fn test_extract_line() {
    assert_eq!(
        extract_line("  Mining Amount\t200 m3  "),
        Some((Attribute::MiningAmount, 200.0))
    );
    assert_eq!(
        extract_line("Critical Success Bonus Yield 200%"),
        Some((Attribute::CriticalSuccessBonusYield, 2.0))
    );
    assert_eq!(
        extract_line("Cycle Duration  1m 5s"),
        Some((Attribute::ActivationTime, 65.0))
    );
    assert_eq!(extract_line("Mining Amount"), None);
    assert_eq!(extract_line("Tech Level\t1"), None);
}

/// A paste with blank and unrelated lines keeps only the known attributes.
#[test]
fn test_noisy_paste() {
    let text = "
Mutated Modulated Strip Miner II

Attributes
Structure Hitpoints\t40 HP
Activation Time / Duration\t2m 52s
Mining Amount\t1,050.5 m3
Residue Probability\t29.5 %
Meta Level\t5
";
    let stats = extract(text);
    assert_eq!(stats.get(Attribute::ActivationTime), Some(172.0));
    assert_eq!(stats.get(Attribute::MiningAmount), Some(1050.5));
    assert!((stats.get(Attribute::ResidueProbability).unwrap() - 0.295).abs() < 1e-12);
    assert_eq!(stats.len(), 3);
}
