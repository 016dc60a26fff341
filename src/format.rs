//! Percentage formatting and export templates.

use crate::attribute::Attribute;
use crate::error::RollError;
use crate::result::RollResult;
use lazy_static::lazy_static;
use regex::Regex;

/// Changes within this many percentage points are shown as no change.
pub const DEAD_BAND: f64 = 0.1;

/// Rendered templates are cut to this many characters.
pub const TEMPLATE_MAX_CHARS: usize = 100;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap();
}

/// Relative change of `rolled` against `base`, in percent.
///
/// Returns 0 when `base` is not a positive finite number.
///
/// # Examples
///
/// ```rust
/// use rollgrade::format::percent_change;
///
/// assert!((percent_change(230.0, 200.0) - 15.0).abs() < 1e-9);
/// assert_eq!(percent_change(5.0, 0.0), 0.0);
/// ```
pub fn percent_change(rolled: f64, base: f64) -> f64 {
    if base > 0.0 && base.is_finite() {
        (rolled / base - 1.0) * 100.0
    } else {
        0.0
    }
}

/// Signed percentage with one decimal, `+0.0%` inside the dead band.
///
/// # Examples
///
/// ```rust
/// use rollgrade::format::format_percentage;
///
/// assert_eq!(format_percentage(12.345), "+12.3%");
/// assert_eq!(format_percentage(-4.06), "-4.1%");
/// assert_eq!(format_percentage(0.1), "+0.0%");
/// assert_eq!(format_percentage(-0.05), "+0.0%");
/// ```
pub fn format_percentage(value: f64) -> String {
    if value > DEAD_BAND {
        format!("+{value:.1}%")
    } else if value < -DEAD_BAND {
        format!("{value:.1}%")
    } else {
        "+0.0%".to_string()
    }
}

/// Template-style percentage: always signed, two integer digits below 10.
fn format_padded_percentage(value: f64) -> String {
    let sign = if value >= 0.0 { '+' } else { '-' };
    let magnitude = value.abs();
    if magnitude < 10.0 {
        format!("{sign}{magnitude:04.1}")
    } else {
        format!("{sign}{magnitude:.1}")
    }
}

fn placeholder_value(name: &str, result: &RollResult) -> Option<String> {
    let stats = &result.stats;
    let profile = result.profile();
    let value = match name {
        "tier" => result.tier_label(),
        "minerType" => profile.label().to_string(),
        "m3Pct" => format_padded_percentage(result.plain_change()),
        "effectiveM3Pct" => format_padded_percentage(result.effective_change()),
        "m3PerSec" => format!("{:.2}", result.throughput.plain),
        "effectiveM3PerSec" => format!("{:.2}", result.throughput.effective),
        "optimalRange" => format!("{:.2}", stats.get_or_zero(Attribute::OptimalRange)),
        "optimalRangePct" => {
            let base = profile.default_value(Attribute::OptimalRange);
            if base > 0.0 {
                let rolled = stats.get_or_zero(Attribute::OptimalRange);
                format!("{}%", format_padded_percentage(percent_change(rolled, base)))
            } else {
                String::new()
            }
        }
        "ActivationCost" => format!("{:.1}", stats.get_or_zero(Attribute::ActivationCost)),
        "ActivationTime" => format!("{:.1}", stats.get_or_zero(Attribute::ActivationTime)),
        "MiningAmount" => format!("{:.0}", stats.get_or_zero(Attribute::MiningAmount)),
        "CriticalSuccessChance" => {
            format!("{:.3}", stats.get_or_zero(Attribute::CriticalSuccessChance))
        }
        "CriticalSuccessBonusYield" => {
            format!("{:.1}", stats.get_or_zero(Attribute::CriticalSuccessBonusYield))
        }
        "OptimalRange" => format!("{:.2}", stats.get_or_zero(Attribute::OptimalRange)),
        "ResidueProbability" => {
            format!("{:.3}", stats.get_or_zero(Attribute::ResidueProbability))
        }
        "ResidueVolumeMultiplier" => {
            format!("{:.2}", stats.get_or_zero(Attribute::ResidueVolumeMultiplier))
        }
        _ => return None,
    };
    Some(value)
}

/// Fill an export template such as `{tier} {m3Pct}% {minerType}`.
///
/// `{tier}` carries the optimal range qualifier (`S+`). Every `{name}`
/// must be a known placeholder. The output is truncated
/// to [`TEMPLATE_MAX_CHARS`] characters.
///
/// # Examples
///
/// ```rust
/// use rollgrade::{analyze_text, ItemType};
/// use rollgrade::format::render_template;
///
/// let result = analyze_text("Mining Amount 230\nActivation Time 45", ItemType::Ore).unwrap();
/// let line = render_template("{tier} {m3Pct}% [{minerType}]", &result).unwrap();
/// assert_eq!(line, "D +15.0% [ORE]");
/// ```
pub fn render_template(template: &str, result: &RollResult) -> Result<String, RollError> {
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = placeholder_value(name.as_str(), result)
            .ok_or_else(|| RollError::InvalidTemplate(name.as_str().to_string()))?;
        rendered.push_str(&template[last..whole.start()]);
        rendered.push_str(&value);
        last = whole.end();
    }
    rendered.push_str(&template[last..]);

    Ok(rendered.chars().take(TEMPLATE_MAX_CHARS).collect())
}
