//! # rollgrade - Strip Miner Roll Grading
//!
//! Grades mutated ("rolled") strip miners from the item info text the
//! game client copies to the clipboard:
//! - **Best-effort** extraction of rolled attributes from pasted text
//! - **Layered** throughput model: plain, crit-adjusted, residue-adjusted
//! - **Real-world** figures under a fixed reference bonus stack
//! - **Tier** classification against calibrated per-item bands
//!
//! ## Pipeline
//!
//! ```text
//! [text] → extract → [AttributeSet] → RollAnalyzer → [RollResult]
//! ```
//!
//! 1. **Extraction** turns recognised lines into a partial attribute set
//! 2. **Analysis** fills gaps from the item type's defaults, computes six
//!    throughput figures, and assigns a tier
//! 3. **RollResult** carries everything, plus a one-line summary
//!
//! Every step is a pure function of its inputs. Profiles and the bonus
//! stack are constants shared by reference.
//!
//! ## Example
//!
//! ```rust
//! use rollgrade::*;
//!
//! let text = "Activation Time\t41.0 s\nMining Amount\t250.0 m3\nCritical Success Chance\t1.12 %";
//! let stats = extract(text);
//! assert_eq!(stats.len(), 3);
//!
//! let result = analyze(&stats, &ItemTypeProfile::ORE).unwrap();
//! assert_eq!(result.tier, Tier::A);
//! assert_eq!(result.summary(), "A: (+37.2%) [ORE]");
//! ```
//!
//! ## Modules
//!
//! - [`attribute`] - Attribute identifiers and their scaling
//! - [`attribute_set`] - Attribute to value mapping
//! - [`extract`] - Text extraction
//! - [`profile`] - Item type profiles and mutation ranges
//! - [`bonus`] - Reference bonus stack
//! - [`throughput`] - Throughput formulas
//! - [`tier`] - Tier bands and classification
//! - [`analyzer`] - Roll analyzer
//! - [`result`] - Analysis results
//! - [`report`] - Comparison against the unmutated item
//! - [`format`] - Percentage formatting and export templates
//! - [`error`] - Error types

pub mod analyzer;
pub mod attribute;
pub mod attribute_set;
pub mod bonus;
pub mod error;
pub mod extract;
pub mod format;
pub mod profile;
pub mod report;
pub mod result;
pub mod throughput;
pub mod tier;

// Re-export main types for convenience
pub use analyzer::{analyze, analyze_text, RollAnalyzer};
pub use attribute::Attribute;
pub use attribute_set::AttributeSet;
pub use bonus::BonusStack;
pub use error::RollError;
pub use extract::extract;
pub use profile::{ItemType, ItemTypeProfile};
pub use report::RollReport;
pub use result::RollResult;
pub use throughput::{CycleModifiers, Throughput};
pub use tier::{Tier, TierBand, TierTable};
