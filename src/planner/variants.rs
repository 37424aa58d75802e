//! @acp:module "Planner Variants"
//! @acp:summary "Per-section presentation variants computed from the business profile"
//! @acp:domain planner
//! @acp:layer data

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::profile::{BusinessProfile, Goal, Tone};
use super::registry::Hooks;
use super::types::SectionDefinition;

/// A single presentation choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    Flag(bool),
    Count(u32),
    Text(String),
}

impl From<bool> for VariantValue {
    fn from(v: bool) -> Self {
        VariantValue::Flag(v)
    }
}

impl From<u32> for VariantValue {
    fn from(v: u32) -> Self {
        VariantValue::Count(v)
    }
}

impl From<&str> for VariantValue {
    fn from(v: &str) -> Self {
        VariantValue::Text(v.to_string())
    }
}

impl std::fmt::Display for VariantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantValue::Flag(v) => write!(f, "{}", v),
            VariantValue::Count(v) => write!(f, "{}", v),
            VariantValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Flat key/value bag of presentation choices, keyed in sorted order
pub type Variants = BTreeMap<String, VariantValue>;

/// Variant rule: pure function of the section's static definition and the
/// profile. Must not look at other sections or the selection.
pub type VariantRule = fn(&SectionDefinition, &BusinessProfile) -> Variants;

/// Compute the variants of one section. Sections without a rule get an empty
/// bag.
pub fn variants_for(section: &SectionDefinition, profile: &BusinessProfile, hooks: &Hooks) -> Variants {
    let Some(ref rule_name) = section.variants else {
        return Variants::new();
    };

    match hooks.variant_rule(rule_name) {
        Some(rule) => rule(section, profile),
        None => {
            tracing::warn!(
                "Section '{}' names unknown variant rule '{}'",
                section.id,
                rule_name
            );
            Variants::new()
        }
    }
}

/// Rules shipped with the built-in catalog
pub fn builtin_variant_rules() -> Vec<(&'static str, VariantRule)> {
    vec![
        ("hero", hero),
        ("content-density", content_density),
        ("social-proof", social_proof),
        ("call-to-action", call_to_action),
        ("gallery", gallery),
        ("pricing", pricing),
        ("faq", faq),
    ]
}

/// Column layout for a list of `count` items
pub fn column_choice(count: usize) -> &'static str {
    match count {
        0..=2 => "1-column",
        3..=4 => "2-column",
        5..=9 => "3-column",
        _ => "4-column",
    }
}

fn bag<const N: usize>(entries: [(&str, VariantValue); N]) -> Variants {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn hero(_section: &SectionDefinition, profile: &BusinessProfile) -> Variants {
    let layout = match profile.tone {
        Tone::Low => "centered",
        Tone::Medium => "split",
        Tone::High => "immersive",
    };
    bag([
        ("layout", layout.into()),
        ("showSubheadline", (profile.tone != Tone::Low).into()),
    ])
}

fn content_density(_section: &SectionDefinition, profile: &BusinessProfile) -> Variants {
    let count = profile.key_facts.len();
    bag([
        ("columns", column_choice(count).into()),
        ("itemCount", u32::try_from(count).unwrap_or(u32::MAX).into()),
        ("showSecondary", (profile.tone == Tone::High).into()),
    ])
}

fn social_proof(_section: &SectionDefinition, profile: &BusinessProfile) -> Variants {
    let layout = if profile.tone == Tone::High {
        "carousel"
    } else {
        "grid"
    };
    bag([
        ("showBadges", profile.goal.wants_proof().into()),
        ("layout", layout.into()),
    ])
}

fn call_to_action(_section: &SectionDefinition, profile: &BusinessProfile) -> Variants {
    let style = if profile.goal == Goal::Conversion {
        "urgent"
    } else {
        "standard"
    };
    bag([
        ("style", style.into()),
        ("showSecondaryAction", (profile.tone != Tone::Low).into()),
    ])
}

fn gallery(_section: &SectionDefinition, profile: &BusinessProfile) -> Variants {
    let columns: u32 = if profile.tone == Tone::High { 4 } else { 3 };
    bag([
        ("columns", columns.into()),
        ("showCaptions", (profile.tone != Tone::Low).into()),
    ])
}

fn pricing(_section: &SectionDefinition, profile: &BusinessProfile) -> Variants {
    bag([
        ("highlightPlan", (profile.goal == Goal::Conversion).into()),
        ("showComparison", (profile.tone == Tone::High).into()),
    ])
}

fn faq(_section: &SectionDefinition, profile: &BusinessProfile) -> Variants {
    let layout = if profile.tone == Tone::High {
        "two-column"
    } else {
        "accordion"
    };
    bag([
        ("expandFirst", (profile.goal == Goal::Information).into()),
        ("layout", layout.into()),
    ])
}
