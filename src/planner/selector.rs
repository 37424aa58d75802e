//! @acp:module "Planner Selector"
//! @acp:summary "Resolve, filter, order and truncate the sections of a page"
//! @acp:domain planner
//! @acp:layer logic

use std::collections::HashSet;

use super::condition::is_eligible;
use super::policy::rank;
use super::profile::BusinessProfile;
use super::registry::{CategoryCatalog, Hooks};
use super::types::*;
use crate::error::{PlanError, Result};

/// Sections chosen for one page, in display order
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub sections: Vec<&'a SectionDefinition>,
    /// Section count the tone asked for
    pub target: usize,
    /// Candidates available before truncation
    pub pool_size: usize,
}

impl Selection<'_> {
    pub fn ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }
}

/// Select sections for a page:
/// 1. Base list from the category's override hook, or its default sections
/// 2. Every other catalog section that passes its conditions
/// 3. Sort by preferred order (unlisted ids last, in catalog order)
/// 4. Truncate to the tone's target count
///
/// Base ids skip condition checks but must exist in the catalog.
pub fn select_sections<'a>(
    catalog: &'a CategoryCatalog,
    profile: &BusinessProfile,
    hooks: &Hooks,
) -> Result<Selection<'a>> {
    let base_ids = match catalog.override_logic.as_deref() {
        Some(name) => {
            let hook = hooks.override_hook(name).ok_or_else(|| {
                PlanError::InvalidCatalog(format!(
                    "category '{}' names unknown override hook '{}'",
                    catalog.category, name
                ))
            })?;
            hook(profile)
        }
        None => catalog.default_sections.clone(),
    };
    tracing::debug!("Base sections for {}: {:?}", catalog.category, base_ids);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut pool: Vec<(usize, &SectionDefinition)> = Vec::new();

    for id in &base_ids {
        let section = catalog.section(id)?;
        if catalog.is_disabled(id) {
            tracing::warn!("Base section '{}' is disabled and will be skipped", id);
            continue;
        }
        if !seen.insert(section.id.as_str()) {
            continue;
        }
        let idx = catalog.position(id).unwrap_or(usize::MAX);
        pool.push((idx, section));
    }

    for (idx, section) in catalog.sections.iter().enumerate() {
        if seen.contains(section.id.as_str()) || catalog.is_disabled(&section.id) {
            continue;
        }
        if is_eligible(section, profile) {
            seen.insert(section.id.as_str());
            pool.push((idx, section));
        }
    }

    pool.sort_by_key(|(idx, s)| rank(&s.id, &catalog.preferred_order, *idx));

    let target = catalog.section_count.target(profile.tone);
    let pool_size = pool.len();
    if pool_size > target {
        let dropped: Vec<_> = pool[target..].iter().map(|(_, s)| s.id.as_str()).collect();
        tracing::debug!("Truncating to {} sections, dropping {:?}", target, dropped);
    } else if pool_size < catalog.section_count.min {
        tracing::debug!(
            "Only {} eligible sections for {}, below minimum {}",
            pool_size,
            catalog.category,
            catalog.section_count.min
        );
    }
    pool.truncate(target);

    Ok(Selection {
        sections: pool.into_iter().map(|(_, s)| s).collect(),
        target,
        pool_size,
    })
}

/// List all sections of a category in display order
pub fn list_sections(catalog: &CategoryCatalog) -> Vec<SectionInfo> {
    catalog
        .display_order()
        .into_iter()
        .map(|s| SectionInfo {
            id: s.id.clone(),
            name: s.name.clone(),
            tier: s.tier,
            default: catalog.default_sections.contains(&s.id),
            disabled: catalog.is_disabled(&s.id),
            variants: s.variants.clone(),
            conditions: describe_conditions(s),
        })
        .collect()
}

/// Section info for listing
#[derive(Debug)]
pub struct SectionInfo {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub default: bool,
    pub disabled: bool,
    pub variants: Option<String>,
    pub conditions: Vec<String>,
}

fn describe_conditions(section: &SectionDefinition) -> Vec<String> {
    let Some(ref c) = section.conditions else {
        return if section.tier == Tier::Optional {
            vec!["tone=high".to_string()]
        } else {
            vec![]
        };
    };

    let mut parts = Vec::new();
    if let Some(ref categories) = c.categories {
        let names: Vec<_> = categories.iter().map(|x| x.as_str()).collect();
        parts.push(format!("category={}", names.join("|")));
    }
    if let Some(ref goals) = c.goals {
        let names: Vec<_> = goals.iter().map(|x| x.as_str()).collect();
        parts.push(format!("goal={}", names.join("|")));
    }
    if let Some(ref tones) = c.tones {
        let names: Vec<_> = tones.iter().map(|x| x.as_str()).collect();
        parts.push(format!("tone={}", names.join("|")));
    }
    if let Some(ref custom) = c.custom {
        parts.push(format!("[{}]", custom));
    }
    parts
}
