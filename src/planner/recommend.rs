//! @acp:module "Planner Recommendations"
//! @acp:summary "Advisory messages about high-value sections missing from a plan"
//! @acp:domain planner
//! @acp:layer logic

use handlebars::Handlebars;
use serde_json::json;

use super::condition::conditions_hold;
use super::profile::BusinessProfile;
use super::registry::CategoryCatalog;
use super::types::RecommendationRule;

/// Review a finished selection. Advisory only: the selection is never changed.
///
/// A shortfall notice comes first when fewer than the category minimum were
/// selected, followed by the rule table in priority order. A rule fires when
/// its section is offered by the category, enabled, absent from the plan, and
/// its `when` conditions hold.
pub fn recommend(
    selected_ids: &[&str],
    catalog: &CategoryCatalog,
    rules: &[RecommendationRule],
    profile: &BusinessProfile,
) -> Vec<String> {
    let mut advice = Vec::new();
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    if let Some(notice) = shortfall_notice(selected_ids, catalog) {
        advice.push(notice);
    }

    for rule in rules {
        if selected_ids.contains(&rule.section.as_str())
            || catalog.position(&rule.section).is_none()
            || catalog.is_disabled(&rule.section)
        {
            continue;
        }
        if let Some(ref when) = rule.when {
            if !conditions_hold(when, profile, &rule.id) {
                continue;
            }
        }
        advice.push(render_message(&handlebars, rule, profile));
    }

    advice
}

fn shortfall_notice(selected_ids: &[&str], catalog: &CategoryCatalog) -> Option<String> {
    let min = catalog.section_count.min;
    if selected_ids.len() >= min {
        return None;
    }

    let missing: Vec<String> = catalog
        .display_order()
        .into_iter()
        .filter(|s| !selected_ids.contains(&s.id.as_str()) && !catalog.is_disabled(&s.id))
        .map(|s| format!("{} ({})", s.name, s.id))
        .collect();

    Some(if missing.is_empty() {
        format!(
            "The {} catalog offers only {} usable sections; extend it to reach the minimum of {}.",
            catalog.category,
            selected_ids.len(),
            min
        )
    } else {
        format!(
            "Only {} of the minimum {} sections were eligible for {}. Consider adding: {}.",
            selected_ids.len(),
            min,
            catalog.category,
            missing.join(", ")
        )
    })
}

fn render_message(
    handlebars: &Handlebars<'_>,
    rule: &RecommendationRule,
    profile: &BusinessProfile,
) -> String {
    let data = json!({
        "companyName": profile.company_name,
        "industryLabel": profile.industry_label,
        "audienceLabel": profile.audience_label,
        "category": profile.category.as_str(),
        "goal": profile.goal.as_str(),
        "tone": profile.tone.as_str(),
        "section": rule.section,
    });

    handlebars
        .render_template(&rule.message, &data)
        .unwrap_or_else(|e| {
            tracing::warn!("Recommendation '{}' template failed: {}", rule.id, e);
            rule.message.clone()
        })
}
