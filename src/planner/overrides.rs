//! @acp:module "Planner Override Hooks"
//! @acp:summary "Named per-category hooks that replace the default section list"
//! @acp:domain planner
//! @acp:layer logic
//!
//! A hook's output is trusted: every id it returns is placed in the candidate
//! pool without a condition check. Ids must still exist in the category's
//! catalog, otherwise generation fails with a configuration error.

use super::profile::{BusinessProfile, Goal, Tone};

/// Override hook: profile → base section ids
pub type OverrideHook = fn(&BusinessProfile) -> Vec<String>;

/// Hooks shipped with the built-in catalog
pub fn builtin_overrides() -> Vec<(&'static str, OverrideHook)> {
    vec![
        ("local-service", local_service),
        ("agency", agency),
        ("portfolio", portfolio),
    ]
}

fn local_service(profile: &BusinessProfile) -> Vec<String> {
    let mut ids = vec!["hero", "services"];
    if profile.goal.wants_proof() {
        ids.extend(["testimonials", "trust-badges"]);
    }
    if profile.goal == Goal::Conversion {
        ids.push("pricing");
    }
    ids.extend(["cta", "contact"]);
    to_owned(ids)
}

fn agency(profile: &BusinessProfile) -> Vec<String> {
    let mut ids = vec!["hero", "services"];
    if profile.goal != Goal::Information {
        ids.push("case-studies");
    }
    if profile.tone >= Tone::Medium {
        ids.push("team");
    }
    ids.extend(["cta", "contact"]);
    to_owned(ids)
}

fn portfolio(profile: &BusinessProfile) -> Vec<String> {
    let mut ids = vec!["hero", "gallery", "about"];
    if profile.goal.wants_proof() {
        ids.push("testimonials");
    }
    ids.push("contact");
    to_owned(ids)
}

fn to_owned(ids: Vec<&str>) -> Vec<String> {
    ids.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::profile::Category;

    #[test]
    fn test_local_service_trust_adds_proof() {
        let profile = BusinessProfile::new(Category::LocalService, Tone::Low, Goal::Trust);
        assert_eq!(
            local_service(&profile),
            vec!["hero", "services", "testimonials", "trust-badges", "cta", "contact"]
        );
    }

    #[test]
    fn test_local_service_information_is_minimal() {
        let profile = BusinessProfile::new(Category::LocalService, Tone::Low, Goal::Information);
        assert_eq!(local_service(&profile), vec!["hero", "services", "cta", "contact"]);
    }

    #[test]
    fn test_agency_team_from_medium_tone() {
        let low = BusinessProfile::new(Category::Agency, Tone::Low, Goal::Information);
        assert!(!agency(&low).contains(&"team".to_string()));
        assert!(!agency(&low).contains(&"case-studies".to_string()));

        let medium = BusinessProfile::new(Category::Agency, Tone::Medium, Goal::Credibility);
        let ids = agency(&medium);
        assert!(ids.contains(&"team".to_string()));
        assert!(ids.contains(&"case-studies".to_string()));
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let hooks = builtin_overrides();
        let mut names: Vec<_> = hooks.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), hooks.len());
    }
}
