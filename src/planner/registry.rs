//! @acp:module "Planner Registry"
//! @acp:summary "Validated, read-only catalog registry and category profile table"
//! @acp:domain planner
//! @acp:layer data
//!
//! A `Catalog` is built once from a `CatalogConfig` and never mutated. All
//! lookups fail closed: an unknown category or section id is an error.

use std::collections::{HashMap, HashSet};

use super::condition::validate_condition;
use super::engine::{generate, GenerationResult};
use super::overrides::{builtin_overrides, OverrideHook};
use super::policy::rank;
use super::profile::{BusinessProfile, Category};
use super::types::*;
use super::variants::{builtin_variant_rules, VariantRule};
use crate::error::{PlanError, Result};

/// Named override hooks and variant rules referenced by catalog documents
#[derive(Clone, Default)]
pub struct Hooks {
    overrides: HashMap<String, OverrideHook>,
    variant_rules: HashMap<String, VariantRule>,
}

impl Hooks {
    /// Registry with nothing registered
    pub fn empty() -> Self {
        Self::default()
    }

    /// Hooks and rules used by the built-in catalog
    pub fn builtin() -> Self {
        let mut hooks = Self::empty();
        for (name, hook) in builtin_overrides() {
            hooks.register_override(name, hook);
        }
        for (name, rule) in builtin_variant_rules() {
            hooks.register_variant_rule(name, rule);
        }
        hooks
    }

    pub fn register_override(&mut self, name: impl Into<String>, hook: OverrideHook) -> &mut Self {
        self.overrides.insert(name.into(), hook);
        self
    }

    pub fn register_variant_rule(&mut self, name: impl Into<String>, rule: VariantRule) -> &mut Self {
        self.variant_rules.insert(name.into(), rule);
        self
    }

    pub fn override_hook(&self, name: &str) -> Option<OverrideHook> {
        self.overrides.get(name).copied()
    }

    pub fn variant_rule(&self, name: &str) -> Option<VariantRule> {
        self.variant_rules.get(name).copied()
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut overrides: Vec<_> = self.overrides.keys().collect();
        overrides.sort();
        let mut rules: Vec<_> = self.variant_rules.keys().collect();
        rules.sort();
        f.debug_struct("Hooks")
            .field("overrides", &overrides)
            .field("variant_rules", &rules)
            .finish()
    }
}

/// Section catalog and profile of one category
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    pub category: Category,
    pub name: String,
    pub description: Option<String>,
    /// Catalog order: declared sections, then additional sections
    pub sections: Vec<SectionDefinition>,
    pub default_sections: Vec<String>,
    pub section_count: CountRange,
    pub preferred_order: Vec<String>,
    pub override_logic: Option<String>,
    pub disabled_sections: Vec<String>,
}

impl CategoryCatalog {
    /// Look up a section by id
    pub fn section(&self, id: &str) -> Result<&SectionDefinition> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| PlanError::UnknownSection {
                category: self.category.to_string(),
                id: id.to_string(),
            })
    }

    /// Catalog insertion index of a section
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled_sections.iter().any(|d| d == id)
    }

    /// All catalog sections in display order
    pub fn display_order(&self) -> Vec<&SectionDefinition> {
        let mut sections: Vec<_> = self.sections.iter().enumerate().collect();
        sections.sort_by_key(|(idx, s)| rank(&s.id, &self.preferred_order, *idx));
        sections.into_iter().map(|(_, s)| s).collect()
    }

    fn from_config(config: CategoryConfig, hooks: &Hooks) -> Result<Self> {
        let category = config.id;
        let section_count = config.section_count.ok_or_else(|| {
            PlanError::InvalidCatalog(format!("category '{}' has no sectionCount", category))
        })?;
        if section_count.min > section_count.max {
            return Err(PlanError::InvalidCatalog(format!(
                "category '{}' has sectionCount min {} greater than max {}",
                category, section_count.min, section_count.max
            )));
        }

        let mut sections = config.sections;
        sections.extend(config.additional_sections);

        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(PlanError::InvalidCatalog(format!(
                    "duplicate section '{}' in category '{}'",
                    section.id, category
                )));
            }
            if let Some(ref rule) = section.variants {
                if hooks.variant_rule(rule).is_none() {
                    return Err(PlanError::InvalidCatalog(format!(
                        "section '{}' in category '{}' names unknown variant rule '{}'",
                        section.id, category, rule
                    )));
                }
            }
        }

        if let Some(ref hook) = config.override_logic {
            if hooks.override_hook(hook).is_none() {
                return Err(PlanError::InvalidCatalog(format!(
                    "category '{}' names unknown override hook '{}'",
                    category, hook
                )));
            }
        }

        let catalog = Self {
            category,
            name: config.name.unwrap_or_else(|| category.to_string()),
            description: config.description,
            sections,
            default_sections: config.default_sections,
            section_count,
            preferred_order: config.preferred_order,
            override_logic: config.override_logic,
            disabled_sections: config.disabled_sections,
        };

        for id in catalog.default_sections.iter().chain(&catalog.preferred_order) {
            catalog.section(id)?;
        }
        for id in &catalog.disabled_sections {
            if catalog.position(id).is_none() {
                tracing::debug!("Disabled section '{}' is not in category '{}'", id, category);
            }
        }

        Ok(catalog)
    }
}

/// Immutable catalog registry shared by every generation call
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    categories: Vec<CategoryCatalog>,
    recommendations: Vec<RecommendationRule>,
    hooks: Hooks,
}

impl Catalog {
    /// Validate a catalog document against the given hooks
    pub fn new(config: CatalogConfig, hooks: Hooks) -> Result<Self> {
        let mut categories: Vec<CategoryCatalog> = Vec::with_capacity(config.categories.len());
        for category in config.categories {
            if categories.iter().any(|c| c.category == category.id) {
                return Err(PlanError::InvalidCatalog(format!(
                    "duplicate category '{}'",
                    category.id
                )));
            }
            categories.push(CategoryCatalog::from_config(category, &hooks)?);
        }

        Ok(Self {
            version: config.version,
            categories,
            recommendations: config.recommendations,
            hooks,
        })
    }

    /// The built-in catalog with the built-in hooks
    pub fn builtin() -> Result<Self> {
        Self::new(super::loader::builtin_config()?, Hooks::builtin())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Resolve a category's catalog
    pub fn category(&self, category: Category) -> Result<&CategoryCatalog> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .ok_or_else(|| PlanError::UnknownCategory(category.to_string()))
    }

    pub fn categories(&self) -> &[CategoryCatalog] {
        &self.categories
    }

    pub fn recommendations(&self) -> &[RecommendationRule] {
        &self.recommendations
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Plan a page for the given profile
    pub fn generate(&self, profile: &BusinessProfile) -> Result<GenerationResult> {
        generate(self, profile)
    }

    /// Non-fatal problems: custom predicates that can never evaluate, rules
    /// pointing at sections no category offers, and core sections that can be
    /// truncated away at low tone.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for category in &self.categories {
            for section in &category.sections {
                if let Some(expr) = section.conditions.as_ref().and_then(|c| c.custom.as_ref()) {
                    if let Err(e) = validate_condition(expr) {
                        warnings.push(format!("{}/{}: {}", category.category, section.id, e));
                    }
                }
            }

            for (idx, section) in category.display_order().into_iter().enumerate() {
                if section.tier == Tier::Core && idx >= category.section_count.min {
                    warnings.push(format!(
                        "{}/{}: core section ranks {} in display order and may be cut when only {} sections are kept",
                        category.category,
                        section.id,
                        idx + 1,
                        category.section_count.min
                    ));
                }
            }
        }

        for rule in &self.recommendations {
            if let Some(expr) = rule.when.as_ref().and_then(|c| c.custom.as_ref()) {
                if let Err(e) = validate_condition(expr) {
                    warnings.push(format!("recommendation {}: {}", rule.id, e));
                }
            }
            if !self
                .categories
                .iter()
                .any(|c| c.position(&rule.section).is_some())
            {
                warnings.push(format!(
                    "recommendation {}: no category offers section '{}'",
                    rule.id, rule.section
                ));
            }
            if let Err(e) = handlebars::Template::compile(&rule.message) {
                warnings.push(format!("recommendation {}: invalid message template: {}", rule.id, e));
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, tier: Tier) -> SectionDefinition {
        SectionDefinition::new(id, id.to_uppercase(), tier)
    }

    fn category(id: Category) -> CategoryConfig {
        CategoryConfig {
            id,
            name: None,
            description: None,
            default_sections: vec!["hero".to_string()],
            section_count: Some(CountRange { min: 1, max: 2 }),
            preferred_order: vec![],
            override_logic: None,
            sections: vec![section("hero", Tier::Core), section("faq", Tier::Conditional)],
            additional_sections: vec![],
            disabled_sections: vec![],
        }
    }

    fn config(categories: Vec<CategoryConfig>) -> CatalogConfig {
        CatalogConfig {
            version: "1.0.0".to_string(),
            metadata: None,
            categories,
            recommendations: vec![],
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("built-in catalog must validate");
        for c in Category::ALL {
            assert!(catalog.category(c).is_ok(), "missing category {}", c);
        }
    }

    #[test]
    fn test_unknown_category_fails_closed() {
        let catalog = Catalog::new(config(vec![category(Category::Agency)]), Hooks::empty()).unwrap();
        let err = catalog.category(Category::Retail).unwrap_err();
        assert!(matches!(err, PlanError::UnknownCategory(ref c) if c == "retail"));
    }

    #[test]
    fn test_unknown_section_lookup_fails_closed() {
        let catalog = Catalog::new(config(vec![category(Category::Agency)]), Hooks::empty()).unwrap();
        let agency = catalog.category(Category::Agency).unwrap();
        assert!(agency.section("hero").is_ok());
        assert!(matches!(
            agency.section("blog").unwrap_err(),
            PlanError::UnknownSection { .. }
        ));
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let err = Catalog::new(
            config(vec![category(Category::Agency), category(Category::Agency)]),
            Hooks::empty(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::InvalidCatalog(_)));
    }

    #[test]
    fn test_rejects_duplicate_section_via_additional() {
        let mut c = category(Category::Agency);
        c.additional_sections = vec![section("faq", Tier::Optional)];
        let err = Catalog::new(config(vec![c]), Hooks::empty()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidCatalog(_)));
    }

    #[test]
    fn test_rejects_inverted_range_and_missing_range() {
        let mut c = category(Category::Agency);
        c.section_count = Some(CountRange { min: 3, max: 2 });
        assert!(Catalog::new(config(vec![c]), Hooks::empty()).is_err());

        let mut c = category(Category::Agency);
        c.section_count = None;
        assert!(Catalog::new(config(vec![c]), Hooks::empty()).is_err());
    }

    #[test]
    fn test_rejects_unknown_default_and_preferred_ids() {
        let mut c = category(Category::Agency);
        c.default_sections.push("blog".to_string());
        let err = Catalog::new(config(vec![c]), Hooks::empty()).unwrap_err();
        assert!(matches!(err, PlanError::UnknownSection { ref id, .. } if id == "blog"));

        let mut c = category(Category::Agency);
        c.preferred_order = vec!["pricing".to_string()];
        assert!(Catalog::new(config(vec![c]), Hooks::empty()).is_err());
    }

    #[test]
    fn test_rejects_unregistered_hooks_and_rules() {
        let mut c = category(Category::Agency);
        c.override_logic = Some("agency".to_string());
        assert!(Catalog::new(config(vec![c.clone()]), Hooks::empty()).is_err());
        assert!(Catalog::new(config(vec![c]), Hooks::builtin()).is_ok());

        let mut c = category(Category::Agency);
        c.sections[1].variants = Some("sparkles".to_string());
        assert!(Catalog::new(config(vec![c]), Hooks::builtin()).is_err());
    }

    #[test]
    fn test_display_order() {
        let mut c = category(Category::Agency);
        c.sections.push(section("team", Tier::Optional));
        c.preferred_order = vec!["faq".to_string()];
        let catalog = Catalog::new(config(vec![c]), Hooks::empty()).unwrap();
        let ids: Vec<_> = catalog
            .category(Category::Agency)
            .unwrap()
            .display_order()
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["faq", "hero", "team"]);
    }

    #[test]
    fn test_lint_reports_bad_predicates_and_late_core_sections() {
        let mut c = category(Category::Agency);
        c.sections.push(section("contact", Tier::Core));
        c.sections[1].conditions = Some(SectionConditions {
            custom: Some("revenue > 10".to_string()),
            ..Default::default()
        });
        let mut doc = config(vec![c]);
        doc.recommendations.push(RecommendationRule {
            id: "blog".to_string(),
            section: "blog".to_string(),
            when: None,
            message: "Add a blog {{#if}}".to_string(),
        });

        let catalog = Catalog::new(doc, Hooks::empty()).unwrap();
        let warnings = catalog.lint();
        assert!(warnings.iter().any(|w| w.starts_with("agency/faq:")));
        assert!(warnings.iter().any(|w| w.starts_with("agency/contact: core section")));
        assert!(warnings.iter().any(|w| w.contains("no category offers section 'blog'")));
        assert!(warnings.iter().any(|w| w.contains("invalid message template")));
    }

    #[test]
    fn test_hooks_debug_lists_names() {
        let debug = format!("{:?}", Hooks::builtin());
        assert!(debug.contains("local-service"));
        assert!(debug.contains("content-density"));
    }
}
