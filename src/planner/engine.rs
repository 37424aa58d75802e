//! @acp:module "Planner Engine"
//! @acp:summary "Page plan generation: selection, variants, recommendations"
//! @acp:domain planner
//! @acp:layer feature

use serde::{Deserialize, Serialize};

use super::profile::{BusinessProfile, Category};
use super::recommend::recommend;
use super::registry::Catalog;
use super::selector::select_sections;
use super::types::CountRange;
use super::variants::{variants_for, Variants};
use crate::error::Result;

/// One section of a page plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedSection {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub variants: Variants,
}

/// Declarative plan consumed by a page renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub category: Category,
    pub company_name: String,
    pub ordered_sections: Vec<PlannedSection>,
    pub recommendations: Vec<String>,
    pub total_sections: usize,
    pub target_sections: usize,
    pub section_range: CountRange,
}

impl GenerationResult {
    pub fn section_ids(&self) -> Vec<&str> {
        self.ordered_sections.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn section(&self, id: &str) -> Option<&PlannedSection> {
        self.ordered_sections.iter().find(|s| s.id == id)
    }

    /// Fewer sections than the category minimum were eligible
    pub fn is_short(&self) -> bool {
        self.total_sections < self.section_range.min
    }
}

/// Plan a page. Fails only on configuration errors (unknown category, an
/// override hook producing an id the catalog lacks); everything else is
/// absorbed into the result.
pub fn generate(catalog: &Catalog, profile: &BusinessProfile) -> Result<GenerationResult> {
    let category = catalog.category(profile.category)?;
    let selection = select_sections(category, profile, catalog.hooks())?;

    let ordered_sections: Vec<PlannedSection> = selection
        .sections
        .iter()
        .map(|section| PlannedSection {
            id: section.id.clone(),
            display_name: section.name.clone(),
            variants: variants_for(section, profile, catalog.hooks()),
        })
        .collect();

    let ids = selection.ids();
    let recommendations = recommend(&ids, category, catalog.recommendations(), profile);

    tracing::debug!(
        "Planned {} sections for {} ({} recommendations)",
        ordered_sections.len(),
        profile.category,
        recommendations.len()
    );

    Ok(GenerationResult {
        category: profile.category,
        company_name: profile.company_name.clone(),
        total_sections: ordered_sections.len(),
        ordered_sections,
        recommendations,
        target_sections: selection.target,
        section_range: category.section_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::planner::profile::{Goal, Tone};
    use crate::planner::registry::Hooks;
    use crate::planner::types::*;
    use crate::planner::variants::VariantValue;

    fn fixture() -> Catalog {
        let config = CatalogConfig {
            version: "1.0.0".to_string(),
            metadata: None,
            categories: vec![CategoryConfig {
                id: Category::Retail,
                name: None,
                description: None,
                default_sections: vec!["hero".to_string(), "products".to_string()],
                section_count: Some(CountRange { min: 2, max: 3 }),
                preferred_order: vec!["hero".to_string(), "products".to_string()],
                override_logic: None,
                sections: vec![
                    SectionDefinition::new("hero", "Hero", Tier::Core).with_variants("hero"),
                    SectionDefinition::new("products", "Products", Tier::Core)
                        .with_variants("content-density"),
                    SectionDefinition::new("reviews", "Reviews", Tier::Conditional).with_conditions(
                        SectionConditions {
                            goals: Some(vec![Goal::Trust]),
                            ..Default::default()
                        },
                    ),
                ],
                additional_sections: vec![],
                disabled_sections: vec![],
            }],
            recommendations: vec![RecommendationRule {
                id: "reviews".to_string(),
                section: "reviews".to_string(),
                when: None,
                message: "Show {{audienceLabel}} what others think".to_string(),
            }],
        };
        Catalog::new(config, Hooks::builtin()).unwrap()
    }

    #[test]
    fn test_generate_attaches_variants() {
        let catalog = fixture();
        let profile = BusinessProfile::new(Category::Retail, Tone::Low, Goal::Conversion)
            .with_key_facts(["free shipping", "30 day returns", "since 1998"]);
        let result = catalog.generate(&profile).unwrap();

        assert_eq!(result.section_ids(), vec!["hero", "products"]);
        assert_eq!(result.total_sections, 2);
        assert_eq!(result.target_sections, 2);
        let products = result.section("products").unwrap();
        assert_eq!(products.display_name, "Products");
        assert_eq!(products.variants["columns"], VariantValue::Text("2-column".into()));
        assert_eq!(
            result.recommendations,
            vec!["Show homeowners what others think"]
        );
        assert!(!result.is_short());
    }

    #[test]
    fn test_selected_section_suppresses_its_rule() {
        let catalog = fixture();
        let profile = BusinessProfile::new(Category::Retail, Tone::High, Goal::Trust);
        let result = generate(&catalog, &profile).unwrap();
        assert_eq!(result.section_ids(), vec!["hero", "products", "reviews"]);
        assert!(result.recommendations.is_empty());
        assert!(result.section("reviews").unwrap().variants.is_empty());
    }

    #[test]
    fn test_unknown_category_is_configuration_error() {
        let catalog = fixture();
        let profile = BusinessProfile::new(Category::Agency, Tone::Medium, Goal::Trust);
        let err = generate(&catalog, &profile).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, PlanError::UnknownCategory(_)));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let catalog = fixture();
        let profile = BusinessProfile::new(Category::Retail, Tone::Low, Goal::Conversion)
            .with_company("Corner Shop");
        let value = serde_json::to_value(generate(&catalog, &profile).unwrap()).unwrap();
        assert_eq!(value["category"], "retail");
        assert_eq!(value["companyName"], "Corner Shop");
        assert_eq!(value["totalSections"], 2);
        assert_eq!(value["sectionRange"]["max"], 3);
        assert_eq!(value["orderedSections"][0]["displayName"], "Hero");
        assert_eq!(value["orderedSections"][0]["variants"]["layout"], "centered");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let catalog = fixture();
        let profile = BusinessProfile::new(Category::Retail, Tone::Medium, Goal::Trust);
        assert_eq!(
            generate(&catalog, &profile).unwrap(),
            generate(&catalog, &profile).unwrap()
        );
    }
}
