//! @acp:module "Planner Types"
//! @acp:summary "Type definitions for catalog documents (built-in and project catalogs)"
//! @acp:domain planner
//! @acp:layer types

use serde::{Deserialize, Serialize};

use super::profile::{Category, Goal, Tone};

/// Catalog document: categories with their section catalogs plus the
/// recommendation table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    pub version: String,

    #[serde(default)]
    pub metadata: Option<CatalogMetadata>,

    #[serde(default)]
    pub categories: Vec<CategoryConfig>,

    #[serde(default)]
    pub recommendations: Vec<RecommendationRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

/// Category profile plus the sections available to that category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub id: Category,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub default_sections: Vec<String>,

    #[serde(default)]
    pub section_count: Option<CountRange>,

    #[serde(default)]
    pub preferred_order: Vec<String>,

    /// Name of a registered override hook
    #[serde(default)]
    pub override_logic: Option<String>,

    #[serde(default)]
    pub sections: Vec<SectionDefinition>,

    #[serde(default)]
    pub additional_sections: Vec<SectionDefinition>,

    #[serde(default)]
    pub disabled_sections: Vec<String>,
}

/// Inclusive bounds on the number of sections of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Core,
    #[default]
    Conditional,
    Optional,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::Conditional => "conditional",
            Tier::Optional => "optional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDefinition {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tier: Tier,

    #[serde(default)]
    pub conditions: Option<SectionConditions>,

    /// Name of a registered variant rule
    #[serde(default)]
    pub variants: Option<String>,
}

impl SectionDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            tier,
            conditions: None,
            variants: None,
        }
    }

    pub fn with_conditions(mut self, conditions: SectionConditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    pub fn with_variants(mut self, rule: impl Into<String>) -> Self {
        self.variants = Some(rule.into());
        self
    }
}

/// Inclusion conditions. Unset fields place no constraint; set fields are
/// combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SectionConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<Goal>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tones: Option<Vec<Tone>>,

    /// Custom predicate expression, e.g. `industry matches construct|remodel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

/// Advisory rule: fires when `section` is missing from the plan and the
/// profile satisfies `when`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRule {
    pub id: String,

    pub section: String,

    #[serde(default)]
    pub when: Option<SectionConditions>,

    /// Handlebars template
    pub message: String,
}
