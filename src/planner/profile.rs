//! @acp:module "Business Profile"
//! @acp:summary "Caller-supplied description of the business a page is planned for"
//! @acp:domain planner
//! @acp:layer types

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

pub const DEFAULT_COMPANY_NAME: &str = "Your Company";
pub const DEFAULT_INDUSTRY_LABEL: &str = "home services";
pub const DEFAULT_AUDIENCE_LABEL: &str = "homeowners";

/// Business category; selects which catalog and category profile apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Category {
    SaasLike,
    LocalService,
    Agency,
    Retail,
    LandingOnly,
    General,
    Portfolio,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::SaasLike,
        Category::LocalService,
        Category::Agency,
        Category::Retail,
        Category::LandingOnly,
        Category::General,
        Category::Portfolio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SaasLike => "saas-like",
            Category::LocalService => "local-service",
            Category::Agency => "agency",
            Category::Retail => "retail",
            Category::LandingOnly => "landing-only",
            Category::General => "general",
            Category::Portfolio => "portfolio",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| PlanError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = PlanError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How visually adventurous the page should be. Ordered low < medium < high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Tone {
    Low,
    #[default]
    Medium,
    High,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Low, Tone::Medium, Tone::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Low => "low",
            Tone::Medium => "medium",
            Tone::High => "high",
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Tone::Low),
            "medium" | "med" => Ok(Tone::Medium),
            "high" => Ok(Tone::High),
            _ => Err(PlanError::InvalidValue {
                field: "tone",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Tone {
    type Error = PlanError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primary objective of the generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Goal {
    #[default]
    Conversion,
    Trust,
    Engagement,
    Information,
    Credibility,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Conversion,
        Goal::Trust,
        Goal::Engagement,
        Goal::Information,
        Goal::Credibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Conversion => "conversion",
            Goal::Trust => "trust",
            Goal::Engagement => "engagement",
            Goal::Information => "information",
            Goal::Credibility => "credibility",
        }
    }

    /// Trust and credibility goals both ask for social proof
    pub fn wants_proof(&self) -> bool {
        matches!(self, Goal::Trust | Goal::Credibility)
    }
}

impl std::str::FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Goal::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| PlanError::InvalidValue {
                field: "goal",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Goal {
    type Error = PlanError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of a business, immutable for the duration of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub category: Category,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub goal: Goal,

    #[serde(default = "default_company_name")]
    pub company_name: String,

    #[serde(default = "default_industry_label")]
    pub industry_label: String,

    #[serde(default = "default_audience_label")]
    pub audience_label: String,

    #[serde(default)]
    pub key_facts: Vec<String>,
}

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

fn default_industry_label() -> String {
    DEFAULT_INDUSTRY_LABEL.to_string()
}

fn default_audience_label() -> String {
    DEFAULT_AUDIENCE_LABEL.to_string()
}

impl BusinessProfile {
    /// Profile with placeholder labels and no key facts
    pub fn new(category: Category, tone: Tone, goal: Goal) -> Self {
        Self {
            category,
            tone,
            goal,
            company_name: default_company_name(),
            industry_label: default_industry_label(),
            audience_label: default_audience_label(),
            key_facts: Vec::new(),
        }
    }

    pub fn with_company(mut self, name: impl Into<String>) -> Self {
        self.company_name = name.into();
        self
    }

    pub fn with_industry(mut self, label: impl Into<String>) -> Self {
        self.industry_label = label.into();
        self
    }

    pub fn with_audience(mut self, label: impl Into<String>) -> Self {
        self.audience_label = label.into();
        self
    }

    pub fn with_key_facts<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_facts = facts.into_iter().map(Into::into).collect();
        self
    }

    /// Load a profile from a JSON document.
    ///
    /// An unrecognised category is reported as `UnknownCategory` rather than a
    /// generic parse error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(raw) = value.get("category").and_then(|c| c.as_str()) {
            raw.parse::<Category>()?;
        }
        Ok(serde_json::from_value(value)?)
    }
}
